//! Placemark pin styling

/// Pin style encoding a point's operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinStyle {
    /// Operational point, green pin
    Enabled,
    /// Disabled or unknown status, red pin
    Disabled,
}

impl PinStyle {
    /// Pick the style for an enabled flag
    pub fn for_status(enabled: bool) -> Self {
        if enabled {
            PinStyle::Enabled
        } else {
            PinStyle::Disabled
        }
    }

    /// KML colour in `aabbggrr` order
    pub fn color(&self) -> &'static str {
        match self {
            PinStyle::Enabled => "ff00ff00",
            PinStyle::Disabled => "ff0000ff",
        }
    }

    /// Google Earth pushpin icon
    pub fn icon_href(&self) -> &'static str {
        match self {
            PinStyle::Enabled => "http://maps.google.com/mapfiles/kml/pushpin/grn-pushpin.png",
            PinStyle::Disabled => "http://maps.google.com/mapfiles/kml/pushpin/red-pushpin.png",
        }
    }

    /// Status text shown in placemark descriptions
    pub fn status_label(&self) -> &'static str {
        match self {
            PinStyle::Enabled => "Enabled",
            PinStyle::Disabled => "Disabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_points_get_green_pins() {
        let style = PinStyle::for_status(true);
        assert_eq!(style, PinStyle::Enabled);
        assert_eq!(style.color(), "ff00ff00");
        assert!(style.icon_href().ends_with("grn-pushpin.png"));
        assert_eq!(style.status_label(), "Enabled");
    }

    #[test]
    fn disabled_points_get_red_pins() {
        let style = PinStyle::for_status(false);
        assert_eq!(style.color(), "ff0000ff");
        assert!(style.icon_href().ends_with("red-pushpin.png"));
        assert_eq!(style.status_label(), "Disabled");
    }
}
