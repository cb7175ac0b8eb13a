//! KML 2.2 document model and serialization

use super::style::PinStyle;
use crate::coordinate::GlobalCoordinate;
use crate::errors::GeoResult;
use crate::utils::xml_utils::{
    end_element, into_string, new_writer, start_element, write_cdata_element, write_declaration,
    write_text_element, XmlWriter,
};

/// KML 2.2 namespace
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// A single labelled point in a KML document
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    /// Display name, escaped on output
    pub name: String,
    /// Rich description, written as CDATA
    pub description: String,
    /// Geographic position
    pub coordinate: GlobalCoordinate,
    /// Pin style
    pub style: PinStyle,
}

/// A KML document holding one folder of placemarks
#[derive(Debug, Clone, PartialEq)]
pub struct KmlDocument {
    pub name: String,
    pub description: String,
    pub folder_name: String,
    pub placemarks: Vec<Placemark>,
}

impl KmlDocument {
    /// Serialize to a UTF-8 KML string starting with the XML declaration
    pub fn to_xml(&self) -> GeoResult<String> {
        let mut writer = new_writer();

        write_declaration(&mut writer)?;
        start_element(&mut writer, "kml", &[("xmlns", KML_NAMESPACE)])?;
        start_element(&mut writer, "Document", &[])?;
        write_text_element(&mut writer, "name", &self.name)?;
        write_cdata_element(&mut writer, "description", &self.description)?;

        start_element(&mut writer, "Folder", &[])?;
        write_text_element(&mut writer, "name", &self.folder_name)?;
        for placemark in &self.placemarks {
            write_placemark(&mut writer, placemark)?;
        }
        end_element(&mut writer, "Folder")?;

        end_element(&mut writer, "Document")?;
        end_element(&mut writer, "kml")?;

        into_string(writer)
    }
}

fn write_placemark(writer: &mut XmlWriter, placemark: &Placemark) -> GeoResult<()> {
    start_element(writer, "Placemark", &[])?;
    write_text_element(writer, "name", &placemark.name)?;
    write_cdata_element(writer, "description", &placemark.description)?;

    start_element(writer, "Style", &[])?;
    start_element(writer, "IconStyle", &[])?;
    write_text_element(writer, "color", placemark.style.color())?;
    start_element(writer, "Icon", &[])?;
    write_text_element(writer, "href", placemark.style.icon_href())?;
    end_element(writer, "Icon")?;
    end_element(writer, "IconStyle")?;
    end_element(writer, "Style")?;

    start_element(writer, "Point", &[])?;
    write_text_element(writer, "coordinates", &placemark.coordinate.to_kml_tuple())?;
    end_element(writer, "Point")?;

    end_element(writer, "Placemark")
}
