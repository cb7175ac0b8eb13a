//! XML utility functions
//!
//! Thin helpers over the quick-xml writer used to assemble KML documents.
//! Element text is always entity-escaped; rich content goes through CDATA.

use std::borrow::Cow;
use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::errors::GeoResult;

/// Writer type used for in-memory documents
pub(crate) type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create an indenting writer over an in-memory buffer
pub(crate) fn new_writer() -> XmlWriter {
    Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2)
}

/// Escape `&`, `<`, `>`, `"` and `'` for use in element text or attributes
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Write the `<?xml version="1.0" encoding="UTF-8"?>` declaration
pub(crate) fn write_declaration(writer: &mut XmlWriter) -> GeoResult<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(())
}

/// Open an element with optional attributes
pub(crate) fn start_element(writer: &mut XmlWriter, tag: &str, attributes: &[(&str, &str)]) -> GeoResult<()> {
    let start = BytesStart::new(tag).with_attributes(attributes.iter().copied());
    writer.write_event(Event::Start(start))?;
    Ok(())
}

/// Close an element
pub(crate) fn end_element(writer: &mut XmlWriter, tag: &str) -> GeoResult<()> {
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write `<tag>text</tag>` with the text escaped
pub(crate) fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> GeoResult<()> {
    start_element(writer, tag, &[])?;
    writer.write_event(Event::Text(BytesText::from_escaped(escape_xml(text))))?;
    end_element(writer, tag)
}

/// Write `<tag><![CDATA[content]]></tag>`
///
/// A `]]>` inside the content is split across two CDATA sections.
pub(crate) fn write_cdata_element(writer: &mut XmlWriter, tag: &str, content: &str) -> GeoResult<()> {
    start_element(writer, tag, &[])?;
    let mut rest = content;
    while let Some(pos) = rest.find("]]>") {
        writer.write_event(Event::CData(BytesCData::new(&rest[..pos + 2])))?;
        rest = &rest[pos + 2..];
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))?;
    end_element(writer, tag)
}

/// Consume the writer and return the document as a UTF-8 string
pub(crate) fn into_string(writer: XmlWriter) -> GeoResult<String> {
    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(escape_xml(r#"A & B <test> "q" 'a'"#), "A &amp; B &lt;test&gt; &quot;q&quot; &apos;a&apos;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_xml("AP-01"), Cow::Borrowed("AP-01")));
    }

    #[test]
    fn text_element_is_escaped() {
        let mut writer = new_writer();
        write_text_element(&mut writer, "name", "A & B <test>").unwrap();
        assert_eq!(into_string(writer).unwrap(), "<name>A &amp; B &lt;test&gt;</name>");
    }

    #[test]
    fn cdata_element_keeps_markup() {
        let mut writer = new_writer();
        write_cdata_element(&mut writer, "description", "<b>ID:</b> 1").unwrap();
        assert_eq!(into_string(writer).unwrap(), "<description><![CDATA[<b>ID:</b> 1]]></description>");
    }

    #[test]
    fn cdata_terminator_is_split() {
        let mut writer = new_writer();
        write_cdata_element(&mut writer, "d", "x]]>y").unwrap();
        assert_eq!(into_string(writer).unwrap(), "<d><![CDATA[x]]]]><![CDATA[>y]]></d>");
    }

    #[test]
    fn declaration_is_utf8() {
        let mut writer = new_writer();
        write_declaration(&mut writer).unwrap();
        assert_eq!(into_string(writer).unwrap(), r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    }
}
