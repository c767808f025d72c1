//! Support for XML-encoded properties documents.
//!
//! The layout is the one written by `java.util.Properties::storeToXML`:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE properties SYSTEM "http://java.sun.com/dtd/properties.dtd">
//! <properties>
//!   <comment>optional</comment>
//!   <entry key="greeting">Hello</entry>
//! </properties>
//! ```

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{error::Error, traits::Loader, types::OrderedProperties};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    /// Text of the `<comment>` element, if present.
    pub comment: Option<String>,
    pub properties: OrderedProperties,
}

impl Loader for Format {
    fn load(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::from_reader(bytes);
        let mut format = Format::default();
        let mut has_root = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"properties" => has_root = true,
                    b"entry" => {
                        let key = entry_key(&e)?;
                        let value = read_text(&mut reader, b"entry")?;
                        format.properties.insert(key, value);
                    }
                    b"comment" => format.comment = Some(read_text(&mut reader, b"comment")?),
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"properties" => has_root = true,
                    b"entry" => {
                        format.properties.insert(entry_key(&e)?, String::new());
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        if !has_root {
            return Err(Error::InvalidResource(
                "missing <properties> root element".to_string(),
            ));
        }
        Ok(format)
    }
}

impl From<Format> for OrderedProperties {
    fn from(value: Format) -> Self {
        value.properties
    }
}

fn entry_key(e: &BytesStart) -> Result<String, Error> {
    let attr = e
        .try_get_attribute("key")
        .map_err(|err| Error::InvalidResource(err.to_string()))?
        .ok_or_else(|| Error::InvalidResource("<entry> without a `key` attribute".to_string()))?;
    Ok(attr.unescape_value()?.into_owned())
}

/// Collects text and CDATA up to the closing `tag`.
fn read_text(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<String, Error> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8(e.into_inner().into_owned())?),
            Event::End(e) if e.name().as_ref() == tag => return Ok(text),
            Event::Eof => {
                return Err(Error::InvalidResource(format!(
                    "unexpected end of document inside <{}>",
                    String::from_utf8_lossy(tag)
                )));
            }
            _ => {}
        }
    }
}
