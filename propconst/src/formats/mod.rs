//! All supported resource file formats for propconst.
//!
//! This module re-exports the loader for each format and provides the
//! [`ResourceFormat`] enum for picking a loader from a resource path.

pub mod properties;
pub mod xml;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

pub use properties::Format as PropertiesFormat;
pub use xml::Format as XmlFormat;

use crate::{Error, traits::Loader, types::OrderedProperties};

/// The two encodings a resource file can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceFormat {
    /// Line-oriented `key=value` text.
    Properties,
    /// XML properties document.
    Xml,
}

impl ResourceFormat {
    pub fn from_xml_flag(is_xml: bool) -> Self {
        if is_xml {
            ResourceFormat::Xml
        } else {
            ResourceFormat::Properties
        }
    }

    /// Parses `bytes` with the loader of this format.
    pub fn load(self, bytes: &[u8]) -> Result<OrderedProperties, Error> {
        match self {
            ResourceFormat::Properties => PropertiesFormat::load(bytes).map(Into::into),
            ResourceFormat::Xml => XmlFormat::load(bytes).map(Into::into),
        }
    }
}

impl Display for ResourceFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceFormat::Properties => write!(f, "properties"),
            ResourceFormat::Xml => write!(f, "xml"),
        }
    }
}

/// Accepts `properties` and `xml`, case-insensitively.
///
/// # Example
/// ```rust
/// use propconst::formats::ResourceFormat;
/// use std::str::FromStr;
/// assert_eq!(ResourceFormat::from_str("XML").unwrap(), ResourceFormat::Xml);
/// assert!(ResourceFormat::from_str("yaml").is_err());
/// ```
impl FromStr for ResourceFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "properties" => Ok(ResourceFormat::Properties),
            "xml" => Ok(ResourceFormat::Xml),
            other => Err(Error::InvalidResource(format!(
                "unknown resource format `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_by_format() {
        let props = ResourceFormat::Properties.load(b"a=1\nb=2").unwrap();
        assert_eq!(props.len(), 2);

        let props = ResourceFormat::Xml
            .load(br#"<properties><entry key="a">1</entry></properties>"#)
            .unwrap();
        assert_eq!(props.get("a"), Some("1"));
    }

    #[test]
    fn test_from_xml_flag() {
        assert_eq!(ResourceFormat::from_xml_flag(true), ResourceFormat::Xml);
        assert_eq!(
            ResourceFormat::from_xml_flag(false),
            ResourceFormat::Properties
        );
    }

    #[test]
    fn test_display_round_trips_from_str() {
        for format in [ResourceFormat::Properties, ResourceFormat::Xml] {
            assert_eq!(format.to_string().parse::<ResourceFormat>().unwrap(), format);
        }
    }
}
