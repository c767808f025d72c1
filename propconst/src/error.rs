//! All error types for the propconst crate.
//!
//! The naming core itself never fails. These errors come from configuration
//! validation, resource loading, emission and the cross-resource checks done
//! by the [`crate::generator::Generator`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("empty key in resource `{resource}`")]
    EmptyKey { resource: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("`{resource}` would create the same type `{name}` as `{existing}`")]
    NamingCollision {
        name: String,
        resource: String,
        existing: String,
    },

    #[error("generation failed with {count} error(s)")]
    GenerationFailed { count: usize },

    #[error("unknown template `{0}`")]
    UnknownTemplate(String),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }

    /// Attaches the offending resource to an [`Error::EmptyKey`].
    pub fn empty_key(resource: impl Into<String>) -> Self {
        Error::EmptyKey {
            resource: resource.into(),
        }
    }
}
