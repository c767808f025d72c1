#![forbid(unsafe_code)]
//! Build-time constant generation for Java resource bundles.
//!
//! Turns `.properties` and XML properties files into Java sources that expose
//! every key as a named constant. The core of the crate is the naming layer:
//! property keys and file paths, which are often not valid identifiers, are
//! mapped deterministically to constant, variable, getter and type names, and
//! to a package and output path.
//!
//! # Quick Start
//!
//! ```rust
//! use propconst::{key_to_names, resolve};
//!
//! let names = key_to_names("test.HTTP.request");
//! assert_eq!(names.constant_name, "TEST_HTTP_REQUEST");
//! assert_eq!(names.variable_name, "testHttpRequest");
//!
//! let descriptor = resolve("app/messages_de.properties", "com.example", false, "");
//! assert_eq!(descriptor.fully_qualified_name, "com.example.app.Messages");
//! assert_eq!(descriptor.basename, "app.messages");
//! ```
//!
//! Running over many resources goes through [`Generator`], which reads from a
//! [`ResourceSource`], writes to a [`SourceSink`] and reports problems per
//! resource in a [`GenerationReport`].

pub mod config;
pub mod descriptor;
pub mod error;
pub mod formats;
pub mod generator;
pub mod locale;
pub mod model;
pub mod names;
pub mod registry;
pub mod template;
pub mod traits;
pub mod types;

pub use crate::{
    config::GeneratorConfig,
    descriptor::{ResourceDescriptor, resolve},
    error::Error,
    formats::ResourceFormat,
    generator::{
        Diagnostic, GeneratedSource, GenerationReport, Generator, ResourceSource, Severity,
        SourceSink,
    },
    locale::strip_locale_suffix,
    model::{GenerationModel, PropEntry},
    names::{NameSet, key_to_names, split_words, synthesize, type_name},
    registry::NameRegistry,
    template::Template,
    types::OrderedProperties,
};
