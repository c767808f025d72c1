//! Settings shared by every resource of one generator run.

use std::collections::BTreeMap;

use crate::{
    descriptor::{ResourceDescriptor, resolve},
    error::Error,
    names::{is_valid_identifier, is_valid_namespace},
    template::Template,
};

/// Generator settings, validated once before any resource is processed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    /// Dot-separated root namespace of all generated types.
    pub namespace_root: String,
    /// Put every type directly into `namespace_root`, ignoring directories.
    pub flatten: bool,
    /// Appended to every generated type name.
    pub name_suffix: String,
    /// Emitter layout.
    pub template: Template,
    /// Emitter options, see [`crate::template`].
    pub options: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Creates a config for `namespace_root` with default settings.
    pub fn new(namespace_root: impl Into<String>) -> Self {
        Self {
            namespace_root: namespace_root.into(),
            ..Self::default()
        }
    }

    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    pub fn with_name_suffix(mut self, name_suffix: impl Into<String>) -> Self {
        self.name_suffix = name_suffix.into();
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Sets one emitter option.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Checks that the namespace root and the suffix produce valid names.
    pub fn validate(&self) -> Result<(), Error> {
        if !is_valid_namespace(&self.namespace_root) {
            return Err(Error::invalid_configuration(format!(
                "namespace `{}` is invalid",
                self.namespace_root
            )));
        }
        if !self.name_suffix.is_empty() && !is_valid_identifier(&self.name_suffix) {
            return Err(Error::invalid_configuration(format!(
                "name suffix `{}` is invalid",
                self.name_suffix
            )));
        }
        Ok(())
    }

    /// Resolves a resource path with these settings.
    pub fn resolve(&self, relative_path: &str) -> ResourceDescriptor {
        resolve(
            relative_path,
            &self.namespace_root,
            self.flatten,
            &self.name_suffix,
        )
    }
}
