//! The data handed to an emitter for one resource.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    descriptor::ResourceDescriptor, error::Error, names::key_to_names,
    types::OrderedProperties,
};

/// One key of a resource with the names derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropEntry {
    /// The key, trimmed.
    pub key: String,
    pub value: String,
    pub constant_name: String,
    pub variable_name: String,
    pub getter_name: String,
}

impl PropEntry {
    /// Returns `None` when the key is empty after trimming.
    pub fn try_new(key: &str, value: &str) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        let names = key_to_names(key);
        Some(PropEntry {
            key: key.to_string(),
            value: value.to_string(),
            constant_name: names.constant_name,
            variable_name: names.variable_name,
            getter_name: names.getter_name,
        })
    }
}

/// Everything an emitter needs to write the type for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationModel {
    /// The configured root namespace.
    pub namespace_root: String,
    /// Namespace of the generated type.
    pub namespace: String,
    pub type_name: String,
    pub fully_qualified_name: String,
    pub output_relative_path: String,
    pub resource_relative_path: String,
    /// Bundle name for runtime lookup, see [`ResourceDescriptor::basename`].
    pub basename: String,
    pub is_xml_format: bool,
    /// Entries in the order the resource defines them.
    pub entries: Vec<PropEntry>,
    /// Free-form emitter options.
    pub options: BTreeMap<String, String>,
}

impl GenerationModel {
    /// Builds the model for one resource.
    ///
    /// Fails with [`Error::EmptyKey`] naming the resource if any key is blank.
    pub fn build(
        descriptor: &ResourceDescriptor,
        namespace_root: &str,
        properties: &OrderedProperties,
        options: &BTreeMap<String, String>,
    ) -> Result<Self, Error> {
        let entries = properties
            .iter()
            .map(|(key, value)| {
                PropEntry::try_new(key, value)
                    .ok_or_else(|| Error::empty_key(&descriptor.relative_resource_path))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GenerationModel {
            namespace_root: namespace_root.to_string(),
            namespace: descriptor.namespace(),
            type_name: descriptor.type_name.clone(),
            fully_qualified_name: descriptor.fully_qualified_name.clone(),
            output_relative_path: descriptor.output_relative_path.clone(),
            resource_relative_path: descriptor.relative_resource_path.clone(),
            basename: descriptor.basename.clone(),
            is_xml_format: descriptor.is_xml_format,
            entries,
            options: options.clone(),
        })
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Whether option `name` is set to `true` (case-insensitive).
    pub fn option_flag(&self, name: &str) -> bool {
        self.option(name)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::resolve;

    #[test]
    fn test_prop_entry_names() {
        let entry = PropEntry::try_new("  test.HTTP.request ", "v").unwrap();
        assert_eq!(entry.key, "test.HTTP.request");
        assert_eq!(entry.value, "v");
        assert_eq!(entry.constant_name, "TEST_HTTP_REQUEST");
        assert_eq!(entry.variable_name, "testHttpRequest");
        assert_eq!(entry.getter_name, "getTestHttpRequest");
    }

    #[test]
    fn test_prop_entry_rejects_blank_key() {
        assert!(PropEntry::try_new("", "v").is_none());
        assert!(PropEntry::try_new(" \t ", "v").is_none());
    }

    #[test]
    fn test_build_model() {
        let descriptor = resolve("messages/msgs_de.properties", "de.tester", false, "");
        let props: OrderedProperties = [("welcome", "Willkommen"), ("0set", "Alles Null")]
            .into_iter()
            .collect();
        let mut options = BTreeMap::new();
        options.insert("genBundleNameConstant".to_string(), "TRUE".to_string());

        let model = GenerationModel::build(&descriptor, "de.tester", &props, &options).unwrap();
        assert_eq!(model.namespace_root, "de.tester");
        assert_eq!(model.namespace, "de.tester.messages");
        assert_eq!(model.type_name, "Msgs");
        assert_eq!(model.fully_qualified_name, "de.tester.messages.Msgs");
        assert_eq!(model.resource_relative_path, "messages/msgs_de.properties");
        assert_eq!(model.basename, "messages.msgs");
        assert!(!model.is_xml_format);
        assert_eq!(model.entries.len(), 2);
        assert_eq!(model.entries[0].constant_name, "WELCOME");
        assert_eq!(model.entries[1].constant_name, "_0SET");
        assert!(model.option_flag("genBundleNameConstant"));
        assert!(!model.option_flag("genPropertiesFilenameConstant"));
    }

    #[test]
    fn test_build_model_empty_key() {
        let descriptor = resolve("broken.properties", "pkg", false, "");
        let props: OrderedProperties = [("ok", "1"), ("  ", "2")].into_iter().collect();
        let err = GenerationModel::build(&descriptor, "pkg", &props, &BTreeMap::new()).unwrap_err();
        match err {
            Error::EmptyKey { resource } => assert_eq!(resource, "broken.properties"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
