//! The `names` and `resolve` subcommands.

use std::fmt::Write as _;

use propconst::{GeneratorConfig, NameSet, key_to_names};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct NamedKey<'a> {
    key: &'a str,
    #[serde(flatten)]
    names: NameSet,
}

/// Formats the names derived from each key.
pub fn describe_names(keys: &[String], json: bool) -> Result<String, String> {
    let named = keys
        .iter()
        .map(|key| {
            let key = key.trim();
            if key.is_empty() {
                Err("Keys must not be empty".to_string())
            } else {
                Ok(NamedKey {
                    key,
                    names: key_to_names(key),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        return serde_json::to_string_pretty(&named).map_err(|e| e.to_string());
    }
    let mut out = String::new();
    for n in &named {
        let _ = writeln!(out, "{}", n.key);
        let _ = writeln!(out, "  constant: {}", n.names.constant_name);
        let _ = writeln!(out, "  variable: {}", n.names.variable_name);
        let _ = writeln!(out, "  getter:   {}", n.names.getter_name);
        let _ = writeln!(out, "  type:     {}", n.names.type_name);
    }
    Ok(out)
}

/// Formats the descriptor of one resource path.
pub fn describe_resource(path: &str, config: &GeneratorConfig, json: bool) -> Result<String, String> {
    config.validate().map_err(|e| e.to_string())?;
    if path.trim().is_empty() {
        return Err("Resource path must not be empty".to_string());
    }
    let descriptor = config.resolve(path);

    if json {
        return serde_json::to_string_pretty(&descriptor).map_err(|e| e.to_string());
    }
    let mut out = String::new();
    let _ = writeln!(out, "resource:    {}", descriptor.relative_resource_path);
    let _ = writeln!(out, "format:      {}", if descriptor.is_xml_format { "xml" } else { "properties" });
    let _ = writeln!(out, "bundle name: {}", descriptor.basename);
    let _ = writeln!(out, "namespace:   {}", descriptor.namespace());
    let _ = writeln!(out, "type:        {}", descriptor.type_name);
    let _ = writeln!(out, "class:       {}", descriptor.fully_qualified_name);
    let _ = writeln!(out, "output:      {}", descriptor.output_relative_path);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_names_text() {
        let out = describe_names(&["test.HTTP.request".to_string()], false).unwrap();
        assert!(out.starts_with("test.HTTP.request\n"));
        assert!(out.contains("  constant: TEST_HTTP_REQUEST\n"));
        assert!(out.contains("  variable: testHttpRequest\n"));
        assert!(out.contains("  getter:   getTestHttpRequest\n"));
        assert!(out.contains("  type:     TestHttpRequest\n"));
    }

    #[test]
    fn test_describe_names_json() {
        let out = describe_names(&["0test".to_string()], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["key"], "0test");
        assert_eq!(value[0]["constant_name"], "_0TEST");
        assert_eq!(value[0]["getter_name"], "get0test");
    }

    #[test]
    fn test_describe_names_rejects_blank_key() {
        assert!(describe_names(&["  ".to_string()], false).is_err());
    }

    #[test]
    fn test_describe_resource() {
        let config = GeneratorConfig::new("pkg");
        let out = describe_resource("test/test_en_US.properties", &config, false).unwrap();
        assert!(out.contains("bundle name: test.test\n"));
        assert!(out.contains("class:       pkg.test.Test\n"));
        assert!(out.contains("output:      pkg/test/Test.java\n"));

        let json = describe_resource("forms.xml", &config, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_xml_format"], true);
        assert_eq!(value["fully_qualified_name"], "pkg.Forms");
    }

    #[test]
    fn test_describe_resource_validates_config() {
        let config = GeneratorConfig::new("pkg").with_name_suffix("9");
        assert!(describe_resource("a.properties", &config, false).is_err());
    }
}
