//! Built-in emitters that turn a [`GenerationModel`] into a Java class.
//!
//! Two layouts are provided:
//!
//! - [`Template::Keys`]: one constant per entry holding the key, plus
//!   accessors for loading the resource at runtime.
//! - [`Template::Values`]: one constant per entry holding the value.
//!
//! Supported options (see [`GenerationModel::options`]):
//!
//! | option | effect |
//! |---|---|
//! | `genPropertiesFilenameConstant` | emit a constant with the resource path |
//! | `propertiesFilenameConstant` | its name, default `PROPERTIES_FILE_NAME` |
//! | `genBundleNameConstant` | emit a constant with the bundle name |
//! | `bundleNameConstant` | its name, default `BUNDLE_NAME` |
//! | `genGetters` | emit one getter per entry |

use std::{
    fmt::{Display, Formatter, Write as _},
    io::Write,
    str::FromStr,
};

use indoc::{formatdoc, indoc};

use crate::{error::Error, model::GenerationModel};

pub const DEFAULT_PROPERTIES_FILENAME_CONSTANT: &str = "PROPERTIES_FILE_NAME";
pub const DEFAULT_BUNDLE_NAME_CONSTANT: &str = "BUNDLE_NAME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    Keys,
    Values,
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Keys => write!(f, "keys"),
            Template::Values => write!(f, "values"),
        }
    }
}

impl FromStr for Template {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keys" => Ok(Template::Keys),
            "values" => Ok(Template::Values),
            _ => Err(Error::UnknownTemplate(s.to_string())),
        }
    }
}

impl Template {
    /// Renders the class source into a string.
    pub fn render_to_string(&self, model: &GenerationModel) -> String {
        let mut content = String::new();
        content.push_str(&header(model));
        content.push_str(&imports(*self, model));

        let _ = writeln!(
            content,
            "/**\n * {} of {{@code {}}}.\n */",
            match self {
                Template::Keys => "Keys",
                Template::Values => "Values",
            },
            javadoc_text(&model.resource_relative_path)
        );
        let _ = writeln!(content, "public final class {} {{", model.type_name);
        content.push_str(&name_constants(model));

        for entry in &model.entries {
            let literal = match self {
                Template::Keys => java_string(&entry.key),
                Template::Values => java_string(&entry.value),
            };
            let _ = write!(
                content,
                "\n    /** {{@code {}}} */\n    public static final String {} = {};\n",
                javadoc_text(&entry.key),
                entry.constant_name,
                literal
            );
        }

        let _ = write!(
            content,
            "\n    private {}() {{\n        // constants only\n    }}\n",
            model.type_name
        );

        if *self == Template::Keys {
            content.push_str(&key_accessors(model));
        }
        if model.option_flag("genGetters") {
            content.push_str(&getters(*self, model));
        }

        content.push_str("}\n");
        content
    }

    /// Renders the class source into `writer`.
    pub fn render<W: Write>(&self, model: &GenerationModel, mut writer: W) -> Result<(), Error> {
        writer
            .write_all(self.render_to_string(model).as_bytes())
            .map_err(Error::Io)
    }
}

// Bundles can only be loaded through `ResourceBundle` for flat properties files.
fn supports_bundle(model: &GenerationModel) -> bool {
    !model.is_xml_format
}

fn header(model: &GenerationModel) -> String {
    formatdoc! {"
        // This file is automatically generated by propconst from {resource}.
        // Do not edit it manually, as your changes will be overwritten.
        package {namespace};

        ",
        resource = model.resource_relative_path,
        namespace = model.namespace,
    }
}

fn imports(template: Template, model: &GenerationModel) -> String {
    let mut imports = Vec::new();
    if template == Template::Keys {
        imports.extend(["java.io.IOException", "java.io.InputStream", "java.util.Properties"]);
        if supports_bundle(model) {
            imports.extend(["java.util.Locale", "java.util.ResourceBundle"]);
        }
    }
    if imports.is_empty() {
        return String::new();
    }
    imports.sort_unstable();
    let mut out: String = imports
        .iter()
        .map(|import| format!("import {import};\n"))
        .collect();
    out.push('\n');
    out
}

fn name_constants(model: &GenerationModel) -> String {
    let mut out = String::new();
    if model.option_flag("genPropertiesFilenameConstant") {
        let name = model
            .option("propertiesFilenameConstant")
            .unwrap_or(DEFAULT_PROPERTIES_FILENAME_CONSTANT);
        let _ = write!(
            out,
            "\n    /** Path of the resource file. */\n    public static final String {} = {};\n",
            name,
            java_string(&model.resource_relative_path)
        );
    }
    if model.option_flag("genBundleNameConstant") {
        let name = model
            .option("bundleNameConstant")
            .unwrap_or(DEFAULT_BUNDLE_NAME_CONSTANT);
        let _ = write!(
            out,
            "\n    /** Name of the resource bundle. */\n    public static final String {} = {};\n",
            name,
            java_string(&model.basename)
        );
    }
    out
}

fn key_accessors(model: &GenerationModel) -> String {
    let load = if model.is_xml_format {
        "props.loadFromXML(is);"
    } else {
        "props.load(is);"
    };

    let mut out = indent(&formatdoc! {"

            /**
             * @return the resource path, relative to the class path root
             */
            public static String getPropertiesFilename() {{
                return {file};
            }}

            /**
             * @return the resource bundle name
             */
            public static String getBundleName() {{
                return {bundle};
            }}

            /**
             * Loads the resource from the class path.
             *
             * @return the loaded properties
             * @throws IOException if the resource is missing or unreadable
             */
            public static Properties loadProperties() throws IOException {{
                final Properties props = new Properties();
                try (InputStream is = {type_name}.class.getClassLoader().getResourceAsStream(getPropertiesFilename())) {{
                    if (is == null) {{
                        throw new IOException(\"Resource not found: \" + getPropertiesFilename());
                    }}
                    {load}
                }}
                return props;
            }}
        ",
        file = java_string(&model.resource_relative_path),
        bundle = java_string(&model.basename),
        type_name = model.type_name,
        load = load,
    });

    if supports_bundle(model) {
        out.push_str(&indent(indoc! {"

            /**
             * @param locale the requested locale
             * @return the resource bundle for {@code locale}
             */
            public static ResourceBundle loadBundle(final Locale locale) {
                return ResourceBundle.getBundle(getBundleName(), locale);
            }
        "}));
    }
    out
}

fn getters(template: Template, model: &GenerationModel) -> String {
    let mut out = String::new();
    for entry in &model.entries {
        match template {
            Template::Keys if supports_bundle(model) => {
                let _ = write!(
                    out,
                    "\n    public static String {}(final ResourceBundle bundle) {{\n        return bundle.getString({});\n    }}\n",
                    entry.getter_name, entry.constant_name
                );
            }
            Template::Keys => {
                let _ = write!(
                    out,
                    "\n    public static String {}(final Properties props) {{\n        return props.getProperty({});\n    }}\n",
                    entry.getter_name, entry.constant_name
                );
            }
            Template::Values => {
                let _ = write!(
                    out,
                    "\n    public static String {}() {{\n        return {};\n    }}\n",
                    entry.getter_name, entry.constant_name
                );
            }
        }
    }
    out
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("    {line}\n")
            }
        })
        .collect()
}

/// Quotes `s` as a Java string literal.
///
/// Non-ASCII characters are written as `\uXXXX` escapes so the generated file
/// compiles regardless of the source encoding.
pub fn java_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04x}");
                }
            }
        }
    }
    out.push('"');
    out
}

// Javadoc text must not close the comment or contain unicode escapes.
fn javadoc_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '@' => out.push_str("&#64;"),
            '\\' => out.push_str("&#92;"),
            '*' => out.push_str("&#42;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            c if c.is_control() => out.push(' '),
            c if c.is_ascii() => out.push(c),
            c => {
                let _ = write!(out, "&#{};", c as u32);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::{descriptor::resolve, types::OrderedProperties};

    fn model(path: &str, pairs: &[(&str, &str)], options: &[(&str, &str)]) -> GenerationModel {
        let descriptor = resolve(path, "de.tester", false, "");
        let props: OrderedProperties = pairs.iter().copied().collect();
        let options: BTreeMap<String, String> = options
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GenerationModel::build(&descriptor, "de.tester", &props, &options).unwrap()
    }

    #[test]
    fn test_template_from_str() {
        assert_eq!("keys".parse::<Template>().unwrap(), Template::Keys);
        assert_eq!(" VALUES ".parse::<Template>().unwrap(), Template::Values);
        assert!(matches!(
            "fancy".parse::<Template>(),
            Err(Error::UnknownTemplate(_))
        ));
        assert_eq!(Template::default(), Template::Keys);
    }

    #[test]
    fn test_keys_template() {
        let model = model(
            "test-case.properties",
            &[("umlauts", "ÄÖÜ"), ("0key", "Key 0"), ("key$3", "Key 3")],
            &[],
        );
        let source = Template::Keys.render_to_string(&model);

        assert!(source.contains("package de.tester;\n"));
        assert!(source.contains("public final class TestCase {"));
        assert!(source.contains("public static final String UMLAUTS = \"umlauts\";"));
        assert!(source.contains("public static final String _0KEY = \"0key\";"));
        assert!(source.contains("public static final String KEY$3 = \"key$3\";"));
        assert!(source.contains("private TestCase() {"));
        assert!(source.contains("return \"test-case.properties\";"));
        assert!(source.contains("return \"test-case\";"));
        assert!(source.contains("props.load(is);"));
        assert!(source.contains("TestCase.class.getClassLoader()"));
        assert!(source.contains("public static ResourceBundle loadBundle(final Locale locale) {"));
        assert!(source.contains("import java.util.ResourceBundle;\n"));
        assert!(source.ends_with("}\n"));
        assert!(!source.contains("PROPERTIES_FILE_NAME"));
    }

    #[test]
    fn test_values_template() {
        let model = model("test-case.properties", &[("umlauts", "ÄÖÜ"), ("key-1", "Key 1")], &[]);
        let source = Template::Values.render_to_string(&model);

        assert!(source.contains("public static final String UMLAUTS = \"\\u00c4\\u00d6\\u00dc\";"));
        assert!(source.contains("public static final String KEY_1 = \"Key 1\";"));
        assert!(!source.contains("loadProperties"));
        assert!(!source.contains("import "));
    }

    #[test]
    fn test_xml_resource_has_no_bundle_loader() {
        let model = model("xml-props.xml", &[("test0001", "v")], &[]);
        let source = Template::Keys.render_to_string(&model);
        assert!(source.contains("public final class XmlProps {"));
        assert!(source.contains("props.loadFromXML(is);"));
        assert!(!source.contains("loadBundle"));
        assert!(!source.contains("import java.util.Locale;"));
    }

    #[test]
    fn test_name_constant_options() {
        let model = model(
            "messages/messages_de.properties",
            &[("welcome", "Willkommen")],
            &[
                ("genPropertiesFilenameConstant", "true"),
                ("genBundleNameConstant", "true"),
                ("bundleNameConstant", "BUNDLE"),
            ],
        );
        let source = Template::Keys.render_to_string(&model);
        assert!(source.contains(
            "public static final String PROPERTIES_FILE_NAME = \"messages/messages_de.properties\";"
        ));
        assert!(source.contains("public static final String BUNDLE = \"messages.messages\";"));
        assert!(source.contains("package de.tester.messages;"));
    }

    #[test]
    fn test_getters_option() {
        let model = model("app.properties", &[("welcome", "Hi")], &[("genGetters", "true")]);
        let keys = Template::Keys.render_to_string(&model);
        assert!(keys.contains("public static String getWelcome(final ResourceBundle bundle) {"));
        assert!(keys.contains("return bundle.getString(WELCOME);"));

        let values = Template::Values.render_to_string(&model);
        assert!(values.contains("public static String getWelcome() {"));
        assert!(values.contains("return WELCOME;"));
    }

    #[test]
    fn test_render_to_writer() {
        let model = model("app.properties", &[("a", "b")], &[]);
        let mut out = Vec::new();
        Template::Values.render(&model, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), Template::Values.render_to_string(&model));
    }

    #[test]
    fn test_java_string_escaping() {
        assert_eq!(java_string("plain"), "\"plain\"");
        assert_eq!(java_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(java_string("line\nbreak\t"), "\"line\\nbreak\\t\"");
        assert_eq!(java_string("ß"), "\"\\u00df\"");
        assert_eq!(java_string("😀"), "\"\\ud83d\\ude00\"");
        assert_eq!(java_string("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_javadoc_text_cannot_close_comment() {
        let text = javadoc_text("a*/b\\u0041{@x}");
        assert!(!text.contains("*/"));
        assert!(!text.contains('\\'));
        assert!(!text.contains('{'));
    }
}
