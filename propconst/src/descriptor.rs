//! Where a resource's generated type lives.
//!
//! [`resolve`] derives, from a resource path relative to the scanned
//! directory, the fully qualified name of the generated type, the output file
//! path relative to the output directory and the bundle name used to look the
//! resource up at runtime.

use serde::Serialize;

use crate::{locale::strip_locale_suffix, names};

/// File extension of generated sources.
pub const OUTPUT_EXTENSION: &str = "java";

/// Everything the generator needs to know about one resource file's location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    /// Path of the resource relative to the scanned directory, `/`-separated.
    pub relative_resource_path: String,
    /// Bundle name: directories and the file name without extension and
    /// locale marker, joined with `.`. Not necessarily a valid identifier.
    pub basename: String,
    /// Namespace segments of the generated type.
    pub namespace_segments: Vec<String>,
    /// Simple name of the generated type, suffix included.
    pub type_name: String,
    /// `namespace.TypeName`.
    pub fully_qualified_name: String,
    /// Generated file path relative to the output directory.
    pub output_relative_path: String,
    /// Whether the resource is an XML properties document.
    pub is_xml_format: bool,
}

impl ResourceDescriptor {
    /// The namespace segments joined with `.`.
    pub fn namespace(&self) -> String {
        self.namespace_segments.join(".")
    }

    /// The file name of the resource, without directories.
    pub fn file_name(&self) -> &str {
        file_name(&self.relative_resource_path)
    }
}

/// Resolves a resource path into a [`ResourceDescriptor`].
///
/// `namespace_root` must be a valid namespace and `name_suffix` empty or a
/// valid identifier; [`crate::config::GeneratorConfig::validate`] checks both.
/// With `flatten` set, directories of `relative_path` do not contribute to the
/// namespace, which may make distinct resources collide.
///
/// ```rust
/// use propconst::descriptor::resolve;
///
/// let d = resolve("messages/msgs_de_DE.properties", "com.example", false, "");
/// assert_eq!(d.fully_qualified_name, "com.example.messages.Msgs");
/// assert_eq!(d.output_relative_path, "com/example/messages/Msgs.java");
/// assert_eq!(d.basename, "messages.msgs");
/// ```
pub fn resolve(
    relative_path: &str,
    namespace_root: &str,
    flatten: bool,
    name_suffix: &str,
) -> ResourceDescriptor {
    let portable = relative_path.replace('\\', "/");
    let segments: Vec<&str> = portable.split('/').filter(|s| !s.is_empty()).collect();
    let (file, directories) = match segments.split_last() {
        Some((file, directories)) => (*file, directories),
        None => ("", &[][..]),
    };

    let is_xml_format = extension(file).is_some_and(|ext| ext.to_lowercase().contains("xml"));
    let bundle = strip_locale_suffix(strip_extension(file));

    let basename = directories
        .iter()
        .copied()
        .chain(std::iter::once(bundle))
        .collect::<Vec<_>>()
        .join(".");

    let mut namespace_segments: Vec<String> =
        namespace_root.split('.').map(str::to_string).collect();
    if !flatten {
        namespace_segments.extend(directories.iter().map(|dir| {
            if names::is_valid_identifier(dir) {
                dir.to_string()
            } else {
                names::sanitize_segment(dir)
            }
        }));
    }

    let type_name = format!("{}{}", names::type_name(bundle), name_suffix);
    let fully_qualified_name = format!("{}.{}", namespace_segments.join("."), type_name);
    let output_relative_path = format!(
        "{}.{}",
        fully_qualified_name.replace('.', "/"),
        OUTPUT_EXTENSION
    );

    ResourceDescriptor {
        relative_resource_path: portable,
        basename,
        namespace_segments,
        type_name,
        fully_qualified_name,
        output_relative_path,
        is_xml_format,
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

// A leading dot marks a hidden file, not an extension.
fn extension(file: &str) -> Option<&str> {
    match file.rfind('.') {
        Some(idx) if idx > 0 => Some(&file[idx + 1..]),
        _ => None,
    }
}

fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    }
}
