//! Finding resource files below a directory.

use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Include pattern used when none is configured.
pub const DEFAULT_INCLUDE: &str = "**/*.properties";

/// Lists the files below `root` matching any of `includes` and none of
/// `excludes`.
///
/// Patterns are matched against the path relative to `root` with `/` as the
/// separator; `*` does not cross directories. Hidden files are visited,
/// `.gitignore` rules are honored. The result is sorted so generation order
/// (and therefore which of two colliding resources wins) does not depend on
/// the file system.
pub fn scan_resources(
    root: &Path,
    includes: &[String],
    excludes: &[String],
) -> Result<Vec<String>, String> {
    let include_set = if includes.is_empty() {
        build_set(&[DEFAULT_INCLUDE.to_string()])?
    } else {
        build_set(includes)?
    };
    let exclude_set = build_set(excludes)?;

    let walker = WalkBuilder::new(root)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .hidden(false)
        .parents(false)
        .build();

    let mut found = Vec::new();
    for dent in walker {
        let dent = dent.map_err(|e| format!("Failed to scan '{}': {}", root.display(), e))?;
        if !dent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Ok(relative) = dent.path().strip_prefix(root) else {
            continue;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if include_set.is_match(&relative) && !exclude_set.is_match(&relative) {
            found.push(relative);
        }
    }
    found.sort();
    Ok(found)
}

fn build_set(patterns: &[String]) -> Result<GlobSet, String> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(glob(pat)?);
    }
    builder
        .build()
        .map_err(|e| format!("Failed to build glob set: {}", e))
}

fn glob(pattern: &str) -> Result<Glob, String> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "a=1\n").unwrap();
    }

    #[test]
    fn test_default_include_is_recursive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "messages.properties");
        touch(dir.path(), "sub/deep/labels_de.properties");
        touch(dir.path(), "other.xml");
        touch(dir.path(), "notes.txt");

        let found = scan_resources(dir.path(), &[], &[]).unwrap();
        assert_eq!(
            found,
            vec!["messages.properties", "sub/deep/labels_de.properties"]
        );
    }

    #[test]
    fn test_star_stays_in_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.properties");
        touch(dir.path(), "sub/nested.properties");

        let found = scan_resources(dir.path(), &["*.properties".to_string()], &[]).unwrap();
        assert_eq!(found, vec!["top.properties"]);
    }

    #[test]
    fn test_excludes_win() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.properties");
        touch(dir.path(), "legacy/b.properties");
        touch(dir.path(), "forms.xml");

        let found = scan_resources(
            dir.path(),
            &["**/*.properties".to_string(), "*.xml".to_string()],
            &["legacy/**".to_string()],
        )
        .unwrap();
        assert_eq!(found, vec!["a.properties", "forms.xml"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let dir = TempDir::new().unwrap();
        let err = scan_resources(dir.path(), &["a[".to_string()], &[]).unwrap_err();
        assert!(err.contains("Invalid glob pattern"));
    }
}
