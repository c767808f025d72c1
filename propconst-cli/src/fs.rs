//! File system backed source and sink for the generator.

use std::{
    fs,
    path::{Path, PathBuf},
};

use propconst::{Error, ResourceSource, SourceSink};
use tracing::debug;

use crate::scan::scan_resources;

/// Resources found below a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    resources: Vec<String>,
}

impl DirectorySource {
    /// Scans `root` once; later calls to [`ResourceSource::resources`] return
    /// the same list.
    pub fn scan(root: &Path, includes: &[String], excludes: &[String]) -> Result<Self, String> {
        if !root.exists() {
            return Err(format!(
                "Configured resource directory \"{}\" does not exist.",
                root.display()
            ));
        }
        if !root.is_dir() {
            return Err(format!(
                "Configured resource directory \"{}\" is not a directory.",
                root.display()
            ));
        }
        let resources = scan_resources(root, includes, excludes)?;
        debug!("Found {} resource(s) in {}", resources.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            resources,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirectorySource {
    fn resources(&self) -> Result<Vec<String>, Error> {
        Ok(self.resources.clone())
    }

    fn read(&self, relative_path: &str) -> Result<Vec<u8>, Error> {
        Ok(fs::read(self.root.join(relative_path))?)
    }
}

/// Writes generated sources below a directory.
///
/// Files whose content would not change are left untouched so build tools
/// watching modification times do not recompile them.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceSink for FileSink {
    fn write(&self, output_relative_path: &str, contents: &str) -> Result<(), Error> {
        let path = self.root.join(output_relative_path);
        if fs::read(&path).is_ok_and(|existing| existing == contents.as_bytes()) {
            debug!("{} is up to date", path.display());
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = DirectorySource::scan(&dir.path().join("nope"), &[], &[]).unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.properties");
        fs::write(&file, "a=1").unwrap();
        let err = DirectorySource::scan(&file, &[], &[]).unwrap_err();
        assert!(err.contains("is not a directory"));
    }

    #[test]
    fn test_read_and_write() {
        let input = TempDir::new().unwrap();
        fs::create_dir_all(input.path().join("sub")).unwrap();
        fs::write(input.path().join("sub/m.properties"), "k=v\n").unwrap();

        let source = DirectorySource::scan(input.path(), &[], &[]).unwrap();
        assert_eq!(source.resources().unwrap(), vec!["sub/m.properties"]);
        assert_eq!(source.read("sub/m.properties").unwrap(), b"k=v\n");
        assert!(matches!(source.read("missing.properties"), Err(Error::Io(_))));

        let output = TempDir::new().unwrap();
        let sink = FileSink::new(output.path());
        sink.write("pkg/sub/M.java", "class M {}").unwrap();
        assert_eq!(
            fs::read_to_string(output.path().join("pkg/sub/M.java")).unwrap(),
            "class M {}"
        );
        sink.write("pkg/sub/M.java", "class M {}").unwrap();
    }
}
