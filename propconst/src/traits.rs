//! Loading one resource file.

use std::{fs, io::Read, path::Path};

use crate::error::Error;

/// A resource format that can be parsed from raw bytes.
///
/// Implementors only provide [`Loader::load`]; the other entry points read
/// their input fully and delegate to it, since the encoding of a file can only
/// be decided once all of it is known.
///
/// ```rust,no_run
/// use propconst::traits::Loader;
/// let format = propconst::formats::properties::Format::load_file("messages.properties")?;
/// println!("{} keys", format.properties.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Loader: Sized {
    fn load(bytes: &[u8]) -> Result<Self, Error>;

    fn load_str(s: &str) -> Result<Self, Error> {
        Self::load(s.as_bytes())
    }

    fn load_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::load(&bytes)
    }

    fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::load(&fs::read(path)?)
    }
}
