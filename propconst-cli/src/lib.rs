//! Building blocks of the `propconst` command line tool.

pub mod fs;
pub mod generate;
pub mod inspect;
pub mod scan;
pub mod settings;

pub use generate::{GenerateArgs, GenerateRequest};
pub use scan::scan_resources;
pub use settings::Settings;
