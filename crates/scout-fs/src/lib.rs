//! Filesystem collaborators for the scout config resolver.
//!
//! The resolution engine in `scout-config` never touches the filesystem
//! directly; it goes through the narrow read/write/scan contracts here.

pub mod error;
pub mod io;
pub mod scan;

pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
pub use scan::find_files;
