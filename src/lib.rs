//! # iffound - File Content If Found
//!
//! Small accessors over file-system reads that hand back an empty result
//! instead of an error when a file cannot be opened or read.
//!
//! ```no_run
//! use iffound::IfFound;
//! use std::io::Read;
//!
//! let config = IfFound::new("settings.toml").string();
//! let raw = IfFound::new("blob.bin").bytes();
//!
//! let mut reader = IfFound::new("data.log").reader();
//! if let Some(cause) = reader.cause() {
//!     eprintln!("not using data.log: {cause}");
//! }
//! let mut content = Vec::new();
//! reader.read_to_end(&mut content).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Flat error type wrapping the underlying io::Error
//! - [`lookup`] - The path-bound [`IfFound`] handle and its readers
//! - [`zero_reader`] - The always-empty [`ZeroReader`] stand-in

pub mod error;
pub mod lookup;
pub mod zero_reader;

// Re-export commonly used types for convenience
pub use error::{IfFoundError, Result};
pub use lookup::{AsyncFoundReader, FoundReader, IfFound};
pub use zero_reader::ZeroReader;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
