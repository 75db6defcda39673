//! Filesystem layer for Tower
//!
//! Loads configuration documents in any supported format and writes
//! output files atomically.

pub mod config;
pub mod error;
pub mod io;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
