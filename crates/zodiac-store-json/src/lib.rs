//! JSON file backend for the zodiac person list.
//!
//! The whole list lives in one pretty-printed JSON array that is rewritten on
//! every save. File access goes through [`tokio::fs`] so it never blocks the
//! async runtime.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_STORAGE_DIR, DEFAULT_STORAGE_FILE, JsonFileStore};
