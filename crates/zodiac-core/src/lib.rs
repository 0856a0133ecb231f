//! Core types and the person-list engine.
//!
//! This crate is free of HTTP and file-system dependencies. Persistence is
//! reached through the [`store::PersonStore`] trait, implemented by backends
//! such as `zodiac-store-json`.

pub mod error;
pub mod field;
pub mod person;
pub mod query;
pub mod seed;
pub mod service;
pub mod sign;
pub mod store;

pub use error::{Error, Result};
pub use field::{FieldMap, PersonField};
pub use person::Person;
pub use service::PersonListService;
pub use store::PersonStore;
