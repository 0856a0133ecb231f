//! JSON REST API for the zodiac person list.
//!
//! Exposes an axum [`Router`] backed by a [`PersonListService`] over any
//! [`PersonStore`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", zodiac_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod people;
pub mod query;
pub mod view;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use zodiac_core::{PersonListService, PersonStore};

pub use error::ApiError;
pub use view::{PersonBody, PersonView};

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<PersonListService<S>>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    // People
    .route("/people", get(people::list::<S>).post(people::create::<S>))
    .route(
      "/people/{index}",
      get(people::get_one::<S>)
        .put(people::replace::<S>)
        .delete(people::remove::<S>),
    )
    // Sort
    .route("/sort/{field}", post(query::sort::<S>))
    // Filter
    .route("/filters", get(query::current::<S>))
    .route(
      "/filters/{field}",
      put(query::apply::<S>).delete(query::remove::<S>),
    )
    .with_state(service)
}

#[cfg(test)]
mod tests;
