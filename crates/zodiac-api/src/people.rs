//! Handlers for `/people` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/people` | The whole list in its current order |
//! | `POST`   | `/people` | Body: [`PersonBody`]; returns 201 + `{"len": n}` |
//! | `GET`    | `/people/{index}` | Reloads from storage first |
//! | `PUT`    | `/people/{index}` | Body: [`PersonBody`]; returns 204 |
//! | `DELETE` | `/people/{index}` | Returns the removed person |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::json;
use zodiac_core::{Person, PersonListService, PersonStore};

use crate::{
  error::ApiError,
  view::{PersonBody, PersonView},
};

/// Map the raw `{index}` path segment onto the list. Anything that is not a
/// non-negative integer is rejected the same way as an index past the end.
async fn resolve_index<S: PersonStore>(
  service: &PersonListService<S>,
  raw: &str,
) -> Result<usize, ApiError> {
  match raw.parse::<usize>() {
    Ok(index) => Ok(index),
    Err(_) => Err(ApiError::NotFound(format!(
      "index {raw} is out of range for a list of {} people",
      service.len().await
    ))),
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /people`
pub async fn list<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
) -> Json<Vec<PersonView>> {
  Json(PersonView::list(&service.people().await))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /people` — appends and returns 201 + the new length.
pub async fn create<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Json(body): Json<PersonBody>,
) -> Result<impl IntoResponse, ApiError> {
  let person = Person::try_from(body)?;
  let len = service.add(person).await?;
  Ok((StatusCode::CREATED, Json(json!({ "len": len }))))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/{index}`
pub async fn get_one<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Path(index): Path<String>,
) -> Result<Json<PersonView>, ApiError> {
  let index = resolve_index(&service, &index).await?;
  let person = service.get(index).await?;
  Ok(Json(PersonView::from(&person)))
}

// ─── Replace ──────────────────────────────────────────────────────────────────

/// `PUT /people/{index}`
pub async fn replace<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Path(index): Path<String>,
  Json(body): Json<PersonBody>,
) -> Result<StatusCode, ApiError> {
  let index = resolve_index(&service, &index).await?;
  let person = Person::try_from(body)?;
  service.set(index, person).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /people/{index}`
pub async fn remove<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Path(index): Path<String>,
) -> Result<Json<PersonView>, ApiError> {
  let index = resolve_index(&service, &index).await?;
  let removed = service.delete(index).await?;
  Ok(Json(PersonView::from(&removed)))
}
