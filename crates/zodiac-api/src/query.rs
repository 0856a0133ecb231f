//! Handlers for sorting and filtering.
//!
//! `{field}` is a snake_case [`PersonField`] name such as `birth_date` or
//! `western_sign`. Unknown names are rejected with 400.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Deserialize;
use zodiac_core::{PersonField, PersonListService, PersonStore};

use crate::{error::ApiError, view::PersonView};

/// `POST /sort/{field}` — toggles direction on every call, first call
/// ascending. Returns the whole reordered list.
pub async fn sort<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Path(field): Path<String>,
) -> Result<Json<Vec<PersonView>>, ApiError> {
  let field = PersonField::from_name(&field)?;
  let sorted = service.sort(field).await?;
  Ok(Json(PersonView::list(&sorted)))
}

#[derive(Debug, Deserialize)]
pub struct FilterBody {
  pub value: String,
}

/// `GET /filters` — the list under the currently enabled filters.
pub async fn current<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
) -> Json<Vec<PersonView>> {
  Json(PersonView::list(&service.filtered().await))
}

/// `PUT /filters/{field}` — body: `{"value":"..."}`.
pub async fn apply<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Path(field): Path<String>,
  Json(body): Json<FilterBody>,
) -> Result<Json<Vec<PersonView>>, ApiError> {
  let field = PersonField::from_name(&field)?;
  let view = service.apply_filter(field, body.value).await;
  Ok(Json(PersonView::list(&view)))
}

/// `DELETE /filters/{field}`
pub async fn remove<S: PersonStore>(
  State(service): State<Arc<PersonListService<S>>>,
  Path(field): Path<String>,
) -> Result<Json<Vec<PersonView>>, ApiError> {
  let field = PersonField::from_name(&field)?;
  let view = service.remove_filter(field).await;
  Ok(Json(PersonView::list(&view)))
}
