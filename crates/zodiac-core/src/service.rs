//! [`PersonListService`]: the in-memory person list, its persistence, and the
//! sort/filter engine on top of it.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
  Error, Person, PersonField, Result,
  person::local_today,
  query::{FilterState, SortState, sort_people},
  seed::synthetic_people,
  store::PersonStore,
};

struct Inner {
  people: Vec<Person>,
  sort:   SortState,
  filter: FilterState,
}

/// The authoritative, ordered person list for one service instance.
///
/// Every operation holds the list lock for its whole duration, including any
/// store I/O it triggers, so at most one operation is in flight at a time.
/// Mutations are persisted before they return.
///
/// Sort and filter toggles live only as long as the instance.
pub struct PersonListService<S> {
  store: S,
  inner: Mutex<Inner>,
}

impl<S: PersonStore> PersonListService<S> {
  /// Load the list from `store`, or seed and persist synthetic data if it
  /// cannot be loaded.
  ///
  /// Load failures are never returned; a failure to persist the seed is.
  pub async fn open(store: S) -> Result<Self> {
    let people = match store.load().await {
      Ok(people) => {
        debug!(count = people.len(), "loaded person list");
        people
      }
      Err(err) => {
        warn!(error = %err, "could not load person list; seeding synthetic data");
        let seed = synthetic_people();
        store.save(&seed).await.map_err(Error::store)?;
        info!(count = seed.len(), "persisted synthetic person list");
        seed
      }
    };

    Ok(Self {
      store,
      inner: Mutex::new(Inner {
        people,
        sort: SortState::default(),
        filter: FilterState::default(),
      }),
    })
  }

  pub fn store(&self) -> &S { &self.store }

  /// A snapshot of the list in its current order.
  pub async fn people(&self) -> Vec<Person> {
    self.inner.lock().await.people.clone()
  }

  pub async fn len(&self) -> usize { self.inner.lock().await.people.len() }

  pub async fn is_empty(&self) -> bool { self.len().await == 0 }

  // ── CRUD ──────────────────────────────────────────────────────────────────

  /// Reload the list from the store, then return the person at `index`.
  ///
  /// The reloaded list replaces the in-memory one even when `index` turns out
  /// to be out of range.
  pub async fn get(&self, index: usize) -> Result<Person> {
    let mut inner = self.inner.lock().await;
    inner.people = self.store.load().await.map_err(Error::store)?;
    debug!(count = inner.people.len(), "reloaded person list");

    inner
      .people
      .get(index)
      .cloned()
      .ok_or(Error::IndexOutOfRange { index, len: inner.people.len() })
  }

  /// Replace the person at `index` and persist.
  pub async fn set(&self, index: usize, person: Person) -> Result<()> {
    let mut inner = self.inner.lock().await;
    let len = inner.people.len();
    let slot = inner
      .people
      .get_mut(index)
      .ok_or(Error::IndexOutOfRange { index, len })?;
    *slot = person;
    self.persist(&inner.people).await
  }

  /// Remove the person at `index`, shifting later people left, and persist.
  /// Returns the removed person.
  pub async fn delete(&self, index: usize) -> Result<Person> {
    let mut inner = self.inner.lock().await;
    let len = inner.people.len();
    if index >= len {
      return Err(Error::IndexOutOfRange { index, len });
    }
    let removed = inner.people.remove(index);
    self.persist(&inner.people).await?;
    Ok(removed)
  }

  /// Append `person` and persist. Returns the new length.
  pub async fn add(&self, person: Person) -> Result<usize> {
    let mut inner = self.inner.lock().await;
    inner.people.push(person);
    self.persist(&inner.people).await?;
    Ok(inner.people.len())
  }

  // ── Query ─────────────────────────────────────────────────────────────────

  /// Flip the sort direction for `field`, reorder the list, and persist the
  /// new order. Returns a snapshot of the sorted list.
  ///
  /// The first call for a field sorts ascending; each further call reverses.
  pub async fn sort(&self, field: PersonField) -> Result<Vec<Person>> {
    let mut inner = self.inner.lock().await;
    let direction = inner.sort.toggle(field);
    debug!(%field, ?direction, "sorting person list");
    sort_people(&mut inner.people, field, direction, local_today());
    self.persist(&inner.people).await?;
    Ok(inner.people.clone())
  }

  /// Enable the filter for `field` with `value` as its target, and return the
  /// view under all enabled filters.
  pub async fn apply_filter(
    &self,
    field: PersonField,
    value: impl Into<String>,
  ) -> Vec<Person> {
    let mut inner = self.inner.lock().await;
    let value = value.into();
    debug!(%field, %value, "enabling filter");
    inner.filter.enable(field, value);
    inner.filter.view(&inner.people, local_today())
  }

  /// Disable the filter for `field` and return the recomputed view.
  pub async fn remove_filter(&self, field: PersonField) -> Vec<Person> {
    let mut inner = self.inner.lock().await;
    debug!(%field, "disabling filter");
    inner.filter.disable(field);
    inner.filter.view(&inner.people, local_today())
  }

  /// The view under the currently enabled filters.
  pub async fn filtered(&self) -> Vec<Person> {
    let inner = self.inner.lock().await;
    inner.filter.view(&inner.people, local_today())
  }

  async fn persist(&self, people: &[Person]) -> Result<()> {
    self.store.save(people).await.map_err(Error::store)?;
    debug!(count = people.len(), "saved person list");
    Ok(())
  }
}
