//! Read-only city reference catalog.
//!
//! Lookups are exact string matches against the `cities` table — no
//! case-folding, trimming, or fuzzy matching. An unknown name is a `None`,
//! never an error; only storage failures propagate.

use crate::error::Error;
use crate::store::Store;
use serde::Serialize;

/// A reference city row. Immutable at runtime; `name` is unique within the
/// catalog.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct City {
    pub id: i64,
    #[sqlx(rename = "city")]
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Name → coordinates lookup over the shared store.
#[derive(Clone)]
pub struct CityCatalog {
    store: Store,
}

impl CityCatalog {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Resolve a city name to `(lat, lng)`. Exact match; no side effects.
    pub async fn resolve(&self, name: &str) -> Result<Option<(f64, f64)>, Error> {
        Ok(self.find(name).await?.map(|c| (c.lat, c.lng)))
    }

    /// Fetch the full reference row for a city name.
    pub async fn find(&self, name: &str) -> Result<Option<City>, Error> {
        let city = sqlx::query_as::<_, City>(
            "SELECT id, city, lat, lng FROM cities WHERE city = ?",
        )
        .bind(name)
        .fetch_optional(self.store.pool())
        .await?;
        Ok(city)
    }
}
