//! Per-user saved-city associations.
//!
//! Append-only: associations are never updated or removed here, and no
//! dedup check is made — saving the same city twice yields two rows. That
//! is the documented contract, not an oversight.

use crate::catalog::CityCatalog;
use crate::error::Error;
use crate::store::Store;
use tracing::debug;

/// Registry of saved cities, validated against the catalog.
#[derive(Clone)]
pub struct UserCityRegistry {
    store: Store,
    catalog: CityCatalog,
}

impl UserCityRegistry {
    pub fn new(store: Store, catalog: CityCatalog) -> Self {
        Self { store, catalog }
    }

    /// Save a city for a user. Returns `true` if the name resolved and an
    /// association was appended, `false` (no mutation) if it did not.
    pub async fn save(&self, user_id: i64, city_name: &str) -> Result<bool, Error> {
        let Some(city) = self.catalog.find(city_name).await? else {
            debug!(city = city_name, "save skipped: city not in catalog");
            return Ok(false);
        };

        sqlx::query("INSERT INTO users_cities (user_id, city_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(city.id)
            .execute(self.store.pool())
            .await?;
        Ok(true)
    }

    /// Saved city names for a user, in insertion order, duplicates included.
    /// An unknown user yields an empty list, not an error.
    pub async fn list_saved(&self, user_id: i64) -> Result<Vec<String>, Error> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT cities.city
             FROM users_cities
             JOIN cities ON users_cities.city_id = cities.id
             WHERE users_cities.user_id = ?
             ORDER BY users_cities.rowid",
        )
        .bind(user_id)
        .fetch_all(self.store.pool())
        .await?;
        Ok(names)
    }
}
