// In-memory data store shared by every repository
// Each table sits behind its own RwLock and owns its id sequence

mod seed;

use std::collections::BTreeMap;

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::auth::models::User;
use crate::loans::models::LoanApplication;
use crate::market_prices::models::MarketPrice;
use crate::schemes::models::Scheme;
use crate::weather::models::WeatherReading;

/// Rows keyed by id, in insertion order
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, build the row from it, store and return a copy
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(i32) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i32) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().find(|row| predicate(row))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Row counts reported by the health endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoreStats {
    pub users: usize,
    pub loan_applications: usize,
    pub schemes: usize,
    pub market_prices: usize,
    pub weather_readings: usize,
}

/// Process-wide in-memory store
///
/// Built once in `main` and handed to repositories through `Arc`.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) users: RwLock<Table<User>>,
    pub(crate) loans: RwLock<Table<LoanApplication>>,
    pub(crate) schemes: RwLock<Table<Scheme>>,
    pub(crate) market_prices: RwLock<Table<MarketPrice>>,
    pub(crate) weather: RwLock<Table<WeatherReading>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the startup sample rows
    pub fn seeded() -> Self {
        Self {
            schemes: RwLock::new(seed::schemes()),
            market_prices: RwLock::new(seed::market_prices()),
            weather: RwLock::new(seed::weather_readings()),
            ..Self::default()
        }
    }

    pub async fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.read().await.len(),
            loan_applications: self.loans.read().await.len(),
            schemes: self.schemes.read().await.len(),
            market_prices: self.market_prices.read().await.len(),
            weather_readings: self.weather.read().await.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i32,
        label: &'static str,
    }

    #[test]
    fn test_ids_are_sequential_per_table() {
        let mut table = Table::new();
        let first = table.insert_with(|id| Row { id, label: "a" });
        let second = table.insert_with(|id| Row { id, label: "b" });
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(2), Some(&second));
        assert_eq!(table.find(|r| r.label == "a"), Some(&first));
        assert!(table.get(3).is_none());
    }

    #[tokio::test]
    async fn test_seeded_store_stats() {
        let store = MemoryStore::seeded();
        let stats = store.stats().await;
        assert_eq!(stats.users, 0);
        assert_eq!(stats.loan_applications, 0);
        assert_eq!(stats.schemes, 2);
        assert_eq!(stats.market_prices, 2);
        assert_eq!(stats.weather_readings, 1);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.schemes.read().await.is_empty());
    }
}
