use std::sync::Arc;

use crate::store::MemoryStore;
use crate::weather::models::WeatherReading;

/// Stored weather readings
#[derive(Clone)]
pub struct WeatherRepository {
    store: Arc<MemoryStore>,
}

impl WeatherRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Readings for a location (case-insensitive), or all readings
    pub async fn history(&self, location: Option<&str>) -> Vec<WeatherReading> {
        let table = self.store.weather.read().await;
        match location.map(str::to_lowercase) {
            Some(location) => table.filter(|r| r.location.to_lowercase() == location),
            None => table.all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_history_filters_by_location() {
        let repo = WeatherRepository::new(Arc::new(MemoryStore::seeded()));
        assert_eq!(repo.history(None).await.len(), 1);
        assert_eq!(repo.history(Some("delhi")).await.len(), 1);
        assert!(repo.history(Some("Pune")).await.is_empty());
    }
}
