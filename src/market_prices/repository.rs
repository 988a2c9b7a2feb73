use std::sync::Arc;

use chrono::Utc;

use crate::market_prices::models::{MarketPrice, SubmitPriceRequest};
use crate::store::MemoryStore;

/// Market price storage
#[derive(Clone)]
pub struct MarketPriceRepository {
    store: Arc<MemoryStore>,
}

impl MarketPriceRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Prices matching the optional commodity and market filters (case-insensitive)
    pub async fn search(&self, commodity: Option<&str>, market: Option<&str>) -> Vec<MarketPrice> {
        let commodity = commodity.map(str::to_lowercase);
        let market = market.map(str::to_lowercase);

        self.store.market_prices.read().await.filter(|price| {
            commodity
                .as_deref()
                .map_or(true, |c| price.commodity.to_lowercase() == c)
                && market
                    .as_deref()
                    .map_or(true, |m| price.market.to_lowercase() == m)
        })
    }

    pub async fn create(&self, submitted_by: i32, request: SubmitPriceRequest) -> MarketPrice {
        let mut table = self.store.market_prices.write().await;
        table.insert_with(|id| MarketPrice {
            id,
            commodity: request.commodity.trim().to_string(),
            price: request.price,
            unit: request.unit,
            market: request.market.trim().to_string(),
            quality: request.quality,
            notes: request.notes,
            submitted_by: Some(submitted_by),
            recorded_at: Utc::now(),
        })
    }

    pub async fn submitted_by(&self, user_id: i32) -> Vec<MarketPrice> {
        self.store
            .market_prices
            .read()
            .await
            .filter(|price| price.submitted_by == Some(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let repo = MarketPriceRepository::new(Arc::new(MemoryStore::seeded()));

        assert_eq!(repo.search(None, None).await.len(), 2);
        let wheat = repo.search(Some("WHEAT"), None).await;
        assert_eq!(wheat.len(), 1);
        assert_eq!(wheat[0].market, "Delhi");
        assert!(repo.search(Some("wheat"), Some("mumbai")).await.is_empty());
    }

    #[tokio::test]
    async fn test_submissions_are_attributed() {
        let repo = MarketPriceRepository::new(Arc::new(MemoryStore::seeded()));
        let created = repo
            .create(
                7,
                SubmitPriceRequest {
                    commodity: " Onion ".into(),
                    price: 1800.0,
                    unit: "quintal".into(),
                    market: "Nashik".into(),
                    quality: None,
                    notes: None,
                },
            )
            .await;

        assert_eq!(created.id, 3);
        assert_eq!(created.commodity, "Onion");
        assert_eq!(repo.submitted_by(7).await.len(), 1);
        assert!(repo.submitted_by(8).await.is_empty());
    }
}
