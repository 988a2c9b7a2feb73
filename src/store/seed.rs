// Sample rows loaded at startup

use chrono::{NaiveDate, Utc};

use crate::market_prices::models::MarketPrice;
use crate::schemes::models::Scheme;
use crate::store::Table;
use crate::weather::models::WeatherReading;

fn scheme_deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default()
}

pub(super) fn schemes() -> Table<Scheme> {
    let mut table = Table::new();
    let now = Utc::now();

    table.insert_with(|id| Scheme {
        id,
        name: "PM-KISAN".to_string(),
        description: "Direct income support for farmers".to_string(),
        eligibility: "Small and marginal farmers".to_string(),
        benefits: "₹6,000 per year in three installments".to_string(),
        deadline: scheme_deadline(),
        created_at: now,
    });
    table.insert_with(|id| Scheme {
        id,
        name: "PM Fasal Bima Yojana".to_string(),
        description: "Crop insurance scheme".to_string(),
        eligibility: "All farmers growing notified crops".to_string(),
        benefits: "Comprehensive crop insurance coverage".to_string(),
        deadline: scheme_deadline(),
        created_at: now,
    });

    table
}

pub(super) fn market_prices() -> Table<MarketPrice> {
    let mut table = Table::new();
    let now = Utc::now();

    for (commodity, price, market) in [("Wheat", 25.50, "Delhi"), ("Rice", 32.75, "Mumbai")] {
        table.insert_with(|id| MarketPrice {
            id,
            commodity: commodity.to_string(),
            price,
            unit: "kg".to_string(),
            market: market.to_string(),
            quality: None,
            notes: None,
            submitted_by: None,
            recorded_at: now,
        });
    }

    table
}

pub(super) fn weather_readings() -> Table<WeatherReading> {
    let mut table = Table::new();

    table.insert_with(|id| WeatherReading {
        id,
        location: "Delhi".to_string(),
        temperature: 28.5,
        humidity: 65.0,
        wind_speed: 12.3,
        description: "Partly cloudy".to_string(),
        recorded_at: Utc::now(),
    });

    table
}
