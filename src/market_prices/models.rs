use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::{validate_not_blank, validate_price_unit};

/// Market price observation, either seeded or submitted by a user
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarketPrice {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Wheat")]
    pub commodity: String,
    #[schema(example = 25.5)]
    pub price: f64,
    #[schema(example = "kg", pattern = "kg|quintal|ton|piece|dozen")]
    pub unit: String,
    #[schema(example = "Delhi")]
    pub market: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Submitting user, absent for seeded rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<i32>,
    pub recorded_at: DateTime<Utc>,
}

/// Price submission request DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitPriceRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Onion")]
    pub commodity: String,

    #[validate(range(min = 0.0))]
    #[schema(example = 1800.0)]
    pub price: f64,

    #[validate(custom = "validate_price_unit")]
    #[schema(example = "quintal")]
    pub unit: String,

    #[validate(custom = "validate_not_blank")]
    #[schema(example = "Nashik")]
    pub market: String,

    pub quality: Option<String>,

    #[validate(length(max = 200))]
    pub notes: Option<String>,
}

/// Query parameters for GET /api/market-prices/prices
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// Case-insensitive commodity name
    pub commodity: Option<String>,
    /// Case-insensitive market name
    pub market: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}
