use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Government scheme record
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Scheme {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "PM-KISAN")]
    pub name: String,
    #[schema(example = "Direct income support for farmers")]
    pub description: String,
    #[schema(example = "Small and marginal farmers")]
    pub eligibility: String,
    pub benefits: String,
    #[schema(value_type = String, format = Date, example = "2024-12-31")]
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
}
