use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Loan product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Crop,
    Equipment,
    Infrastructure,
    Emergency,
}

impl LoanType {
    pub const ALL: [LoanType; 4] = [
        LoanType::Crop,
        LoanType::Equipment,
        LoanType::Infrastructure,
        LoanType::Emergency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Crop => "crop",
            LoanType::Equipment => "equipment",
            LoanType::Infrastructure => "infrastructure",
            LoanType::Emergency => "emergency",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoanType::Crop => "Crop Loan",
            LoanType::Equipment => "Equipment Loan",
            LoanType::Infrastructure => "Infrastructure Loan",
            LoanType::Emergency => "Emergency Loan",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoanType::Crop => "For seasonal farming needs",
            LoanType::Equipment => "For farm machinery and tools",
            LoanType::Infrastructure => "For farm buildings and facilities",
            LoanType::Emergency => "For urgent farming needs",
        }
    }
}

/// Application lifecycle status
/// Only `Pending` is ever assigned; later states await an approval workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Active,
    Completed,
}

/// Stored loan application
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    #[schema(example = 1)]
    pub id: i32,
    pub user_id: i32,
    pub loan_type: LoanType,
    #[schema(example = 150000.0)]
    pub amount: f64,
    pub purpose: String,
    /// Months
    #[schema(example = 24)]
    pub repayment_period: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collateral: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_details: Option<serde_json::Value>,
    pub status: LoanStatus,
    pub applied_at: DateTime<Utc>,
}

/// Loan application request DTO
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyLoanRequest {
    pub loan_type: LoanType,

    #[validate(range(min = 1000.0, max = 1000000.0))]
    #[schema(example = 150000.0)]
    pub amount: f64,

    #[validate(length(min = 10, max = 500))]
    #[schema(example = "Purchase seeds and fertilizer for the rabi season")]
    pub purpose: String,

    #[validate(range(min = 6, max = 60))]
    #[schema(example = 24)]
    pub repayment_period: u32,

    pub collateral: Option<serde_json::Value>,
    pub crop_details: Option<serde_json::Value>,
    pub equipment_details: Option<serde_json::Value>,
}

/// Response body for a new application
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanSubmission {
    pub loan_id: i32,
    pub status: LoanStatus,
    pub applied_at: DateTime<Utc>,
}

/// Query parameters for GET /api/loans/my-loans
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LoanQuery {
    #[param(value_type = Option<String>)]
    pub status: Option<LoanStatus>,
    #[param(value_type = Option<String>)]
    pub loan_type: Option<LoanType>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

/// Catalog entry for GET /api/loans/types
#[derive(Debug, Serialize, ToSchema)]
pub struct LoanTypeInfo {
    pub id: LoanType,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<LoanType> for LoanTypeInfo {
    fn from(loan_type: LoanType) -> Self {
        Self {
            id: loan_type,
            name: loan_type.display_name(),
            description: loan_type.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_request_bounds() {
        let mut request: ApplyLoanRequest = serde_json::from_value(json!({
            "loanType": "crop",
            "amount": 150000,
            "purpose": "Seeds and fertilizer for rabi",
            "repaymentPeriod": 24
        }))
        .unwrap();
        assert!(request.validate().is_ok());

        request.amount = 999.0;
        request.repayment_period = 61;
        request.purpose = "seeds".into();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("amount"));
        assert!(fields.contains_key("purpose"));
    }

    #[test]
    fn test_unknown_loan_type_is_rejected() {
        let result = serde_json::from_value::<ApplyLoanRequest>(json!({
            "loanType": "vacation",
            "amount": 5000,
            "purpose": "A long enough purpose",
            "repaymentPeriod": 12
        }));
        assert!(result.is_err());
    }
}
