// EMI (equated monthly installment) calculation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number or numeric string, as sent by form-driven clients
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// None for blank text; Some(Err) for anything that is not a finite number
    fn parse(&self) -> Option<Result<f64, ()>> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Some(Ok(*n)),
            NumericInput::Number(_) => Some(Err(())),
            NumericInput::Text(s) if s.trim().is_empty() => None,
            NumericInput::Text(s) => Some(
                s.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or(()),
            ),
        }
    }
}

/// EMI request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateEmiRequest {
    /// Principal in rupees
    #[schema(value_type = Option<f64>, example = 200000)]
    pub amount: Option<NumericInput>,
    /// Tenure in years
    #[schema(value_type = Option<f64>, example = 5)]
    pub tenure: Option<NumericInput>,
    /// Annual interest rate, percent
    #[schema(value_type = Option<f64>, example = 8.5)]
    pub interest_rate: Option<NumericInput>,
}

/// EMI response body
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmiBreakdown {
    #[serde(rename = "monthlyEMI")]
    #[schema(example = 4103)]
    pub monthly_emi: i64,
    #[schema(example = 246198)]
    pub total_amount: i64,
    #[schema(example = 46198)]
    pub total_interest: i64,
    pub principal: f64,
    pub tenure: f64,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmiError {
    #[error("Amount, tenure, and interest rate are required")]
    MissingInput,
    #[error("Amount, tenure, and interest rate must be numeric")]
    NotNumeric,
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Tenure must be greater than zero")]
    NonPositiveTenure,
    #[error("Interest rate cannot be negative")]
    NegativeRate,
    #[error("Loan terms are outside the supported range")]
    OutOfRange,
}

/// Largest money figure reported; keeps the rounded outputs exact in i64
const MAX_RUPEES: f64 = 9.0e15;

/// EMI calculator for the standard amortization formula
pub struct EmiCalculator;

impl EmiCalculator {
    /// Parse a raw request and calculate
    pub fn from_request(request: &CalculateEmiRequest) -> Result<EmiBreakdown, EmiError> {
        let fields = [&request.amount, &request.tenure, &request.interest_rate];

        let mut values = [0.0; 3];
        for (slot, field) in values.iter_mut().zip(fields) {
            *slot = field
                .as_ref()
                .and_then(NumericInput::parse)
                .ok_or(EmiError::MissingInput)?
                .map_err(|_| EmiError::NotNumeric)?;
        }

        let [principal, tenure_years, annual_rate] = values;
        Self::calculate(principal, annual_rate, tenure_years)
    }

    /// Calculate the EMI breakdown
    ///
    /// monthly rate r = annual% / 100 / 12, months n = years * 12,
    /// emi = P * r * (1+r)^n / ((1+r)^n - 1), or P / n when (1+r)^n - 1 is zero.
    /// All three money outputs are rounded to whole rupees.
    ///
    /// (1+r)^n - 1 is taken as expm1(n * ln_1p(r)) so tiny rates keep their precision.
    pub fn calculate(
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: f64,
    ) -> Result<EmiBreakdown, EmiError> {
        if principal <= 0.0 {
            return Err(EmiError::NonPositiveAmount);
        }
        if tenure_years <= 0.0 {
            return Err(EmiError::NonPositiveTenure);
        }
        if annual_rate_percent < 0.0 {
            return Err(EmiError::NegativeRate);
        }

        let months = tenure_years * 12.0;
        let monthly_rate = annual_rate_percent / 100.0 / 12.0;

        let accrued = (months * monthly_rate.ln_1p()).exp_m1();
        let emi = if accrued == 0.0 {
            principal / months
        } else {
            // P * r * (a + 1) / a, with a = (1+r)^n - 1
            principal * monthly_rate + principal * monthly_rate / accrued
        };

        let total_amount = emi * months;
        let total_interest = total_amount - principal;

        if ![emi, total_amount, total_interest]
            .iter()
            .all(|v| v.is_finite() && v.abs() <= MAX_RUPEES)
        {
            return Err(EmiError::OutOfRange);
        }

        Ok(EmiBreakdown {
            monthly_emi: emi.round() as i64,
            total_amount: total_amount.round() as i64,
            total_interest: total_interest.round() as i64,
            principal,
            tenure: tenure_years,
            interest_rate: annual_rate_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_reference_loan() {
        let result = EmiCalculator::calculate(200000.0, 8.5, 5.0).unwrap();
        assert_eq!(result.monthly_emi, 4103);
        assert_eq!(result.total_amount, 246198);
        assert_eq!(result.total_interest, 46198);
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let result = EmiCalculator::calculate(120000.0, 0.0, 2.0).unwrap();
        assert_eq!(result.monthly_emi, 5000);
        assert_eq!(result.total_amount, 120000);
        assert_eq!(result.total_interest, 0);
    }

    #[test]
    fn test_tiny_rate_matches_even_split() {
        let result = EmiCalculator::calculate(120000.0, 1e-20, 2.0).unwrap();
        assert_eq!(result.monthly_emi, 5000);
        assert_eq!(result.total_amount, 120000);
        assert_eq!(result.total_interest, 0);
    }

    #[test]
    fn test_very_long_tenure_approaches_interest_only() {
        // 1% a month on 100000 for a million years
        let result = EmiCalculator::calculate(100000.0, 12.0, 1.0e6).unwrap();
        assert_eq!(result.monthly_emi, 1000);
    }

    #[test]
    fn test_overflowing_terms_rejected() {
        assert_eq!(
            EmiCalculator::calculate(100000.0, 12.0, 1.0e300),
            Err(EmiError::OutOfRange)
        );
        assert_eq!(
            EmiCalculator::calculate(1.0e300, 8.5, 5.0),
            Err(EmiError::OutOfRange)
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            EmiCalculator::calculate(0.0, 8.5, 5.0),
            Err(EmiError::NonPositiveAmount)
        );
        assert_eq!(
            EmiCalculator::calculate(1000.0, 8.5, 0.0),
            Err(EmiError::NonPositiveTenure)
        );
        assert_eq!(
            EmiCalculator::calculate(1000.0, -1.0, 1.0),
            Err(EmiError::NegativeRate)
        );
    }

    #[test]
    fn test_request_accepts_numeric_strings() {
        let request: CalculateEmiRequest = serde_json::from_value(json!({
            "amount": "200000",
            "tenure": 5,
            "interestRate": " 8.5 "
        }))
        .unwrap();
        assert_eq!(EmiCalculator::from_request(&request).unwrap().monthly_emi, 4103);
    }

    #[test]
    fn test_request_missing_and_non_numeric() {
        let missing: CalculateEmiRequest =
            serde_json::from_value(json!({ "amount": 1000, "tenure": "" })).unwrap();
        assert_eq!(EmiCalculator::from_request(&missing), Err(EmiError::MissingInput));

        let garbage: CalculateEmiRequest = serde_json::from_value(json!({
            "amount": "lots",
            "tenure": 1,
            "interestRate": 7
        }))
        .unwrap();
        assert_eq!(EmiCalculator::from_request(&garbage), Err(EmiError::NotNumeric));
    }

    #[test]
    fn test_response_field_names() {
        let body = serde_json::to_value(EmiCalculator::calculate(1000.0, 12.0, 1.0).unwrap()).unwrap();
        assert!(body.get("monthlyEMI").is_some());
        assert!(body.get("totalAmount").is_some());
        assert!(body.get("totalInterest").is_some());
        assert!(body.get("interestRate").is_some());
    }

    proptest! {
        // Feature: loan-calculators, Property 1: Total repayment never falls below principal
        #[test]
        fn prop_total_covers_principal(
            principal in 1000u32..10_000_000,
            rate_bp in 0u32..3000,
            years in 1u32..30
        ) {
            let principal = f64::from(principal);
            let rate = f64::from(rate_bp) / 100.0;
            let result = EmiCalculator::calculate(principal, rate, f64::from(years)).unwrap();

            prop_assert!(result.total_amount as f64 >= principal.round() - 1.0);
            prop_assert!(result.total_interest >= -1);
            prop_assert!((result.total_amount - result.total_interest - principal.round() as i64).abs() <= 1);
        }

        // Feature: loan-calculators, Property 2: Higher rates never lower the installment
        #[test]
        fn prop_emi_monotonic_in_rate(
            principal in 1000u32..1_000_000,
            rate_bp in 0u32..2500,
            years in 1u32..20
        ) {
            let principal = f64::from(principal);
            let low = EmiCalculator::calculate(principal, f64::from(rate_bp) / 100.0, f64::from(years)).unwrap();
            let high = EmiCalculator::calculate(principal, f64::from(rate_bp + 100) / 100.0, f64::from(years)).unwrap();
            prop_assert!(high.monthly_emi >= low.monthly_emi);
        }
    }
}
