// Loan eligibility scoring

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const ELIGIBILITY_THRESHOLD: u32 = 60;
pub const AMOUNT_PER_POINT: u64 = 10_000;
pub const MAX_OFFER: u64 = 500_000;

/// Query parameters for GET /api/loans/eligibility-check
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EligibilityQuery {
    /// owned | leased | sharecropper
    pub land_ownership: Option<String>,
    /// above-10 | 5-10 | 2-5 | below-2 (lakh rupees)
    pub annual_income: Option<String>,
    /// excellent | good | fair | poor
    pub credit_score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub eligible: bool,
    #[schema(example = 100)]
    pub score: u32,
    #[schema(example = 500000)]
    pub max_amount: u64,
    pub reasons: Vec<String>,
}

/// Additive point score over three categorical inputs
pub struct EligibilityCalculator;

impl EligibilityCalculator {
    pub fn land_points(land_ownership: &str) -> u32 {
        match land_ownership {
            "owned" => 30,
            "leased" => 20,
            "sharecropper" => 10,
            _ => 0,
        }
    }

    pub fn income_points(annual_income: &str) -> u32 {
        match annual_income {
            "above-10" => 25,
            "5-10" => 20,
            "2-5" => 15,
            "below-2" => 10,
            _ => 0,
        }
    }

    pub fn credit_points(credit_score: &str) -> u32 {
        match credit_score {
            "excellent" => 45,
            "good" => 35,
            "fair" => 25,
            "poor" => 10,
            _ => 0,
        }
    }

    /// Score the three inputs; unknown or missing values score zero
    pub fn check(
        land_ownership: Option<&str>,
        annual_income: Option<&str>,
        credit_score: Option<&str>,
    ) -> EligibilityResult {
        let score = land_ownership.map_or(0, Self::land_points)
            + annual_income.map_or(0, Self::income_points)
            + credit_score.map_or(0, Self::credit_points);

        let eligible = score >= ELIGIBILITY_THRESHOLD;
        let max_amount = if eligible {
            (u64::from(score) * AMOUNT_PER_POINT).min(MAX_OFFER)
        } else {
            0
        };
        let reason = if eligible {
            "All criteria met".to_string()
        } else {
            format!("Eligibility score below {}", ELIGIBILITY_THRESHOLD)
        };

        EligibilityResult {
            eligible,
            score,
            max_amount,
            reasons: vec![reason],
        }
    }

    pub fn from_query(query: &EligibilityQuery) -> EligibilityResult {
        Self::check(
            query.land_ownership.as_deref(),
            query.annual_income.as_deref(),
            query.credit_score.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_best_profile_is_capped() {
        let result = EligibilityCalculator::check(Some("owned"), Some("above-10"), Some("excellent"));
        assert_eq!(result.score, 100);
        assert!(result.eligible);
        assert_eq!(result.max_amount, 500_000);
        assert_eq!(result.reasons, vec!["All criteria met".to_string()]);
    }

    #[test]
    fn test_weakest_profile_is_ineligible() {
        let result = EligibilityCalculator::check(Some("sharecropper"), Some("below-2"), Some("poor"));
        assert_eq!(result.score, 30);
        assert!(!result.eligible);
        assert_eq!(result.max_amount, 0);
        assert_eq!(result.reasons, vec!["Eligibility score below 60".to_string()]);
    }

    #[test]
    fn test_threshold_boundary() {
        // 20 + 15 + 25 = 60
        let result = EligibilityCalculator::check(Some("leased"), Some("2-5"), Some("fair"));
        assert_eq!(result.score, 60);
        assert!(result.eligible);
        assert_eq!(result.max_amount, 600_000.min(MAX_OFFER));
    }

    #[test]
    fn test_unknown_and_missing_values_score_zero() {
        let result = EligibilityCalculator::check(Some("rented"), None, Some("EXCELLENT"));
        assert_eq!(result.score, 0);
        assert!(!result.eligible);
    }

    fn land() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("owned"), Just("leased"), Just("sharecropper"), Just("other")]
    }

    fn income() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("above-10"), Just("5-10"), Just("2-5"), Just("below-2"), Just("other")]
    }

    fn credit() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("excellent"), Just("good"), Just("fair"), Just("poor"), Just("other")]
    }

    proptest! {
        // Feature: loan-calculators, Property 3: Offer follows score
        #[test]
        fn prop_offer_follows_score(l in land(), i in income(), c in credit()) {
            let result = EligibilityCalculator::check(Some(l), Some(i), Some(c));

            prop_assert!(result.score <= 100);
            prop_assert_eq!(result.eligible, result.score >= 60);
            if result.eligible {
                prop_assert_eq!(result.max_amount, (u64::from(result.score) * 10_000).min(500_000));
            } else {
                prop_assert_eq!(result.max_amount, 0);
            }
        }
    }
}
