use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sum insured per acre, in rupees
pub const COVERAGE_PER_ACRE: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Premium estimate request body
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PremiumRequest {
    /// Season or crop label, e.g. "kharif-rice"
    #[schema(example = "kharif")]
    pub crop_type: String,
    /// Acres; number or numeric string
    #[schema(value_type = f64, example = 2.5)]
    pub land_size: Decimal,
}

/// Premium estimate
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuote {
    /// Whole rupees
    #[schema(example = 2500)]
    pub premium: i64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 125000)]
    pub coverage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 2.0)]
    pub rate_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PremiumError {
    #[error("Crop type is required")]
    MissingCropType,
    #[error("Land size must be greater than zero")]
    NonPositiveLandSize,
    #[error("Land size is too large")]
    Overflow,
}

/// Crop insurance premium estimator
pub struct PremiumCalculator;

impl PremiumCalculator {
    /// Base rate in percent: kharif crops 2%, everything else 1.5%
    pub fn rate_percent(crop_type: &str) -> Decimal {
        if crop_type.to_lowercase().contains("kharif") {
            Decimal::from(2)
        } else {
            Decimal::new(15, 1)
        }
    }

    /// Premium = acres * 50,000 * rate / 100, rounded half-up to whole rupees
    pub fn calculate(crop_type: &str, land_size: Decimal) -> Result<PremiumQuote, PremiumError> {
        if crop_type.trim().is_empty() {
            return Err(PremiumError::MissingCropType);
        }
        if land_size <= Decimal::ZERO {
            return Err(PremiumError::NonPositiveLandSize);
        }

        let rate_percent = Self::rate_percent(crop_type);
        let coverage = land_size
            .checked_mul(COVERAGE_PER_ACRE)
            .ok_or(PremiumError::Overflow)?;
        let premium = (coverage * rate_percent / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        Ok(PremiumQuote {
            premium: premium.to_i64().ok_or(PremiumError::Overflow)?,
            coverage,
            rate_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kharif_rate() {
        let quote = PremiumCalculator::calculate("Kharif paddy", dec!(2.5)).unwrap();
        assert_eq!(quote.rate_percent, dec!(2));
        assert_eq!(quote.coverage, dec!(125000));
        assert_eq!(quote.premium, 2500);
    }

    #[test]
    fn test_other_seasons_rate() {
        let quote = PremiumCalculator::calculate("rabi", dec!(1)).unwrap();
        assert_eq!(quote.rate_percent, dec!(1.5));
        assert_eq!(quote.premium, 750);
    }

    #[test]
    fn test_rounds_half_up() {
        // 0.001 acres -> 50 coverage -> 0.75 premium at 1.5%
        assert_eq!(PremiumCalculator::calculate("rabi", dec!(0.001)).unwrap().premium, 1);
        // 0.005 acres -> 250 coverage -> 3.75 at 1.5%
        assert_eq!(PremiumCalculator::calculate("rabi", dec!(0.005)).unwrap().premium, 4);
        // 0.015 acres -> 750 coverage -> 11.25 at 1.5%
        assert_eq!(PremiumCalculator::calculate("rabi", dec!(0.015)).unwrap().premium, 11);
        // 0.01 acres -> 500 coverage -> 7.5 at 1.5%
        assert_eq!(PremiumCalculator::calculate("rabi", dec!(0.01)).unwrap().premium, 8);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            PremiumCalculator::calculate("kharif", dec!(0)),
            Err(PremiumError::NonPositiveLandSize)
        );
        assert_eq!(
            PremiumCalculator::calculate("  ", dec!(1)),
            Err(PremiumError::MissingCropType)
        );
    }

    #[test]
    fn test_request_accepts_strings_and_numbers() {
        let from_number: PremiumRequest =
            serde_json::from_str(r#"{"cropType":"kharif","landSize":2.5}"#).unwrap();
        let from_string: PremiumRequest =
            serde_json::from_str(r#"{"cropType":"kharif","landSize":"2.5"}"#).unwrap();
        assert_eq!(from_number.land_size, dec!(2.5));
        assert_eq!(from_string.land_size, dec!(2.5));
    }

    proptest! {
        // Feature: insurance-premium, Property 1: Premium is proportional to whole acres
        #[test]
        fn prop_premium_for_whole_acres(acres in 1u32..10_000, kharif in any::<bool>()) {
            let crop = if kharif { "kharif" } else { "rabi" };
            let quote = PremiumCalculator::calculate(crop, Decimal::from(acres)).unwrap();

            let expected = if kharif { i64::from(acres) * 1000 } else { i64::from(acres) * 750 };
            prop_assert_eq!(quote.premium, expected);
            prop_assert_eq!(quote.coverage, Decimal::from(acres) * dec!(50000));
        }
    }
}
