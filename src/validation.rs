// Validation utilities module
// Provides custom validation functions for domain-specific rules

use std::sync::OnceLock;

use regex::Regex;
use validator::ValidationError;

use crate::auth::models::Role;

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 \-]*$").expect("phone pattern is valid"))
}

/// Validates a phone number: optional leading '+', digits with spaces or dashes,
/// 10 to 15 digits in total
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if phone_pattern().is_match(phone) && (10..=15).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone"))
    }
}

/// Validates that a role can be chosen at registration
/// Moderators are appointed, never self-registered
pub fn validate_registrable_role(role: &Role) -> Result<(), ValidationError> {
    match role {
        Role::Farmer | Role::Expert | Role::Admin => Ok(()),
        Role::Moderator => Err(ValidationError::new("role_not_registrable")),
    }
}

/// Validates that a name still has at least two characters once trimmed
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() >= 2 {
        Ok(())
    } else {
        Err(ValidationError::new("name_too_short"))
    }
}

/// Validates that a free-text field is not blank
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("must_not_be_blank"))
    } else {
        Ok(())
    }
}

/// Validates that latitude is between -90 and 90 degrees
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        Err(ValidationError::new("latitude_out_of_range"))
    }
}

/// Validates that longitude is between -180 and 180 degrees
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(ValidationError::new("longitude_out_of_range"))
    }
}

/// Validates a market price unit
/// Valid values: "kg", "quintal", "ton", "piece", "dozen"
pub fn validate_price_unit(unit: &str) -> Result<(), ValidationError> {
    let valid_units = ["kg", "quintal", "ton", "piece", "dozen"];
    if valid_units.contains(&unit) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_unit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_numbers() {
        assert!(validate_phone("9876543210").is_ok());
        assert!(validate_phone("+91 98765-43210").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("98765abc10").is_err());
        assert!(validate_phone("+9198765432101234").is_err());
    }

    #[test]
    fn test_registrable_roles() {
        assert!(validate_registrable_role(&Role::Farmer).is_ok());
        assert!(validate_registrable_role(&Role::Admin).is_ok());
        assert!(validate_registrable_role(&Role::Moderator).is_err());
    }

    #[test]
    fn test_names_and_blanks() {
        assert!(validate_name("  Ravi ").is_ok());
        assert!(validate_name(" R ").is_err());
        assert!(validate_not_blank("Wheat").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.5).is_err());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(181.0).is_err());
    }

    #[test]
    fn test_price_units() {
        assert!(validate_price_unit("quintal").is_ok());
        assert!(validate_price_unit("litre").is_err());
    }
}
