use crate::utils::error::{ParkingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ParkingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ParkingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_rate(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ParkingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ParkingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Rate cannot be negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("lot.total_spaces", 10u32, 1, 10_000).is_ok());
        assert!(validate_range("lot.total_spaces", 0u32, 1, 10_000).is_err());
        assert!(validate_range("lot.total_spaces", 10_001u32, 1, 10_000).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("billing.rate_per_minute", 0.05).is_ok());
        assert!(validate_rate("billing.rate_per_minute", 0.0).is_ok());
        assert!(validate_rate("billing.rate_per_minute", -0.01).is_err());
        assert!(validate_rate("billing.rate_per_minute", f64::NAN).is_err());
        assert!(validate_rate("billing.rate_per_minute", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("billing.currency_symbol", "$").is_ok());
        assert!(validate_non_empty_string("billing.currency_symbol", "  ").is_err());
    }
}
