use crate::{AppError, AppResult};

/// Fails with `Validation` when `value` is empty after trimming.
pub fn require_non_empty(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

pub fn require_in_range<T>(field: &str, value: T, min: T, max: T) -> AppResult<()>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value < min || value > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_missing() {
        assert!(require_non_empty("name", "Juan").is_ok());
        for blank in ["", "   ", "\t\n"] {
            let err = require_non_empty("name", blank).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref msg) if msg == "name is required"));
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(require_in_range("rating", 1, 1, 5).is_ok());
        assert!(require_in_range("rating", 5, 1, 5).is_ok());
        assert!(require_in_range("rating", 0, 1, 5).is_err());
        assert!(require_in_range("latitude", 90.5, -90.0, 90.0).is_err());
    }
}
