use crate::utils::error::{PrimbonError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrimbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Birth dates arrive as `DD-MM-YYYY` strings. The original tool let
/// malformed dates flow through as NaN; here they are rejected up front.
pub fn validate_birth_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%d-%m-%Y").map_err(|e| {
        PrimbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected DD-MM-YYYY: {}", e),
        }
    })
}

pub fn validate_dir_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PrimbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if !std::path::Path::new(path).is_dir() {
        return Err(PrimbonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Not a readable directory".to_string(),
        });
    }

    Ok(())
}
