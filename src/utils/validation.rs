use crate::utils::error::{Result, SantaError};
use lettre::Address;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_email(field_name: &str, address: &str) -> Result<()> {
    if address.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Email address cannot be empty".to_string(),
        });
    }

    match address.parse::<Address>() {
        Ok(_) => Ok(()),
        Err(e) => Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid email address: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_unique_names(field_name: &str, names: &[&str]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            return Err(SantaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: (*name).to_string(),
                reason: "Participant names must be unique".to_string(),
            });
        }
    }

    Ok(())
}
