use crate::utils::error::{CatalogError, Result};

/// Domain suffixes an e-mail address must carry to be accepted.
pub const EMAIL_DOMAIN_SUFFIXES: [&str; 5] = [".com", ".edu", ".org", ".pl", "co.uk"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The toy acceptance check: an '@' somewhere plus at least one
/// recognized domain suffix anywhere in the address.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
        && EMAIL_DOMAIN_SUFFIXES
            .iter()
            .any(|suffix| email.contains(suffix))
}

pub fn validate_email(field_name: &str, email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: email.to_string(),
            reason: format!(
                "E-mail must contain '@' and one of: {}",
                EMAIL_DOMAIN_SUFFIXES.join(", ")
            ),
        })
    }
}

pub fn validate_rating(field_name: &str, rating: f64, min: f64, max: f64) -> Result<()> {
    if rating < min || rating > max || rating.is_nan() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rating.to_string(),
            reason: format!("Rating must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
