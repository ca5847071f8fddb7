use super::super::domain::{DetectedItem, Location};

/// Most units one job may contain across all items.
pub const MAX_JOB_QUANTITY: u64 = 10_000;

/// Caller misuse rejected before any pricing happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuoteValidationError {
    #[error("item {index} has a quantity of zero")]
    ZeroQuantity { index: usize },
    #[error("item {index} has no type label")]
    BlankItemType { index: usize },
    #[error("item {index} confidence must be between 0 and 1, found {value}")]
    InvalidConfidence { index: usize, value: f64 },
    #[error("job has {total} units, more than the {limit} a single quote covers")]
    TooManyUnits { total: u64, limit: u64 },
    #[error("state must be a two-letter code, found '{0}'")]
    InvalidState(String),
    #[error("zip code must be five digits, found '{0}'")]
    InvalidZipCode(String),
}

pub(crate) fn validate_request(
    items: &[DetectedItem],
    location: &Location,
) -> Result<(), QuoteValidationError> {
    for (index, item) in items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(QuoteValidationError::ZeroQuantity { index });
        }
        if item.item_type.trim().is_empty() {
            return Err(QuoteValidationError::BlankItemType { index });
        }
        if !item.confidence.is_finite() || !(0.0..=1.0).contains(&item.confidence) {
            return Err(QuoteValidationError::InvalidConfidence {
                index,
                value: item.confidence,
            });
        }
    }

    let total: u64 = items.iter().map(|item| u64::from(item.quantity)).sum();
    if total > MAX_JOB_QUANTITY {
        return Err(QuoteValidationError::TooManyUnits {
            total,
            limit: MAX_JOB_QUANTITY,
        });
    }

    let state = location.state.trim();
    if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(QuoteValidationError::InvalidState(location.state.clone()));
    }

    if let Some(zip) = &location.zip_code {
        let trimmed = zip.trim();
        if trimmed.len() != 5 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(QuoteValidationError::InvalidZipCode(zip.clone()));
        }
    }

    Ok(())
}
