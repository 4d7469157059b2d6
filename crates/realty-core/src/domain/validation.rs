//! Field validators shared by the entity derives

use std::borrow::Cow;

use validator::ValidationError;

pub(crate) fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Money amounts must be finite and strictly above zero.
pub(crate) fn positive_amount(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new("positive_amount"));
    }
    Ok(())
}

pub(crate) fn non_negative_amount(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new("non_negative_amount"));
    }
    Ok(())
}
