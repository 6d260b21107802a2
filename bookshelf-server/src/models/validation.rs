//! Validation error types

use std::fmt;

/// A single rule violation on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every violation found in one payload, in field order.
///
/// Validation does not stop at the first failure so a client can fix
/// all of its input in one round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "title" };
        assert_eq!(err.to_string(), "title cannot be empty");
    }

    #[test]
    fn collected_errors_join_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::Empty { field: "title" });
        errors.push(ValidationError::Empty { field: "author" });

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "title cannot be empty; author cannot be empty"
        );
    }

    #[test]
    fn empty_collection_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
