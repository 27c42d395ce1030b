//! Domain Value Objects
//!
//! Immutable, validated value types for the catalog domain.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Product field validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductValidationError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Product name must be at most {max} characters")]
    NameTooLong { max: usize },

    #[error("Price is required")]
    MissingPrice,

    #[error("Price must be a finite number")]
    NonFinitePrice,

    #[error("Price must not be negative (got {0})")]
    NegativePrice(f64),
}

/// Product name: trimmed, never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub const MAX_LENGTH: usize = 200;

    pub fn new(raw: impl AsRef<str>) -> Result<Self, ProductValidationError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(ProductValidationError::NameTooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from a database value (validated on write)
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-negative, finite price
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> Result<Self, ProductValidationError> {
        if !value.is_finite() {
            return Err(ProductValidationError::NonFinitePrice);
        }
        if value < 0.0 {
            return Err(ProductValidationError::NegativePrice(value));
        }
        // -0.0 passes the check above; store it as 0
        Ok(Self(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Price> for f64 {
    fn from(p: Price) -> Self {
        p.0
    }
}

/// Optional free text: blank means absent
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name() {
        assert_eq!(ProductName::new("  Brake pads ").unwrap().as_str(), "Brake pads");
        assert_eq!(ProductName::new("   "), Err(ProductValidationError::EmptyName));
        assert!(matches!(
            ProductName::new("x".repeat(ProductName::MAX_LENGTH + 1)),
            Err(ProductValidationError::NameTooLong { .. })
        ));
    }

    #[test]
    fn test_price() {
        assert_eq!(Price::new(39.99).unwrap().value(), 39.99);
        assert_eq!(Price::new(0.0).unwrap(), Price::ZERO);
        assert_eq!(
            Price::new(-0.01),
            Err(ProductValidationError::NegativePrice(-0.01))
        );
        assert_eq!(
            Price::new(f64::NAN),
            Err(ProductValidationError::NonFinitePrice)
        );
        assert_eq!(
            Price::new(f64::INFINITY),
            Err(ProductValidationError::NonFinitePrice)
        );
    }

    #[test]
    fn test_negative_zero_price_is_zero() {
        let price = Price::new(-0.0).unwrap();
        assert!(price.value().is_sign_positive());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(None), None);
        assert_eq!(optional_text(Some(String::new())), None);
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some("x".into())), Some("x".into()));
    }
}
