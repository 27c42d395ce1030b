//! Common ID Types
//!
//! Type-safe wrappers around the database-assigned `BIGSERIAL` keys.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

/// ID parse error (path segments, token subjects)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("ID is not a number: {0}")]
    NotANumber(String),

    #[error("ID must be positive (got {0})")]
    NotPositive(i64),
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProductId = Id<markers::Product>;
///
/// let id: ProductId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw key from the database
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying key
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// derive だと T にも境界が付くので手書き
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| IdParseError::NotANumber(s.to_string()))?;

        if value <= 0 {
            return Err(IdParseError::NotPositive(value));
        }

        Ok(Self::from_i64(value))
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> serde::Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for user IDs
    pub struct User;

    /// Marker for product IDs
    pub struct Product;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ProductId = Id<markers::Product>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id: ProductId = "17".parse().unwrap();
        assert_eq!(id.value(), 17);
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert_eq!(
            "abc".parse::<ProductId>(),
            Err(IdParseError::NotANumber("abc".to_string()))
        );
        assert_eq!("0".parse::<UserId>(), Err(IdParseError::NotPositive(0)));
        assert_eq!("-3".parse::<UserId>(), Err(IdParseError::NotPositive(-3)));
    }

    #[test]
    fn test_serializes_as_number() {
        let id = ProductId::from_i64(5);
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
