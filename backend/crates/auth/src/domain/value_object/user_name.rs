//! User Name Value Object
//!
//! ユーザー名はログインに使う一意な識別子。
//!
//! ## 設計方針
//! - ASCII文字のみ許可（a-z, 0-9, _ . - +）
//! - 大文字入力は受け付けるが、保存・比較は小文字（canonical）で行う
//! - NFKC正規化 → trim → 小文字化 → 検証 の順で処理
//!
//! ## 不変条件
//! - 長さ: 3〜30文字（正規化後）
//! - 先頭・末尾: 英数字または `_`
//! - 途中の空白禁止

use std::fmt;

use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("User name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("User name cannot contain whitespace")]
    ContainsWhitespace,

    #[error(
        "Invalid character '{char}' at position {position}. Only a-z, 0-9, _, ., -, + are allowed"
    )]
    InvalidCharacter { char: char, position: usize },

    #[error("User name must start and end with a-z, 0-9, or _")]
    InvalidBoundary,
}

/// Validated, canonical (lowercase) user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let canonical = input
            .as_ref()
            .nfkc()
            .collect::<String>()
            .trim()
            .to_lowercase();

        Self::validate(&canonical)?;
        Ok(Self(canonical))
    }

    /// Create from a database value (already validated on insert)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(canonical: &str) -> Result<(), UserNameError> {
        if canonical.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = canonical.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if canonical.chars().any(char::is_whitespace) {
            return Err(UserNameError::ContainsWhitespace);
        }

        if let Some((position, char)) = canonical
            .chars()
            .enumerate()
            .find(|(_, c)| !Self::is_valid_char(*c))
        {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        let boundaries = [canonical.chars().next(), canonical.chars().next_back()];
        if boundaries
            .into_iter()
            .flatten()
            .any(|c| !Self::is_valid_boundary_char(c))
        {
            return Err(UserNameError::InvalidBoundary);
        }

        Ok(())
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }

    #[inline]
    fn is_valid_boundary_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
