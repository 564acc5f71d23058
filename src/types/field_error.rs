use crate::types::alloc_type::String;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single flattened `(key, message)` entry of an [`ErrorMap`](crate::ErrorMap).
///
/// The key is the fully composed error key (for example `"child[0] attribute1"`),
/// the message is the text recorded against it.
///
/// # Examples
///
/// ```
/// use nested_rail::FieldError;
///
/// let err = FieldError::new("child attribute1", "can't be blank");
/// assert_eq!(err.to_string(), "child attribute1 can't be blank");
///
/// let base = FieldError::new("", "is invalid");
/// assert_eq!(base.to_string(), "is invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldError {
    key: String,
    message: String,
}

impl FieldError {
    #[inline]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self { key: key.into(), message: message.into() }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Splits the error back into its key and message.
    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.message)
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} {}", self.key, self.message)
        }
    }
}

impl core::error::Error for FieldError {}
