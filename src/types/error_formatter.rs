//! Error map formatting utilities.

use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorMap;

/// Trait for customizing how an [`ErrorMap`] is rendered.
pub trait ErrorFormatter {
    fn format_entry(&self, key: &str, message: &str) -> String {
        let mut result = String::with_capacity(key.len() + message.len() + 1);
        if !key.is_empty() {
            result.push_str(key);
            result.push(' ');
        }
        result.push_str(message);
        result
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_map(&self, errors: &ErrorMap) -> String {
        errors
            .iter()
            .map(|(key, message)| self.format_entry(key, message))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based error map formatter.
///
/// # Examples
///
/// ```
/// use nested_rail::{ErrorFormatConfig, ErrorFormatter, ErrorMap};
///
/// let mut errors = ErrorMap::new();
/// errors.add("child attribute1", "can't be blank");
/// errors.add("child attribute1", "is too short");
///
/// assert_eq!(
///     ErrorFormatConfig::default().format_map(&errors),
///     "child attribute1 can't be blank; child attribute1 is too short"
/// );
/// assert_eq!(
///     ErrorFormatConfig::grouped().format_map(&errors),
///     "child attribute1: can't be blank, is too short"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub key_separator: String,
    pub entry_prefix: Option<String>,
    pub group_by_key: bool,
    pub message_separator: String,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            key_separator: " ".into(),
            entry_prefix: None,
            group_by_key: false,
            message_separator: ", ".into(),
        }
    }
}

impl ErrorFormatConfig {
    /// One entry per line, bullet prefixed.
    #[inline]
    pub fn pretty() -> Self {
        Self { separator: "\n".into(), entry_prefix: Some("- ".into()), ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// One entry per key, `key: first, second`.
    #[inline]
    pub fn grouped() -> Self {
        Self { key_separator: ": ".into(), group_by_key: true, ..Default::default() }
    }

    fn push_entry(&self, out: &mut String, key: &str, message: &str) {
        if let Some(prefix) = &self.entry_prefix {
            out.push_str(prefix);
        }
        if !key.is_empty() {
            out.push_str(key);
            out.push_str(&self.key_separator);
        }
        out.push_str(message);
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_entry(&self, key: &str, message: &str) -> String {
        let mut result = String::new();
        self.push_entry(&mut result, key, message);
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_map(&self, errors: &ErrorMap) -> String {
        if !self.group_by_key {
            return errors
                .iter()
                .map(|(key, message)| self.format_entry(key, message))
                .collect::<Vec<_>>()
                .join(&self.separator);
        }

        let mut result = String::with_capacity(errors.len() * 32);
        for (i, (key, messages)) in errors.entries().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }
            self.push_entry(&mut result, key, &messages.join(&self.message_separator));
        }
        result
    }
}
