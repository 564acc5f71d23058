//! The propagation predicate: which child error keys reach the parent.

use crate::types::alloc_type::{BTreeSet, String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A normalized set of attribute names used by `only`, `except` and `any`.
///
/// Every accepted input shape is flattened once, at construction: a single
/// string may hold several names separated by whitespace and/or commas, a list
/// may hold several such strings, and `None` or a blank string yields an empty
/// set.
///
/// # Examples
///
/// ```
/// use nested_rail::AttributeNames;
///
/// let names = AttributeNames::from(" \tattribute,\n\tattribute2\t\n");
/// assert_eq!(names.iter().collect::<Vec<_>>(), ["attribute", "attribute2"]);
///
/// let names = AttributeNames::from(["attribute", "attribute2 attribute3"]);
/// assert_eq!(names.len(), 3);
///
/// assert!(AttributeNames::from(None::<&str>).is_empty());
/// assert!(AttributeNames::from("").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeNames {
    names: BTreeSet<String>,
}

impl AttributeNames {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Whether a child error key belongs to one of these names.
    ///
    /// A name matches when it equals the whole key or the key's leading token,
    /// so `child` matches `child`, `child attribute1` and `child[0] attribute1`.
    pub fn matches(&self, key: &str) -> bool {
        self.contains(key) || self.contains(leading_token(key))
    }

    fn push_raw(&mut self, raw: &str) {
        self.names.extend(
            raw.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|name| !name.is_empty())
                .map(String::from),
        );
    }
}

/// The part of an error key before its first space or `[`.
///
/// ```
/// use nested_rail::nested::leading_token;
///
/// assert_eq!(leading_token("attribute1"), "attribute1");
/// assert_eq!(leading_token("child attribute1"), "child");
/// assert_eq!(leading_token("child[0] attribute1"), "child");
/// assert_eq!(leading_token("[key] attribute1"), "");
/// ```
pub fn leading_token(key: &str) -> &str {
    key.find(|c: char| c == ' ' || c == '[').map_or(key, |end| &key[..end])
}

impl From<&str> for AttributeNames {
    fn from(raw: &str) -> Self {
        let mut names = Self::new();
        names.push_raw(raw);
        names
    }
}

impl From<String> for AttributeNames {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<&String> for AttributeNames {
    fn from(raw: &String) -> Self {
        Self::from(raw.as_str())
    }
}

impl<S: AsRef<str>> From<&[S]> for AttributeNames {
    fn from(raw: &[S]) -> Self {
        let mut names = Self::new();
        for item in raw {
            names.push_raw(item.as_ref());
        }
        names
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for AttributeNames {
    fn from(raw: [S; N]) -> Self {
        Self::from(&raw[..])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for AttributeNames {
    fn from(raw: Vec<S>) -> Self {
        Self::from(raw.as_slice())
    }
}

impl<T: Into<AttributeNames>> From<Option<T>> for AttributeNames {
    fn from(raw: Option<T>) -> Self {
        raw.map(Into::into).unwrap_or_default()
    }
}

/// The `only` / `except` / `any` configuration of one nested rule.
///
/// `only` takes precedence over `any`, and both take precedence over `except`.
/// `any` restricts propagation exactly like `only`; it exists to document groups
/// where at least one of the listed attributes is expected to be valid.
///
/// # Examples
///
/// ```
/// use nested_rail::Filter;
///
/// let filter = Filter::new().only("attribute1").except("attribute1 attribute2");
/// assert!(filter.permits("attribute1"));
/// assert!(!filter.permits("attribute2"));
/// assert!(!filter.permits("attribute3"));
///
/// let filter = Filter::new().except("attribute2");
/// assert!(filter.permits("attribute1"));
/// assert!(!filter.permits("attribute2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Filter {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "AttributeNames::is_empty"))]
    only: AttributeNames,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "AttributeNames::is_empty"))]
    except: AttributeNames,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "AttributeNames::is_empty"))]
    any: AttributeNames,
}

impl Filter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn only(mut self, names: impl Into<AttributeNames>) -> Self {
        self.only = names.into();
        self
    }

    #[must_use]
    pub fn except(mut self, names: impl Into<AttributeNames>) -> Self {
        self.except = names.into();
        self
    }

    #[must_use]
    pub fn any(mut self, names: impl Into<AttributeNames>) -> Self {
        self.any = names.into();
        self
    }

    #[inline]
    pub fn only_names(&self) -> &AttributeNames {
        &self.only
    }

    #[inline]
    pub fn except_names(&self) -> &AttributeNames {
        &self.except
    }

    #[inline]
    pub fn any_names(&self) -> &AttributeNames {
        &self.any
    }

    /// Whether no restriction is configured at all.
    pub fn is_unrestricted(&self) -> bool {
        self.only.is_empty() && self.except.is_empty() && self.any.is_empty()
    }

    /// Whether the child error `key` is copied to the parent.
    pub fn permits(&self, key: &str) -> bool {
        if !self.only.is_empty() {
            self.only.matches(key)
        } else if !self.any.is_empty() {
            self.any.matches(key)
        } else if !self.except.is_empty() {
            !self.except.matches(key)
        } else {
            true
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::AttributeNames;
    use crate::types::alloc_type::{String, Vec};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNames {
        One(String),
        Many(Vec<String>),
    }

    impl Serialize for AttributeNames {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for name in self.iter() {
                seq.serialize_element(name)?;
            }
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for AttributeNames {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(match Option::<RawNames>::deserialize(deserializer)? {
                None => AttributeNames::new(),
                Some(RawNames::One(raw)) => AttributeNames::from(raw),
                Some(RawNames::Many(raw)) => AttributeNames::from(raw),
            })
        }
    }
}
