use crate::types::alloc_type::{String, Vec};
use crate::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};
use crate::types::{ErrorVec, FieldError};
use crate::validation::Validation;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};
use indexmap::IndexMap;

type Entries = IndexMap<String, ErrorVec<String>, hashbrown::DefaultHashBuilder>;

/// Insertion-ordered collection of validation messages grouped by error key.
///
/// Every key maps to one or more messages. [`add`](ErrorMap::add) always appends,
/// so the same key may carry several messages and the same message may appear twice.
/// Keys keep the order in which they were first added, and key lookup is a hash
/// lookup, so propagating many distinct child keys stays linear.
///
/// # Examples
///
/// ```
/// use nested_rail::ErrorMap;
///
/// let mut errors = ErrorMap::new();
/// errors.add("name", "can't be blank");
/// errors.add("name", "is too short");
/// errors.add("email", "is invalid");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.message_count(), 3);
/// assert_eq!(errors.get("name"), ["can't be blank", "is too short"]);
/// assert!(errors.get("age").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorMap {
    entries: Entries,
}

impl ErrorMap {
    #[inline]
    pub fn new() -> Self {
        Self { entries: Entries::default() }
    }

    /// Appends `message` under `key`, creating the key if it is not present yet.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(message.into());
    }

    /// Messages recorded under `key`, or an empty slice.
    pub fn get(&self, key: &str) -> &[String] {
        match self.entries.get(key) {
            Some(messages) => messages.as_slice(),
            None => &[],
        }
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates keys together with all of their messages.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries.iter().map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Iterates every `(key, message)` pair, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().flat_map(|(key, messages)| {
            messages.iter().map(move |message| (key.as_str(), message.as_str()))
        })
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn message_count(&self) -> usize {
        self.entries.values().map(|messages| messages.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends every entry of `other`, keeping existing messages in place.
    pub fn merge(&mut self, other: ErrorMap) {
        for (key, messages) in other.entries {
            self.entries.entry(key).or_default().extend(messages);
        }
    }

    /// Renders each pair as a human readable sentence, `"key message"`.
    ///
    /// ```
    /// use nested_rail::ErrorMap;
    ///
    /// let mut errors = ErrorMap::new();
    /// errors.add("child attribute1", "can't be blank");
    /// errors.add("", "is invalid");
    /// assert_eq!(errors.full_messages(), ["child attribute1 can't be blank", "is invalid"]);
    /// ```
    pub fn full_messages(&self) -> Vec<String> {
        let config = ErrorFormatConfig::default();
        self.iter().map(|(key, message)| config.format_entry(key, message)).collect()
    }

    pub fn into_field_errors(self) -> Vec<FieldError> {
        self.into_iter().collect()
    }

    /// Turns the map into a [`Validation`], valid with `value` when no error was recorded.
    ///
    /// ```
    /// use nested_rail::ErrorMap;
    ///
    /// let errors = ErrorMap::new();
    /// assert_eq!(errors.into_validation(7).into_value(), Some(7));
    ///
    /// let mut errors = ErrorMap::new();
    /// errors.add("name", "can't be blank");
    /// let outcome = errors.into_validation(7);
    /// assert_eq!(outcome.into_errors().unwrap()[0].key(), "name");
    /// ```
    pub fn into_validation<A>(self, value: A) -> Validation<FieldError, A> {
        if self.is_empty() {
            Validation::Valid(value)
        } else {
            Validation::invalid_many(self)
        }
    }
}

/// Two maps are equal when they hold the same keys, in the same order, with the same messages.
impl PartialEq for ErrorMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ErrorMap {}

impl Hash for ErrorMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.entries.len());
        for entry in &self.entries {
            entry.hash(state);
        }
    }
}

impl<K, M> FromIterator<(K, M)> for ErrorMap
where
    K: Into<String>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, M)>>(iter: I) -> Self {
        let mut errors = ErrorMap::new();
        errors.extend(iter);
        errors
    }
}

impl<K, M> Extend<(K, M)> for ErrorMap
where
    K: Into<String>,
    M: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, M)>>(&mut self, iter: I) {
        for (key, message) in iter {
            self.add(key, message);
        }
    }
}

impl IntoIterator for ErrorMap {
    type Item = FieldError;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { entries: self.entries.into_iter(), current: None }
    }
}

/// Owning iterator over the flattened entries of an [`ErrorMap`].
pub struct IntoIter {
    entries: indexmap::map::IntoIter<String, ErrorVec<String>>,
    current: Option<(String, <ErrorVec<String> as IntoIterator>::IntoIter)>,
}

impl Iterator for IntoIter {
    type Item = FieldError;

    fn next(&mut self) -> Option<FieldError> {
        loop {
            if let Some((key, messages)) = &mut self.current {
                if let Some(message) = messages.next() {
                    return Some(FieldError::new(key.clone(), message));
                }
            }
            let (key, messages) = self.entries.next()?;
            self.current = Some((key, messages.into_iter()));
        }
    }
}

impl Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ErrorFormatConfig::default().format_map(self))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ErrorMap;
    use crate::types::alloc_type::{String, Vec};
    use core::fmt;
    use serde::de::{Error, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for ErrorMap {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, messages) in self.entries() {
                map.serialize_entry(key, messages)?;
            }
            map.end()
        }
    }

    /// Rejects a key with an empty message list; every key carries at least one message.
    impl<'de> Deserialize<'de> for ErrorMap {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(ErrorMapVisitor)
        }
    }

    struct ErrorMapVisitor;

    impl<'de> Visitor<'de> for ErrorMapVisitor {
        type Value = ErrorMap;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a map of error keys to non-empty lists of messages")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ErrorMap, A::Error> {
            let mut errors = ErrorMap::new();
            while let Some((key, messages)) = access.next_entry::<String, Vec<String>>()? {
                if messages.is_empty() {
                    return Err(A::Error::invalid_length(0, &"at least one message per key"));
                }
                for message in messages {
                    errors.add(key.as_str(), message);
                }
            }
            Ok(errors)
        }
    }
}
