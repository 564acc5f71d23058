//! Declaration-time configuration of a nested rule.

use crate::nested::candidates::IndexPolicy;
use crate::nested::filter::{AttributeNames, Filter};
use crate::types::alloc_type::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What composed error keys start with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// The declared attribute name.
    #[default]
    Attribute,
    /// An explicit prefix; the empty string means no prefix at all.
    Custom(String),
}

impl Prefix {
    /// The prefix text for a rule bound to `attribute`.
    pub fn resolve<'a>(&'a self, attribute: &'a str) -> &'a str {
        match self {
            Self::Attribute => attribute,
            Self::Custom(prefix) => prefix,
        }
    }

    #[inline]
    pub fn is_attribute(&self) -> bool {
        matches!(self, Self::Attribute)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Attribute => serializer.serialize_none(),
            Self::Custom(prefix) => serializer.serialize_str(prefix),
        }
    }
}

/// A present `null` is an explicit empty prefix; an absent field keeps the default.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::Custom(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
    }
}

/// Options of one nested attribute declaration.
///
/// Options are normalized when built and never change afterwards, so one value
/// can be shared by every rule declared with it.
///
/// # Examples
///
/// ```
/// use nested_rail::{IndexPolicy, NestedOptions, Prefix};
///
/// let options = NestedOptions::new()
///     .with_prefix("OMG")
///     .only("attribute1, attribute2")
///     .index_policy(IndexPolicy::Count);
///
/// assert_eq!(options.prefix(), &Prefix::Custom("OMG".into()));
/// assert_eq!(options.filter().only_names().len(), 2);
/// assert_eq!(options.policy(), IndexPolicy::Count);
///
/// assert_eq!(NestedOptions::new().without_prefix().prefix().resolve("child"), "");
/// assert_eq!(NestedOptions::new().prefix().resolve("child"), "child");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct NestedOptions {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Prefix::is_attribute"))]
    prefix: Prefix,
    #[cfg_attr(feature = "serde", serde(flatten))]
    filter: Filter,
    #[cfg_attr(feature = "serde", serde(rename = "index"))]
    policy: IndexPolicy,
}

impl NestedOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `prefix` instead of the attribute name. An empty prefix drops it.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Prefix::Custom(prefix.into());
        self
    }

    /// Composed keys start with the index token or the bare child key.
    #[must_use]
    pub fn without_prefix(mut self) -> Self {
        self.prefix = Prefix::Custom(String::new());
        self
    }

    #[must_use]
    pub fn only(mut self, names: impl Into<AttributeNames>) -> Self {
        self.filter = self.filter.only(names);
        self
    }

    #[must_use]
    pub fn except(mut self, names: impl Into<AttributeNames>) -> Self {
        self.filter = self.filter.except(names);
        self
    }

    #[must_use]
    pub fn any(mut self, names: impl Into<AttributeNames>) -> Self {
        self.filter = self.filter.any(names);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn index_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[inline]
    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }
}
