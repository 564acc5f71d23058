//! Classification of an attribute value into the children it contributes.

use crate::types::alloc_type::{String, ToString, Vec};
use core::fmt::{self, Display};
use core::iter::Enumerate;
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The children found in one attribute value, tagged with the value's shape.
///
/// The shape decides which index token, if any, ends up in the composed error key:
///
/// | shape     | candidates          | index token        |
/// |-----------|---------------------|--------------------|
/// | `None`    | none                | -                  |
/// | `Single`  | one                 | none               |
/// | `Indexed` | one per element     | position `0..N`    |
/// | `Keyed`   | one per entry       | the entry key      |
///
/// # Examples
///
/// ```
/// use nested_rail::{Candidates, ErrorMap, IndexPolicy, Validatable};
///
/// struct Child;
/// impl Validatable for Child {
///     fn validate(&self) -> ErrorMap {
///         ErrorMap::new()
///     }
/// }
///
/// let children = vec![Child];
/// let candidates = Candidates::indexed(&children);
/// assert_eq!(candidates.len(), 1);
/// assert!(candidates.includes_index(IndexPolicy::Shape));
/// assert!(!candidates.includes_index(IndexPolicy::Count));
/// ```
#[derive(Debug)]
pub enum Candidates<'a, T: ?Sized> {
    None,
    Single(&'a T),
    Indexed(Vec<&'a T>),
    Keyed(Vec<(String, &'a T)>),
}

impl<'a, T: ?Sized> Candidates<'a, T> {
    #[inline]
    pub fn single(value: &'a T) -> Self {
        Self::Single(value)
    }

    /// `None` for an absent value, `Single` otherwise.
    #[inline]
    pub fn from_option(value: Option<&'a T>) -> Self {
        value.map_or(Self::None, Self::Single)
    }

    pub fn indexed<I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        Self::Indexed(values.into_iter().collect())
    }

    /// Builds keyed candidates; each key is stringified once, here.
    pub fn keyed<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, &'a T)>,
        K: Display,
    {
        Self::Keyed(entries.into_iter().map(|(key, value)| (key.to_string(), value)).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Single(_) => 1,
            Self::Indexed(values) => values.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether composed keys carry an `[index]` token under `policy`.
    pub fn includes_index(&self, policy: IndexPolicy) -> bool {
        match (self, policy) {
            (Self::None | Self::Single(_), _) => false,
            (Self::Indexed(_), IndexPolicy::Shape) => true,
            (Self::Indexed(values), IndexPolicy::Count) => values.len() > 1,
            (Self::Keyed(_), _) => true,
        }
    }

    /// Iterates candidates with their index token; `Single` yields no token.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        let inner = match self {
            Self::None => IterInner::Single(None),
            Self::Single(value) => IterInner::Single(Some(*value)),
            Self::Indexed(values) => IterInner::Indexed(values.iter().enumerate()),
            Self::Keyed(entries) => IterInner::Keyed(entries.iter()),
        };
        Iter { inner }
    }
}

impl<T: ?Sized> Default for Candidates<'_, T> {
    fn default() -> Self {
        Self::None
    }
}

/// Iterator returned by [`Candidates::iter`].
pub struct Iter<'c, 'a, T: ?Sized> {
    inner: IterInner<'c, 'a, T>,
}

enum IterInner<'c, 'a, T: ?Sized> {
    Single(Option<&'a T>),
    Indexed(Enumerate<slice::Iter<'c, &'a T>>),
    Keyed(slice::Iter<'c, (String, &'a T)>),
}

impl<'c, 'a, T: ?Sized> Iterator for Iter<'c, 'a, T> {
    type Item = (Option<IndexToken<'c>>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Single(value) => value.take().map(|value| (None, value)),
            IterInner::Indexed(values) => values
                .next()
                .map(|(position, value)| (Some(IndexToken::Position(position)), *value)),
            IterInner::Keyed(entries) => entries
                .next()
                .map(|(key, value)| (Some(IndexToken::Key(key.as_str())), *value)),
        }
    }
}

/// The text placed between brackets in a composed error key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexToken<'k> {
    Position(usize),
    Key(&'k str),
}

impl Display for IndexToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "{position}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// When an ordered sequence gets positional index tokens.
///
/// Keyed collections always carry their key and single values never carry an
/// index; the policy only matters for sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexPolicy {
    /// Every sequence is indexed, a one-element `Vec` included.
    #[default]
    Shape,
    /// Only sequences with more than one element are indexed.
    Count,
}
