use crate::nested::Candidates;
use crate::traits::Validatable;
use crate::types::alloc_type::{BTreeMap, Vec, VecDeque};
use core::fmt::Display;

/// Classifies a container of children into [`Candidates`].
///
/// Implemented for the standard containers so that accessors can be written as
/// `|parent: &Parent| parent.children.as_candidates()`. A bare child field has no
/// container to classify; use [`Candidates::single`] for it.
///
/// | container                         | shape     |
/// |-----------------------------------|-----------|
/// | `Option<T>`                       | `None` or `Single` |
/// | `Vec<T>`, `[T]`, `[T; N]`, `VecDeque<T>` | `Indexed` |
/// | `BTreeMap<K, T>`, `HashMap<K, T>` | `Keyed`   |
///
/// # Examples
///
/// ```
/// use nested_rail::{AsCandidates, Candidates, ErrorMap, Validatable};
///
/// struct Child;
/// impl Validatable for Child {
///     fn validate(&self) -> ErrorMap {
///         ErrorMap::new()
///     }
/// }
///
/// let absent: Option<Child> = None;
/// assert!(matches!(absent.as_candidates(), Candidates::None));
///
/// let children = vec![Child, Child];
/// assert!(matches!(children.as_candidates(), Candidates::Indexed(ref v) if v.len() == 2));
/// ```
pub trait AsCandidates {
    type Child: Validatable + ?Sized;

    fn as_candidates(&self) -> Candidates<'_, Self::Child>;
}

impl<T: Validatable> AsCandidates for Option<T> {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::from_option(self.as_ref())
    }
}

impl<T: Validatable> AsCandidates for [T] {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::indexed(self)
    }
}

impl<T: Validatable, const N: usize> AsCandidates for [T; N] {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::indexed(self)
    }
}

impl<T: Validatable> AsCandidates for Vec<T> {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::indexed(self)
    }
}

impl<T: Validatable> AsCandidates for VecDeque<T> {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::indexed(self)
    }
}

impl<K: Display, T: Validatable> AsCandidates for BTreeMap<K, T> {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::keyed(self)
    }
}

/// Keys are visited in the map's iteration order, which is unspecified.
#[cfg(feature = "std")]
impl<K: Display, T: Validatable, S> AsCandidates for std::collections::HashMap<K, T, S> {
    type Child = T;

    fn as_candidates(&self) -> Candidates<'_, T> {
        Candidates::keyed(self)
    }
}

impl<C: AsCandidates + ?Sized> AsCandidates for &C {
    type Child = C::Child;

    fn as_candidates(&self) -> Candidates<'_, C::Child> {
        (**self).as_candidates()
    }
}
