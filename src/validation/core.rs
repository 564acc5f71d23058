use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Outcome of validating an object: the object itself, or every error found.
///
/// Failures accumulate instead of short-circuiting, so one outcome can carry the
/// errors of every invalid child. Most values come from
/// [`ErrorMap::into_validation`](crate::ErrorMap::into_validation),
/// [`Validatable::check`](crate::Validatable::check) or
/// [`RuleSet::check`](crate::RuleSet::check), with `E = FieldError`.
///
/// # Examples
///
/// ```
/// use nested_rail::{FieldError, Validation};
///
/// let accepted = Validation::<FieldError, &str>::valid("parent");
/// assert_eq!(accepted.into_value(), Some("parent"));
///
/// let rejected = Validation::<FieldError, &str>::invalid(FieldError::new("child attribute1", "can't be blank"));
/// assert_eq!(rejected.iter_errors().next().map(FieldError::key), Some("child attribute1"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Invalid with every error of `errors`, even when there are none.
    ///
    /// ```
    /// use nested_rail::Validation;
    ///
    /// let outcome = Validation::<&str, ()>::invalid_many(["is blank", "is too short"]);
    /// assert_eq!(outcome.into_errors().map(|errors| errors.len()), Some(2));
    /// ```
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Runs `next` on the value; errors so far are passed through untouched.
    ///
    /// ```
    /// use nested_rail::Validation;
    ///
    /// fn present(input: &str) -> Validation<&'static str, &str> {
    ///     if input.is_empty() {
    ///         Validation::invalid("can't be blank")
    ///     } else {
    ///         Validation::valid(input)
    ///     }
    /// }
    ///
    /// assert!(Validation::valid("x").and_then(present).is_valid());
    /// assert!(Validation::valid("").and_then(present).is_invalid());
    /// ```
    pub fn and_then<B, F>(self, next: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Valid(value) => next(value),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Validation<G, A>
    where
        F: FnMut(E) -> G,
    {
        match self {
            Self::Valid(value) => Validation::Valid(value),
            Self::Invalid(errors) => Validation::Invalid(errors.into_iter().map(f).collect()),
        }
    }

    /// `Ok` with the value, or `Err` with all accumulated errors.
    ///
    /// ```
    /// use nested_rail::Validation;
    ///
    /// assert_eq!(Validation::<&str, u8>::valid(1).to_result(), Ok(1));
    /// assert_eq!(Validation::<&str, u8>::invalid("bad").to_result().unwrap_err().len(), 1);
    /// ```
    pub fn to_result(self) -> Result<A, ErrorVec<E>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => [].iter(),
            Self::Invalid(errors) => errors.iter(),
        }
    }
}

/// Gathers outcomes into one: all values when every item is valid, else all errors.
///
/// ```
/// use nested_rail::Validation;
///
/// let outcomes = [Validation::valid(1), Validation::invalid("bad"), Validation::invalid("worse")];
/// let gathered: Validation<&str, Vec<i32>> = outcomes.into_iter().collect();
/// assert_eq!(gathered.into_errors().map(|errors| errors.len()), Some(2));
/// ```
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(outcomes: I) -> Self {
        let mut errors = ErrorVec::new();
        let values: C = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                Validation::Valid(value) => Some(value),
                Validation::Invalid(found) => {
                    errors.extend(found);
                    None
                }
            })
            .collect();

        if errors.is_empty() {
            Validation::Valid(values)
        } else {
            Validation::Invalid(errors)
        }
    }
}
