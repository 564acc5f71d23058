use crate::types::alloc_type::{Arc, Box, Rc};
use crate::types::{ErrorMap, FieldError};
use crate::validation::Validation;

/// Capability of objects that can validate themselves.
///
/// This is the contract every nested child fulfils: [`validate`](Validatable::validate)
/// runs the object's own rules and returns a fresh [`ErrorMap`]. An object is invalid
/// exactly when that map is non-empty. Because each call starts from an empty map,
/// validating twice with unchanged inputs yields identical errors.
///
/// # Examples
///
/// ```
/// use nested_rail::{ErrorMap, Validatable};
///
/// struct Child {
///     attribute1: String,
///     attribute2: String,
/// }
///
/// impl Validatable for Child {
///     fn validate(&self) -> ErrorMap {
///         let mut errors = ErrorMap::new();
///         if self.attribute1.is_empty() {
///             errors.add("attribute1", "can't be blank");
///         }
///         if self.attribute2.is_empty() {
///             errors.add("attribute2", "can't be blank");
///         }
///         errors
///     }
/// }
///
/// let child = Child { attribute1: String::new(), attribute2: "valid".into() };
/// assert!(!child.is_valid());
/// assert_eq!(child.validate().keys().collect::<Vec<_>>(), ["attribute1"]);
/// ```
pub trait Validatable {
    /// Runs validation and returns every error found.
    fn validate(&self) -> ErrorMap;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates into a [`Validation`] carrying a reference to `self` when valid.
    ///
    /// ```
    /// use nested_rail::{ErrorMap, Validatable};
    ///
    /// struct Always;
    /// impl Validatable for Always {
    ///     fn validate(&self) -> ErrorMap {
    ///         ErrorMap::new()
    ///     }
    /// }
    ///
    /// assert!(Always.check().is_valid());
    /// ```
    fn check(&self) -> Validation<FieldError, &Self>
    where
        Self: Sized,
    {
        self.validate().into_validation(self)
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validate(&self) -> ErrorMap {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for &mut T {
    fn validate(&self) -> ErrorMap {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn validate(&self) -> ErrorMap {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Rc<T> {
    fn validate(&self) -> ErrorMap {
        (**self).validate()
    }
}

impl<T: Validatable + ?Sized> Validatable for Arc<T> {
    fn validate(&self) -> ErrorMap {
        (**self).validate()
    }
}
