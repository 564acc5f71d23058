use crate::nested::{apply, Candidates, NestedOptions, NestedRule};
use crate::traits::Validatable;
use crate::types::alloc_type::{Arc, Box, String, Vec};
use crate::types::{ErrorMap, FieldError};
use crate::validation::Validation;
use core::fmt;

/// A validation rule attached to parents of type `P`.
///
/// Rules only ever add to `errors`; they never clear or replace entries.
/// Plain closures of shape `Fn(&P, &mut ErrorMap)` are rules too.
pub trait Rule<P: ?Sized> {
    fn apply(&self, parent: &P, errors: &mut ErrorMap);
}

impl<P: ?Sized, F> Rule<P> for F
where
    F: Fn(&P, &mut ErrorMap),
{
    #[inline]
    fn apply(&self, parent: &P, errors: &mut ErrorMap) {
        self(parent, errors)
    }
}

/// The ordered list of rules a parent type validates itself with.
///
/// A rule set is built once, usually into a `static`, and then shared by every
/// parent instance. It holds no per-validation state.
///
/// # Examples
///
/// ```
/// use nested_rail::{AsCandidates, Candidates, ErrorMap, NestedOptions, RuleSet, Validatable};
/// use std::sync::LazyLock;
///
/// struct Child {
///     attribute1: String,
/// }
///
/// impl Validatable for Child {
///     fn validate(&self) -> ErrorMap {
///         let mut errors = ErrorMap::new();
///         if self.attribute1.is_empty() {
///             errors.add("attribute1", "can't be blank");
///         }
///         errors
///     }
/// }
///
/// struct Parent {
///     name: String,
///     child: Child,
///     others: Vec<Child>,
/// }
///
/// static RULES: LazyLock<RuleSet<Parent>> = LazyLock::new(|| {
///     RuleSet::new()
///         .rule(|parent: &Parent, errors: &mut ErrorMap| {
///             if parent.name.is_empty() {
///                 errors.add("name", "can't be blank");
///             }
///         })
///         .nested("child", NestedOptions::new(), |p: &Parent| Candidates::single(&p.child))
///         .nested("others", NestedOptions::new(), |p: &Parent| p.others.as_candidates())
/// });
///
/// impl Validatable for Parent {
///     fn validate(&self) -> ErrorMap {
///         RULES.validate(self)
///     }
/// }
///
/// let parent = Parent {
///     name: "parent".into(),
///     child: Child { attribute1: String::new() },
///     others: vec![Child { attribute1: "ok".into() }, Child { attribute1: String::new() }],
/// };
///
/// let errors = parent.validate();
/// assert_eq!(errors.keys().collect::<Vec<_>>(), ["child attribute1", "others[1] attribute1"]);
/// ```
pub struct RuleSet<P> {
    rules: Vec<Box<dyn Rule<P> + Send + Sync>>,
}

impl<P> RuleSet<P> {
    #[inline]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every rule in declaration order, appending to `errors`.
    pub fn apply(&self, parent: &P, errors: &mut ErrorMap) {
        for rule in &self.rules {
            rule.apply(parent, errors);
        }
    }

    /// Runs every rule against a fresh error map.
    pub fn validate(&self, parent: &P) -> ErrorMap {
        let mut errors = ErrorMap::new();
        self.apply(parent, &mut errors);
        errors
    }

    /// `Valid(parent)` when no rule recorded an error, otherwise every error flattened.
    pub fn check<'p>(&self, parent: &'p P) -> Validation<FieldError, &'p P> {
        self.validate(parent).into_validation(parent)
    }
}

impl<P: 'static> RuleSet<P> {
    /// Appends `rule`, builder style. Closures `Fn(&P, &mut ErrorMap)` are accepted.
    ///
    /// ```
    /// use nested_rail::{ErrorMap, RuleSet};
    ///
    /// let rules = RuleSet::new().rule(|value: &u32, errors: &mut ErrorMap| {
    ///     if *value == 0 {
    ///         errors.add("value", "must be positive");
    ///     }
    /// });
    ///
    /// assert_eq!(rules.validate(&0).get("value"), ["must be positive"]);
    /// ```
    #[must_use]
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<P> + Send + Sync + 'static,
    {
        self.push(rule);
        self
    }

    /// Appends `rule` in place; it runs after every rule added before it.
    pub fn push<R>(&mut self, rule: R)
    where
        R: Rule<P> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
    }

    /// Attaches a [`NestedRule`] for one attribute.
    ///
    /// Shorthand for `rule(NestedRule::new(attribute, options, accessor))`; the
    /// accessor returns the attribute's [`Candidates`], typically through
    /// [`AsCandidates`](crate::AsCandidates) or [`Candidates::single`].
    #[must_use]
    pub fn nested<C, F>(self, attribute: impl Into<String>, options: NestedOptions, accessor: F) -> Self
    where
        C: Validatable + ?Sized + 'static,
        F: for<'p> Fn(&'p P) -> Candidates<'p, C> + Send + Sync + 'static,
    {
        self.rule(NestedRule::new(attribute, options, accessor))
    }

    /// Attaches one nested rule per name, all sharing `options`.
    ///
    /// The accessor receives the attribute name of the rule being run.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_rail::{Candidates, ErrorMap, NestedOptions, RuleSet, Validatable};
    ///
    /// struct Child(bool);
    /// impl Validatable for Child {
    ///     fn validate(&self) -> ErrorMap {
    ///         let mut errors = ErrorMap::new();
    ///         if !self.0 {
    ///             errors.add("attribute", "is invalid");
    ///         }
    ///         errors
    ///     }
    /// }
    ///
    /// struct Parent {
    ///     left: Child,
    ///     right: Child,
    /// }
    ///
    /// let rules = RuleSet::new().validates_nested(
    ///     ["left", "right"],
    ///     NestedOptions::new().only("attribute"),
    ///     |p: &Parent, attribute: &str| match attribute {
    ///         "left" => Candidates::single(&p.left),
    ///         "right" => Candidates::single(&p.right),
    ///         _ => Candidates::None,
    ///     },
    /// );
    ///
    /// let errors = rules.validate(&Parent { left: Child(false), right: Child(false) });
    /// assert_eq!(errors.keys().collect::<Vec<_>>(), ["left attribute", "right attribute"]);
    /// ```
    #[must_use]
    pub fn validates_nested<N, C, F>(mut self, names: N, options: NestedOptions, accessor: F) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        C: Validatable + ?Sized + 'static,
        F: for<'p> Fn(&'p P, &str) -> Candidates<'p, C> + Send + Sync + 'static,
    {
        let accessor = Arc::new(accessor);
        for name in names {
            let accessor = Arc::clone(&accessor);
            self.push(NestedRule::from_runner(
                name.into(),
                options.clone(),
                Box::new(
                    move |parent: &P,
                          attribute: &str,
                          options: &NestedOptions,
                          errors: &mut ErrorMap| {
                        apply(attribute, (*accessor)(parent, attribute), options, errors)
                    },
                ),
            ));
        }
        self
    }
}

impl<P> Default for RuleSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for RuleSet<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").field("rules", &self.rules.len()).finish()
    }
}
