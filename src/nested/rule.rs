use crate::nested::candidates::Candidates;
use crate::nested::options::NestedOptions;
use crate::traits::Validatable;
use crate::types::alloc_type::{format, Box, String, ToString};
use crate::types::ErrorMap;
use crate::validation::Rule;
use core::fmt;

/// Copies the errors of every invalid candidate into `errors`.
///
/// Each child error key `k` is stored as `"{prefix}[{index}] {k}"`, trimmed, where
/// the prefix comes from `options` (defaulting to `attribute`) and the bracketed
/// index is present only when the candidates carry one under the configured
/// [`IndexPolicy`](crate::IndexPolicy). Keys rejected by the options' filter are
/// skipped. Existing entries in `errors` are never touched.
///
/// # Examples
///
/// ```
/// use nested_rail::nested::apply;
/// use nested_rail::{Candidates, ErrorMap, NestedOptions, Validatable};
///
/// struct Child {
///     name: String,
/// }
///
/// impl Validatable for Child {
///     fn validate(&self) -> ErrorMap {
///         let mut errors = ErrorMap::new();
///         if self.name.is_empty() {
///             errors.add("name", "can't be blank");
///         }
///         errors
///     }
/// }
///
/// let children = vec![Child { name: String::new() }, Child { name: "ok".into() }];
/// let mut errors = ErrorMap::new();
/// apply("children", Candidates::indexed(&children), &NestedOptions::new(), &mut errors);
///
/// assert_eq!(errors.keys().collect::<Vec<_>>(), ["children[0] name"]);
/// ```
pub fn apply<C>(
    attribute: &str,
    candidates: Candidates<'_, C>,
    options: &NestedOptions,
    errors: &mut ErrorMap,
) where
    C: Validatable + ?Sized,
{
    let prefix = options.prefix().resolve(attribute);
    let include_index = candidates.includes_index(options.policy());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        attribute,
        prefix,
        candidates = candidates.len(),
        indexed = include_index,
        "validating nested attribute"
    );

    for (token, child) in candidates.iter() {
        let child_errors = child.validate();
        if child_errors.is_empty() {
            continue;
        }

        let scope = match token {
            Some(token) if include_index => format!("{prefix}[{token}]"),
            _ => prefix.to_string(),
        };

        #[cfg(feature = "tracing")]
        let mut propagated = 0usize;

        for (key, message) in child_errors.iter() {
            if options.filter().permits(key) {
                errors.add(compose_key(&scope, key), message);
                #[cfg(feature = "tracing")]
                {
                    propagated += 1;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(attribute, scope = scope.as_str(), propagated, "nested child is invalid");
    }
}

/// Joins a scope and a child key with one space, trimming the result.
///
/// ```
/// use nested_rail::nested::compose_key;
///
/// assert_eq!(compose_key("child", "attribute1"), "child attribute1");
/// assert_eq!(compose_key("child[0]", "attribute1"), "child[0] attribute1");
/// assert_eq!(compose_key("", "attribute1"), "attribute1");
/// ```
pub fn compose_key(scope: &str, key: &str) -> String {
    format!("{scope} {key}").trim().into()
}

type Runner<P> = dyn Fn(&P, &str, &NestedOptions, &mut ErrorMap) + Send + Sync;

/// A nested validation rule bound to one attribute of parent type `P`.
///
/// The rule reads the attribute through its accessor on every run and keeps no
/// state between runs, so one rule can validate any number of parents, from any
/// number of threads.
///
/// # Examples
///
/// ```
/// use nested_rail::{Candidates, ErrorMap, NestedOptions, NestedRule, Rule, Validatable};
///
/// struct Child {
///     attribute1: Option<String>,
/// }
///
/// impl Validatable for Child {
///     fn validate(&self) -> ErrorMap {
///         let mut errors = ErrorMap::new();
///         if self.attribute1.is_none() {
///             errors.add("attribute1", "can't be blank");
///         }
///         errors
///     }
/// }
///
/// struct Parent {
///     child: Child,
/// }
///
/// let rule = NestedRule::new("child", NestedOptions::new(), |parent: &Parent| {
///     Candidates::single(&parent.child)
/// });
///
/// let mut errors = ErrorMap::new();
/// rule.apply(&Parent { child: Child { attribute1: None } }, &mut errors);
/// assert_eq!(errors.get("child attribute1"), ["can't be blank"]);
/// ```
pub struct NestedRule<P> {
    attribute: String,
    options: NestedOptions,
    runner: Box<Runner<P>>,
}

impl<P: 'static> NestedRule<P> {
    /// Binds a rule to `attribute`.
    ///
    /// `accessor` reads the attribute from the parent and classifies it; it runs
    /// once per validation, so the rule always sees the parent's current value.
    pub fn new<C, F>(attribute: impl Into<String>, options: NestedOptions, accessor: F) -> Self
    where
        C: Validatable + ?Sized + 'static,
        F: for<'p> Fn(&'p P) -> Candidates<'p, C> + Send + Sync + 'static,
    {
        Self::from_runner(
            attribute.into(),
            options,
            Box::new(
                move |parent: &P,
                      attribute: &str,
                      options: &NestedOptions,
                      errors: &mut ErrorMap| {
                    apply(attribute, accessor(parent), options, errors)
                },
            ),
        )
    }

    pub(crate) fn from_runner(
        attribute: String,
        options: NestedOptions,
        runner: Box<Runner<P>>,
    ) -> Self {
        Self { attribute, options, runner }
    }
}

impl<P> NestedRule<P> {
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[inline]
    pub fn options(&self) -> &NestedOptions {
        &self.options
    }
}

impl<P> Rule<P> for NestedRule<P> {
    fn apply(&self, parent: &P, errors: &mut ErrorMap) {
        (self.runner)(parent, &self.attribute, &self.options, errors);
    }
}

impl<P> fmt::Debug for NestedRule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestedRule")
            .field("attribute", &self.attribute)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
