//! Nested validation: a parent is valid only if its nested children are.
//!
//! A [`NestedRule`] is bound to one attribute of a parent. Every time the parent is
//! validated the rule
//!
//! 1. reads the attribute and classifies it into [`Candidates`],
//! 2. decides from the value's shape whether keys carry an `[index]` token,
//! 3. validates each child, and
//! 4. copies each child error whose key passes the [`Filter`] into the parent's
//!    [`ErrorMap`](crate::ErrorMap) under `"{prefix}[{index}] {child key}"`.
//!
//! Because the copied keys become ordinary parent errors, a grandparent declaring
//! a nested rule on the parent picks them up in turn. Filters at each level look
//! only at that level's keys: a grandparent's `only("child")` matches
//! `child attribute1` and `child[0] attribute1` through their leading token.
//!
//! # Examples
//!
//! ```
//! use nested_rail::{Candidates, ErrorMap, NestedOptions, RuleSet, Validatable};
//! use std::collections::BTreeMap;
//! use std::sync::LazyLock;
//!
//! struct Child {
//!     attribute1: String,
//! }
//!
//! impl Validatable for Child {
//!     fn validate(&self) -> ErrorMap {
//!         let mut errors = ErrorMap::new();
//!         if self.attribute1.is_empty() {
//!             errors.add("attribute1", "can't be blank");
//!         }
//!         errors
//!     }
//! }
//!
//! struct Parent {
//!     child: BTreeMap<&'static str, Child>,
//! }
//!
//! static RULES: LazyLock<RuleSet<Parent>> = LazyLock::new(|| {
//!     RuleSet::new().nested("child", NestedOptions::new().with_prefix("OMG"), |p: &Parent| {
//!         Candidates::keyed(p.child.iter().map(|(key, child)| (*key, child)))
//!     })
//! });
//!
//! impl Validatable for Parent {
//!     fn validate(&self) -> ErrorMap {
//!         RULES.validate(self)
//!     }
//! }
//!
//! let parent = Parent { child: BTreeMap::from([("first", Child { attribute1: String::new() })]) };
//! assert!(!parent.is_valid());
//! assert!(parent.validate().contains_key("OMG[first] attribute1"));
//! ```
pub mod candidates;
pub mod filter;
pub mod options;
pub mod rule;

pub use self::candidates::*;
pub use self::filter::*;
pub use self::options::*;
pub use self::rule::*;
