//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use nested_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`ErrorMap`], [`FieldError`], [`NestedOptions`], [`Candidates`], [`RuleSet`], [`Validation`]
//! - **Traits**: [`Validatable`], [`AsCandidates`], [`Rule`]
//!
//! # Examples
//!
//! ```
//! use nested_rail::prelude::*;
//!
//! struct Child(Option<u32>);
//!
//! impl Validatable for Child {
//!     fn validate(&self) -> ErrorMap {
//!         let mut errors = ErrorMap::new();
//!         if self.0.is_none() {
//!             errors.add("age", "can't be blank");
//!         }
//!         errors
//!     }
//! }
//!
//! struct Parent {
//!     children: Vec<Child>,
//! }
//!
//! let rules = RuleSet::new().nested("children", NestedOptions::new(), |p: &Parent| {
//!     p.children.as_candidates()
//! });
//!
//! let errors = rules.validate(&Parent { children: vec![Child(None)] });
//! assert_eq!(errors.get("children[0] age"), ["can't be blank"]);
//! ```

pub use crate::nested::{Candidates, IndexPolicy, NestedOptions, NestedRule};
pub use crate::traits::{AsCandidates, Validatable};
pub use crate::types::{ErrorMap, FieldError};
pub use crate::validation::{Rule, RuleSet, Validation};
