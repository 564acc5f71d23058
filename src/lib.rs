//! Bases an object's validity on the validity of its nested children.
//!
//! A parent declares [`NestedRule`]s on the attributes that hold child objects: a
//! single object, an ordered sequence or a keyed collection. When the parent is
//! validated, every invalid child's errors are copied into the parent's
//! [`ErrorMap`] under a derived key, optionally filtered and re-prefixed.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `nested_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## A Single Child
//!
//! ```
//! use nested_rail::{Candidates, ErrorMap, NestedOptions, RuleSet, Validatable};
//!
//! struct Child {
//!     attribute1: String,
//!     attribute2: String,
//! }
//!
//! impl Validatable for Child {
//!     fn validate(&self) -> ErrorMap {
//!         let mut errors = ErrorMap::new();
//!         if self.attribute1.is_empty() {
//!             errors.add("attribute1", "can't be blank");
//!         }
//!         if self.attribute2.is_empty() {
//!             errors.add("attribute2", "can't be blank");
//!         }
//!         errors
//!     }
//! }
//!
//! struct Parent {
//!     child: Child,
//! }
//!
//! let rules = RuleSet::new()
//!     .nested("child", NestedOptions::new(), |p: &Parent| Candidates::single(&p.child));
//!
//! let parent = Parent { child: Child { attribute1: String::new(), attribute2: "valid".into() } };
//! let errors = rules.validate(&parent);
//!
//! assert_eq!(errors.get("child attribute1"), ["can't be blank"]);
//! assert!(!errors.contains_key("child attribute2"));
//! ```
//!
//! ## Filtering and Prefixing
//!
//! ```
//! use nested_rail::{AsCandidates, ErrorMap, NestedOptions, RuleSet, Validatable};
//!
//! struct Child;
//!
//! impl Validatable for Child {
//!     fn validate(&self) -> ErrorMap {
//!         [("attribute1", "can't be blank"), ("attribute2", "can't be blank")]
//!             .into_iter()
//!             .collect()
//!     }
//! }
//!
//! struct Parent {
//!     children: Vec<Child>,
//! }
//!
//! let rules = RuleSet::new().nested(
//!     "children",
//!     NestedOptions::new().with_prefix("OMG").only("attribute1"),
//!     |p: &Parent| p.children.as_candidates(),
//! );
//!
//! let errors = rules.validate(&Parent { children: vec![Child] });
//! assert_eq!(errors.keys().collect::<Vec<_>>(), ["OMG[0] attribute1"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Nested validation rule, candidate classification and options
pub mod nested;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits implemented by validated objects and child containers
pub mod traits;
/// Error collection, flattened errors and formatting
pub mod types;
/// Validation outcome type and rule orchestration
pub mod validation;

pub use nested::{
    AttributeNames, Candidates, Filter, IndexPolicy, IndexToken, NestedOptions, NestedRule, Prefix,
};
pub use traits::*;
pub use types::{ErrorFormatConfig, ErrorFormatter, ErrorMap, ErrorVec, FieldError};
pub use validation::*;
