//! Validation outcomes and rule orchestration.
//!
//! - [`Validation`] - an outcome that either holds a value or accumulates every error
//! - [`Rule`] - one check a parent type runs against itself
//! - [`RuleSet`] - the explicit, ordered rules a parent type is validated with
//!
//! # Examples
//!
//! ```
//! use nested_rail::{ErrorMap, RuleSet};
//!
//! struct Named(&'static str);
//!
//! let rules = RuleSet::new().rule(|named: &Named, errors: &mut ErrorMap| {
//!     if named.0.is_empty() {
//!         errors.add("name", "can't be blank");
//!     }
//! });
//!
//! assert!(rules.check(&Named("ok")).is_valid());
//! assert!(rules.check(&Named("")).is_invalid());
//! ```
pub mod core;
pub mod rule_set;

pub use self::core::*;
pub use self::rule_set::*;
