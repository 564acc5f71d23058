//! Capability traits for nested validation.
//!
//! - [`Validatable`]: objects that validate themselves into an [`ErrorMap`](crate::ErrorMap)
//! - [`AsCandidates`]: containers that classify into nested [`Candidates`](crate::Candidates)
//!
//! # Examples
//!
//! ```
//! use nested_rail::traits::{AsCandidates, Validatable};
//! use nested_rail::ErrorMap;
//!
//! struct Child(&'static str);
//!
//! impl Validatable for Child {
//!     fn validate(&self) -> ErrorMap {
//!         let mut errors = ErrorMap::new();
//!         if self.0.is_empty() {
//!             errors.add("name", "can't be blank");
//!         }
//!         errors
//!     }
//! }
//!
//! let children = [Child("a"), Child("")];
//! assert_eq!(children.as_candidates().len(), 2);
//! assert!(!children[1].is_valid());
//! ```

pub mod as_candidates;
pub mod validatable;

pub use as_candidates::AsCandidates;
pub use validatable::Validatable;
