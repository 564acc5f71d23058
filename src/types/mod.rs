//! Error collection types.
//!
//! [`ErrorMap`] is the mutable error collection every validated object produces,
//! [`FieldError`] is one flattened entry of it, and [`ErrorFormatConfig`] controls
//! how a map is rendered for people.
//!
//! # Examples
//!
//! ```
//! use nested_rail::ErrorMap;
//!
//! let mut errors = ErrorMap::new();
//! errors.add("child attribute1", "can't be blank");
//!
//! println!("{}", errors);
//! // Output: child attribute1 can't be blank
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_formatter;
pub mod error_map;
pub mod field_error;

pub use error_formatter::*;
pub use error_map::*;
pub use field_error::*;

/// SmallVec-backed collection used for accumulating messages and errors.
///
/// Uses inline storage for a single element, which covers the common case of
/// one message per key without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
