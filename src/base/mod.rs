//! Foundation types for symbol resolution.
//!
//! This module provides the pieces the resolver is assembled from:
//! - [`Symbol`] - A requested name split by naming convention
//! - Candidate path construction for both conventions
//! - Convention constants (separators, default extension)
//!
//! This module has NO dependencies on other autoload modules and performs no I/O.

pub mod constants;
pub mod path;
mod symbol;

pub use path::{namespace_fallback_candidate, namespaced_candidate, prefixed_candidate};
pub use symbol::Symbol;
