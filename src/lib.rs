//! # autoload-base
//!
//! Resolves fully qualified class names to the source files that define
//! them, for codebases mixing namespaced names (`Foo\Bar\Baz`) with
//! PEAR-style flat names (`Cache_Lite_Output`).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → Resolver, ResolutionChain, FileSystem probing
//!   ↓
//! registry  → Ordered namespace/prefix tables and fallbacks
//!   ↓
//! base      → Symbol parsing, candidate path construction
//! ```
//!
//! `config` (feature `config`) reads the tables from JSON or YAML.
//!
//! ## Example
//!
//! ```no_run
//! use autoload::Resolver;
//!
//! let mut builder = Resolver::builder();
//! builder.register_namespace("Boilerplate", "vendors/boilerplate/src")?;
//! builder.register_namespace_fallbacks(vec!["app/src"]);
//! let resolver = builder.build();
//!
//! if let Some(path) = resolver.resolve("\\Boilerplate\\Autoloader") {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), autoload::RegistrationError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → registry → resolve)
// ============================================================================

/// Foundation: Symbol parsing, path construction, constants
pub mod base;

/// Registration tables and their errors
pub mod registry;

/// Resolution: Resolver, chain, filesystem capability
pub mod resolve;

/// Declarative configuration: JSON/YAML → registration tables
#[cfg(feature = "config")]
pub mod config;

// Re-export commonly needed items
pub use base::Symbol;
pub use registry::{Directories, RegistrationError};
pub use resolve::{
    FileSystem, LoadError, MemoryFileSystem, OsFileSystem, ResolutionChain, Resolver,
    ResolverBuilder, SourceLoader, SymbolResolver,
};
