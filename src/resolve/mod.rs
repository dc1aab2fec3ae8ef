//! Resolution phase: mapping symbols to files.
//!
//! # Algorithm
//!
//! 1. Strip one leading `\` from the symbol.
//! 2. Split at the last `\`:
//!    - **Namespaced** – try every namespace entry whose key is a string
//!      prefix of the namespace part, in registration order, then the
//!      namespace fallbacks.
//!    - **Flat** – same with the prefix map and the prefix fallbacks. A
//!      mapped directory is tried with the whole name, then with the part
//!      after the matched prefix.
//! 3. The first candidate that exists wins; otherwise `None`.
//!
//! Existence checks go through [`FileSystem`], so tests can swap in a
//! [`MemoryFileSystem`].
//!
//! ## Known caveat
//!
//! Matching is a raw string-prefix test, not segment-aware: a key `Foo`
//! also matches namespace `FooBar`.

mod chain;
mod error;
mod fs;
mod resolver;

pub use chain::ResolutionChain;
pub use error::LoadError;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use resolver::{Resolver, ResolverBuilder, SourceLoader, SymbolResolver};
