//! Registration phase: the tables a [`Resolver`](crate::resolve::Resolver) searches.
//!
//! Tables are filled through [`ResolverBuilder`](crate::resolve::ResolverBuilder)
//! and frozen when the resolver is built. Nothing here touches the
//! filesystem; a registered directory that does not exist simply never
//! produces a hit.

mod directories;
mod error;
mod tables;

pub use directories::Directories;
pub use error::{RegistrationError, TableKind};
pub use tables::{DirectoryMap, RegistrationTables};
