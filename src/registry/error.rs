//! Error types for the registration phase.

use smol_str::SmolStr;
use std::fmt;
use thiserror::Error;

/// Which keyed table a registration targeted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Namespace,
    Prefix,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Namespace => f.write_str("namespace"),
            TableKind::Prefix => f.write_str("prefix"),
        }
    }
}

/// Contract violations caught while registering directories.
///
/// These are programming errors in the caller's setup. An unresolved
/// symbol is never reported through this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A namespace or prefix was registered without any directory.
    #[error("{table} '{key}' registered with an empty directory list")]
    EmptyDirectories { table: TableKind, key: SmolStr },

    /// The source extension was empty or started with a dot.
    #[error("Invalid source extension: '{0}'")]
    InvalidExtension(String),
}

impl RegistrationError {
    /// Create an empty-directories error.
    pub fn empty_directories(table: TableKind, key: impl Into<SmolStr>) -> Self {
        Self::EmptyDirectories {
            table,
            key: key.into(),
        }
    }
}
