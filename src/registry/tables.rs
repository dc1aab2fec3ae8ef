//! The four registration tables.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::Directories;
use super::error::{RegistrationError, TableKind};

/// Ordered map from a namespace or prefix key to its directories.
///
/// Iteration order is registration order and is the priority order used
/// at resolution time.
pub type DirectoryMap = IndexMap<SmolStr, Directories>;

/// Namespace map, prefix map and their fallback lists.
///
/// Re-registering a key replaces its directories but keeps the position of
/// its first registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationTables {
    namespaces: DirectoryMap,
    prefixes: DirectoryMap,
    namespace_fallbacks: Directories,
    prefix_fallbacks: Directories,
}

impl RegistrationTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a namespace entry.
    pub fn insert_namespace(
        &mut self,
        namespace: &str,
        dirs: Directories,
    ) -> Result<(), RegistrationError> {
        insert_keyed(&mut self.namespaces, TableKind::Namespace, namespace, dirs)
    }

    /// Insert or overwrite a PEAR prefix entry.
    pub fn insert_prefix(&mut self, prefix: &str, dirs: Directories) -> Result<(), RegistrationError> {
        insert_keyed(&mut self.prefixes, TableKind::Prefix, prefix, dirs)
    }

    /// Replace the namespace fallback list wholesale.
    pub fn set_namespace_fallbacks(&mut self, dirs: Directories) {
        self.namespace_fallbacks = dirs;
    }

    /// Replace the prefix fallback list wholesale.
    pub fn set_prefix_fallbacks(&mut self, dirs: Directories) {
        self.prefix_fallbacks = dirs;
    }

    pub fn namespaces(&self) -> &DirectoryMap {
        &self.namespaces
    }

    pub fn prefixes(&self) -> &DirectoryMap {
        &self.prefixes
    }

    pub fn namespace_fallbacks(&self) -> &Directories {
        &self.namespace_fallbacks
    }

    pub fn prefix_fallbacks(&self) -> &Directories {
        &self.prefix_fallbacks
    }

    /// Namespace entries whose key is a literal string prefix of `namespace`,
    /// in priority order.
    ///
    /// The test is not segment-aware: key `Foo` matches namespace `FooBar`.
    pub fn matching_namespaces<'a>(
        &'a self,
        namespace: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Directories)> + 'a {
        matching(&self.namespaces, namespace)
    }

    /// Prefix entries whose key is a literal string prefix of `name`,
    /// in priority order.
    pub fn matching_prefixes<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Directories)> + 'a {
        matching(&self.prefixes, name)
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
            && self.prefixes.is_empty()
            && self.namespace_fallbacks.is_empty()
            && self.prefix_fallbacks.is_empty()
    }
}

fn insert_keyed(
    map: &mut DirectoryMap,
    table: TableKind,
    key: &str,
    dirs: Directories,
) -> Result<(), RegistrationError> {
    if dirs.is_empty() {
        return Err(RegistrationError::empty_directories(table, key));
    }

    tracing::debug!("Registered {} '{}' -> {:?}", table, key, dirs.as_slice());
    map.insert(SmolStr::new(key), dirs);
    Ok(())
}

fn matching<'a>(
    map: &'a DirectoryMap,
    name: &'a str,
) -> impl Iterator<Item = (&'a str, &'a Directories)> + 'a {
    map.iter()
        .filter(move |(key, _)| name.starts_with(key.as_str()))
        .map(|(key, dirs)| (key.as_str(), dirs))
}
