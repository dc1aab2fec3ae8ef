//! Symbol → file resolution over the registration tables.

use rayon::prelude::*;
use smol_str::SmolStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::LoadError;
use super::fs::{FileSystem, OsFileSystem};
use crate::base::constants::DEFAULT_EXTENSION;
use crate::base::{Symbol, namespace_fallback_candidate, namespaced_candidate, prefixed_candidate};
use crate::registry::{Directories, DirectoryMap, RegistrationError, RegistrationTables};

// ============================================================================
// RESOLUTION CAPABILITY
// ============================================================================

/// Anything that can map a symbol to the file defining it.
///
/// A [`ResolutionChain`](super::ResolutionChain) holds an ordered list of
/// these and asks each in turn.
pub trait SymbolResolver: Send + Sync + fmt::Debug {
    /// Returns the defining file, or `None` if this resolver cannot find one.
    fn resolve(&self, symbol: &str) -> Option<PathBuf>;
}

/// Executes a located source file on behalf of the host.
///
/// Returns `Ok(true)` when the symbol is defined after loading.
pub trait SourceLoader {
    fn load(&mut self, symbol: &str, path: &Path) -> Result<bool, LoadError>;
}

// ============================================================================
// BUILDER
// ============================================================================

/// Registration phase for a [`Resolver`].
///
/// ```
/// use autoload::resolve::Resolver;
///
/// let mut builder = Resolver::builder();
/// builder
///     .register_namespace("Boilerplate", "vendors/boilerplate/src")?
///     .register_prefix("Cache_", vec!["libs/cache", "libs/legacy"])?
///     .register_namespace_fallbacks(vec!["src"]);
/// let resolver = builder.build();
///
/// assert_eq!(resolver.namespaces().len(), 1);
/// # Ok::<(), autoload::registry::RegistrationError>(())
/// ```
#[derive(Debug)]
pub struct ResolverBuilder {
    tables: RegistrationTables,
    extension: SmolStr,
    fs: Arc<dyn FileSystem>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self {
            tables: RegistrationTables::new(),
            extension: SmolStr::new_static(DEFAULT_EXTENSION),
            fs: Arc::new(OsFileSystem),
        }
    }

    /// Register (or overwrite) the directories for a namespace.
    pub fn register_namespace(
        &mut self,
        namespace: &str,
        dirs: impl Into<Directories>,
    ) -> Result<&mut Self, RegistrationError> {
        self.tables.insert_namespace(namespace, dirs.into())?;
        Ok(self)
    }

    /// Register several namespaces in iteration order.
    ///
    /// Stops at the first invalid entry; entries before it stay registered.
    pub fn register_namespaces<I, K, D>(&mut self, entries: I) -> Result<&mut Self, RegistrationError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: Into<Directories>,
    {
        for (namespace, dirs) in entries {
            self.tables.insert_namespace(namespace.as_ref(), dirs.into())?;
        }
        Ok(self)
    }

    /// Register (or overwrite) the directories for a PEAR class prefix.
    pub fn register_prefix(
        &mut self,
        prefix: &str,
        dirs: impl Into<Directories>,
    ) -> Result<&mut Self, RegistrationError> {
        self.tables.insert_prefix(prefix, dirs.into())?;
        Ok(self)
    }

    /// Register several prefixes in iteration order.
    ///
    /// Stops at the first invalid entry; entries before it stay registered.
    pub fn register_prefixes<I, K, D>(&mut self, entries: I) -> Result<&mut Self, RegistrationError>
    where
        I: IntoIterator<Item = (K, D)>,
        K: AsRef<str>,
        D: Into<Directories>,
    {
        for (prefix, dirs) in entries {
            self.tables.insert_prefix(prefix.as_ref(), dirs.into())?;
        }
        Ok(self)
    }

    /// Replace the namespace fallback directories.
    pub fn register_namespace_fallbacks(&mut self, dirs: impl Into<Directories>) -> &mut Self {
        self.tables.set_namespace_fallbacks(dirs.into());
        self
    }

    /// Replace the prefix fallback directories.
    pub fn register_prefix_fallbacks(&mut self, dirs: impl Into<Directories>) -> &mut Self {
        self.tables.set_prefix_fallbacks(dirs.into());
        self
    }

    /// Set the source extension, without the leading dot.
    pub fn extension(&mut self, ext: &str) -> Result<&mut Self, RegistrationError> {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(RegistrationError::InvalidExtension(ext.to_string()));
        }
        self.extension = SmolStr::new(ext);
        Ok(self)
    }

    /// Use `fs` for existence checks instead of the real filesystem.
    pub fn file_system(&mut self, fs: Arc<dyn FileSystem>) -> &mut Self {
        self.fs = fs;
        self
    }

    pub fn tables(&self) -> &RegistrationTables {
        &self.tables
    }

    /// Freeze the tables into a resolver.
    pub fn build(self) -> Resolver {
        tracing::debug!(
            "Built resolver: {} namespace(s), {} prefix(es), {} + {} fallback dir(s)",
            self.tables.namespaces().len(),
            self.tables.prefixes().len(),
            self.tables.namespace_fallbacks().len(),
            self.tables.prefix_fallbacks().len(),
        );

        Resolver {
            tables: Arc::new(self.tables),
            extension: self.extension,
            fs: self.fs,
        }
    }
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Resolves fully qualified symbols to the files that define them.
///
/// Supports two conventions:
/// - namespaced names (`Foo\Bar\Baz` → `Foo/Bar/Baz.php`)
/// - PEAR-style flat names (`Cache_Lite_Output` → `Cache/Lite/Output.php`)
///
/// Tables are immutable once built, so a resolver can be shared across
/// threads freely. Nothing is cached; every call probes the filesystem.
#[derive(Clone, Debug)]
pub struct Resolver {
    tables: Arc<RegistrationTables>,
    extension: SmolStr,
    fs: Arc<dyn FileSystem>,
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Find the file defining `symbol`.
    ///
    /// The first existing candidate wins. Mapped directories are searched
    /// in registration order before any fallback directory.
    pub fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        let found = match Symbol::parse(symbol) {
            Symbol::Namespaced {
                qualified,
                namespace,
                short_name,
            } => self.find_namespaced(qualified, namespace, short_name),
            Symbol::Flat { name } => self.find_prefixed(name),
        };

        match &found {
            Some(path) => tracing::debug!("Resolved {} -> {}", symbol, path.display()),
            None => tracing::trace!("Unresolved {}", symbol),
        }
        found
    }

    /// Alias of [`resolve`](Self::resolve).
    pub fn find_file(&self, symbol: &str) -> Option<PathBuf> {
        self.resolve(symbol)
    }

    /// Resolve a batch of symbols in parallel. Output order matches input.
    pub fn resolve_many<S: AsRef<str> + Sync>(&self, symbols: &[S]) -> Vec<Option<PathBuf>> {
        symbols
            .par_iter()
            .map(|symbol| self.resolve(symbol.as_ref()))
            .collect()
    }

    /// Resolve `symbol` and hand the file to `loader`.
    ///
    /// Returns `Ok(false)` without calling the loader when nothing is found.
    pub fn load_class(&self, symbol: &str, loader: &mut dyn SourceLoader) -> Result<bool, LoadError> {
        match self.resolve(symbol) {
            Some(path) => loader.load(symbol, &path),
            None => Ok(false),
        }
    }

    pub fn tables(&self) -> &RegistrationTables {
        &self.tables
    }

    pub fn namespaces(&self) -> &DirectoryMap {
        self.tables.namespaces()
    }

    pub fn prefixes(&self) -> &DirectoryMap {
        self.tables.prefixes()
    }

    pub fn namespace_fallbacks(&self) -> &Directories {
        self.tables.namespace_fallbacks()
    }

    pub fn prefix_fallbacks(&self) -> &Directories {
        self.tables.prefix_fallbacks()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn find_namespaced(&self, qualified: &str, namespace: &str, short_name: &str) -> Option<PathBuf> {
        let ext = self.extension.as_str();

        let mapped = self
            .tables
            .matching_namespaces(namespace)
            .flat_map(|(_, dirs)| dirs.iter())
            .map(|dir| namespaced_candidate(dir, namespace, short_name, ext));

        let fallback = self
            .tables
            .namespace_fallbacks()
            .iter()
            .map(|dir| namespace_fallback_candidate(dir, qualified, ext));

        self.first_existing(mapped.chain(fallback))
    }

    /// Each mapped directory is tried with the whole name first
    /// (`dir/Cache/Lite/Output.php`), then with the part after the matched
    /// prefix (`dir/Lite/Output.php`). Fallbacks only use the whole name.
    /// Classic PEAR autoloaders only probe the whole-name path; the
    /// prefix-relative candidate is an addition.
    fn find_prefixed(&self, name: &str) -> Option<PathBuf> {
        let ext = self.extension.as_str();

        let mapped = self.tables.matching_prefixes(name).flat_map(move |(prefix, dirs)| {
            let remainder = &name[prefix.len()..];
            dirs.iter().flat_map(move |dir| {
                let stripped = (!prefix.is_empty() && !remainder.is_empty())
                    .then(|| prefixed_candidate(dir, remainder, ext));
                std::iter::once(prefixed_candidate(dir, name, ext)).chain(stripped)
            })
        });

        let fallback = self
            .tables
            .prefix_fallbacks()
            .iter()
            .map(|dir| prefixed_candidate(dir, name, ext));

        self.first_existing(mapped.chain(fallback))
    }

    fn first_existing(&self, mut candidates: impl Iterator<Item = PathBuf>) -> Option<PathBuf> {
        candidates.find(|candidate| self.probe(candidate))
    }

    fn probe(&self, candidate: &Path) -> bool {
        tracing::trace!("Probing {}", candidate.display());
        self.fs.exists(candidate)
    }
}

impl Default for Resolver {
    /// A resolver with no registrations; it never finds anything.
    fn default() -> Self {
        ResolverBuilder::new().build()
    }
}

impl SymbolResolver for Resolver {
    fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        Resolver::resolve(self, symbol)
    }
}
