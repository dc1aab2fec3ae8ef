//! Resolver setup over an in-memory filesystem.

use autoload::{MemoryFileSystem, Resolver, ResolverBuilder};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Builds a resolver whose filesystem contains exactly `files`.
///
/// `register` fills the tables; registration errors fail the test.
pub fn memory_resolver<F>(files: &[&str], register: F) -> (Resolver, Arc<MemoryFileSystem>)
where
    F: FnOnce(&mut ResolverBuilder) -> Result<(), autoload::RegistrationError>,
{
    let fs = Arc::new(MemoryFileSystem::with_files(files.iter().copied()));
    let mut builder = Resolver::builder();
    builder.file_system(fs.clone());
    register(&mut builder).expect("Registration should succeed");
    (builder.build(), fs)
}

/// Shorthand for an expected path.
pub fn path(s: &str) -> PathBuf {
    PathBuf::from(s)
}

/// True when `p` contains a `..` component.
pub fn has_parent_dir(p: &Path) -> bool {
    p.components().any(|c| c == Component::ParentDir)
}

/// Asserts that `symbol` resolves to `expected`.
pub fn assert_resolves(resolver: &Resolver, symbol: &str, expected: &str) {
    assert_eq!(
        resolver.resolve(symbol),
        Some(PathBuf::from(expected)),
        "'{}' should resolve to {}",
        symbol,
        expected
    );
}

/// Asserts that `symbol` does not resolve.
pub fn assert_unresolved(resolver: &Resolver, symbol: &str) {
    let result = resolver.resolve(symbol);
    assert!(
        result.is_none(),
        "'{}' should not resolve, got {:?}",
        symbol,
        result
    );
}
