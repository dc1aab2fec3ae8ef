//! Ordered directory lists.

use std::path::{Path, PathBuf};

/// An ordered list of search directories.
///
/// Order is priority: the first directory holding a candidate wins.
/// A single path converts into a one-element list, so registration calls
/// accept either form:
///
/// ```
/// use autoload::registry::Directories;
///
/// let one: Directories = "/lib".into();
/// let many: Directories = vec!["/lib", "/vendor"].into();
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Directories(Vec<PathBuf>);

impl Directories {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.0
    }

    /// Rewrite every relative entry as `base.join(entry)`.
    pub fn anchored_at(self, base: &Path) -> Self {
        self.0
            .into_iter()
            .map(|dir| if dir.is_relative() { base.join(dir) } else { dir })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Directories {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Directories {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for Directories {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Directories {
    fn from(dir: &str) -> Self {
        Self(vec![PathBuf::from(dir)])
    }
}

impl From<String> for Directories {
    fn from(dir: String) -> Self {
        Self(vec![PathBuf::from(dir)])
    }
}

impl From<&Path> for Directories {
    fn from(dir: &Path) -> Self {
        Self(vec![dir.to_path_buf()])
    }
}

impl From<PathBuf> for Directories {
    fn from(dir: PathBuf) -> Self {
        Self(vec![dir])
    }
}

impl<P: Into<PathBuf>> From<Vec<P>> for Directories {
    fn from(dirs: Vec<P>) -> Self {
        dirs.into_iter().collect()
    }
}

impl<P: Into<PathBuf>, const N: usize> From<[P; N]> for Directories {
    fn from(dirs: [P; N]) -> Self {
        dirs.into_iter().collect()
    }
}

impl<P: Clone + Into<PathBuf>> From<&[P]> for Directories {
    fn from(dirs: &[P]) -> Self {
        dirs.iter().cloned().collect()
    }
}
