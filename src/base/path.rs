//! Candidate path construction.
//!
//! Pure string → path translation, no filesystem access. Each convention
//! delimiter becomes a path component boundary and the final component
//! receives the source extension:
//!
//! ```text
//! dir + Foo\Bar + Baz_Qux  →  dir/Foo/Bar/Baz/Qux.php
//! ```
//!
//! Components are appended with [`PathBuf::push`]. Only normal path
//! components are kept: empty components (from doubled or leading
//! delimiters), roots, `.` and `..` are skipped, so a candidate never leaves
//! the base directory.

use std::path::{Component, Path, PathBuf};

use super::constants::{NAMESPACE_SEPARATOR, PREFIX_SEPARATOR};

/// Candidate for a namespaced symbol matched through the namespace map.
///
/// The namespace keeps its underscores; only the short name is split on them.
pub fn namespaced_candidate(dir: &Path, namespace: &str, short_name: &str, ext: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for segment in namespace.split(NAMESPACE_SEPARATOR) {
        push_segment(&mut path, segment);
    }
    push_split_with_extension(&mut path, short_name, PREFIX_SEPARATOR, ext);
    path
}

/// Candidate for a namespaced symbol probed in a namespace fallback directory.
///
/// Only hierarchical separators are translated; underscores survive as-is.
pub fn namespace_fallback_candidate(dir: &Path, qualified: &str, ext: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    push_split_with_extension(&mut path, qualified, NAMESPACE_SEPARATOR, ext);
    path
}

/// Candidate for a flat PEAR-style symbol. Every underscore is a boundary.
pub fn prefixed_candidate(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    push_split_with_extension(&mut path, name, PREFIX_SEPARATOR, ext);
    path
}

fn push_split_with_extension(path: &mut PathBuf, name: &str, delimiter: char, ext: &str) {
    let (dirs, file_stem) = match name.rfind(delimiter) {
        Some(pos) => (&name[..pos], &name[pos + delimiter.len_utf8()..]),
        None => ("", name),
    };

    for segment in dirs.split(delimiter) {
        push_segment(path, segment);
    }

    push_segment(path, &format!("{}.{}", file_stem, ext));
}

fn push_segment(path: &mut PathBuf, segment: &str) {
    for component in Path::new(segment).components() {
        if let Component::Normal(part) = component {
            path.push(part);
        }
    }
}
