//! Naming-convention constants.

/// Delimiter between namespace segments in a hierarchical symbol (`Foo\Bar\Baz`).
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Delimiter encoding hierarchy in a flat PEAR-style symbol (`Cache_Lite_Output`).
pub const PREFIX_SEPARATOR: char = '_';

/// Source file extension appended to every candidate path.
pub const DEFAULT_EXTENSION: &str = "php";
