//! Parsed view of a requested symbol name.

use std::fmt;

use super::constants::NAMESPACE_SEPARATOR;

/// A symbol split according to the naming convention it uses.
///
/// Parsing never fails. Anything without a hierarchical separator left
/// after stripping is treated as a flat name, including the empty string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol<'a> {
    /// `Foo\Bar\Baz` → namespace `Foo\Bar`, short name `Baz`.
    Namespaced {
        qualified: &'a str,
        namespace: &'a str,
        short_name: &'a str,
    },
    /// `Cache_Lite_Output`
    Flat { name: &'a str },
}

impl<'a> Symbol<'a> {
    /// Parse a raw symbol.
    ///
    /// Strips exactly one leading separator, then splits at the *last*
    /// separator.
    pub fn parse(raw: &'a str) -> Self {
        let qualified = raw.strip_prefix(NAMESPACE_SEPARATOR).unwrap_or(raw);

        match qualified.rfind(NAMESPACE_SEPARATOR) {
            Some(pos) => Symbol::Namespaced {
                qualified,
                namespace: &qualified[..pos],
                short_name: &qualified[pos + NAMESPACE_SEPARATOR.len_utf8()..],
            },
            None => Symbol::Flat { name: qualified },
        }
    }

    /// The full name with any leading separator removed.
    pub fn qualified(&self) -> &'a str {
        match *self {
            Symbol::Namespaced { qualified, .. } => qualified,
            Symbol::Flat { name } => name,
        }
    }

    /// Returns true for hierarchical names.
    pub fn is_namespaced(&self) -> bool {
        matches!(self, Symbol::Namespaced { .. })
    }
}

impl fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified())
    }
}
