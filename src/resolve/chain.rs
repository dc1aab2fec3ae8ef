//! Ordered chain of symbol resolvers.

use std::path::PathBuf;
use std::sync::Arc;

use super::error::LoadError;
use super::resolver::{SourceLoader, SymbolResolver};

/// Resolvers tried in order until one supplies a file.
///
/// This is the explicit form of a host's global autoload stack. The chain
/// is built once and then only read.
#[derive(Clone, Debug, Default)]
pub struct ResolutionChain {
    handlers: Vec<Arc<dyn SymbolResolver>>,
}

impl ResolutionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolver to the end of the chain, or to the front if `prepend`.
    pub fn register(&mut self, handler: Arc<dyn SymbolResolver>, prepend: bool) -> &mut Self {
        if prepend {
            self.handlers.insert(0, handler);
        } else {
            self.handlers.push(handler);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handlers(&self) -> &[Arc<dyn SymbolResolver>] {
        &self.handlers
    }

    /// The first file any resolver finds for `symbol`.
    pub fn resolve(&self, symbol: &str) -> Option<PathBuf> {
        self.handlers.iter().find_map(|handler| handler.resolve(symbol))
    }

    /// Load `symbol` through the chain.
    ///
    /// Each resolver that finds a file hands it to `loader`; the chain stops
    /// as soon as the loader reports the symbol defined. Loader errors stop
    /// the chain immediately.
    pub fn load(&self, symbol: &str, loader: &mut dyn SourceLoader) -> Result<bool, LoadError> {
        for (index, handler) in self.handlers.iter().enumerate() {
            let Some(path) = handler.resolve(symbol) else {
                continue;
            };

            if loader.load(symbol, &path)? {
                tracing::debug!(
                    "Loaded {} from {} (handler #{})",
                    symbol,
                    path.display(),
                    index
                );
                return Ok(true);
            }

            tracing::trace!(
                "Handler #{} found {} but {} is still undefined",
                index,
                path.display(),
                symbol
            );
        }

        Ok(false)
    }
}
