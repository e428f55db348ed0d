//! Resolution errors.
//!
//! Only two conditions are fatal, and both poison the whole batch: once
//! one module's reference chain is broken, no other module's result can
//! be trusted. Everything else is handled leniently: propagation skips
//! symbols it cannot see yet, and binding falls back to placeholder
//! nodes.

use thiserror::Error;
use weft_ir::{ModulePath, Name, StringInterner};

/// Fatal resolution error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// An import or re-export path names no module in the project set or
    /// the resolved library set.
    #[error("cannot resolve `{relative}` imported from `{importer}`")]
    UnresolvablePath { importer: String, relative: String },

    /// A bare `export { name }` or `export default name` references a
    /// name the module never declared or imported.
    #[error("module `{module}` exports `{symbol}` but never defines it")]
    MissingInternalSymbol { module: String, symbol: String },
}

impl ResolveError {
    #[cold]
    pub(crate) fn unresolvable(importer: &ModulePath, relative: &str) -> Self {
        ResolveError::UnresolvablePath {
            importer: importer.to_string(),
            relative: relative.to_string(),
        }
    }

    #[cold]
    pub(crate) fn missing_internal(
        module: &ModulePath,
        symbol: Name,
        interner: &StringInterner,
    ) -> Self {
        ResolveError::MissingInternalSymbol {
            module: module.to_string(),
            symbol: interner.lookup(symbol).to_string(),
        }
    }
}
