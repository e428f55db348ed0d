//! Cross-module export resolution.
//!
//! Given a set of modules with import/export declarations (possibly
//! mutually referential, possibly cyclic), this crate computes every
//! module's resolved symbol table and the import context downstream
//! graph construction consumes.
//!
//! # Architecture
//!
//! ```text
//! collect_exports (per module, total, no lookups)
//!         ↓  ExportMap: iteration 0
//! propagate step × N (resolve_exports / resolve_exports_parallel)
//!         ↓  converged ExportMap
//! Binder::bind_all (library base + each module's imports)
//!         ↓  Context per module
//! ```
//!
//! Propagation repeats one monotone step: replay every module's imports
//! and export statements against the previous snapshot, merging whatever
//! resolves. Tables only grow, so the sequence climbs to a fixed point;
//! a configurable iteration bound cuts it off rather than a convergence
//! test. Re-export chains deeper than the bound silently under-resolve,
//! which callers control via [`ResolveOptions`].
//!
//! Two conditions abort a batch: a specifier that maps to no module at
//! all ([`ResolveError::UnresolvablePath`]) and a bare export of a name
//! the module never defines ([`ResolveError::MissingInternalSymbol`]).
//! A symbol that merely has not propagated yet is not an error; after
//! convergence, imports of it bind to placeholder nodes so downstream
//! passes can keep going.

mod bind;
mod collect;
mod driver;
mod error;
mod exports;
mod parallel;
mod path;
mod propagate;

pub use bind::{base_exports, Binder, Context, Unknowns};
pub use collect::{collect_all, collect_exports};
pub use driver::{
    resolve_exports, resolve_project, ResolveOptions, ResolvedProject, DEFAULT_MAX_ITERATIONS,
};
pub use error::ResolveError;
pub use exports::{ExportMap, ModuleExports, NameDef};
pub use parallel::{resolve_exports_parallel, resolve_project_parallel};
pub use path::{DirMapping, PathMapping};
