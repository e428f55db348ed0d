//! Resolution driver.
//!
//! Runs collection, then a fixed number of propagation steps, and hands
//! the converged tables to the binder. The iteration bound, not a
//! convergence test, is what terminates the loop: the bound must exceed
//! the longest re-export chain in the input, and pathological chains
//! past it silently under-resolve. `early_exit` adds a snapshot equality
//! check as a pure optimization; it never changes the output.

use rustc_hash::FxHashMap;
use weft_ir::{Module, ModulePath, NodeAllocator, StringInterner};

use crate::bind::{Binder, Context};
use crate::collect::collect_all;
use crate::error::ResolveError;
use crate::exports::ExportMap;
use crate::path::PathMapping;
use crate::propagate::{propagate_step, ResolveEnv};

/// Default bound on propagation steps. Ten exceeds the re-export depth
/// of any codebase we have seen.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Tuning knobs for the resolution loop.
#[derive(Clone, Copy, Debug)]
pub struct ResolveOptions {
    /// How many propagation steps to run.
    pub max_iterations: usize,
    /// Stop as soon as a step changes nothing. Off by default; the
    /// output is identical either way.
    pub early_exit: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        ResolveOptions {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            early_exit: false,
        }
    }
}

/// Resolve the export tables of a module set.
///
/// `libs` holds modules resolved in an earlier phase (a library the
/// project builds against); project modules shadow library modules on
/// the same path.
#[tracing::instrument(level = "debug", skip_all, fields(modules = modules.len()))]
pub fn resolve_exports(
    modules: &[Module],
    libs: &ExportMap,
    mapping: &dyn PathMapping,
    interner: &StringInterner,
    options: ResolveOptions,
) -> Result<ExportMap, ResolveError> {
    let mut snapshot = collect_all(modules);
    tracing::debug!(
        max_iterations = options.max_iterations,
        "collected declarations, starting propagation"
    );

    for iteration in 0..options.max_iterations {
        let env = ResolveEnv {
            project: &snapshot,
            libs,
            mapping,
            interner,
        };
        let next = propagate_step(modules, &env)?;
        if options.early_exit && next == snapshot {
            tracing::debug!(iteration, "export tables stable, stopping early");
            return Ok(next);
        }
        snapshot = next;
    }

    Ok(snapshot)
}

/// A fully resolved module set: converged export tables plus the import
/// context of every module.
#[derive(Clone, Debug)]
pub struct ResolvedProject {
    /// Converged `path -> exports` tables.
    pub exports: ExportMap,
    /// Per-module import environments for graph construction.
    pub contexts: FxHashMap<ModulePath, Context>,
}

/// Resolve exports and bind every module's imports in one call.
///
/// `allocator` must be the same allocator the front end used for the
/// modules' nodes, so placeholder nodes synthesized for unresolved
/// imports cannot collide with real ones.
#[tracing::instrument(level = "debug", skip_all, fields(modules = modules.len(), libs = libs.len()))]
pub fn resolve_project(
    modules: &[Module],
    libs: &ExportMap,
    mapping: &dyn PathMapping,
    interner: &StringInterner,
    allocator: &NodeAllocator,
    options: ResolveOptions,
) -> Result<ResolvedProject, ResolveError> {
    let exports = resolve_exports(modules, libs, mapping, interner, options)?;
    let binder = Binder::new(&exports, libs, mapping, interner, allocator);
    let contexts = binder.bind_all(modules)?;
    Ok(ResolvedProject { exports, contexts })
}


// End-to-end driver behavior is covered in tests/resolution.rs.
