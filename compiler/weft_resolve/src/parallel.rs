//! Parallel export propagation.
//!
//! Within one step every module reads the same immutable snapshot and
//! writes only its own next table, so modules propagate in parallel.
//! Steps stay sequential: step `i + 1` needs the complete result of
//! step `i`. The output is identical to the sequential driver; when
//! several modules fail in the same step, which error surfaces is
//! unspecified, where the sequential driver reports the first in input
//! order.

use rayon::prelude::*;
use weft_ir::{Module, NodeAllocator, StringInterner};

use crate::bind::Binder;
use crate::collect::collect_all;
use crate::driver::{ResolveOptions, ResolvedProject};
use crate::error::ResolveError;
use crate::exports::ExportMap;
use crate::path::PathMapping;
use crate::propagate::{propagate_module, ResolveEnv};

/// Resolve export tables with per-step parallelism.
///
/// Observably equivalent to [`resolve_exports`](crate::resolve_exports)
/// on success.
#[tracing::instrument(level = "debug", skip_all, fields(modules = modules.len()))]
pub fn resolve_exports_parallel(
    modules: &[Module],
    libs: &ExportMap,
    mapping: &dyn PathMapping,
    interner: &StringInterner,
    options: ResolveOptions,
) -> Result<ExportMap, ResolveError> {
    let mut snapshot = collect_all(modules);
    tracing::debug!(
        max_iterations = options.max_iterations,
        "collected declarations, starting parallel propagation"
    );

    for iteration in 0..options.max_iterations {
        let env = ResolveEnv {
            project: &snapshot,
            libs,
            mapping,
            interner,
        };
        let next = modules
            .par_iter()
            .map(|module| {
                propagate_module(module, &env).map(|exports| (module.path.clone(), exports))
            })
            .collect::<Result<ExportMap, ResolveError>>()?;
        if options.early_exit && next == snapshot {
            tracing::debug!(iteration, "export tables stable, stopping early");
            return Ok(next);
        }
        snapshot = next;
    }

    Ok(snapshot)
}

/// Resolve exports in parallel, then bind every module's imports.
#[tracing::instrument(level = "debug", skip_all, fields(modules = modules.len(), libs = libs.len()))]
pub fn resolve_project_parallel(
    modules: &[Module],
    libs: &ExportMap,
    mapping: &dyn PathMapping,
    interner: &StringInterner,
    allocator: &NodeAllocator,
    options: ResolveOptions,
) -> Result<ResolvedProject, ResolveError> {
    let exports = resolve_exports_parallel(modules, libs, mapping, interner, options)?;
    let binder = Binder::new(&exports, libs, mapping, interner, allocator);
    let contexts = binder.bind_all(modules)?;
    Ok(ResolvedProject { exports, contexts })
}

// Equivalence with the sequential driver is covered in tests/resolution.rs.
