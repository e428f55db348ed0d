//! Iterative export propagation.
//!
//! One step replays every module's imports and exports against the
//! previous step's tables. A lookup can miss simply because the target
//! module has not produced that symbol yet; those are skipped and picked
//! up in a later step. Information only ever accumulates, so repeated
//! steps climb a monotone lattice toward the fixed point, and the driver
//! bounds the climb.
//!
//! Lookups that miss the whole module, not just a symbol, are different:
//! no iteration will conjure up a module that does not exist, so those
//! fail the batch immediately.

use weft_ir::{ExportDecl, ImportDecl, Module, ModulePath, Name, StringInterner};

use crate::error::ResolveError;
use crate::exports::{ExportMap, ModuleExports};
use crate::path::PathMapping;

/// Shared lookup state for one propagation or binding pass.
///
/// Groups the parameters every step needs, keeping signatures short.
/// `project` is the previous snapshot of the set being resolved; `libs`
/// holds externally resolved modules and is never written.
pub(crate) struct ResolveEnv<'a> {
    pub project: &'a ExportMap,
    pub libs: &'a ExportMap,
    pub mapping: &'a dyn PathMapping,
    pub interner: &'a StringInterner,
}

impl ResolveEnv<'_> {
    /// Resolve an import specifier to the exporting module's table.
    ///
    /// Project modules shadow library modules on the same path.
    pub fn target(
        &self,
        importer: &ModulePath,
        spec: Name,
    ) -> Result<&ModuleExports, ResolveError> {
        let relative = self.interner.lookup(spec);
        let path = self.mapping.map(importer, relative);
        self.project
            .get(&path)
            .or_else(|| self.libs.get(&path))
            .ok_or_else(|| ResolveError::unresolvable(importer, relative))
    }
}

/// Advance every module by one step against the snapshot in `env`.
pub(crate) fn propagate_step(
    modules: &[Module],
    env: &ResolveEnv<'_>,
) -> Result<ExportMap, ResolveError> {
    let mut next = ExportMap::default();
    for module in modules {
        next.insert(module.path.clone(), propagate_module(module, env)?);
    }
    Ok(next)
}

/// Replay one module's imports and exports on top of its current table.
///
/// Statements run in source order, each seeing the effect of the ones
/// before it; in particular an import landed earlier in the same step is
/// visible to a bare `export { name }` after it.
pub(crate) fn propagate_module(
    module: &Module,
    env: &ResolveEnv<'_>,
) -> Result<ModuleExports, ResolveError> {
    let mut exports = env
        .project
        .get(&module.path)
        .cloned()
        .unwrap_or_default();

    for import in &module.imports {
        // Only single imports feed the internal table here. Default and
        // module imports bind names for the module body, which the
        // binder handles after convergence.
        if let ImportDecl::Single {
            remote,
            from,
            local,
        } = import
        {
            let target = env.target(&module.path, *from)?;
            if let Some(&def) = target.public.get(remote) {
                exports.add_internal(*local, def);
            }
        }
    }

    for export in &module.exports {
        apply_export(&mut exports, module, export, env)?;
    }

    Ok(exports)
}

fn apply_export(
    exports: &mut ModuleExports,
    module: &Module,
    export: &ExportDecl,
    env: &ResolveEnv<'_>,
) -> Result<(), ResolveError> {
    match export {
        ExportDecl::Single {
            local,
            exported,
            from: Some(from),
        } => {
            let target = env.target(&module.path, *from)?;
            if let Some(&def) = target.public.get(local) {
                exports.add_public(*exported, def);
            }
        }
        ExportDecl::Single {
            local,
            exported,
            from: None,
        } => {
            // The internal table is locally complete once collection and
            // this step's imports have run, so a miss is malformed input,
            // not a convergence gap.
            let def = exports
                .internal
                .get(local)
                .copied()
                .ok_or_else(|| ResolveError::missing_internal(&module.path, *local, env.interner))?;
            exports.add_public(*exported, def);
        }
        ExportDecl::Wildcard { from } => {
            let target = env.target(&module.path, *from)?;
            exports.merge_public(target);
        }
        ExportDecl::DefaultFrom {
            from,
            rename: Some(rename),
        } => {
            let target = env.target(&module.path, *from)?;
            let def = target.default;
            if !def.is_empty() {
                exports.add_public(*rename, def);
            }
        }
        ExportDecl::DefaultFrom { from, rename: None } => {
            let target = env.target(&module.path, *from)?;
            exports.merge_default(target.default);
        }
        ExportDecl::DefaultLocal { name } => {
            let def = exports
                .internal
                .get(name)
                .copied()
                .ok_or_else(|| ResolveError::missing_internal(&module.path, *name, env.interner))?;
            exports.merge_default(def);
        }
    }
    Ok(())
}

// Step- and convergence-level behavior is covered in tests/resolution.rs.
