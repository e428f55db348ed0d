//! Declaration collection, the first resolution pass.
//!
//! Walks each module's declarations and builds its initial export table.
//! Import and export statements contribute nothing here; propagation
//! replays them once every module has a table to read from. This pass is
//! total: any list of declarations collects without error.

use weft_ir::{ExportLevel, Module, Name, Statement};

use crate::exports::{ExportMap, ModuleExports, NameDef};

/// Collect the declaration-level exports of one module.
pub fn collect_exports(module: &Module) -> ModuleExports {
    collect_statements(&module.statements)
}

/// Collect every module, keyed by canonical path.
///
/// Two modules on the same path is front-end breakage; the later module
/// wins and a warning records the collision.
pub fn collect_all(modules: &[Module]) -> ExportMap {
    let mut map = ExportMap::default();
    for module in modules {
        if map
            .insert(module.path.clone(), collect_exports(module))
            .is_some()
        {
            tracing::warn!(path = %module.path, "duplicate module path, keeping the later module");
        }
    }
    map
}

fn collect_statements(statements: &[Statement]) -> ModuleExports {
    let mut exports = ModuleExports::new();
    for statement in statements {
        match statement {
            Statement::Var { name, node, export } | Statement::Func { name, node, export } => {
                record(&mut exports, *name, NameDef::term(*node), *export);
            }
            Statement::Class {
                name,
                term,
                ty,
                export,
            } => {
                record(&mut exports, *name, NameDef::full(*term, *ty), *export);
            }
            Statement::Alias { name, node, export } => {
                record(&mut exports, *name, NameDef::ty(*node), *export);
            }
            Statement::Namespace { name, body, .. } => {
                // A namespace's body collects into its own child table;
                // members never leak into the enclosing module's tables.
                exports.add_namespace(*name, collect_statements(body));
            }
        }
    }
    exports
}

/// Declarations always land in the internal table; the export marking
/// decides what else they touch.
fn record(exports: &mut ModuleExports, name: Name, def: NameDef, level: ExportLevel) {
    exports.add_internal(name, def);
    match level {
        ExportLevel::Private => {}
        ExportLevel::Public => exports.add_public(name, def),
        ExportLevel::Default => exports.merge_default(def),
    }
}
