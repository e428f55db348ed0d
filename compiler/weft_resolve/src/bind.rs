//! Import binding, the final resolution pass.
//!
//! Once the export tables have converged, each module's import list is
//! replayed one last time to build the [`Context`] downstream graph
//! construction consumes. Binding is lenient where propagation was: an
//! import that never resolved binds to a synthesized placeholder node
//! instead of failing, so one missing symbol cannot sink an otherwise
//! valid batch. Only a missing module is still fatal.

use rustc_hash::FxHashMap;
use weft_ir::{ImportDecl, Module, ModulePath, Name, NodeAllocator, NodeRef, StringInterner};

use crate::error::ResolveError;
use crate::exports::{ExportMap, ModuleExports, NameDef};
use crate::path::PathMapping;
use crate::propagate::ResolveEnv;

/// Import environment of one module, consumable by graph construction.
///
/// Names split by the space they occupy; a class appears in both maps
/// under one name. Namespace imports nest recursively.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    pub terms: FxHashMap<Name, NodeRef>,
    pub types: FxHashMap<Name, NodeRef>,
    pub namespaces: FxHashMap<Name, Context>,
}

impl Context {
    /// Convert a module's export table into a context.
    ///
    /// Reads the public view: named exports split into the term and type
    /// maps, keeping only the slots each name actually fills; namespaces
    /// convert recursively.
    pub fn from_exports(exports: &ModuleExports) -> Context {
        let mut ctx = Context::default();
        for (&name, &def) in &exports.public {
            if let Some(term) = def.term {
                ctx.terms.insert(name, term);
            }
            if let Some(ty) = def.ty {
                ctx.types.insert(name, ty);
            }
        }
        for (&name, child) in &exports.namespaces {
            ctx.namespaces.insert(name, Context::from_exports(child));
        }
        ctx
    }

    /// True if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.types.is_empty() && self.namespaces.is_empty()
    }
}

/// Placeholder nodes for imports that never resolve.
///
/// One term node and one type node are synthesized up front; every
/// unresolved import binds the same pair, so downstream passes can
/// recognize placeholders by id.
#[derive(Clone, Copy, Debug)]
pub struct Unknowns {
    pub def: NameDef,
}

impl Unknowns {
    /// Synthesize the placeholder pair.
    ///
    /// Takes the same allocator the front end used so the placeholder
    /// ids cannot collide with real nodes.
    pub fn synthesize(allocator: &NodeAllocator) -> Unknowns {
        Unknowns {
            def: NameDef::full(allocator.alloc_term(), allocator.alloc_type()),
        }
    }
}

/// Merge a resolved library's modules into one combined base table.
///
/// The result seeds every project module's context before its own
/// imports apply. Modules merge in sorted path order so collisions
/// resolve the same way every run.
pub fn base_exports(libs: &ExportMap) -> ModuleExports {
    let mut entries: Vec<(&ModulePath, &ModuleExports)> = libs.iter().collect();
    entries.sort_by_key(|&(path, _)| path);

    let mut base = ModuleExports::new();
    for (_, exports) in entries {
        base.merge(exports);
    }
    base
}

/// Binds module imports against converged export tables.
pub struct Binder<'a> {
    env: ResolveEnv<'a>,
    base: Context,
    unknowns: Unknowns,
}

impl<'a> Binder<'a> {
    /// Create a binder over converged project tables and a resolved
    /// library set.
    pub fn new(
        exports: &'a ExportMap,
        libs: &'a ExportMap,
        mapping: &'a dyn PathMapping,
        interner: &'a StringInterner,
        allocator: &NodeAllocator,
    ) -> Binder<'a> {
        Binder {
            env: ResolveEnv {
                project: exports,
                libs,
                mapping,
                interner,
            },
            base: Context::from_exports(&base_exports(libs)),
            unknowns: Unknowns::synthesize(allocator),
        }
    }

    /// The placeholder pair unresolved imports bind to.
    pub fn unknowns(&self) -> Unknowns {
        self.unknowns
    }

    /// Build one module's context: the library base, then each import
    /// declaration in source order.
    pub fn bind_module(&self, module: &Module) -> Result<Context, ResolveError> {
        let mut ctx = self.base.clone();

        for import in &module.imports {
            match import {
                ImportDecl::Default { from, local } => {
                    let target = self.env.target(&module.path, *from)?;
                    let def = target.default;
                    if def.is_empty() {
                        tracing::warn!(
                            module = %module.path,
                            name = self.env.interner.lookup(*local),
                            "default import did not resolve, binding placeholder"
                        );
                        self.bind_def(&mut ctx, *local, self.unknowns.def);
                    } else {
                        self.bind_def(&mut ctx, *local, def);
                    }
                }
                ImportDecl::Single {
                    remote,
                    from,
                    local,
                } => {
                    let target = self.env.target(&module.path, *from)?;
                    if let Some(&def) = target.public.get(remote) {
                        self.bind_def(&mut ctx, *local, def);
                    } else if let Some(child) = target.namespaces.get(remote) {
                        ctx.namespaces.insert(*local, Context::from_exports(child));
                    } else {
                        tracing::warn!(
                            module = %module.path,
                            name = self.env.interner.lookup(*remote),
                            "named import did not resolve, binding placeholder"
                        );
                        self.bind_def(&mut ctx, *local, self.unknowns.def);
                    }
                }
                ImportDecl::Module { from, local } => {
                    let target = self.env.target(&module.path, *from)?;
                    ctx.namespaces.insert(*local, Context::from_exports(target));
                }
            }
        }

        Ok(ctx)
    }

    /// Bind every module, keyed by canonical path.
    pub fn bind_all(
        &self,
        modules: &[Module],
    ) -> Result<FxHashMap<ModulePath, Context>, ResolveError> {
        let mut contexts = FxHashMap::default();
        for module in modules {
            contexts.insert(module.path.clone(), self.bind_module(module)?);
        }
        Ok(contexts)
    }

    /// # Panics
    /// Panics on an empty definition. Populated tables never hold one,
    /// so hitting this means a propagation bug, not bad input.
    fn bind_def(&self, ctx: &mut Context, name: Name, def: NameDef) {
        assert!(
            !def.is_empty(),
            "empty binding for `{}`",
            self.env.interner.lookup(name)
        );
        if let Some(term) = def.term {
            ctx.terms.insert(name, term);
        }
        if let Some(ty) = def.ty {
            ctx.types.insert(name, ty);
        }
    }
}


// Binder scenarios are covered end to end in tests/resolution.rs.
