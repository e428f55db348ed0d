//! Snapshot persistence round-trips, compiled only with `--features cache`.

#![cfg(feature = "cache")]
#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use weft_ir::{ModulePath, NodeAllocator, StringInterner};
use weft_resolve::{Context, ExportMap, ModuleExports, NameDef};

#[test]
fn export_map_survives_bincode() {
    let interner = StringInterner::new();
    let alloc = NodeAllocator::new();

    let mut table = ModuleExports::new();
    table.add_public(interner.intern("x"), NameDef::term(alloc.alloc_term()));
    table.add_internal(interner.intern("y"), NameDef::ty(alloc.alloc_type()));
    table.merge_default(NameDef::term(alloc.alloc_term()));

    let mut child = ModuleExports::new();
    child.add_public(
        interner.intern("z"),
        NameDef::full(alloc.alloc_term(), alloc.alloc_type()),
    );
    table.add_namespace(interner.intern("NS"), child);

    let mut map = ExportMap::default();
    map.insert(ModulePath::new("proj/a"), table);
    map.insert(ModulePath::new("proj/empty"), ModuleExports::new());

    let bytes = bincode::serialize(&map).unwrap();
    let back: ExportMap = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, map);
}

#[test]
fn context_survives_bincode() {
    let interner = StringInterner::new();
    let alloc = NodeAllocator::new();

    let mut ctx = Context::default();
    ctx.terms.insert(interner.intern("f"), alloc.alloc_term());
    ctx.types.insert(interner.intern("T"), alloc.alloc_type());

    let mut child = Context::default();
    child.terms.insert(interner.intern("y"), alloc.alloc_term());
    ctx.namespaces.insert(interner.intern("NS"), child);

    let bytes = bincode::serialize(&ctx).unwrap();
    let back: Context = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, ctx);
}
