//! Weft IR - module-surface types for export resolution.
//!
//! This crate contains the data structures the resolver consumes:
//! - `Name`: interned identifiers backed by the sharded `StringInterner`
//! - `NodeRef`: handles into the downstream semantic graph
//! - `ModulePath`: canonical slash-separated module paths
//! - `Module`: one file's surface (declarations, imports, exports)
//!
//! Declaration bodies never appear here. The front end lowers each source
//! file to a `Module`, allocating graph nodes as it goes; the resolver
//! wires those nodes together by name.
//!
//! # Design Philosophy
//!
//! - **Intern everything**: identifiers are `Name(u32)`, O(1) equality
//! - **Nodes are opaque**: the resolver moves `NodeRef`s, never contents
//! - **Snapshot-friendly**: every type is Clone + Eq + Hash so whole
//!   export tables can be compared for convergence checks

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod module;
mod name;
mod node;
mod path;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use module::{ExportDecl, ExportLevel, ImportDecl, Module, Statement};
pub use name::Name;
pub use node::{NodeAllocator, NodeId, NodeKind, NodeRef};
pub use path::ModulePath;

// Size assertions to prevent accidental regressions. Names and node
// handles are copied throughout propagation and stored in every table.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Name, NodeRef};
    // Name is a bare u32.
    crate::static_assert_size!(Name, 4);
    // NodeRef: u32 id + 1-byte kind, padded to 8.
    crate::static_assert_size!(NodeRef, 8);
}
