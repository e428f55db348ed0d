//! Export tables and their merge semantics.
//!
//! Resolution works over partial information: a module's table grows as
//! propagation discovers what its re-exports mean. The merge operations
//! here are what make that sound. Both are monotone: merging never drops
//! a slot or a key, so repeated propagation can only climb toward the
//! fixed point.

use rustc_hash::FxHashMap;
use weft_ir::{ModulePath, Name, NodeRef};

/// Resolved export tables for a set of modules, keyed by canonical path.
pub type ExportMap = FxHashMap<ModulePath, ModuleExports>;

/// What one name means: a term node, a type node, or both.
///
/// A class fills both slots; a variable or function only `term`; a type
/// alias only `ty`. The all-`None` value is the merge identity and never
/// appears in a populated table.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NameDef {
    pub term: Option<NodeRef>,
    pub ty: Option<NodeRef>,
}

impl NameDef {
    /// The merge identity: no term, no type.
    pub const EMPTY: NameDef = NameDef {
        term: None,
        ty: None,
    };

    /// A term-only definition.
    pub fn term(node: NodeRef) -> NameDef {
        debug_assert!(node.is_term());
        NameDef {
            term: Some(node),
            ty: None,
        }
    }

    /// A type-only definition.
    pub fn ty(node: NodeRef) -> NameDef {
        debug_assert!(node.is_type());
        NameDef {
            term: None,
            ty: Some(node),
        }
    }

    /// A definition with both components.
    pub fn full(term: NodeRef, ty: NodeRef) -> NameDef {
        debug_assert!(term.is_term());
        debug_assert!(ty.is_type());
        NameDef {
            term: Some(term),
            ty: Some(ty),
        }
    }

    /// True if neither component is present.
    pub fn is_empty(self) -> bool {
        self.term.is_none() && self.ty.is_none()
    }

    /// Merge two definitions, slot by slot.
    ///
    /// Where both sides fill a slot, `later` wins; an absent slot never
    /// erases a present one. Associative, with [`NameDef::EMPTY`] as the
    /// identity on either side.
    #[must_use]
    pub fn merge(self, later: NameDef) -> NameDef {
        NameDef {
            term: later.term.or(self.term),
            ty: later.ty.or(self.ty),
        }
    }
}

/// Everything one module makes visible.
///
/// `internal` holds every declaration plus single imports; `public` the
/// subset reachable from other modules; `default` the default export.
/// Child namespaces carry their own nested tables and never leak names
/// into the parent's.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleExports {
    /// The module's default export; `NameDef::EMPTY` when there is none.
    pub default: NameDef,
    /// Symbols visible to importers.
    pub public: FxHashMap<Name, NameDef>,
    /// Symbols visible inside the module, including private ones.
    pub internal: FxHashMap<Name, NameDef>,
    /// Nested namespaces by name.
    pub namespaces: FxHashMap<Name, ModuleExports>,
}

impl ModuleExports {
    /// Create an empty table (the merge identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no component carries any information.
    pub fn is_empty(&self) -> bool {
        self.default.is_empty()
            && self.public.is_empty()
            && self.internal.is_empty()
            && self.namespaces.is_empty()
    }

    /// Record a name in the internal table, merging with any previous entry.
    pub fn add_internal(&mut self, name: Name, def: NameDef) {
        merge_entry(&mut self.internal, name, def);
    }

    /// Record a name in the public table, merging with any previous entry.
    pub fn add_public(&mut self, name: Name, def: NameDef) {
        merge_entry(&mut self.public, name, def);
    }

    /// Merge a definition into the default slot.
    pub fn merge_default(&mut self, def: NameDef) {
        self.default = self.default.merge(def);
    }

    /// Record a child namespace, merging with any previous table under
    /// the same name.
    pub fn add_namespace(&mut self, name: Name, child: ModuleExports) {
        self.namespaces.entry(name).or_default().merge(&child);
    }

    /// Merge another table into this one, component-wise.
    ///
    /// Maps merge key-wise with [`NameDef::merge`]; namespaces merge
    /// recursively. Where a name appears on both sides, `other`'s slots
    /// win. Merging the empty table is a no-op.
    pub fn merge(&mut self, other: &ModuleExports) {
        self.default = self.default.merge(other.default);
        for (&name, &def) in &other.public {
            merge_entry(&mut self.public, name, def);
        }
        for (&name, &def) in &other.internal {
            merge_entry(&mut self.internal, name, def);
        }
        for (name, child) in &other.namespaces {
            self.namespaces.entry(*name).or_default().merge(child);
        }
    }

    /// Merge just the public names of `other` into this table's public
    /// names. This is the wildcard re-export operation: the default and
    /// the namespaces of `other` stay behind.
    pub fn merge_public(&mut self, other: &ModuleExports) {
        for (&name, &def) in &other.public {
            merge_entry(&mut self.public, name, def);
        }
    }
}

fn merge_entry(table: &mut FxHashMap<Name, NameDef>, name: Name, def: NameDef) {
    let entry = table.entry(name).or_default();
    *entry = entry.merge(def);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weft_ir::NodeAllocator;

    fn sym(i: u32) -> Name {
        Name::new(0, i)
    }

    #[test]
    fn name_def_merge_is_right_biased() {
        let alloc = NodeAllocator::new();
        let a = NameDef::term(alloc.alloc_term());
        let b = NameDef::term(alloc.alloc_term());

        assert_eq!(a.merge(b).term, b.term);
        assert_eq!(b.merge(a).term, a.term);
    }

    #[test]
    fn name_def_absent_never_overwrites() {
        let alloc = NodeAllocator::new();
        let term = NameDef::term(alloc.alloc_term());
        let ty = NameDef::ty(alloc.alloc_type());

        let both = term.merge(ty);
        assert_eq!(both.term, term.term);
        assert_eq!(both.ty, ty.ty);

        assert_eq!(both.merge(NameDef::EMPTY), both);
        assert_eq!(NameDef::EMPTY.merge(both), both);
    }

    #[test]
    fn name_def_empty_is_empty() {
        assert!(NameDef::EMPTY.is_empty());
        let alloc = NodeAllocator::new();
        assert!(!NameDef::term(alloc.alloc_term()).is_empty());
    }

    #[test]
    fn exports_merge_unions_tables() {
        let alloc = NodeAllocator::new();
        let mut left = ModuleExports::new();
        left.add_public(sym(1), NameDef::term(alloc.alloc_term()));
        left.add_internal(sym(2), NameDef::term(alloc.alloc_term()));

        let mut right = ModuleExports::new();
        let shared = NameDef::ty(alloc.alloc_type());
        right.add_public(sym(1), shared);
        right.add_public(sym(3), NameDef::term(alloc.alloc_term()));

        let mut merged = left.clone();
        merged.merge(&right);

        // Shared key unions its slots: left's term survives, right's type lands.
        let def = merged.public[&sym(1)];
        assert_eq!(def.term, left.public[&sym(1)].term);
        assert_eq!(def.ty, shared.ty);
        assert!(merged.public.contains_key(&sym(3)));
        assert!(merged.internal.contains_key(&sym(2)));
    }

    #[test]
    fn exports_merge_recurses_into_namespaces() {
        let alloc = NodeAllocator::new();
        let mut inner_a = ModuleExports::new();
        inner_a.add_public(sym(1), NameDef::term(alloc.alloc_term()));
        let mut left = ModuleExports::new();
        left.add_namespace(sym(9), inner_a.clone());

        let mut inner_b = ModuleExports::new();
        inner_b.add_public(sym(2), NameDef::term(alloc.alloc_term()));
        let mut right = ModuleExports::new();
        right.add_namespace(sym(9), inner_b);

        left.merge(&right);
        let child = &left.namespaces[&sym(9)];
        assert!(child.public.contains_key(&sym(1)));
        assert!(child.public.contains_key(&sym(2)));
    }

    #[test]
    fn merge_public_leaves_default_and_namespaces() {
        let alloc = NodeAllocator::new();
        let mut source = ModuleExports::new();
        source.merge_default(NameDef::term(alloc.alloc_term()));
        source.add_public(sym(1), NameDef::term(alloc.alloc_term()));
        source.add_namespace(sym(2), ModuleExports::new());

        let mut sink = ModuleExports::new();
        sink.merge_public(&source);

        assert!(sink.public.contains_key(&sym(1)));
        assert!(sink.default.is_empty());
        assert!(sink.namespaces.is_empty());
    }

    #[test]
    fn merge_with_empty_is_noop() {
        let alloc = NodeAllocator::new();
        let mut table = ModuleExports::new();
        table.add_public(sym(1), NameDef::full(alloc.alloc_term(), alloc.alloc_type()));
        table.merge_default(NameDef::term(alloc.alloc_term()));

        let before = table.clone();
        table.merge(&ModuleExports::new());
        assert_eq!(table, before);
        assert!(ModuleExports::new().is_empty());
        assert!(!table.is_empty());
    }
}
