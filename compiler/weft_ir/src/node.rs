//! Graph node identity.
//!
//! The resolver never looks inside a node. Downstream passes own the actual
//! semantic graph; here a node is a compact handle plus a marker for whether
//! it lives in term space or type space.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

/// Index of a node in the downstream semantic graph.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new `NodeId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the index into the graph.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Hash for NodeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Whether a node stands for a term or a type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Value-level: variables, functions, class constructors.
    Term,
    /// Type-level: classes as types, type aliases.
    Type,
}

impl NodeKind {
    /// Returns true for term-space nodes.
    pub fn is_term(self) -> bool {
        matches!(self, NodeKind::Term)
    }

    /// Returns true for type-space nodes.
    pub fn is_type(self) -> bool {
        matches!(self, NodeKind::Type)
    }
}

/// Handle to a graph node: its id plus the space it was created in.
///
/// A node's kind is fixed at allocation and never changes. Ids are unique
/// across both spaces, so the id alone is enough to hash on.
#[derive(Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRef {
    id: NodeId,
    kind: NodeKind,
}

impl NodeRef {
    /// The node's id.
    #[inline]
    pub const fn id(self) -> NodeId {
        self.id
    }

    /// The space this node was allocated in.
    #[inline]
    pub const fn kind(self) -> NodeKind {
        self.kind
    }

    /// Returns true for term-space nodes.
    #[inline]
    pub fn is_term(self) -> bool {
        self.kind.is_term()
    }

    /// Returns true for type-space nodes.
    #[inline]
    pub fn is_type(self) -> bool {
        self.kind.is_type()
    }
}

impl Hash for NodeRef {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Term => write!(f, "NodeRef(term {})", self.id.raw()),
            NodeKind::Type => write!(f, "NodeRef(type {})", self.id.raw()),
        }
    }
}

/// Hands out fresh graph nodes.
///
/// The front end and the resolver share one allocator so ids stay unique
/// across the whole program, including placeholder nodes synthesized for
/// unresolved imports. Allocation is lock-free.
#[derive(Debug, Default)]
pub struct NodeAllocator {
    next: AtomicU32,
}

impl NodeAllocator {
    /// Create an allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh term-space node.
    pub fn alloc_term(&self) -> NodeRef {
        self.alloc(NodeKind::Term)
    }

    /// Allocate a fresh type-space node.
    pub fn alloc_type(&self) -> NodeRef {
        self.alloc(NodeKind::Type)
    }

    /// Number of nodes allocated so far.
    pub fn allocated(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }

    /// # Panics
    /// Panics if all 2^32 - 1 ids have been handed out.
    fn alloc(&self, kind: NodeKind) -> NodeRef {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        assert!(id != u32::MAX, "node allocator exhausted");
        NodeRef {
            id: NodeId::new(id),
            kind,
        }
    }
}
