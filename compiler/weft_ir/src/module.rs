//! Module surface: declarations, imports, exports.
//!
//! The front end lowers each source file to one [`Module`]. Declaration
//! bodies stay behind in the front end's own structures; the resolver only
//! needs names, node handles, and the import/export statements in source
//! order.

use crate::{ModulePath, Name, NodeRef};

/// Export marking on a declaration.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportLevel {
    /// Not exported; visible only inside the declaring module.
    #[default]
    Private,
    /// Exported under the declared name.
    Public,
    /// Exported as the module's default.
    Default,
}

impl ExportLevel {
    /// Returns true if the declaration is exported under its own name.
    pub fn is_public(self) -> bool {
        matches!(self, ExportLevel::Public)
    }

    /// Returns true if the declaration is the module's default export.
    pub fn is_default(self) -> bool {
        matches!(self, ExportLevel::Default)
    }
}

/// A top-level or namespace-nested declaration.
///
/// Every variant carries the graph nodes the front end allocated for it.
/// A class contributes both a term node (the constructor) and a type node;
/// the other forms live in exactly one space.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// Variable binding.
    Var {
        name: Name,
        node: NodeRef,
        export: ExportLevel,
    },
    /// Function declaration.
    Func {
        name: Name,
        node: NodeRef,
        export: ExportLevel,
    },
    /// Class declaration: constructor term plus the class type.
    Class {
        name: Name,
        term: NodeRef,
        ty: NodeRef,
        export: ExportLevel,
    },
    /// Type alias.
    Alias {
        name: Name,
        node: NodeRef,
        export: ExportLevel,
    },
    /// Nested namespace with its own declaration list.
    Namespace {
        name: Name,
        body: Vec<Statement>,
        export: ExportLevel,
    },
}

impl Statement {
    /// The declared name.
    pub fn name(&self) -> Name {
        match self {
            Statement::Var { name, .. }
            | Statement::Func { name, .. }
            | Statement::Class { name, .. }
            | Statement::Alias { name, .. }
            | Statement::Namespace { name, .. } => *name,
        }
    }

    /// The export marking.
    pub fn export(&self) -> ExportLevel {
        match self {
            Statement::Var { export, .. }
            | Statement::Func { export, .. }
            | Statement::Class { export, .. }
            | Statement::Alias { export, .. }
            | Statement::Namespace { export, .. } => *export,
        }
    }
}

/// An import statement.
///
/// `from` is always the relative path as written in the source; mapping it
/// to a canonical [`ModulePath`] is the resolver's job.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportDecl {
    /// `import local from "./path"`: the target's default export.
    Default { from: Name, local: Name },
    /// `import { remote as local } from "./path"`: one named symbol.
    Single { remote: Name, from: Name, local: Name },
    /// `import * as local from "./path"`: the whole module as a namespace.
    Module { from: Name, local: Name },
}

impl ImportDecl {
    /// The relative path specifier this import reads from.
    pub fn specifier(&self) -> Name {
        match self {
            ImportDecl::Default { from, .. }
            | ImportDecl::Single { from, .. }
            | ImportDecl::Module { from, .. } => *from,
        }
    }

    /// The name bound in the importing module.
    pub fn local(&self) -> Name {
        match self {
            ImportDecl::Default { local, .. }
            | ImportDecl::Single { local, .. }
            | ImportDecl::Module { local, .. } => *local,
        }
    }
}

/// An export statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportDecl {
    /// `export { local as exported }`, or with `from` set,
    /// `export { local as exported } from "./path"`.
    Single {
        local: Name,
        exported: Name,
        from: Option<Name>,
    },
    /// `export * from "./path"`: forward the target's named exports.
    Wildcard { from: Name },
    /// `export default name`: promote a local declaration to default.
    DefaultLocal { name: Name },
    /// Re-export the target's default: as a named export when `rename`
    /// is set, as this module's own default otherwise.
    DefaultFrom { from: Name, rename: Option<Name> },
}

/// One source module's resolution surface.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Module {
    /// Canonical project-relative path, without extension.
    pub path: ModulePath,
    /// Declarations in source order.
    pub statements: Vec<Statement>,
    /// Import statements in source order.
    pub imports: Vec<ImportDecl>,
    /// Export statements in source order.
    pub exports: Vec<ExportDecl>,
}

impl Module {
    /// Create an empty module at `path`.
    pub fn new(path: ModulePath) -> Self {
        Module {
            path,
            statements: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
        }
    }
}
