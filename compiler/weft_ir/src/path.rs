//! Canonical module paths.
//!
//! Paths are virtual: slash-separated, extension-free identifiers like
//! `src/util/math`. They name modules in the project tree and never touch
//! the filesystem.

use std::fmt;
use std::sync::Arc;

/// Canonical path of a module, in normalized form.
///
/// Normalization drops empty and `.` segments and folds `..` into the
/// preceding segment where one exists. A `..` that would escape the root
/// is kept, so every input maps to exactly one canonical path and lookups
/// for escaped paths simply find no module.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ModulePath(Arc<str>);

impl ModulePath {
    /// Create a canonical path from any slash-separated string.
    pub fn new(path: impl AsRef<str>) -> Self {
        ModulePath(Arc::from(normalize(path.as_ref())))
    }

    /// The canonical path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the directory containing this module.
    ///
    /// The project root is the empty path, which is its own parent.
    pub fn parent(&self) -> ModulePath {
        match self.0.rfind('/') {
            Some(idx) => ModulePath(Arc::from(&self.0[..idx])),
            None => ModulePath(Arc::from("")),
        }
    }

    /// Resolve `relative` against this path taken as a directory.
    pub fn join(&self, relative: &str) -> ModulePath {
        ModulePath::new(format!("{}/{}", self.0, relative))
    }
}

fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(&last) if last != "..") {
                    segments.pop();
                } else {
                    segments.push("..");
                }
            }
            seg => segments.push(seg),
        }
    }
    segments.join("/")
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModulePath({:?})", &*self.0)
    }
}
