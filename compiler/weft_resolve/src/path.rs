//! Import path mapping.
//!
//! Modules reference each other by the specifiers written in the source
//! (`./math`, `../io/file`). The resolver never interprets those itself;
//! a [`PathMapping`] turns each specifier into the canonical path of the
//! module it names, so callers can layer in package aliases or vendored
//! roots without touching the resolution algorithm.

use weft_ir::ModulePath;

/// Policy mapping a written import specifier to a canonical module path.
///
/// `Sync` so one mapping can serve all modules of a parallel propagation
/// step.
pub trait PathMapping: Sync {
    /// Map `relative`, as written in the module at `importer`, to the
    /// canonical path of the module it names.
    ///
    /// Must be total and deterministic: every specifier maps to exactly
    /// one path. A specifier that names no real module simply produces a
    /// path no module lives at; the resolver reports that as an
    /// unresolvable reference.
    fn map(&self, importer: &ModulePath, relative: &str) -> ModulePath;
}

/// Directory-relative concatenation, the default policy.
///
/// Specifiers resolve against the importing module's directory, so in
/// `src/app` the specifier `./util` names `src/util` and `../lib/io`
/// names `lib/io`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirMapping;

impl PathMapping for DirMapping {
    fn map(&self, importer: &ModulePath, relative: &str) -> ModulePath {
        importer.parent().join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dir_mapping_resolves_against_importer_directory() {
        let importer = ModulePath::new("src/app");
        assert_eq!(DirMapping.map(&importer, "./util"), ModulePath::new("src/util"));
        assert_eq!(
            DirMapping.map(&importer, "../lib/io"),
            ModulePath::new("lib/io")
        );
        assert_eq!(
            DirMapping.map(&importer, "nested/mod"),
            ModulePath::new("src/nested/mod")
        );
    }

    #[test]
    fn dir_mapping_at_the_root() {
        let importer = ModulePath::new("main");
        assert_eq!(DirMapping.map(&importer, "./helper"), ModulePath::new("helper"));
    }
}
