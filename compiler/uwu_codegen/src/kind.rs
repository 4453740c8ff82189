//! Backend selection.

use std::fmt;
use std::str::FromStr;

use uwu_ir::{Node, TreeRoot};

use crate::{Backend, CBackend, CodegenError, PythonBackend};

/// The available target languages.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BackendKind {
    C,
    #[default]
    Python,
}

impl BackendKind {
    pub const ALL: &'static [BackendKind] = &[BackendKind::C, BackendKind::Python];

    /// Extension of generated files, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            BackendKind::C => ".c",
            BackendKind::Python => ".py",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackendKind::C => "c",
            BackendKind::Python => "python",
        }
    }

    /// Run a fresh backend of this kind over `root`.
    pub fn compile(self, root: &TreeRoot<Node>, out: &mut dyn fmt::Write) -> Result<(), CodegenError> {
        match self {
            BackendKind::C => CBackend::new().compile(root, out),
            BackendKind::Python => PythonBackend::new().compile(root, out),
        }
    }

    /// Compile into a new string.
    pub fn generate(self, root: &TreeRoot<Node>) -> Result<String, CodegenError> {
        let mut out = String::new();
        self.compile(root, &mut out)?;
        Ok(out)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown backend '{s}' (expected c or python)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_and_display() {
        assert_eq!("c".parse::<BackendKind>(), Ok(BackendKind::C));
        assert_eq!("python".parse::<BackendKind>(), Ok(BackendKind::Python));
        assert!("rust".parse::<BackendKind>().is_err());
        assert_eq!(BackendKind::C.to_string(), "c");
    }

    #[test]
    fn extensions() {
        assert_eq!(BackendKind::C.extension(), ".c");
        assert_eq!(BackendKind::Python.extension(), ".py");
        assert_eq!(BackendKind::default(), BackendKind::Python);
    }

    #[test]
    fn empty_tree_output() {
        let root = TreeRoot::default();
        assert_eq!(BackendKind::Python.generate(&root), Ok(String::new()));
        assert_eq!(
            BackendKind::C.generate(&root),
            Ok("#include <stdio.h>\n\nint main(int argc, char** argv) {\n    return 0;\n}\n".to_string())
        );
    }
}
