//! Per-unit compilation settings.

use std::path::{Path, PathBuf};

use uwu_codegen::BackendKind;
use uwu_ir::SourceLabel;

/// What to compile and how.
///
/// The name and path only label error messages; the source text itself is
/// always passed separately.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompileConfig {
    pub source_name: Option<String>,
    pub source_path: Option<PathBuf>,
    pub backend: BackendKind,
}

impl Default for CompileConfig {
    fn default() -> Self {
        CompileConfig {
            source_name: Some("<string>".to_string()),
            source_path: None,
            backend: BackendKind::default(),
        }
    }
}

impl CompileConfig {
    /// Settings for a file on disk: named after its file name.
    pub fn for_path(path: &Path, backend: BackendKind) -> Self {
        CompileConfig {
            source_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            source_path: Some(path.to_path_buf()),
            backend,
        }
    }

    #[must_use]
    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn label(&self) -> SourceLabel {
        SourceLabel::new(self.source_name.clone(), self.source_path.clone())
    }

    /// Label shown in diagnostics: the path when known, else the name.
    pub fn display_path(&self) -> String {
        match &self.source_path {
            Some(path) => path.display().to_string(),
            None => self.label().display_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_in_memory_python() {
        let config = CompileConfig::default();
        assert_eq!(config.backend, BackendKind::Python);
        assert_eq!(config.label().display_name(), "<string>");
        assert_eq!(config.display_path(), "<string>");
    }

    #[test]
    fn for_path_uses_file_name() {
        let config = CompileConfig::for_path(Path::new("demo/hello.uwu"), BackendKind::C);
        assert_eq!(config.source_name.as_deref(), Some("hello.uwu"));
        assert_eq!(config.display_path(), Path::new("demo/hello.uwu").display().to_string());
        assert_eq!(config.with_backend(BackendKind::Python).backend, BackendKind::Python);
    }
}
