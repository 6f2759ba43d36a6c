//! The fixed set of locations copy is extracted from.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Directory scanned (non-recursively) for template files.
    TemplateDirectory,
    /// A single markup file.
    MarkupFile,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::TemplateDirectory => write!(f, "template directory"),
            SourceKind::MarkupFile => write!(f, "markup file"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub path: &'static str,
    pub kind: SourceKind,
}

impl SourceLocation {
    pub const fn template_directory(path: &'static str) -> Self {
        Self {
            path,
            kind: SourceKind::TemplateDirectory,
        }
    }

    pub const fn markup_file(path: &'static str) -> Self {
        Self {
            path,
            kind: SourceKind::MarkupFile,
        }
    }

    /// Classifies the location by what is actually on disk under `root`.
    pub fn resolve(&self, root: &Path) -> ResolvedSource {
        let path = root.join(self.path);

        if path.is_dir() {
            ResolvedSource::Directory(path)
        } else if path.is_file() {
            ResolvedSource::File(path)
        } else {
            ResolvedSource::Missing(path)
        }
    }
}

pub const DEFAULT_SOURCES: &[SourceLocation] = &[
    SourceLocation::template_directory("client/src/pages"),
    SourceLocation::markup_file("client/index.html"),
    SourceLocation::markup_file("xpdel_home.html"),
    SourceLocation::markup_file("client/public/test-image.html"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedSource {
    Directory(PathBuf),
    File(PathBuf),
    Missing(PathBuf),
}

impl ResolvedSource {
    pub fn path(&self) -> &Path {
        match self {
            ResolvedSource::Directory(path)
            | ResolvedSource::File(path)
            | ResolvedSource::Missing(path) => path,
        }
    }

    /// Whether what was found on disk disagrees with the declared kind.
    pub fn contradicts(&self, kind: SourceKind) -> bool {
        matches!(
            (self, kind),
            (ResolvedSource::Directory(_), SourceKind::MarkupFile)
                | (ResolvedSource::File(_), SourceKind::TemplateDirectory)
        )
    }
}
