use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractor::ExtractMode;
use crate::scanner::{SourceFile, TemplateScanner};
use crate::sources::{ResolvedSource, SourceLocation};
use serde::Serialize;
use std::path::Path;

/// What a run will touch, worked out before any file is read.
#[derive(Debug, Clone, Serialize)]
pub struct RunPlan {
    pub sources: Vec<PlannedSource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedSource {
    pub location: SourceLocation,
    pub resolved: ResolvedSource,
    pub files: Vec<SourceFile>,
}

impl PlannedSource {
    pub fn kind_mismatch(&self) -> bool {
        self.resolved.contradicts(self.location.kind)
    }
}

impl RunPlan {
    pub fn build(sources: &[SourceLocation], root: &Path, config: &ExtractionConfig) -> Result<Self> {
        let scanner = TemplateScanner::new(config);
        let mut planned = Vec::with_capacity(sources.len());

        for location in sources {
            let resolved = location.resolve(root);
            let files = match &resolved {
                ResolvedSource::Directory(dir) => scanner.scan_directory(dir)?,
                ResolvedSource::File(path) => vec![SourceFile::new(path.clone(), ExtractMode::Markup)],
                ResolvedSource::Missing(_) => Vec::new(),
            };

            planned.push(PlannedSource {
                location: *location,
                resolved,
                files,
            });
        }

        Ok(Self { sources: planned })
    }

    pub fn total_files(&self) -> usize {
        self.sources.iter().map(|s| s.files.len()).sum()
    }

    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.sources.iter().flat_map(|s| s.files.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::DEFAULT_SOURCES;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_plan_for_site_tree() {
        let root = TempDir::new().unwrap();
        let pages = root.path().join("client/src/pages");
        fs::create_dir_all(pages.join("nested")).unwrap();
        fs::write(pages.join("Home.tsx"), "<h1>Home</h1>").unwrap();
        fs::write(pages.join("nested/Deep.tsx"), "<h1>Deep</h1>").unwrap();
        fs::write(root.path().join("xpdel_home.html"), "<p>Hi</p>").unwrap();

        let plan = RunPlan::build(DEFAULT_SOURCES, root.path(), &ExtractionConfig::default()).unwrap();

        assert_eq!(plan.sources.len(), 4);
        assert_eq!(plan.total_files(), 2);

        let stems: Vec<&str> = plan.files().map(|f| f.stem.as_str()).collect();
        assert_eq!(stems, vec!["Home", "xpdel_home"]);

        let modes: Vec<ExtractMode> = plan.files().map(|f| f.mode).collect();
        assert_eq!(modes, vec![ExtractMode::Template, ExtractMode::Markup]);

        assert!(matches!(plan.sources[1].resolved, ResolvedSource::Missing(_)));
        assert!(plan.sources.iter().all(|s| !s.kind_mismatch()));
    }

    #[test]
    fn test_plan_follows_filesystem_over_declared_kind() {
        let root = TempDir::new().unwrap();
        // A directory where a markup file is expected.
        let odd = root.path().join("client/index.html");
        fs::create_dir_all(&odd).unwrap();
        fs::write(odd.join("Widget.tsx"), "<p>Widget</p>").unwrap();

        let plan = RunPlan::build(DEFAULT_SOURCES, root.path(), &ExtractionConfig::default()).unwrap();

        assert!(plan.sources[1].kind_mismatch());
        assert_eq!(plan.sources[1].files.len(), 1);
        assert_eq!(plan.sources[1].files[0].mode, ExtractMode::Template);
    }

    #[test]
    fn test_empty_root_plans_nothing() {
        let root = TempDir::new().unwrap();
        let plan = RunPlan::build(DEFAULT_SOURCES, root.path(), &ExtractionConfig::default()).unwrap();

        assert_eq!(plan.total_files(), 0);
        assert!(plan
            .sources
            .iter()
            .all(|s| matches!(s.resolved, ResolvedSource::Missing(_))));
    }
}
