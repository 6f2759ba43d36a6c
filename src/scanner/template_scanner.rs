use crate::config::ExtractionConfig;
use crate::error::{Result, SiteCopyError};
use crate::extractor::ExtractMode;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name with its last extension stripped; names the output artifact.
    pub stem: String,
    pub mode: ExtractMode,
}

impl SourceFile {
    pub fn new(path: PathBuf, mode: ExtractMode) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self { path, stem, mode }
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct TemplateScanner {
    template_extension: String,
}

impl TemplateScanner {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            template_extension: config.template_extension.clone(),
        }
    }

    /// Lists template files directly inside `root`, sorted by file name.
    /// Subdirectories are never entered.
    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<Vec<SourceFile>> {
        let root_path = root.as_ref();

        if !root_path.is_dir() {
            return Err(SiteCopyError::Scan {
                path: root_path.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            // Follows symlinks, so a link to a template file counts.
            if path.is_file() && self.is_template_file(path) {
                files.push(SourceFile::new(path.to_path_buf(), ExtractMode::Template));
            }
        }

        Ok(files)
    }

    pub fn is_template_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.template_extension)
    }
}

impl Default for TemplateScanner {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_source_file_stem() {
        let file = SourceFile::new(PathBuf::from("client/src/pages/About.tsx"), ExtractMode::Template);
        assert_eq!(file.stem, "About");

        let file = SourceFile::new(PathBuf::from("site/home.page.html"), ExtractMode::Markup);
        assert_eq!(file.stem, "home.page");
    }

    #[test]
    fn test_template_extension_is_case_sensitive() {
        let scanner = TemplateScanner::default();
        assert!(scanner.is_template_file(Path::new("Home.tsx")));
        assert!(!scanner.is_template_file(Path::new("Home.TSX")));
        assert!(!scanner.is_template_file(Path::new("Home.ts")));
        assert!(!scanner.is_template_file(Path::new("tsx")));
    }

    #[test]
    fn test_scan_is_non_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("Home.tsx"), "<h1>Home</h1>").unwrap();
        fs::write(root.join("About.tsx"), "<h1>About</h1>").unwrap();
        fs::write(root.join("styles.css"), "body {}").unwrap();
        fs::create_dir_all(root.join("admin/deep")).unwrap();
        fs::write(root.join("admin/Dashboard.tsx"), "<h1>Admin</h1>").unwrap();
        fs::write(root.join("admin/deep/Hidden.tsx"), "<h1>Hidden</h1>").unwrap();

        let scanner = TemplateScanner::default();
        let files = scanner.scan_directory(root).unwrap();

        let stems: Vec<&str> = files.iter().map(|f| f.stem.as_str()).collect();
        assert_eq!(stems, vec!["About", "Home"]);
        assert!(files.iter().all(|f| f.mode == ExtractMode::Template));
    }

    #[test]
    fn test_directory_named_like_template_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("Layout.tsx")).unwrap();

        let files = TemplateScanner::default()
            .scan_directory(temp_dir.path())
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_scan_rejects_non_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("index.html");
        fs::write(&file, "<p>x</p>").unwrap();

        let result = TemplateScanner::default().scan_directory(&file);
        assert!(matches!(result, Err(SiteCopyError::Scan { .. })));
    }

    #[test]
    fn test_custom_template_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Home.jsx"), "<h1>Home</h1>").unwrap();
        fs::write(temp_dir.path().join("About.tsx"), "<h1>About</h1>").unwrap();

        let config = ExtractionConfig {
            template_extension: "jsx".to_string(),
            ..ExtractionConfig::default()
        };
        let files = TemplateScanner::new(&config)
            .scan_directory(temp_dir.path())
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].stem, "Home");
    }
}
