use crate::config::ExtractionConfig;
use crate::error::{Result, SiteCopyError};
use crate::extractor::patterns::{
    captures, CLASS_TOKEN_RE, MARKUP_TEXT_RE, QUOTED_RE, TEMPLATE_TEXT_RE,
};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    /// Plain HTML pages.
    Markup,
    /// Component templates with embedded `{expressions}`.
    Template,
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractMode::Markup => write!(f, "markup"),
            ExtractMode::Template => write!(f, "template"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    ImageAsset,
    Url,
    RelativePath,
    AtToken,
    StylingAttribute,
    ClassToken,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RejectionCounts {
    pub empty: usize,
    pub image_asset: usize,
    pub url: usize,
    pub relative_path: usize,
    pub at_token: usize,
    pub styling_attribute: usize,
    pub class_token: usize,
}

impl RejectionCounts {
    pub fn record(&mut self, rejection: Rejection) {
        let slot = match rejection {
            Rejection::Empty => &mut self.empty,
            Rejection::ImageAsset => &mut self.image_asset,
            Rejection::Url => &mut self.url,
            Rejection::RelativePath => &mut self.relative_path,
            Rejection::AtToken => &mut self.at_token,
            Rejection::StylingAttribute => &mut self.styling_attribute,
            Rejection::ClassToken => &mut self.class_token,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.empty
            + self.image_asset
            + self.url
            + self.relative_path
            + self.at_token
            + self.styling_attribute
            + self.class_token
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub tag_text_matches: usize,
    pub quoted_matches: usize,
    pub rejected: RejectionCounts,
    pub duplicates: usize,
}

impl ExtractionStats {
    pub fn candidates(&self) -> usize {
        self.tag_text_matches + self.quoted_matches
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<String>,
    pub stats: ExtractionStats,
}

pub struct TextExtractor {
    image_suffixes: Vec<String>,
    styling_marker: String,
}

impl TextExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        let image_suffixes = config
            .image_extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect();

        Self {
            image_suffixes,
            styling_marker: config.styling_marker.clone(),
        }
    }

    /// Ordered, deduplicated copy strings found in `content`.
    pub fn extract(&self, content: &str, mode: ExtractMode) -> Vec<String> {
        self.extract_with_stats(content, mode).records
    }

    pub fn extract_with_stats(&self, content: &str, mode: ExtractMode) -> Extraction {
        let tag_re = match mode {
            ExtractMode::Markup => &*MARKUP_TEXT_RE,
            ExtractMode::Template => &*TEMPLATE_TEXT_RE,
        };

        let tag_texts: Vec<&str> = captures(tag_re, content).collect();
        let quoted: Vec<&str> = captures(&QUOTED_RE, content).collect();

        let mut stats = ExtractionStats {
            tag_text_matches: tag_texts.len(),
            quoted_matches: quoted.len(),
            ..ExtractionStats::default()
        };

        let mut seen = HashSet::new();
        let mut records = Vec::new();

        // All tag text first, then all quoted literals.
        for candidate in tag_texts.into_iter().chain(quoted) {
            let text = candidate.trim();

            if let Some(rejection) = self.check(text, mode) {
                stats.rejected.record(rejection);
                continue;
            }

            if seen.insert(text) {
                records.push(text.to_string());
            } else {
                stats.duplicates += 1;
            }
        }

        Extraction { records, stats }
    }

    pub fn extract_file(&self, path: &Path, mode: ExtractMode) -> Result<Extraction> {
        let content = fs::read_to_string(path).map_err(|e| SiteCopyError::SourceRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(self.extract_with_stats(&normalize_newlines(&content), mode))
    }

    /// Why a trimmed candidate is dropped, if it is.
    pub fn check(&self, text: &str, mode: ExtractMode) -> Option<Rejection> {
        if text.is_empty() {
            return Some(Rejection::Empty);
        }

        if self.image_suffixes.iter().any(|s| text.ends_with(s.as_str())) {
            return Some(Rejection::ImageAsset);
        }

        if text.starts_with("http") {
            return Some(Rejection::Url);
        }

        if mode == ExtractMode::Markup {
            return None;
        }

        if text.starts_with('/') {
            Some(Rejection::RelativePath)
        } else if text.starts_with('@') {
            Some(Rejection::AtToken)
        } else if text.contains(self.styling_marker.as_str()) {
            Some(Rejection::StylingAttribute)
        } else if CLASS_TOKEN_RE.is_match(text) {
            Some(Rejection::ClassToken)
        } else {
            None
        }
    }
}

/// Folds `\r\n` and lone `\r` into `\n` so line endings never reach a record.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}
