use crate::extractor::{ExtractMode, ExtractionStats, WriteOutcome};
use crate::scanner::SourceFile;
use crate::sources::{SourceKind, SourceLocation};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    pub output_directory: PathBuf,
    pub sources: Vec<SourceOutcome>,
    pub files: Vec<FileOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceOutcome {
    pub location: &'static str,
    pub kind: SourceKind,
    pub resolved_path: PathBuf,
    pub status: SourceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    Processed { files: usize },
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub stem: String,
    pub mode: ExtractMode,
    pub records: usize,
    pub stats: ExtractionStats,
    /// `None` when nothing was extracted and no artifact was written.
    pub artifact: Option<PathBuf>,
}

impl FileOutcome {
    pub fn new(file: &SourceFile, records: usize, stats: ExtractionStats, outcome: WriteOutcome) -> Self {
        let artifact = match outcome {
            WriteOutcome::Written { path, .. } => Some(path),
            WriteOutcome::Skipped => None,
        };

        Self {
            path: file.path.clone(),
            stem: file.stem.clone(),
            mode: file.mode,
            records,
            stats,
            artifact,
        }
    }
}

impl SourceOutcome {
    pub fn new(location: &SourceLocation, resolved_path: PathBuf, status: SourceStatus) -> Self {
        Self {
            location: location.path,
            kind: location.kind,
            resolved_path,
            status,
        }
    }
}

/// Accumulates outcomes while a run is in progress.
pub struct RunRecorder {
    started_at: DateTime<Utc>,
    start_time: Instant,
    output_directory: PathBuf,
    sources: Vec<SourceOutcome>,
    files: Vec<FileOutcome>,
}

impl RunRecorder {
    pub fn new(output_directory: PathBuf) -> Self {
        Self {
            started_at: Utc::now(),
            start_time: Instant::now(),
            output_directory,
            sources: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn record_source(&mut self, outcome: SourceOutcome) {
        self.sources.push(outcome);
    }

    pub fn record_file(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(self) -> RunReport {
        RunReport {
            started_at: self.started_at,
            duration: self.start_time.elapsed(),
            output_directory: self.output_directory,
            sources: self.sources,
            files: self.files,
        }
    }
}

impl RunReport {
    pub fn files_processed(&self) -> usize {
        self.files.len()
    }

    pub fn artifacts_written(&self) -> usize {
        self.files.iter().filter(|f| f.artifact.is_some()).count()
    }

    pub fn total_records(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }

    pub fn missing_sources(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.sources
            .iter()
            .filter(|s| s.status == SourceStatus::Missing)
    }

    pub fn skipped_files(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.artifact.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::DEFAULT_SOURCES;

    fn file_outcome(stem: &str, records: usize) -> FileOutcome {
        let file = SourceFile::new(PathBuf::from(format!("{}.html", stem)), ExtractMode::Markup);
        let outcome = if records == 0 {
            WriteOutcome::Skipped
        } else {
            WriteOutcome::Written {
                path: PathBuf::from(format!("website_content/{}.md", stem)),
                records,
            }
        };
        FileOutcome::new(&file, records, ExtractionStats::default(), outcome)
    }

    #[test]
    fn test_report_totals() {
        let mut recorder = RunRecorder::new(PathBuf::from("website_content"));
        recorder.record_source(SourceOutcome::new(
            &DEFAULT_SOURCES[1],
            PathBuf::from("client/index.html"),
            SourceStatus::Processed { files: 1 },
        ));
        recorder.record_source(SourceOutcome::new(
            &DEFAULT_SOURCES[2],
            PathBuf::from("xpdel_home.html"),
            SourceStatus::Missing,
        ));
        recorder.record_file(file_outcome("index", 4));
        recorder.record_file(file_outcome("blank", 0));

        let report = recorder.finish();

        assert_eq!(report.files_processed(), 2);
        assert_eq!(report.artifacts_written(), 1);
        assert_eq!(report.total_records(), 4);
        assert_eq!(report.missing_sources().count(), 1);
        assert_eq!(report.skipped_files().next().unwrap().stem, "blank");
    }

    #[test]
    fn test_report_serializes() {
        let mut recorder = RunRecorder::new(PathBuf::from("out"));
        recorder.record_file(file_outcome("index", 2));
        let report = recorder.finish();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][0]["stem"], "index");
        assert_eq!(json["files"][0]["mode"], "markup");
        assert_eq!(json["files"][0]["artifact"], "website_content/index.md");
    }
}
