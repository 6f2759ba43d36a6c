pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod plan;
pub mod scanner;
pub mod sources;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, ExtractionConfig, OutputConfig};
pub use error::{Result, SiteCopyError, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    CopyWriter, ExtractMode, Extraction, RunReport, TextExtractor, WriteOutcome,
};
pub use plan::RunPlan;
pub use scanner::{SourceFile, TemplateScanner};
pub use sources::{SourceKind, SourceLocation, DEFAULT_SOURCES};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use extractor::{FileOutcome, RunRecorder, SourceOutcome, SourceStatus};
use sources::ResolvedSource;
use std::path::{Path, PathBuf};

/// Main library interface: walks the source list and writes one copy file
/// per processed source file.
pub struct SiteCopy {
    config: Config,
    root: PathBuf,
    sources: Vec<SourceLocation>,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl SiteCopy {
    pub fn new<P: Into<PathBuf>>(
        config: Config,
        root: P,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
    ) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            root: root.into(),
            sources: DEFAULT_SOURCES.to_vec(),
            output_formatter,
            progress_manager,
        }
    }

    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            cli_args.root.clone(),
            output_mode,
            cli_args.verbosity_level(),
            cli_args.quiet,
        ))
    }

    /// Replaces the source list. The binary always runs [`DEFAULT_SOURCES`].
    pub fn with_sources(mut self, sources: &[SourceLocation]) -> Self {
        self.sources = sources.to_vec();
        self
    }

    /// Resolves every source location without reading or writing anything.
    pub fn plan(&self) -> Result<RunPlan> {
        let plan = RunPlan::build(&self.sources, &self.root, &self.config.extraction)?;

        for source in &plan.sources {
            if source.kind_mismatch() {
                self.output_formatter.warning(&format!(
                    "{} is declared as a {} but is not; following the filesystem",
                    source.location.path, source.location.kind
                ));
            }
        }

        Ok(plan)
    }

    pub fn run(&self) -> Result<RunReport> {
        self.output_formatter.start_operation("Extracting website copy");

        let plan = self.plan()?;

        let output_dir = self.config.output_directory(&self.root);
        let writer =
            CopyWriter::new(&output_dir).with_extension(self.config.output.extension.clone());
        writer.initialize()?;
        self.output_formatter
            .info(&format!("Writing copy to {}", output_dir.display()));

        let extractor = TextExtractor::new(&self.config.extraction);
        let mut recorder = RunRecorder::new(output_dir);

        let file_progress = self.progress_manager.file_bar(plan.total_files());
        let mut processed = 0;

        for source in &plan.sources {
            let status = match source.resolved {
                ResolvedSource::Missing(ref path) => {
                    self.output_formatter
                        .debug(&format!("Skipping missing source {}", path.display()));
                    SourceStatus::Missing
                }
                _ => SourceStatus::Processed {
                    files: source.files.len(),
                },
            };
            recorder.record_source(SourceOutcome::new(
                &source.location,
                source.resolved.path().to_path_buf(),
                status,
            ));

            for file in &source.files {
                file_progress.start_file(processed, file);

                let outcome = match self.process_file(file, &extractor, &writer) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        file_progress.abandon();
                        return Err(e);
                    }
                };
                recorder.record_file(outcome);
                processed += 1;
            }
        }

        file_progress.finish(processed, recorder.elapsed());

        Ok(recorder.finish())
    }

    fn process_file(
        &self,
        file: &SourceFile,
        extractor: &TextExtractor,
        writer: &CopyWriter,
    ) -> Result<FileOutcome> {
        let extraction = extractor.extract_file(&file.path, file.mode)?;
        let stats = &extraction.stats;

        self.progress_manager.suspend(|| {
            self.output_formatter.debug(&format!(
                "{}: {} candidates, {} rejected, {} duplicates",
                file.display_path(),
                stats.candidates(),
                stats.rejected.total(),
                stats.duplicates
            ))
        });

        let outcome = writer.write_records(&file.stem, &extraction.records)?;

        if outcome == WriteOutcome::Skipped {
            self.progress_manager.suspend(|| {
                self.output_formatter
                    .info(&format!("Nothing extracted from {}", file.display_path()))
            });
        }

        Ok(FileOutcome::new(
            file,
            extraction.records.len(),
            extraction.stats,
            outcome,
        ))
    }

    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_directory(&self) -> PathBuf {
        self.config.output_directory(&self.root)
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    pub fn handle_error(&self, error: &SiteCopyError) {
        self.progress_manager.clear();
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Extracts copy from `content` with the default filters.
pub fn extract_text(content: &str, mode: ExtractMode) -> Vec<String> {
    TextExtractor::default().extract(content, mode)
}

pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
