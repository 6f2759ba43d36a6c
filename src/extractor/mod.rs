pub mod copy_writer;
pub mod patterns;
pub mod report;
pub mod text_extractor;

pub use copy_writer::{CopyWriter, WriteOutcome};
pub use report::{FileOutcome, RunRecorder, RunReport, SourceOutcome, SourceStatus};
pub use text_extractor::{
    ExtractMode, Extraction, ExtractionStats, Rejection, RejectionCounts, TextExtractor,
};
