use crate::error::{Result, SiteCopyError};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, records: usize },
    /// Nothing to write; no file was created or touched.
    Skipped,
}

pub struct CopyWriter {
    output_directory: PathBuf,
    extension: String,
    buffer_size: usize,
}

impl CopyWriter {
    pub fn new<P: Into<PathBuf>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.into(),
            extension: "md".to_string(),
            buffer_size: 64 * 1024,
        }
    }

    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.output_directory).map_err(|e| SiteCopyError::OutputWrite {
            path: self.output_directory.clone(),
            source: e,
        })
    }

    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", name, self.extension))
    }

    /// Overwrites `<name>.<ext>` with one record per line.
    pub fn write_records(&self, name: &str, records: &[String]) -> Result<WriteOutcome> {
        if records.is_empty() {
            return Ok(WriteOutcome::Skipped);
        }

        let path = self.artifact_path(name);
        self.write_lines(&path, records)
            .map_err(|e| SiteCopyError::OutputWrite {
                path: path.clone(),
                source: e,
            })?;

        Ok(WriteOutcome::Written {
            path,
            records: records.len(),
        })
    }

    fn write_lines(&self, path: &Path, records: &[String]) -> std::io::Result<()> {
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);

        for record in records {
            writer.write_all(record.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        writer.flush()
    }
}
