use crate::scanner::SourceFile;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const FILE_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>4}/{len:4} files {msg}";

/// Owns the terminal bars of a run. A disabled manager hands out hidden bars.
pub struct ProgressManager {
    bars: Option<MultiProgress>,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        Self {
            bars: enabled.then(MultiProgress::new),
        }
    }

    pub fn file_bar(&self, total_files: usize) -> FileProgress {
        let bar = match self.bars {
            Some(ref bars) => {
                let bar = bars.add(ProgressBar::new(total_files as u64));
                bar.set_style(
                    ProgressStyle::with_template(FILE_BAR_TEMPLATE)
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("#>-"),
                );
                bar.enable_steady_tick(Duration::from_millis(100));
                bar
            }
            None => ProgressBar::hidden(),
        };

        FileProgress { bar }
    }

    /// Runs `f` with the bars lifted so printed lines are not drawn over.
    pub fn suspend<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self.bars {
            Some(ref bars) => bars.suspend(f),
            None => f(),
        }
    }

    pub fn clear(&self) {
        if let Some(ref bars) = self.bars {
            bars.clear().ok();
        }
    }
}

/// Position and current file of a run, one tick per source file.
pub struct FileProgress {
    bar: ProgressBar,
}

impl FileProgress {
    pub fn start_file(&self, done: usize, file: &SourceFile) {
        self.bar.set_position(done as u64);
        self.bar
            .set_message(format!("Processing {}", file.display_path()));
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }

    pub fn finish(&self, done: usize, elapsed: Duration) {
        self.bar.set_position(done as u64);
        self.bar.finish_with_message(format!(
            "Processed {} files in {}",
            done,
            format_duration(elapsed)
        ));
    }
}

pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}
