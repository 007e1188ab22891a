//! Progress reporting module

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Progress bar over the files of one run
///
/// Safe to share across rayon workers; every method takes `&self`.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter; a hidden reporter draws nothing
    pub fn new(total_files: usize, hidden: bool) -> Self {
        if hidden {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(total_files as u64);
        match ProgressStyle::with_template(TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to the default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Record one finished file
    pub fn file_completed(&self, filename: &str, sentences: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename} ({sentences} sentences)"));
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.progress_bar.is_none()
    }
}
