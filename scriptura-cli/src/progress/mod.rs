//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for page normalization
///
/// Safe to update from worker threads.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for a number of pages
    pub fn init_pages(&mut self, total_pages: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_pages);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} pages {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a normalized page
    pub fn page_completed(&self, page: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Normalized: {page}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Number of pages reported so far
    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_pages(3);
        reporter.page_completed("f1r");
        reporter.finish();
        assert_eq!(reporter.position(), 0);
    }

    #[test]
    fn test_counts_pages() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_pages(2);
        reporter.page_completed("f1r");
        reporter.page_completed("f1v");
        assert_eq!(reporter.position(), 2);
        reporter.finish();
    }
}
