//! Batch progress display for document mapping

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar advancing once per document
///
/// Skipped documents are reported above the bar so the bar itself only
/// ever shows the document currently being mapped.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    skipped: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            skipped: 0,
        }
    }

    /// Create the bar for `document_count` documents
    pub fn initialize(&mut self, document_count: usize) {
        let bar = ProgressBar::new(document_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
        self.skipped = 0;
    }

    /// Show the document now being mapped
    pub fn start_document(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Advance after a document was written
    pub fn complete_document(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Advance after a document was skipped, printing `reason` above the bar
    pub fn skip_document(&mut self, path: &Path, reason: &str) {
        self.skipped += 1;
        if let Some(ref bar) = self.bar {
            bar.println(format!("Skipping: {} ({reason})", path.display()));
            bar.inc(1);
        }
    }

    /// Number of documents skipped since the last `initialize`
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Close the bar with a closing message
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("done");
        }
    }
}
