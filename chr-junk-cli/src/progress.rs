//! Terminal progress bar for tile export.

use indicatif::{ProgressBar, ProgressStyle};

use chr_junk_export::ExportProgress;

/// Progress bar advanced at the export report points.
pub(crate) struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub(crate) fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        bar.set_style(
            ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} tiles")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Self { bar }
    }
}

impl ExportProgress for BarProgress {
    fn on_tile(&self, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
    }

    fn on_complete(&self, _total: usize) {
        self.bar.finish_and_clear();
    }
}
