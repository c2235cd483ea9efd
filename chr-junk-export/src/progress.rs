//! Export progress reporting.

/// Progress is reported every this many tiles, plus once for the last tile.
pub const PROGRESS_INTERVAL: usize = 100;

/// True when tile `current` (1-based) of `total` should be reported.
pub fn is_report_point(current: usize, total: usize) -> bool {
    current.is_multiple_of(PROGRESS_INTERVAL) || current == total
}

/// Trait for receiving export progress updates.
pub trait ExportProgress {
    /// Called at every report point while tiles are rendered.
    fn on_tile(&self, current: usize, total: usize);

    /// Called once all tiles have been rendered.
    fn on_complete(&self, total: usize);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ExportProgress for SilentProgress {
    fn on_tile(&self, _current: usize, _total: usize) {}
    fn on_complete(&self, _total: usize) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ExportProgress for LogProgress {
    fn on_tile(&self, current: usize, total: usize) {
        log::info!("Processed {}/{} tiles", current, total);
    }

    fn on_complete(&self, total: usize) {
        log::info!("Rendered {} tiles", total);
    }
}
