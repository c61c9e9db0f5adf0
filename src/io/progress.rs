//! Terminal progress for batch fills
//!
//! One spinner per grid while it is being solved, plus a batch bar when more
//! than one grid is processed.

use crate::io::configuration::{PROGRESS_REFRESH_INTERVAL, SPINNER_TICK_MS};
use crate::io::events::{FillObserver, SolveEvent};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix:.bold} [{elapsed}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Grids: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of grids
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Add the batch bar when several grids will be filled
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a spinner for one grid and return an observer driving it
    pub fn observer(&self, path: &Path) -> ProgressObserver {
        let spinner = self.multi_progress.add(ProgressBar::new_spinner());
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.set_prefix(path.file_name().unwrap_or_default().to_string_lossy().to_string());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        ProgressObserver::new(spinner)
    }

    /// Close a grid's spinner and advance the batch bar
    pub fn complete_file(&self, observer: &ProgressObserver, solved: bool, elapsed: Duration) {
        let mark = if solved { "✓" } else { "✗" };
        observer.bar.finish_with_message(format!(
            "{mark} {} placed, {} removed in {:.2?}",
            observer.placed, observer.removed, elapsed
        ));
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All grids processed");
        }
        let _ = self.multi_progress.clear();
    }
}

/// Observer that summarizes a solve on a spinner
#[derive(Debug)]
pub struct ProgressObserver {
    bar: ProgressBar,
    phase: &'static str,
    placed: usize,
    removed: usize,
    events: usize,
}

impl ProgressObserver {
    /// Drive an existing progress bar
    pub const fn new(bar: ProgressBar) -> Self {
        Self {
            bar,
            phase: "starting",
            placed: 0,
            removed: 0,
            events: 0,
        }
    }

    /// Words placed so far
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Words removed so far, for any reason
    pub const fn removed(&self) -> usize {
        self.removed
    }

    fn refresh(&self) {
        self.bar.set_message(format!(
            "{}: {} placed, {} removed",
            self.phase, self.placed, self.removed
        ));
    }
}

impl FillObserver for ProgressObserver {
    fn on_event(&mut self, event: &SolveEvent<'_>) {
        self.events += 1;
        match event {
            SolveEvent::PhaseStarted(phase) => {
                self.phase = phase.label();
                self.refresh();
                return;
            }
            SolveEvent::Placed(_) => self.placed += 1,
            SolveEvent::Removed { .. } => self.removed += 1,
            SolveEvent::InvalidWord(_) | SolveEvent::Snapshot(_) | SolveEvent::Finished { .. } => {}
        }
        // Throttled; a solve can emit millions of events
        if self.events.is_multiple_of(PROGRESS_REFRESH_INTERVAL) {
            self.refresh();
        }
    }
}
