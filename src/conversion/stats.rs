//! Tally and statistics for a batch conversion run

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// A file that could not be converted, with the reason
#[derive(Debug, Clone)]
pub struct FailedConversion {
    pub source: PathBuf,
    pub message: String,
}

/// Success and failure counters for a batch, updated once per job
#[derive(Debug, Clone, Default)]
pub struct ConversionTally {
    pub successful: usize,
    pub failed: usize,
    /// Total bytes written across successful conversions
    pub bytes_written: u64,
    pub failures: Vec<FailedConversion>,
}

impl ConversionTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, bytes: usize) {
        self.successful += 1;
        self.bytes_written += bytes as u64;
    }

    pub fn record_failure(&mut self, source: PathBuf, message: String) {
        self.failed += 1;
        self.failures.push(FailedConversion { source, message });
    }

    /// Number of jobs recorded so far
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Timing and volume figures shown by `--stats`
#[derive(Debug, Clone)]
pub struct ConversionStatistics {
    pub file_count: usize,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

impl ConversionStatistics {
    pub fn from_tally(tally: &ConversionTally, elapsed: Duration) -> Self {
        Self {
            file_count: tally.total(),
            bytes_written: tally.bytes_written,
            elapsed,
        }
    }

    /// Average time spent per file in milliseconds
    pub fn avg_time_per_file_ms(&self) -> f32 {
        if self.file_count == 0 {
            0.0
        } else {
            self.elapsed.as_millis() as f32 / self.file_count as f32
        }
    }

    pub fn files_per_sec(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.file_count as f32 / secs
        } else {
            0.0
        }
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Processed {} files in {:.1}s - {:.1}ms/file, {:.1} files/s, {} bytes written",
            self.file_count,
            self.elapsed.as_secs_f32(),
            self.avg_time_per_file_ms(),
            self.files_per_sec(),
            self.bytes_written
        )
    }
}

/// Wall-clock tracker for a batch
pub struct PerformanceTracker {
    start_time: Instant,
}

impl PerformanceTracker {
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn finish(self, tally: &ConversionTally) -> ConversionStatistics {
        ConversionStatistics::from_tally(tally, self.start_time.elapsed())
    }
}
