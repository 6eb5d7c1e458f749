//! Batch conversion of a source tree into a mirrored target tree

use crate::cli::path_mapping::map_input_to_output;
use crate::conversion::engine::Rasterizer;
use crate::conversion::stats::{ConversionStatistics, ConversionTally, PerformanceTracker};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::discovery::{find_matching_files, mirror_directory_tree};
use crate::error::ConversionError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One source file scheduled for conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Progress notifications emitted while a batch runs
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// Directory skeleton finished
    Mirrored { directories: usize },
    /// Discovery finished with `count` matching files
    Discovered { count: usize },
    Converted { job: &'a ConversionJob, bytes: usize },
    Failed {
        source: &'a Path,
        error: &'a ConversionError,
    },
}

/// Receives batch events. `()` discards them.
pub trait BatchObserver {
    fn on_event(&mut self, event: BatchEvent<'_>);
}

impl BatchObserver for () {
    fn on_event(&mut self, _event: BatchEvent<'_>) {}
}

/// Outcome of a batch that ran to completion
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub discovered: usize,
    pub directories_mirrored: usize,
    pub tally: ConversionTally,
    /// Absolute path of the target root
    pub target_root: PathBuf,
    pub statistics: ConversionStatistics,
}

/// Drives mirroring, discovery and per-file conversion for one run
pub struct BatchConverter<'r> {
    config: ConversionConfig,
    rasterizer: &'r dyn Rasterizer,
}

impl std::fmt::Debug for BatchConverter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchConverter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'r> BatchConverter<'r> {
    pub fn new(config: ConversionConfig, rasterizer: &'r dyn Rasterizer) -> ConversionResult<Self> {
        config.validate().map_err(ConversionError::configuration)?;
        Ok(Self { config, rasterizer })
    }

    /// Convert every matching file under `source_root` into `target_root`.
    ///
    /// Fails only for run-level problems: a missing source root, a target
    /// tree that cannot be created, or no matching files. Individual file
    /// failures are tallied in the returned report.
    pub fn run(
        &self,
        source_root: &Path,
        target_root: &Path,
        observer: &mut dyn BatchObserver,
    ) -> ConversionResult<BatchReport> {
        if !source_root.is_dir() {
            return Err(ConversionError::SourceMissing {
                path: source_root.to_path_buf(),
            });
        }

        let directories_mirrored = mirror_directory_tree(source_root, target_root)?;
        let absolute_target =
            fs::canonicalize(target_root).map_err(|e| ConversionError::io(target_root, e))?;
        observer.on_event(BatchEvent::Mirrored {
            directories: directories_mirrored,
        });

        let files = find_matching_files(source_root, &self.config.input_extension)?;
        if files.is_empty() {
            return Err(ConversionError::NoFilesFound {
                path: source_root.to_path_buf(),
                extension: self.config.input_extension.clone(),
            });
        }
        observer.on_event(BatchEvent::Discovered { count: files.len() });
        log::info!("found {} files under {}", files.len(), source_root.display());

        let tracker = PerformanceTracker::start();
        let mut tally = ConversionTally::new();

        for source_path in &files {
            let outcome = self
                .job_for(source_root, target_root, source_path)
                .and_then(|job| self.convert_job(&job).map(|bytes| (job, bytes)));

            match outcome {
                Ok((job, bytes)) => {
                    tally.record_success(bytes);
                    observer.on_event(BatchEvent::Converted { job: &job, bytes });
                }
                Err(error) => {
                    log::debug!("{} failed: {:?}", source_path.display(), error);
                    tally.record_failure(source_path.clone(), error.to_string());
                    observer.on_event(BatchEvent::Failed {
                        source: source_path,
                        error: &error,
                    });
                }
            }
        }

        let statistics = tracker.finish(&tally);

        Ok(BatchReport {
            discovered: files.len(),
            directories_mirrored,
            tally,
            target_root: absolute_target,
            statistics,
        })
    }

    /// Build the job for one discovered file
    pub fn job_for(
        &self,
        source_root: &Path,
        target_root: &Path,
        source_path: &Path,
    ) -> ConversionResult<ConversionJob> {
        let target_path = map_input_to_output(
            source_root,
            source_path,
            target_root,
            &self.config.output_extension,
        )
        .ok_or_else(|| {
            ConversionError::io(
                source_path,
                io::Error::other("file is outside the source directory"),
            )
        })?;

        Ok(ConversionJob {
            source_path: source_path.to_path_buf(),
            target_path,
            width: self.config.width,
            height: self.config.height,
        })
    }

    /// Rasterize one job and write it, overwriting any existing output.
    /// Returns the number of bytes written.
    pub fn convert_job(&self, job: &ConversionJob) -> ConversionResult<usize> {
        if let Some(parent) = job.target_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConversionError::io(parent, e))?;
        }

        let bytes = self
            .rasterizer
            .rasterize(&job.source_path, job.width, job.height)?;

        fs::write(&job.target_path, &bytes).map_err(|e| ConversionError::io(&job.target_path, e))?;
        Ok(bytes.len())
    }
}
