use crate::constants::DEFAULT_FORMAT;
use crate::constants::DEFAULT_PROJECT_CODE;
use crate::constants::DEFAULT_QUEUE;
use crate::constants::DEFAULT_TILING;
use crate::constants::DEFAULT_WTIME_MINUTES;

/// The resolved configuration of a single harness invocation.
///
/// Built once from the command line and passed explicitly to every
/// component, immutable for the duration of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// The number of nodes to request, 0 means run in serial.
    pub nodes: u64,

    /// The number of processes per node in parallel runs.
    pub tiling: u64,

    /// The queue to request in parallel runs.
    pub queue: String,

    /// The wall-clock request for parallel runs, in minutes.
    pub wtime_minutes: u64,

    /// The project code charged for parallel runs.
    pub code: String,

    /// The output file format passed to the reshaper.
    pub format: String,

    /// Limit on the number of output files per process, 0 means no limit.
    pub only: u64,

    /// Write metadata to a once file.
    pub once: bool,

    /// Skip time-series generation for variables with existing output.
    pub skip_existing: bool,

    /// Force overwriting of existing output files.
    pub overwrite: bool,

    /// Launch the generated script after writing it.
    pub launch: bool,
}

impl RunOptions {
    /// Whether this run goes through the batch scheduler.
    pub fn is_parallel(&self) -> bool {
        self.nodes > 0
    }

    /// The total process count requested from the scheduler.
    pub fn total_processes(&self) -> u64 {
        self.nodes * self.tiling
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            nodes: 0,
            tiling: DEFAULT_TILING,
            queue: DEFAULT_QUEUE.to_string(),
            wtime_minutes: DEFAULT_WTIME_MINUTES,
            code: DEFAULT_PROJECT_CODE.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            only: 0,
            once: false,
            skip_existing: false,
            overwrite: false,
            launch: false,
        }
    }
}
