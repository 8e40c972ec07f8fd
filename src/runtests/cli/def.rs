use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;

/// Structure of the main command (runtests).
///
/// The long option names mirror the historical harness exactly, including
/// the underscores.
#[derive(Parser, Debug)]
#[command(about = "Prepare and launch slice-to-series reshaper tests")]
pub struct Cli {
    /// The names of the tests to prepare.
    #[arg(value_name = "TEST_NAME")]
    pub test_names: Vec<String>,

    /// Run all tests defined in the testing database.
    #[arg(short, long)]
    pub all: bool,

    /// The project code for charging in parallel runs (ignored if running
    /// in serial).
    #[arg(short, long, default_value = runtests_lib::constants::DEFAULT_PROJECT_CODE)]
    pub code: String,

    /// Force overwriting of any existing output files.
    #[arg(short = 'O', long)]
    pub overwrite: bool,

    /// The NetCDF file format to use for the output data produced by the
    /// test.
    #[arg(short, long, default_value = runtests_lib::constants::DEFAULT_FORMAT)]
    pub format: String,

    /// Location of the testinfo.json file [default: ./testinfo.json].
    #[arg(short = 'i', long = "testing_database", value_name = "PATH")]
    pub testing_database: Option<PathBuf>,

    /// List all tests, instead of running tests.
    #[arg(short, long)]
    pub list: bool,

    /// Limit each test to the indicated number of output files per
    /// processor, 0 means no limit.
    #[arg(short, long, default_value_t = 0)]
    pub only: u64,

    /// Write metadata to a once file.
    #[arg(long)]
    pub once: bool,

    /// Skip time-series generation for variables with existing output
    /// files.
    #[arg(long = "skip_existing")]
    pub skip_existing: bool,

    /// The name of the queue to request in parallel runs (ignored if
    /// running in serial).
    #[arg(short, long, default_value = runtests_lib::constants::DEFAULT_QUEUE)]
    pub queue: String,

    /// The number of nodes to request in parallel runs, 0 means run in
    /// serial.
    #[arg(short, long, default_value_t = 0)]
    pub nodes: u64,

    /// The number of processes per node to request in parallel runs
    /// (ignored if running in serial).
    #[arg(short, long, default_value_t = runtests_lib::constants::DEFAULT_TILING)]
    pub tiling: u64,

    /// The number of minutes to request for the wall clock in parallel
    /// runs (ignored if running in serial).
    #[arg(short, long, default_value_t = runtests_lib::constants::DEFAULT_WTIME_MINUTES)]
    pub wtime: u64,

    /// Launch each test after its run script has been written.
    #[arg(long)]
    pub launch: bool,

    /// Dry run, plan and log but don't actually affect anything.
    #[arg(short, long)]
    pub dry: bool,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
