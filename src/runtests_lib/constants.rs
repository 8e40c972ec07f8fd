use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The default location of the test database, relative to the working
/// directory.
pub const TESTINFO_DEFAULT: &str = "testinfo.json";

/// The default project code charged for parallel runs.
pub const DEFAULT_PROJECT_CODE: &str = "STDD0002";

/// The default queue requested for parallel runs.
pub const DEFAULT_QUEUE: &str = "economy";

/// The default output file format passed to the reshaper.
pub const DEFAULT_FORMAT: &str = "netcdf4c";

/// The default number of processes per node for parallel runs.
pub const DEFAULT_TILING: u64 = 16;

/// The default wall-clock request, in minutes.
pub const DEFAULT_WTIME_MINUTES: u64 = 240;

/// The name of the reshaper executable invoked by every run script.
pub const RESHAPER_COMMAND: &str = "slice2series";

/// The launcher that parallel runs are started under.
pub const PARALLEL_LAUNCHER: &str = "mpirun.lsf";

/// The scheduler submission command for parallel runs.
pub const SCHEDULER_SUBMIT: &str = "bsub";

/// The verbosity level the reshaper is always invoked with.
pub const RESHAPER_VERBOSITY: u64 = 3;

/// The largest hour count representable in an LSF `-W HH:MM` request.
pub const MAX_WALL_HOURS: u64 = 99;

/// The directory, relative to the working directory, under which all test
/// run directories are created.
pub const RESULTS_DIR: &str = "results";

/// The prefix of every generated run script name.
pub const SCRIPT_PREFIX: &str = "run-";

/// The prefix of job names and log file names derived from a test name.
pub const JOB_NAME_PREFIX: &str = "reshaper-";

/// Environment exports required by the POE parallel launcher, emitted
/// verbatim into every parallel run script.
pub const POE_EXPORTS: [&str; 3] = [
    "export MP_TIMEOUT=14400",
    "export MP_PULSE=1800",
    "export MP_DEBUG_NOTIMEOUT=yes",
];

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
