use std::env;
use std::path::Path;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use log::debug;
use log::info;
use log::trace;
use log::warn;
use log::LevelFilter;
use runtests_lib::constants::ERROR_STYLE;
use runtests_lib::constants::RESULTS_DIR;
use runtests_lib::ctx;
use runtests_lib::file_system::FileSystemInteractor;
use runtests_lib::options::RunOptions;
use runtests_lib::testdb::TestDatabase;

use super::log::LogTokens;
use crate::cli::def::Cli;
use crate::cli::printing::get_styles;
use crate::cli::printing::print_test_list;
use crate::launch::run_test;
use crate::launch::BsubCli;
use crate::plan::RunPlan;

/// This function parses the command that runtests was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        eprintln!("{:?}", process_command(&command));
    } else if let Err(e) = process_command(&command) {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let file_system = FileSystemInteractor { dry_run: cmd.dry };

    debug!("Reading the test database: {:?}", cmd.testing_database);
    let database = TestDatabase::load(cmd.testing_database.as_deref(), &file_system)?;

    if cmd.list {
        print_test_list(&database);
        exit(0);
    }

    let options = run_options(cmd);
    let tests_to_run = select_tests(cmd.all, &cmd.test_names, &database);

    if tests_to_run.is_empty() {
        warn!("No tests to run, name some tests or pass --all");
        return Ok(());
    }

    info!("Tests to be run: {}", tests_to_run.join(" "));

    for test_name in &tests_to_run {
        info!("Currently preparing test: {test_name}");

        let descriptor = database.describe(test_name)?;
        let plan = RunPlan::prepare(
            Path::new(RESULTS_DIR),
            test_name,
            descriptor,
            &options,
            &file_system,
        )?;

        debug!("Assembled command: {}", plan.command.join(" "));
        trace!("Reshaper output goes to {:?}", plan.output_dir);

        if !options.launch {
            debug!(
                "Launching disabled, the run script is at {:?}",
                plan.script_path
            );
        } else if cmd.dry {
            info!("Would have launched test {test_name} (dry)");
        } else {
            run_test(&plan, &options, &BsubCli, &file_system)?;
        }
    }

    Ok(())
}

/// Resolve the explicit run configuration from the parsed flags.
pub fn run_options(cmd: &Cli) -> RunOptions {
    RunOptions {
        nodes: cmd.nodes,
        tiling: cmd.tiling,
        queue: cmd.queue.clone(),
        wtime_minutes: cmd.wtime,
        code: cmd.code.clone(),
        format: cmd.format.clone(),
        only: cmd.only,
        once: cmd.once,
        skip_existing: cmd.skip_existing,
        overwrite: cmd.overwrite,
        launch: cmd.launch,
    }
}

/// Determine which tests to run.
///
/// Names not present in the database are reported and excluded, never
/// silently dropped.
pub fn select_tests(all: bool, requested: &[String], database: &TestDatabase) -> Vec<String> {
    if all {
        return database.names().cloned().collect();
    }

    let mut selected = Vec::new();

    for test_name in requested {
        if database.contains(test_name) {
            selected.push(test_name.clone());
        } else {
            warn!("{test_name} not in the test database, ignoring");
        }
    }

    selected
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the command line interface", ;
        "Make sure you are using a supported terminal",
    ))?;

    Ok(())
}

#[cfg(test)]
#[path = "tests/process.rs"]
mod tests;
