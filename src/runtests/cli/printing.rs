use anstyle::AnsiColor;
use runtests_lib::constants::style_from_fg;
use runtests_lib::constants::ERROR_STYLE;
use runtests_lib::constants::HELP_STYLE;
use runtests_lib::constants::PRIMARY_STYLE;
use runtests_lib::testdb::TestDatabase;

/// Util function for getting the style for the CLI
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Print the names of all tests defined in the database.
///
/// This is the output of the `--list` display mode.
pub fn print_test_list(database: &TestDatabase) {
    println!(
        "{}Available tests ({}):{:#}",
        PRIMARY_STYLE,
        database.len(),
        PRIMARY_STYLE
    );

    for name in database.names() {
        println!("  {name}");
    }
}
