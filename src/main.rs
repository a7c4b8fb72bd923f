//! gitpull: pull every git repository below a directory
//! This tool scans a directory tree for git repositories, pulls each of them
//! concurrently and prints a summary table of the results.

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::time::Duration;

use gitpull::commands::handle_pull_command;
use gitpull::core::{
    build_dispatch, get_git_concurrency, LogLevel, SyncOptions, WalkOptions, DEFAULT_LOG_LEVEL,
};

fn build_cli() -> Command {
    Command::new("gitpull")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Traverse directories and perform git pull")
        .arg(
            Arg::new("directory")
                .help("Root directory to scan for git repositories")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value(DEFAULT_LOG_LEVEL)
                .help("Logging level (options: trace, debug, info, warning, error, fatal, panic)"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Number of repositories to pull at once (default: CPU cores + 2, max 12)"),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Pull one repository at a time")
                .conflicts_with("jobs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64).range(1..))
                .help("Abort any single git command after this many seconds"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum directory depth to scan below the root"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Directory name to skip while scanning (repeatable)"),
        )
        .arg(
            Arg::new("follow-links")
                .long("follow-links")
                .help("Follow symbolic links while scanning")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("details")
                .long("details")
                .help("Add a column explaining failed pulls to the summary")
                .action(ArgAction::SetTrue),
        )
}

fn sync_options(matches: &ArgMatches) -> SyncOptions {
    let root = matches
        .get_one::<PathBuf>("directory")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let concurrency = get_git_concurrency(
        matches.get_one::<usize>("jobs").copied(),
        matches.get_flag("sequential"),
    );

    let mut options = SyncOptions::new(root, concurrency);
    options.timeout = matches
        .get_one::<u64>("timeout")
        .map(|secs| Duration::from_secs(*secs));
    options.show_details = matches.get_flag("details");
    options.walk = WalkOptions {
        max_depth: matches.get_one::<usize>("max-depth").copied(),
        follow_links: matches.get_flag("follow-links"),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|names| names.cloned().collect())
            .unwrap_or_default(),
    };
    options
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let level_name = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let level = match level_name.parse::<LogLevel>() {
        Ok(level) => level.effective(matches.get_flag("debug")),
        Err(e) => {
            println!("Invalid log level: {e}");
            std::process::exit(1);
        }
    };

    let dispatch = build_dispatch(level);
    handle_pull_command(sync_options(&matches), dispatch).await
}
