//! foldertree CLI - draw directory trees, optionally pruned to selected folders
//!
//! Usage: foldertree [ROOT] [-s PATH]... [-e PATTERN]...
//!
//! Commands:
//!   show    Print the directory tree (default)
//!   init    Write a commented .foldertree.toml template

use clap::Parser;

use foldertree::presentation::{Cli, Commands};

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    let result = match cli.into_command() {
        Commands::Show(args) => commands::show::cmd_show(&args, json),
        Commands::Init { path, force } => commands::init::cmd_init(&path, force, json),
    };

    if let Err(e) = result {
        ui::error::print_error(&e, json);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over `-v` flags; logs always go to stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .parse_default_env();
    let _ = builder.try_init();
}
