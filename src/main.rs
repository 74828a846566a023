use std::path::Path;

use clap::Parser;
use jot::cli::commands::Cli;
use jot::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => jot::tui::run(cli.dir.as_deref().map(Path::new)),
        Some(cmd) => handlers::dispatch(cmd, cli.json, cli.dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
