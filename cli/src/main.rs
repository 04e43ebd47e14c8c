//! longmaze: search binary mazes for long simple routes.
//!
//! Run: cargo run -- beam maze.bmp -o solved.png

mod cli;
mod commands;
mod logger;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.log_level()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
