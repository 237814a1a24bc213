use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal")]
pub struct Args {
    /// RNG seed for tile spawns (defaults to one derived from the clock).
    #[arg(long)]
    pub seed: Option<u32>,
    /// Write logs to this file (the terminal itself is used for the board).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Log level used with --log-file, e.g. "info", "debug", "trace".
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}
