// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tickwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "One-button countdown timer",
    long_about = "One-button countdown timer.\n\n\
        Press enter to add a second (up to 99). Three ticks without a press start \
        the countdown. Type a number and press enter to start from that value. \
        Press enter while running or alarming to reset. Type q to quit."
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    /// Length of one tick in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Emit one JSON object per update instead of text
    #[arg(long, action)]
    pub json: bool,

    /// Do not ring the terminal bell on alarm
    #[arg(long, action)]
    pub no_bell: bool,

    /// Do not write a log file
    #[arg(long, action)]
    pub no_log_file: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Print the effective configuration and exit")]
    Config,
}
