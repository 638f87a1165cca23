//! CLI definition and the console-facing adapters.

pub mod config;
pub mod console;
pub mod sorter;
pub mod view;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// rolo - contacts and notes from the console
#[derive(Parser, Debug)]
#[command(name = "rolo", version, about, long_about = None)]
pub struct Cli {
    /// Data directory for the saved books (overrides config file)
    #[arg(short = 'd', long)]
    pub data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
