//! rolo - contacts and notes from the console

pub mod book;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ports;
pub mod resolver;
pub mod session;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, config::Config, console::StdConsole, sorter::FsSorter, view::ConsoleView};
use infra::JsonStore;
use session::Session;

/// Main entry point for the console application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.data_dir.as_ref());

    if cli.verbose > 0 {
        eprintln!("data directory: {}", data_dir.display());
    }

    let store = JsonStore::new(data_dir);
    let mut console = StdConsole;
    let view = ConsoleView;
    let sorter = FsSorter;

    Session::new(&store, &mut console, &view, &sorter).run()
}
