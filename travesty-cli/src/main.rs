//! CLI entry point of the travesty generator

mod cli;

use std::io;
use std::process;

use clap::Parser;
use cli::{Cli, run};

fn main() {
	let cli = Cli::parse();

	// RUST_LOG overrides the verbosity flag
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter())).init();

	let stdout = io::stdout();
	if let Err(e) = run(&cli, &mut stdout.lock()) {
		log::debug!("Run failed: {e:?}");
		eprintln!("Error: {e}");
		process::exit(1);
	}
}
