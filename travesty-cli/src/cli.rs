//! Command-line arguments and the read, analyse, generate, write pipeline

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use thiserror::Error;
use travesty_core::configuration::{DEFAULT_LENGTH, DEFAULT_ORDER};
use travesty_core::io::{get_filename, read_source_text, write_text};
use travesty_core::{Generator, RngSource, TravestyError};

const EXAMPLES: &str = "\
Examples:
  travesty -i sample.txt -l 1000
  travesty -i shakespeare.txt -o output.txt -l 2000 -n 5
  travesty -t \"The quick brown fox\" -l 200 --seed 42";

/// Command-line arguments of the travesty generator
#[derive(Parser, Debug)]
#[command(name = "travesty")]
#[command(
	version,
	about = "Travesty Generator - a Markov chain text generator",
	long_about = "Travesty Generator - a Markov chain text generator.\n\
		Based on the 1984 BYTE magazine article by Hugh Kenner and Joseph O'Rourke: \
		new text is produced by repeatedly drawing the character that followed the \
		last N characters somewhere in the source.",
	after_help = EXAMPLES
)]
pub struct Cli {
	/// Input file path
	#[arg(short, long, value_name = "FILE")]
	pub input: Option<PathBuf>,

	/// Input text given directly (takes precedence over --input)
	#[arg(short, long, value_name = "TEXT")]
	pub text: Option<String>,

	/// Output file path (if not specified, writes to stdout)
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Length of output text in characters
	#[arg(short, long, value_name = "NUMBER", default_value_t = DEFAULT_LENGTH)]
	pub length: usize,

	/// Order level (n-gram size) for analysis, range: 1-10
	#[arg(short = 'n', long, value_name = "NUMBER", default_value_t = DEFAULT_ORDER)]
	pub order: usize,

	/// Random seed for reproducible output (random when omitted)
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// Log analysis and generation details to stderr
	#[arg(short, long)]
	pub verbose: bool,
}

/// Failures of a command-line run
#[derive(Error, Debug)]
pub enum CliError {
	#[error(transparent)]
	Travesty(#[from] TravestyError),

	#[error("Input file not found: {}", path.display())]
	InputNotFound { path: PathBuf },

	#[error("Cannot access '{}': {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("No input provided. Use -i for file or -t for text.")]
	MissingInput,

	#[error("Input text is empty.")]
	EmptyInput,
}

impl Cli {
	/// Default `RUST_LOG` filter for this run
	pub const fn log_filter(&self) -> &'static str {
		if self.verbose { "debug" } else { "warn" }
	}

	/// Returns the source text, from `--text` first, then `--input`
	///
	/// # Errors
	///
	/// Fails if no source is given or the input file cannot be read
	pub fn source_text(&self) -> Result<String, CliError> {
		if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
			return Ok(text.to_owned());
		}

		let Some(path) = &self.input else {
			return Err(CliError::MissingInput);
		};
		if !path.is_file() {
			return Err(CliError::InputNotFound { path: path.clone() });
		}
		if let Ok(name) = get_filename(path) {
			debug!("Reading source '{name}' from {}", path.display());
		}
		read_source_text(path).map_err(|source| CliError::Io { path: path.clone(), source })
	}
}

/// Runs one generation and writes the result to `out` or to `--output`
///
/// # Errors
///
/// Returns the first failure among reading, analysing, generating and writing
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), CliError> {
	let text = cli.source_text()?;
	if text.trim().is_empty() {
		return Err(CliError::EmptyInput);
	}

	let rng = match cli.seed {
		Some(seed) => RngSource::seeded(seed),
		None => RngSource::from_entropy(),
	};

	let mut generator = Generator::new(cli.order, rng)?;
	generator.analyze(&text)?;
	let report = generator.generate_with_report(cli.length)?;
	info!(
		"Generated {} characters at order {} ({} restarts)",
		report.text.chars().count(),
		generator.order(),
		report.restarts
	);

	let stdout_error = |source| CliError::Io { path: PathBuf::from("<stdout>"), source };
	match &cli.output {
		Some(path) => {
			write_text(path, &report.text).map_err(|source| CliError::Io { path: path.clone(), source })?;
			writeln!(out, "Output written to: {}", path.display()).map_err(stdout_error)?;
		}
		None => writeln!(out, "{}", report.text).map_err(stdout_error)?,
	}

	Ok(())
}
