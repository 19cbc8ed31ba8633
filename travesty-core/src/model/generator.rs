use std::iter;

use log::{debug, trace};

use super::chain_table::{ChainTable, Order};
use super::random::RandomSource;
use crate::configuration::RESTART_SEPARATOR;
use crate::error::{Result, TravestyError};

/// Outcome of one generation walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
	/// Generated text, at least as long as requested.
	pub text: String,
	/// Number of dead ends hit, i.e. separators inserted.
	pub restarts: usize,
}

/// Generates text from `model`, see [`generate_with_report`].
pub fn generate<R: RandomSource + ?Sized>(model: &ChainTable, length: usize, rng: &mut R) -> Result<String> {
	generate_with_report(model, length, rng).map(|report| report.text)
}

/// Random walk over a chain table.
///
/// # Behavior
/// - Starts from a key drawn uniformly from the key list, copied verbatim
/// - While the output is shorter than `length` characters:
///   - if the current key has continuations, draws one, appends it and
///     slides the key window by one character
///   - otherwise (dead end) draws a fresh key and appends the separator
///     followed by that key, without drawing a character this round
///
/// # Notes
/// - The length test only happens at the top of the loop, so the output
///   may exceed `length` by up to `order + 1` characters after a restart
///   and by up to `order - 1` when `length < order`.
/// - Lengths are counted in characters.
///
/// # Errors
/// - `ModelNotReady` if `model` holds no key
/// - `InvalidInput` if `length` is 0
pub fn generate_with_report<R: RandomSource + ?Sized>(
	model: &ChainTable,
	length: usize,
	rng: &mut R,
) -> Result<GenerationReport> {
	if model.is_empty() {
		return Err(TravestyError::ModelNotReady);
	}
	if length < 1 {
		return Err(TravestyError::invalid_input("Length must be positive"));
	}

	let order = model.order().get();
	let mut output = String::with_capacity(length + order + 1);
	let mut output_len = 0;
	let mut restarts = 0;

	let mut key = model.random_key(rng).ok_or(TravestyError::ModelNotReady)?.to_owned();
	output.push_str(&key);
	output_len += order;

	while output_len < length {
		let next_char = model.state(&key).and_then(|state| state.sample(rng));

		match next_char {
			Some(c) => {
				output.push(c);
				output_len += 1;
				key = key.chars().skip(1).chain(iter::once(c)).collect();
			}
			None => {
				let restart = model.random_key(rng).ok_or(TravestyError::ModelNotReady)?;
				trace!("Dead end on {key:?}, restarting from {restart:?}");

				output.push(RESTART_SEPARATOR);
				output.push_str(restart);
				output_len += 1 + order;
				restarts += 1;
				key = restart.to_owned();
			}
		}
	}

	debug!("Generated {output_len} characters ({length} requested) with {restarts} restarts");
	Ok(GenerationReport { text: output, restarts })
}

/// Stateful travesty generator.
///
/// Owns a fixed order, its random source and, after a successful
/// [`analyze`](Generator::analyze), the chain table of the last analysed text.
///
/// # Responsibilities
/// - Validate the order once, at construction
/// - Replace the whole model on each successful analysis
/// - Walk the current model with its own random source
///
/// `analyze` and `generate` both take `&mut self`, so a generator can
/// never be re-analysed while a walk over its model is running.
#[derive(Debug)]
pub struct Generator<R> {
	order: Order,
	model: Option<ChainTable>,
	rng: R,
}

impl<R: RandomSource> Generator<R> {
	/// Creates a generator with no model yet.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `order` is outside `[1, 10]`.
	pub fn new(order: usize, rng: R) -> Result<Self> {
		Ok(Self { order: Order::new(order)?, model: None, rng })
	}

	/// Analyses `text`, replacing any previous model.
	///
	/// On error the previous model, if any, is kept.
	pub fn analyze(&mut self, text: &str) -> Result<()> {
		let table = ChainTable::analyze(text, self.order)?;
		self.model = Some(table);
		Ok(())
	}

	/// Generates at least `length` characters from the current model.
	///
	/// # Errors
	/// - `ModelNotReady` if nothing has been analysed yet
	/// - `InvalidInput` if `length` is 0
	pub fn generate(&mut self, length: usize) -> Result<String> {
		self.generate_with_report(length).map(|report| report.text)
	}

	/// Same as [`generate`](Generator::generate), also reporting restarts.
	pub fn generate_with_report(&mut self, length: usize) -> Result<GenerationReport> {
		let model = self.model.as_ref().ok_or(TravestyError::ModelNotReady)?;
		generate_with_report(model, length, &mut self.rng)
	}

	pub fn order(&self) -> Order {
		self.order
	}

	/// Current model, `None` before the first successful analysis.
	pub fn model(&self) -> Option<&ChainTable> {
		self.model.as_ref()
	}
}
