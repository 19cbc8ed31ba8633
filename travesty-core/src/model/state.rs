use super::random::RandomSource;

/// Continuations observed after one key of the chain table.
///
/// A `State` stores every character that followed its key in the source
/// text, in scan order, duplicates included. Frequency is carried by
/// repetition: a character seen k times is k times as likely to be drawn.
///
/// ## Invariants
/// - Once inserted in a `ChainTable`, a state holds at least one continuation
/// - Continuation order is source order, so a scripted random source
///   always picks the same character
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Outgoing continuations, e.g. `['e', 'a', 'e']` for a key seen three times.
	continuations: Vec<char>,
}

impl State {
	/// Creates a new empty state.
	pub fn new() -> Self {
		Self { continuations: Vec::new() }
	}

	/// Records one occurrence of `next_char` after this state's key.
	pub fn add_continuation(&mut self, next_char: char) {
		self.continuations.push(next_char);
	}

	/// All recorded continuations, in source order.
	pub fn continuations(&self) -> &[char] {
		&self.continuations
	}

	/// Number of recorded continuations.
	pub fn len(&self) -> usize {
		self.continuations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.continuations.is_empty()
	}

	/// Draws the next character uniformly from the continuations.
	///
	/// Uniform over the sequence means frequency-weighted over distinct
	/// characters, since repeats are kept.
	///
	/// Returns `None` if the state has no continuations.
	pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<char> {
		if self.continuations.is_empty() {
			return None;
		}
		let index = rng.next_index(self.continuations.len());
		self.continuations.get(index).copied()
	}
}

impl Default for State {
	fn default() -> Self {
		Self::new()
	}
}
