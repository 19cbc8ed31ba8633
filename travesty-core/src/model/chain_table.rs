use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use log::debug;

use super::random::RandomSource;
use super::state::State;
use crate::configuration::{DEFAULT_ORDER, MAX_ORDER, MIN_ORDER};
use crate::error::{Result, TravestyError};

/// Length in characters of every key of a chain table.
///
/// Always within `[MIN_ORDER, MAX_ORDER]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(usize);

impl Order {
	/// Validates `n` as a key length.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `n` is outside `[MIN_ORDER, MAX_ORDER]`.
	pub fn new(n: usize) -> Result<Self> {
		if !(MIN_ORDER..=MAX_ORDER).contains(&n) {
			return Err(TravestyError::invalid_configuration(
				"order",
				&n,
				&format!("must be between {MIN_ORDER} and {MAX_ORDER}"),
			));
		}
		Ok(Self(n))
	}

	pub fn get(self) -> usize {
		self.0
	}
}

impl Default for Order {
	fn default() -> Self {
		Self(DEFAULT_ORDER)
	}
}

impl TryFrom<usize> for Order {
	type Error = TravestyError;

	fn try_from(n: usize) -> Result<Self> {
		Self::new(n)
	}
}

impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Character n-gram model of a source text.
///
/// The `ChainTable` maps every `order`-length substring of the source that
/// is followed by at least one more character (a key) to the characters
/// seen right after it. It also keeps the distinct keys in first-seen
/// order, which is what random (re)starts draw from.
///
/// A table is built once by [`ChainTable::analyze`] and is read-only
/// afterwards. Analysing another text produces a new table.
///
/// # Invariants
/// - `keys` holds no duplicates and contains exactly the keys of `states`
/// - Every key is exactly `order` characters long
/// - Every state holds at least one continuation
/// - The table is never empty
#[derive(Clone, Debug)]
pub struct ChainTable {
	/// Key length of this table.
	order: Order,

	/// Mapping from a key to its observed continuations.
	states: HashMap<String, State>,

	/// Distinct keys, first-seen order.
	keys: Vec<String>,

	/// Length of the analysed text, in characters.
	source_len: usize,
}

impl ChainTable {
	/// Builds the chain table of `text` in a single left-to-right pass.
	///
	/// For every offset `i` in `0..=len - order - 1`, the key
	/// `text[i..i + order]` receives the continuation `text[i + order]`.
	/// Offsets and lengths are counted in characters.
	///
	/// # Errors
	/// - `InvalidInput` if `text` is empty or whitespace only
	/// - `InvalidInput` if `text` has fewer than `order + 1` characters
	pub fn analyze(text: &str, order: Order) -> Result<Self> {
		if text.trim().is_empty() {
			return Err(TravestyError::invalid_input("Input text cannot be empty"));
		}

		let chars: Vec<char> = text.chars().collect();
		let n = order.get();
		if chars.len() < n + 1 {
			return Err(TravestyError::invalid_input(format!(
				"Input text must be at least {} characters long, got {}",
				n + 1,
				chars.len()
			)));
		}

		let mut states: HashMap<String, State> = HashMap::new();
		let mut keys: Vec<String> = Vec::new();

		// Each window is a key followed by its continuation
		for window in chars.windows(n + 1) {
			let key: String = window[..n].iter().collect();
			let next_char = window[n];

			let state = match states.entry(key) {
				Entry::Occupied(entry) => entry.into_mut(),
				Entry::Vacant(entry) => {
					keys.push(entry.key().clone());
					entry.insert(State::new())
				}
			};
			state.add_continuation(next_char);
		}

		let table = Self { order, states, keys, source_len: chars.len() };
		debug!(
			"Analyzed {} characters at order {}: {} keys, {} continuations",
			table.source_len,
			order,
			table.len(),
			table.total_continuations()
		);
		Ok(table)
	}

	/// Key length of this table.
	pub fn order(&self) -> Order {
		self.order
	}

	/// Distinct keys in first-seen order.
	pub fn keys(&self) -> &[String] {
		&self.keys
	}

	/// Continuations recorded for `key`, in source order.
	///
	/// Returns `None` for a key that was never followed by a character.
	pub fn continuations(&self, key: &str) -> Option<&[char]> {
		self.states.get(key).map(State::continuations)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.states.contains_key(key)
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Sum of all continuation counts, equal to `source_len - order`.
	pub fn total_continuations(&self) -> usize {
		self.states.values().map(State::len).sum()
	}

	/// Length of the analysed text, in characters.
	pub fn source_len(&self) -> usize {
		self.source_len
	}

	pub(crate) fn state(&self, key: &str) -> Option<&State> {
		self.states.get(key)
	}

	/// Picks a key uniformly from the key list.
	///
	/// Returns `None` only if the random source answers out of range.
	pub(crate) fn random_key<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.keys.is_empty() {
			return None;
		}
		self.keys.get(rng.next_index(self.keys.len())).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn order(n: usize) -> Order {
		Order::new(n).unwrap()
	}

	#[test]
	fn order_bounds() {
		assert!(Order::new(0).is_err());
		assert!(Order::new(1).is_ok());
		assert!(Order::new(10).is_ok());
		assert!(matches!(
			Order::new(11),
			Err(TravestyError::InvalidConfiguration { parameter: "order", .. })
		));
		assert_eq!(Order::default().get(), DEFAULT_ORDER);
		assert_eq!(Order::try_from(4).unwrap().to_string(), "4");
	}

	#[test]
	fn abab_at_order_one() {
		let table = ChainTable::analyze("abab", order(1)).unwrap();
		assert_eq!(table.keys(), &["a", "b"]);
		assert_eq!(table.continuations("a"), Some(&['b', 'b'][..]));
		assert_eq!(table.continuations("b"), Some(&['a'][..]));
		assert_eq!(table.total_continuations(), 3);
	}

	#[test]
	fn last_window_has_no_entry() {
		let table = ChainTable::analyze("aabb", order(2)).unwrap();
		assert_eq!(table.keys(), &["aa", "ab"]);
		assert_eq!(table.continuations("aa"), Some(&['b'][..]));
		assert_eq!(table.continuations("ab"), Some(&['b'][..]));
		assert!(!table.contains_key("bb"));
	}

	#[test]
	fn repeated_key_keeps_scan_order() {
		let table = ChainTable::analyze("the then them", order(3)).unwrap();
		assert_eq!(table.continuations("the"), Some(&[' ', 'n', 'm'][..]));
		assert_eq!(table.keys().iter().filter(|k| k.as_str() == "the").count(), 1);
	}

	#[test]
	fn shortest_valid_text() {
		let table = ChainTable::analyze("xyz", order(2)).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.continuations("xy"), Some(&['z'][..]));
	}

	#[test]
	fn rejects_short_and_blank_text() {
		assert!(matches!(
			ChainTable::analyze("xy", order(2)),
			Err(TravestyError::InvalidInput { .. })
		));
		assert!(matches!(
			ChainTable::analyze("", order(1)),
			Err(TravestyError::InvalidInput { .. })
		));
		assert!(matches!(
			ChainTable::analyze(" \n\t ", order(1)),
			Err(TravestyError::InvalidInput { .. })
		));
	}

	#[test]
	fn counts_characters_not_bytes() {
		let table = ChainTable::analyze("héllo", order(2)).unwrap();
		assert_eq!(table.source_len(), 5);
		assert_eq!(table.keys(), &["hé", "él", "ll"]);
		assert_eq!(table.continuations("hé"), Some(&['l'][..]));
	}
}
