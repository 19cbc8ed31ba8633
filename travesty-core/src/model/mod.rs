//! Top-level module for travesty analysis and generation.
//!
//! - Chain table construction (`ChainTable`, `Order`)
//! - Per-key continuation storage (`State`)
//! - Injectable randomness (`RandomSource`)
//! - The generation walk and its stateful wrapper (`Generator`)

/// Fixed-order character n-gram table built from a source text.
///
/// Holds the key list used for random restarts and, for every key,
/// the characters that followed it.
pub mod chain_table;

/// Random walk over a chain table, with dead-end recovery.
pub mod generator;

/// Uniform index sources: seeded `rand` generators and scripted replays.
pub mod random;

/// Continuations recorded for a single key.
///
/// Not exposed publicly.
mod state;
