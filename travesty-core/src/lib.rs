//! Character n-gram travesty generation library.
//!
//! This crate provides the two halves of a classic "travesty generator":
//! - Analysis of a source text into a table of `order`-length keys and the
//!   characters observed right after each of them
//! - A random walk over that table producing new, source-flavoured text,
//!   restarting from a random key whenever the walk reaches a dead end
//!
//! Randomness is never ambient: every walk takes a `RandomSource`, so a
//! seeded or scripted source makes generation fully reproducible.

/// Chain table construction, random sources and the generation walk.
pub mod model;

/// Default values and bounds shared by the library and its front-ends.
pub mod configuration;

/// Error type returned by analysis and generation.
pub mod error;

/// Small file helpers for reading source text and writing results.
pub mod io;

pub use error::{Result, TravestyError};
pub use model::chain_table::{ChainTable, Order};
pub use model::generator::{GenerationReport, Generator, generate, generate_with_report};
pub use model::random::{RandomSource, RngSource, ScriptedSource};
