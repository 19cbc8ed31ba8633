//! Bounds and defaults for analysis and generation

/// Smallest accepted key length
pub const MIN_ORDER: usize = 1;

/// Largest accepted key length
pub const MAX_ORDER: usize = 10;

/// Key length used when none is given
pub const DEFAULT_ORDER: usize = 3;

/// Requested output length (in characters) used when none is given
pub const DEFAULT_LENGTH: usize = 500;

/// Inserted before the fresh key each time the walk restarts after a dead end
pub const RESTART_SEPARATOR: char = ' ';
