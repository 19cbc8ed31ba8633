use thiserror::Error;

/// Errors reported by analysis and generation.
///
/// All of them are detected synchronously, before any output is produced,
/// and none of them is transient: retrying the same call fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TravestyError {
	/// A construction parameter is outside its accepted range.
	#[error("Invalid configuration: {parameter} = {value} ({reason})")]
	InvalidConfiguration {
		parameter: &'static str,
		value: String,
		reason: String,
	},

	/// The text or the requested length cannot be used.
	#[error("Invalid input: {reason}")]
	InvalidInput { reason: String },

	/// Generation was requested before any successful analysis.
	#[error("No text has been analyzed, analyze a source text first")]
	ModelNotReady,
}

impl TravestyError {
	pub(crate) fn invalid_configuration(
		parameter: &'static str,
		value: &impl ToString,
		reason: &impl ToString,
	) -> Self {
		Self::InvalidConfiguration {
			parameter,
			value: value.to_string(),
			reason: reason.to_string(),
		}
	}

	pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
		Self::InvalidInput { reason: reason.into() }
	}
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TravestyError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn configuration_message_names_parameter_and_value() {
		let error = TravestyError::invalid_configuration("order", &11, &"must be between 1 and 10");
		let message = error.to_string();
		assert!(message.contains("order"));
		assert!(message.contains("11"));
		assert!(message.contains("between 1 and 10"));
	}

	#[test]
	fn kinds_are_distinct() {
		assert_ne!(TravestyError::ModelNotReady, TravestyError::invalid_input("x"));
		assert!(matches!(
			TravestyError::invalid_input("empty"),
			TravestyError::InvalidInput { .. }
		));
	}
}
