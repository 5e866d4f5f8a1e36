//! Error types for jxn-attrs.

use thiserror::Error;

/// Error type for registry and expression operations
///
/// The attribute formatters themselves never surface these: malformed input
/// degrades to an empty attribute string because the output is embedded
/// directly into HTML templates. The explicit-`Result` surfaces are class
/// registration and expression serialization.
#[derive(Debug, Error)]
pub enum AttrsError {
	/// A class name was registered more than once
	#[error("Class already registered: {0}")]
	DuplicateClass(String),

	/// An expression could not be serialized to JSON
	#[error("Expression serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for jxn-attrs operations
pub type Result<T> = std::result::Result<T, AttrsError>;
