use thiserror::Error;

use super::types::NodeId;

/// Everything the viewport can reject. None of these are fatal: callers log
/// and keep the previous state.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ViewportError {
	/// A pointer or touch position, or the pan it would produce, is NaN or infinite.
	#[error("non-finite pointer coordinate ({x}, {y})")]
	NonFiniteInput {
		/// Offending x.
		x: f64,
		/// Offending y.
		y: f64,
	},
	/// A wheel delta is NaN or infinite.
	#[error("non-finite wheel delta {0}")]
	NonFiniteWheel(f64),
	/// Selection of an id the loaded graph does not contain.
	#[error("node #{0} does not exist in the loaded roadmap")]
	UnknownNode(NodeId),
	/// Two nodes in one document share an id.
	#[error("node id #{0} appears more than once")]
	DuplicateNodeId(NodeId),
	/// A node position is NaN or infinite.
	#[error("node #{0} has a non-finite position")]
	NonFinitePosition(NodeId),
	/// [`ViewportConfig::validate`](crate::ViewportConfig::validate) failed.
	#[error("invalid viewport configuration: {0}")]
	InvalidConfig(&'static str),
	/// The document JSON did not deserialize.
	#[error("failed to parse roadmap document: {0}")]
	Parse(String),
}

impl From<serde_json::Error> for ViewportError {
	fn from(err: serde_json::Error) -> Self {
		Self::Parse(err.to_string())
	}
}
