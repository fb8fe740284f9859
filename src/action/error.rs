/* src/action/error.rs */

/// Errors raised while resolving or running an action handler.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
	/// No handler is registered under this name.
	#[error("no handler registered for action: {name}")]
	NotFound { name: String },

	/// The declared payload does not have the shape the handler expects.
	#[error("invalid payload: {0}")]
	InvalidPayload(String),

	/// IO error while running the action.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Failure reported by a custom handler.
	#[error("{0}")]
	Custom(String),
}

impl HandlerError {
	pub fn custom(message: impl Into<String>) -> Self {
		Self::Custom(message.into())
	}

	pub fn invalid_payload(message: impl Into<String>) -> Self {
		Self::InvalidPayload(message.into())
	}
}
