/* src/io/mod.rs */

//!
//! Reporting sinks for dispatch warnings and errors.

mod buffered;
mod console;

pub use buffered::{BufferedIo, Level, Message};
pub use console::ConsoleIo;

/// Receives user-facing messages produced while running actions.
///
/// Sinks are only written to, never consulted for control flow.
pub trait IoSink {
	/// Reports an action failure.
	fn write_error(&mut self, message: &str);

	/// Reports a recoverable problem, such as an unknown action.
	fn write_warning(&mut self, message: &str);

	/// Informational output from handlers.
	fn write(&mut self, _message: &str) {}
}
