/* src/io/console.rs */

use std::io::Write;

use super::IoSink;

/// Writes messages to standard error.
///
/// With the `logging` feature, warnings and errors are mirrored to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleIo {
	quiet: bool,
}

impl ConsoleIo {
	pub fn new() -> Self {
		Self::default()
	}

	/// Suppresses informational lines, keeping warnings and errors.
	pub fn quiet(mut self, quiet: bool) -> Self {
		self.quiet = quiet;
		self
	}

	fn emit(&self, line: &str) {
		writeln!(std::io::stderr().lock(), "{line}").ok();
	}
}

impl IoSink for ConsoleIo {
	fn write_error(&mut self, message: &str) {
		#[cfg(feature = "logging")]
		log::error!("{message}");
		self.emit(message);
	}

	fn write_warning(&mut self, message: &str) {
		#[cfg(feature = "logging")]
		log::warn!("{message}");
		self.emit(message);
	}

	fn write(&mut self, message: &str) {
		if !self.quiet {
			self.emit(message);
		}
	}
}
