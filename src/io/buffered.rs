/* src/io/buffered.rs */

use super::IoSink;

/// Severity of a buffered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Warning,
	Error,
}

/// A message captured by [`BufferedIo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub level: Level,
	pub text: String,
}

/// An in-memory sink, useful for testing and for hosts that render output later.
#[derive(Debug, Default)]
pub struct BufferedIo {
	messages: Vec<Message>,
}

impl BufferedIo {
	pub fn new() -> Self {
		Self::default()
	}

	/// All captured messages in the order they were written.
	pub fn messages(&self) -> &[Message] {
		&self.messages
	}

	pub fn errors(&self) -> impl Iterator<Item = &str> {
		self.texts(Level::Error)
	}

	pub fn warnings(&self) -> impl Iterator<Item = &str> {
		self.texts(Level::Warning)
	}

	pub fn clear(&mut self) {
		self.messages.clear();
	}

	fn texts(&self, level: Level) -> impl Iterator<Item = &str> {
		self.messages
			.iter()
			.filter(move |m| m.level == level)
			.map(|m| m.text.as_str())
	}

	fn push(&mut self, level: Level, text: &str) {
		self.messages.push(Message {
			level,
			text: text.to_string(),
		});
	}
}

impl IoSink for BufferedIo {
	fn write_error(&mut self, message: &str) {
		self.push(Level::Error, message);
	}

	fn write_warning(&mut self, message: &str) {
		self.push(Level::Warning, message);
	}

	fn write(&mut self, message: &str) {
		self.push(Level::Info, message);
	}
}
