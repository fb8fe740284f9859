/* src/dispatch/report.rs */

/// What happened to the actions declared for one event.
///
/// Dispatch never fails; this is only a summary of the messages sent to the sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
	/// Whether the configuration declared actions for the event at all.
	pub has_actions: bool,
	/// Actions whose handler completed.
	pub invoked: Vec<String>,
	/// Actions that do not list the dispatched package.
	pub skipped: Vec<String>,
	/// Actions with no registered handler.
	pub unknown: Vec<String>,
	/// Actions whose handler failed, with the error text.
	pub failed: Vec<(String, String)>,
}

impl DispatchReport {
	/// Returns an iterator over every action a handler was called for.
	pub fn attempted(&self) -> impl Iterator<Item = &str> {
		self.invoked
			.iter()
			.map(String::as_str)
			.chain(self.failed.iter().map(|(action, _)| action.as_str()))
	}

	/// `true` when no handler failed and every listed action was known.
	pub fn is_clean(&self) -> bool {
		self.failed.is_empty() && self.unknown.is_empty()
	}
}
