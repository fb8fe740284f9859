/* src/plugin.rs */

//!
//! Entry points called by the host package manager after package operations.

use crate::action::ActionRegistry;
use crate::config::merge;
use crate::dispatch::{ActionDispatcher, DispatchReport};
use crate::io::IoSink;
use crate::package::{EventType, Package, PackageEvent};

/// Runs declared package actions for install and update events.
///
/// The package's own `extra` section provides defaults; the project's
/// `extra` section overrides them.
#[derive(Debug)]
pub struct PackageActions<R> {
	registry: R,
	dispatcher: ActionDispatcher,
}

impl<R> PackageActions<R>
where
	R: ActionRegistry,
{
	pub fn new(registry: R) -> Self {
		Self {
			registry,
			dispatcher: ActionDispatcher::default(),
		}
	}

	pub fn with_dispatcher(mut self, dispatcher: ActionDispatcher) -> Self {
		self.dispatcher = dispatcher;
		self
	}

	pub fn registry(&self) -> &R {
		&self.registry
	}

	/// Called after `package` has been installed into `project`.
	pub fn on_post_package_install(
		&self,
		package: &Package,
		project: &Package,
		io: &mut dyn IoSink,
	) -> DispatchReport {
		self.operate(EventType::Install, package, project, io)
	}

	/// Called after a package has been updated; `target` is the new version.
	pub fn on_post_package_update(
		&self,
		target: &Package,
		project: &Package,
		io: &mut dyn IoSink,
	) -> DispatchReport {
		self.operate(EventType::Update, target, project, io)
	}

	/// Routes a host event to the matching entry point.
	pub fn handle(&self, event: &PackageEvent, io: &mut dyn IoSink) -> DispatchReport {
		self.operate(
			event.operation.event_type(),
			event.operation.package(),
			&event.project,
			io,
		)
	}

	fn operate(
		&self,
		event: EventType,
		package: &Package,
		project: &Package,
		io: &mut dyn IoSink,
	) -> DispatchReport {
		let config = merge(&package.extra, &project.extra);
		self.dispatcher
			.dispatch(event, &config, package, io, &self.registry)
	}
}
