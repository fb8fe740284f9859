/* src/action/mod.rs */

//!
//! Named action handlers and the registry that resolves them.
//!
//! - [`ActionHandler`] - A single operation, e.g. `copy`
//! - [`ActionRegistry`] - Name lookup and invocation capability
//! - [`HandlerRegistry`] - Map-backed registry
//! - [`FileActions`] - Built-in filesystem actions (`fs-actions` feature)

mod error;
mod registry;

#[cfg(feature = "fs-actions")]
mod builtin;

pub use error::HandlerError;
pub use registry::{ActionRegistry, HandlerRegistry};

#[cfg(feature = "fs-actions")]
pub use builtin::FileActions;

use serde_json::Value;

use crate::io::IoSink;
use crate::package::Package;

/// An operation invoked by name with the payload declared for a package.
pub trait ActionHandler: Send + Sync {
	/// Runs the action. The payload is passed through exactly as declared.
	fn execute(
		&self,
		payload: &Value,
		package: &Package,
		io: &mut dyn IoSink,
	) -> Result<(), HandlerError>;
}

impl<F> ActionHandler for F
where
	F: Fn(&Value, &Package, &mut dyn IoSink) -> Result<(), HandlerError> + Send + Sync,
{
	fn execute(
		&self,
		payload: &Value,
		package: &Package,
		io: &mut dyn IoSink,
	) -> Result<(), HandlerError> {
		self(payload, package, io)
	}
}
