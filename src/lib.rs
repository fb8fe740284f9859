/* src/lib.rs */

//!
//! Post-install and post-update file actions for package dependencies.
//!
//! Packages and projects declare actions in the `extra` section of their
//! manifests:
//!
//! ```json
//! {
//!     "extra": {
//!         "post-package-install": {
//!             "copy": { "acme/lib": { "assets": "public/assets" } }
//!         }
//!     }
//! }
//! ```
//!
//! After a package operation the package's `extra` is merged with the
//! project's (the project wins), and every action listing the package is
//! invoked through a handler registry. A failing or unknown action is
//! reported and skipped; the remaining actions still run.
//!
//! This crate is organized into these components:
//!
//! - **config**: Ordered `extra` trees and the recursive merge.
//! - **action**: Handler trait, registry and built-in file actions.
//! - **dispatch**: Per-event action resolution with failure isolation.
//! - **io**: Sinks receiving warnings and errors.
//! - **plugin**: Entry points for install and update events (`PackageActions`).
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `logging`: Diagnostics through the `log` facade.
//! - `fs-actions`: Built-in `copy`, `move`, `remove`, `create` and `symlink` actions.

pub mod action;
pub mod config;
pub mod dispatch;
pub mod io;
pub mod package;
pub mod plugin;

pub use action::{ActionHandler, ActionRegistry, HandlerError, HandlerRegistry};
pub use config::{ConfigTree, merge};
pub use dispatch::{ActionDispatcher, DispatchReport};
pub use io::{BufferedIo, ConsoleIo, IoSink};
pub use package::{EventType, Operation, Package, PackageEvent};
pub use plugin::PackageActions;

#[cfg(feature = "fs-actions")]
pub use action::FileActions;
