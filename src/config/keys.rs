/* src/config/keys.rs */

//! Recognized keys of the `extra` configuration section.

/// Actions to run after a package has been installed.
pub const POST_PACKAGE_INSTALL: &str = "post-package-install";

/// Actions to run after a package has been updated.
pub const POST_PACKAGE_UPDATE: &str = "post-package-update";

/// Legacy install key. Only marks actions as present, its content is never read.
pub const FILE_MANAGEMENT: &str = "file-management";
