//! Console command words for the wizard driver.

/// Input prompt.
pub const PROMPT: &str = "> ";
/// Advance to the next page.
pub const CMD_NEXT: &str = "next";
/// Prefix for editing the package name: `name <value>`.
pub const CMD_NAME_PREFIX: &str = "name ";
/// Retrieve the finished artifact.
pub const CMD_DOWNLOAD: &str = "download";
/// Leave the wizard.
pub const CMD_QUIT: &str = "quit";
