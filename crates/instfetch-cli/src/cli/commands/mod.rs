//! CLI command handlers. Each command is in its own file.

mod fetch_installers;

pub use fetch_installers::run_fetch_installers;
