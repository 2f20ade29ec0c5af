//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod get_tpl;
pub mod init;
pub mod list;
