pub mod commands;
pub mod repl;

pub use commands::{build_cli, handle_subcommands, select_formatter};
pub use repl::Repl;
