use std::io;

use anyhow::Result;
use env_logger::Env;

use crc_calc_rust::cli::{build_cli, handle_subcommands, select_formatter, Repl};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    let formatter = select_formatter(&matches);

    if handle_subcommands(&matches, formatter.as_ref())? {
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(stdin.lock(), stdout.lock(), formatter);
    repl.run()?;

    Ok(())
}
