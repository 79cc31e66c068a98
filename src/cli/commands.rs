use clap::{Arg, ArgMatches, Command};
use log::info;

use crate::modbus::CrcFrame;
use crate::output::{ConsoleFormatter, JsonFormatter, ReportFormatter};
use crate::utils::error::CalcError;

pub fn build_cli() -> Command {
    Command::new("crc_calc_rust")
        .version(crate::VERSION)
        .about("Modbus RTU CRC-16 calculator")
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format: console (default) or json"),
        )
        .subcommand(
            Command::new("calc")
                .about("Compute the CRC for a hex byte sequence and exit")
                .arg(
                    Arg::new("bytes")
                        .value_name("BYTES")
                        .required(true)
                        .num_args(1..)
                        .help("Hex bytes, e.g. 37 03 00 00 00 0A"),
                ),
        )
}

pub fn select_formatter(matches: &ArgMatches) -> Box<dyn ReportFormatter> {
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => {
            info!("🎨 Using JSON formatter");
            Box::new(JsonFormatter)
        }
        _ => Box::new(ConsoleFormatter), // Keep default console formatter
    }
}

/// Runs a one-shot subcommand if one was given. Returns `Ok(true)` when the
/// invocation is fully handled and the interactive session should not start.
pub fn handle_subcommands(
    matches: &ArgMatches,
    formatter: &dyn ReportFormatter,
) -> Result<bool, CalcError> {
    if let Some(matches) = matches.subcommand_matches("calc") {
        info!("🔢 Executing calc command...");

        let text = matches
            .get_many::<String>("bytes")
            .unwrap()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        let frame = CrcFrame::from_hex(&text)?;
        println!("{}", formatter.format_report(&frame));

        return Ok(true);
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_subcommand_collects_token_args() {
        let matches = build_cli()
            .try_get_matches_from(["crc_calc_rust", "calc", "37", "03", "00", "00", "00", "0A"])
            .unwrap();
        let sub = matches.subcommand_matches("calc").unwrap();
        let tokens: Vec<&String> = sub.get_many::<String>("bytes").unwrap().collect();
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_calc_requires_bytes() {
        assert!(build_cli()
            .try_get_matches_from(["crc_calc_rust", "calc"])
            .is_err());
    }

    #[test]
    fn test_handle_subcommands_without_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["crc_calc_rust"])
            .unwrap();
        assert!(!handle_subcommands(&matches, &ConsoleFormatter).unwrap());
    }

    #[test]
    fn test_handle_subcommands_rejects_bad_hex() {
        let matches = build_cli()
            .try_get_matches_from(["crc_calc_rust", "calc", "ZZ"])
            .unwrap();
        assert!(matches!(
            handle_subcommands(&matches, &ConsoleFormatter),
            Err(CalcError::Parse(_))
        ));
    }
}
