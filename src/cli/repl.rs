use std::io::{BufRead, Write};

use log::debug;

use crate::modbus::CrcFrame;
use crate::output::ReportFormatter;
use crate::utils::error::CalcError;

const BANNER: &str = "=======================================\n     Modbus RTU CRC Calculator\n=======================================";

/// Interactive calculator session over an injected line reader and writer.
///
/// The core stays free of process-wide console state; tests drive the loop
/// with in-memory buffers.
pub struct Repl<R, W> {
    input: R,
    output: W,
    formatter: Box<dyn ReportFormatter>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, formatter: Box<dyn ReportFormatter>) -> Self {
        Self {
            input,
            output,
            formatter,
        }
    }

    /// Runs until `exit`, `quit`, or end of input. Parse failures and empty
    /// decodes are reported and the loop continues; only writer/reader IO
    /// errors abort the session.
    pub fn run(&mut self) -> Result<(), CalcError> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Enter hex bytes (space separated, e.g., 37 03 00 00 00 0A)"
            )?;
            writeln!(self.output, "Or type 'exit' to quit")?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\r', '\n']);

            if line == "exit" || line == "quit" {
                break;
            }
            if line.is_empty() {
                continue;
            }

            match CrcFrame::from_hex(line) {
                Ok(frame) => {
                    debug!(
                        "computed CRC 0x{:04X} over {} bytes",
                        frame.crc().value(),
                        frame.data().len()
                    );
                    writeln!(self.output)?;
                    writeln!(self.output, "{}", self.formatter.format_report(&frame))?;
                }
                Err(err) => {
                    writeln!(self.output, "ERROR: {}", err)?;
                }
            }
        }

        writeln!(self.output, "\nGoodbye!")?;
        Ok(())
    }
}
