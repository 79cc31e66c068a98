//! Modbus RTU CRC-16 Calculator
//!
//! This library computes the Modbus RTU CRC-16 checksum (polynomial 0xA001
//! reflected, initial register 0xFFFF) for a byte sequence and renders the
//! result in wire order, CRC low byte first. The hex codec and the CRC engine
//! are pure functions; the interactive shell in `cli` is a thin layer over an
//! injected line reader and writer.

pub mod cli;
pub mod codec;
pub mod modbus;
pub mod output;
pub mod utils;

// Re-export commonly used types
pub use codec::{decode_hex, encode_frame, encode_hex};
pub use modbus::{crc16_modbus, Checksum, CrcFrame};
pub use output::{ConsoleFormatter, JsonFormatter, ReportFormatter};
pub use utils::error::CalcError;

pub const VERSION: &str = "0.1.0";
