use serde::Serialize;

use crate::codec;
use crate::modbus::CrcFrame;

pub trait ReportFormatter: Send + Sync {
    fn format_report(&self, frame: &CrcFrame) -> String;
}

/// Human-readable report block for the interactive session.
pub struct ConsoleFormatter;

impl ReportFormatter for ConsoleFormatter {
    fn format_report(&self, frame: &CrcFrame) -> String {
        let crc = frame.crc();
        format!(
            "Input:          {}\n\
             CRC (hex):      {:04X}\n\
             CRC Low Byte:   {:02X}\n\
             CRC High Byte:  {:02X}\n\
             Complete Command: {}",
            codec::encode_hex(frame.data()),
            crc.value(),
            crc.low_byte(),
            crc.high_byte(),
            codec::encode_frame(frame.data(), crc),
        )
    }
}

#[derive(Serialize)]
struct JsonReport {
    input: String,
    crc: String,
    crc_low: String,
    crc_high: String,
    complete_command: String,
}

pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, frame: &CrcFrame) -> String {
        let crc = frame.crc();
        let report = JsonReport {
            input: codec::encode_hex(frame.data()),
            crc: format!("{:04X}", crc.value()),
            crc_low: format!("{:02X}", crc.low_byte()),
            crc_high: format!("{:02X}", crc.high_byte()),
            complete_command: codec::encode_frame(frame.data(), crc),
        };

        serde_json::to_string_pretty(&report).unwrap_or_default()
    }
}
