use crate::modbus::crc::Checksum;
use crate::utils::error::CalcError;

/// Parses whitespace-separated hex tokens into raw bytes.
///
/// All whitespace is stripped first, then the remainder must split into
/// consecutive two-hex-digit groups. An odd digit count or any character
/// outside the hex alphabet aborts the whole decode; malformed groups are
/// never coerced to 0x00.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CalcError> {
    let cleaned: String = text.split_whitespace().collect();
    let bytes = hex::decode(cleaned)?;
    Ok(bytes)
}

/// Renders bytes as two-digit uppercase hex tokens joined by single spaces.
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a complete command: data tokens followed by the CRC low byte
/// token, then the high byte token (Modbus RTU transmits low byte first).
pub fn encode_frame(bytes: &[u8], crc: Checksum) -> String {
    let mut tokens: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
    tokens.push(format!("{:02X}", crc.low_byte()));
    tokens.push(format!("{:02X}", crc.high_byte()));
    tokens.join(" ")
}
