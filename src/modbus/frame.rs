use crate::codec;
use crate::modbus::crc::{crc16_modbus, Checksum};
use crate::utils::error::CalcError;

/// A byte sequence paired with its Modbus RTU checksum.
///
/// Computed once per request; carries no state beyond the request that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcFrame {
    data: Vec<u8>,
    crc: Checksum,
}

impl CrcFrame {
    pub fn compute(data: Vec<u8>) -> Self {
        let crc = crc16_modbus(&data);
        Self { data, crc }
    }

    /// Decodes hex token text and computes the checksum.
    ///
    /// A syntactically valid but empty sequence is rejected here, not in the
    /// codec, so `decode_hex("")` stays a pure identity case.
    pub fn from_hex(text: &str) -> Result<Self, CalcError> {
        let data = codec::decode_hex(text)?;
        if data.is_empty() {
            return Err(CalcError::EmptyInput);
        }
        Ok(Self::compute(data))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn crc(&self) -> Checksum {
        self.crc
    }

    /// Complete command bytes: data followed by CRC low byte, then high byte.
    pub fn wire_bytes(&self) -> Vec<u8> {
        let mut bytes = self.data.clone();
        bytes.push(self.crc.low_byte());
        bytes.push(self.crc.high_byte());
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_appends_crc_low_first() {
        let frame = CrcFrame::compute(vec![0x01, 0x03, 0x00, 0x00, 0x00, 0x0A]);
        assert_eq!(
            frame.wire_bytes(),
            vec![0x01, 0x03, 0x00, 0x00, 0x00, 0x0A, 0xC5, 0xCD]
        );
    }

    #[test]
    fn test_from_hex() {
        let frame = CrcFrame::from_hex("37 03 00 00 00 0a").unwrap();
        assert_eq!(frame.data(), &[0x37, 0x03, 0x00, 0x00, 0x00, 0x0A]);
        assert_eq!(frame.crc().value(), 0x5BC0);
    }

    #[test]
    fn test_from_hex_rejects_empty() {
        assert!(matches!(CrcFrame::from_hex(""), Err(CalcError::EmptyInput)));
        assert!(matches!(
            CrcFrame::from_hex("  \t "),
            Err(CalcError::EmptyInput)
        ));
    }

    #[test]
    fn test_from_hex_propagates_parse_errors() {
        assert!(matches!(
            CrcFrame::from_hex("37 0"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_compute_accepts_empty_sequence() {
        // Engine-level contract: the boundary rejects empty input, the
        // computation itself does not.
        let frame = CrcFrame::compute(Vec::new());
        assert_eq!(frame.crc().value(), 0xFFFF);
        assert_eq!(frame.wire_bytes(), vec![0xFF, 0xFF]);
    }
}
