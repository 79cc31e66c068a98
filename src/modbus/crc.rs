/// 16-bit Modbus RTU checksum with addressable low/high bytes.
///
/// The wire format transmits the low byte first, then the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum(u16);

impl Checksum {
    pub fn value(self) -> u16 {
        self.0
    }

    pub fn low_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub fn high_byte(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// CRC bytes in transmission order (low byte first).
    pub fn wire_bytes(self) -> [u8; 2] {
        [self.low_byte(), self.high_byte()]
    }
}

impl From<u16> for Checksum {
    fn from(value: u16) -> Self {
        Checksum(value)
    }
}

/// Modbus RTU CRC-16: polynomial 0xA001 (reflected), initial register 0xFFFF.
///
/// Pure function of the input; an empty slice leaves the register untouched
/// and yields 0xFFFF.
pub fn crc16_modbus(data: &[u8]) -> Checksum {
    let mut crc: u16 = 0xFFFF;
    let poly: u16 = 0xA001;

    for &byte in data {
        crc ^= byte as u16;
        for _ in 0..8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ poly;
            } else {
                crc >>= 1;
            }
        }
    }
    Checksum(crc)
}
