pub mod crc;
pub mod frame;

pub use crc::{crc16_modbus, Checksum};
pub use frame::CrcFrame;
