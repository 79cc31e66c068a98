pub mod hex;

pub use hex::{decode_hex, encode_frame, encode_hex};
