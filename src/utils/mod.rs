pub mod error;

pub use error::CalcError;
