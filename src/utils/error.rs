use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid hex input: {0}")]
    Parse(String),

    #[error("Empty input")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hex::FromHexError> for CalcError {
    fn from(err: hex::FromHexError) -> Self {
        CalcError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_maps_to_parse() {
        let err: CalcError = hex::decode("Z").unwrap_err().into();
        assert!(matches!(err, CalcError::Parse(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(CalcError::EmptyInput.to_string(), "Empty input");
        assert!(CalcError::Parse("odd number of digits".into())
            .to_string()
            .starts_with("Invalid hex input"));
    }
}
