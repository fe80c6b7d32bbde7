// src/numerics/error.rs
// Error type shared by the numerics module.

/// Errors reported by checked access and by the text and binary codecs.
#[derive(Debug, thiserror::Error)]
pub enum NumericsError {
    #[error("Index out of range: index {index} is not below dimension {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cell out of range: ({row}, {column}) is outside a {rows}x{columns} matrix")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Missing token: expected {expected} values, found {found}")]
    MissingToken { expected: usize, found: usize },

    #[error("Invalid token: {token:?} at position {position} is not a valid scalar")]
    InvalidToken { token: String, position: usize },

    #[error("Trailing input: unexpected token {token:?} after the last value")]
    TrailingInput { token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Binary encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Binary decoding failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Result alias used across the numerics module.
pub type Result<T> = std::result::Result<T, NumericsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NumericsError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index out of range: index 4 is not below dimension 3"
        );

        let err = NumericsError::CellOutOfRange { row: 2, column: 0, rows: 2, columns: 3 };
        assert_eq!(
            err.to_string(),
            "Cell out of range: (2, 0) is outside a 2x3 matrix"
        );

        let err = NumericsError::MissingToken { expected: 4, found: 1 };
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: NumericsError = io.into();
        assert!(matches!(err, NumericsError::Io(_)));
    }
}
