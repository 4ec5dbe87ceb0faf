use std::fmt;

/// Game-specific error types.
///
/// Move rejections are not errors; see
/// [`MoveResult`](crate::game_engine::MoveResult).
#[derive(Debug)]
pub enum GameError {
    /// Failed to parse user input
    ParseError(String),
    /// Input parsed but is not acceptable (e.g. a cell outside the board)
    InvalidInput(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_is_exposed_as_source() {
        let err = GameError::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn parse_int_error_becomes_parse_error() {
        let err: GameError = "x".parse::<usize>().unwrap_err().into();
        assert!(matches!(err, GameError::ParseError(_)));
        assert!(err.source().is_none());
    }
}
