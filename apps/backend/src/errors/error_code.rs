//! Error codes for the tic-tac-toe backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the tic-tac-toe backend API.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game Rules
    /// Move attempted on a game with a terminal status
    GameAlreadyFinished,
    /// Mark does not match the current turn
    NotPlayersTurn,
    /// Target cell already holds a mark
    CellOccupied,

    // Request Validation
    /// Invalid game ID provided
    InvalidGameId,
    /// Coordinate outside the 1..=3 board range
    InvalidCoordinate,
    /// Player token is not "X" or "O"
    InvalidMark,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Game Rules
            Self::GameAlreadyFinished => "GAME_ALREADY_FINISHED",
            Self::NotPlayersTurn => "NOT_PLAYERS_TURN",
            Self::CellOccupied => "CELL_OCCUPIED",

            // Request Validation
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidCoordinate => "INVALID_COORDINATE",
            Self::InvalidMark => "INVALID_MARK",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            // Resource Not Found
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Business Logic Conflicts
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(
            ErrorCode::GameAlreadyFinished.as_str(),
            "GAME_ALREADY_FINISHED"
        );
        assert_eq!(ErrorCode::NotPlayersTurn.as_str(), "NOT_PLAYERS_TURN");
        assert_eq!(ErrorCode::CellOccupied.as_str(), "CELL_OCCUPIED");
        assert_eq!(ErrorCode::InvalidGameId.as_str(), "INVALID_GAME_ID");
        assert_eq!(ErrorCode::InvalidCoordinate.as_str(), "INVALID_COORDINATE");
        assert_eq!(ErrorCode::InvalidMark.as_str(), "INVALID_MARK");
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::BadRequest.as_str(), "BAD_REQUEST");
        assert_eq!(ErrorCode::GameNotFound.as_str(), "GAME_NOT_FOUND");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::OptimisticLock.as_str(), "OPTIMISTIC_LOCK");
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
        assert_eq!(ErrorCode::DbError.as_str(), "DB_ERROR");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
        assert_eq!(ErrorCode::RecordNotFound.as_str(), "RECORD_NOT_FOUND");
        assert_eq!(ErrorCode::DataCorruption.as_str(), "DATA_CORRUPTION");
        assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL");
        assert_eq!(ErrorCode::ConfigError.as_str(), "CONFIG_ERROR");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::NotPlayersTurn), "NOT_PLAYERS_TURN");
        assert_eq!(format!("{}", ErrorCode::GameNotFound), "GAME_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::OptimisticLock), "OPTIMISTIC_LOCK");
    }
}
