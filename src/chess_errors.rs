//! Errors used throughout the chess rules engine.
//!
//! This module defines the canonical error type returned by game logic,
//! parsing utilities, move generation and the history machinery. The enum
//! `ChessErrors` is used as the single error type across the crate to
//! simplify propagation and matching. Each variant carries contextual
//! information where appropriate to aid diagnostics.
//!
//! Usage guidelines:
//! - `IllegalMove` is expected and frequent: UIs probe legality by
//!   attempting moves, so callers should treat it as a normal rejection,
//!   not a failure.
//! - `MalformedFen` and `InvalidAlgebraic` are input errors raised at parse
//!   time, before any state is built.
//! - `NoKingFound` on a position reached through legal play indicates a
//!   corrupted game and is not recoverable; speculative test positions
//!   without a king are handled inside check inspection and never surface
//!   this variant.

use crate::board::board_location::BoardLocation;
use crate::pieces::piece_types::{PieceColor, PieceKind};

/// Unified error type for the chess rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A FEN string was unparsable or internally inconsistent.
    ///
    /// Payload: a description of the offending field or token.
    MalformedFen(String),

    /// The requested move is outside the legal move set of the current
    /// position. Returned (never panicked) because probing with illegal
    /// moves is part of the normal caller workflow.
    IllegalMove { from: BoardLocation, to: BoardLocation },

    /// No king of the given color was found on a position that should be
    /// reachable through legal play. This represents a corrupted or
    /// invalid game state.
    NoKingFound(PieceColor),

    /// A promotion choice was missing, named an impossible piece, or was
    /// supplied for a move that does not promote.
    ///
    /// Payload: the offending choice, `None` when a required choice was
    /// not supplied.
    InvalidPromotionChoice(Option<PieceKind>),

    /// A row/column pair outside 1..=8 was produced or requested.
    OutOfBounds { row: i8, column: i8 },

    /// An algebraic square string (for example "e4") failed to parse.
    InvalidAlgebraic(String),

    /// A piece was expected on this square but the square is empty.
    EmptySquare(BoardLocation),

    /// A move was proposed on a finished game. Terminal states are not
    /// re-enterable; callers must inspect the outcome first.
    GameOver,

    /// An undo was requested with no moves left to unwind.
    EmptyHistory,
}
