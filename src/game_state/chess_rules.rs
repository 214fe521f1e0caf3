//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the set of pieces a pawn may promote to.

use crate::pieces::piece_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pieces a pawn reaching the last rank may become, in generation order.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// King start column (the e-file).
pub const KING_HOME_COLUMN: i8 = 5;

/// Rook start column on the short (kingside) wing.
pub const SHORT_ROOK_COLUMN: i8 = 8;

/// Rook start column on the long (queenside) wing.
pub const LONG_ROOK_COLUMN: i8 = 1;
