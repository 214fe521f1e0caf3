//! The move record shared by generation, application, and history.
//!
//! A `ChessMove` is built as a mutable candidate during generation and is
//! immutable once committed to the history tree. It carries everything the
//! state machine needs to apply it and everything undo needs to reverse it
//! exactly.

use crate::board::board_location::BoardLocation;
use crate::pieces::piece_types::{Piece, PieceKind};

/// En-passant bookkeeping. `target` is the square the capturing pawn lands
/// on; `pawn_location` is the square the capturable pawn actually stands
/// on, one rank behind the target. The two are never the same square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantState {
    pub target: BoardLocation,
    pub pawn_location: BoardLocation,
}

/// The rook half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingMove {
    pub rook_from: BoardLocation,
    pub rook_to: BoardLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    /// The moving piece as it stood before the move, `moved` flag included.
    pub piece: Piece,
    /// The captured piece as it stood before the move, if any.
    pub takes: Option<Piece>,
    /// Present when this move is an en-passant capture.
    pub en_passant: Option<EnPassantState>,
    /// The paired rook relocation when this move castles.
    pub castling: Option<CastlingMove>,
    pub promotion: Option<PieceKind>,
    pub check: bool,
    pub checkmate: bool,
    pub short_castle: bool,
    pub long_castle: bool,
}

impl ChessMove {
    /// A bare from/to candidate; generation fills in the special fields.
    pub fn plain(from: BoardLocation, to: BoardLocation, piece: Piece) -> Self {
        ChessMove {
            from,
            to,
            piece,
            takes: None,
            en_passant: None,
            castling: None,
            promotion: None,
            check: false,
            checkmate: false,
            short_castle: false,
            long_castle: false,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.takes.is_some()
    }
}
