//! The piece catalog: per-piece movement step descriptors.
//!
//! Every piece's movement is a static list of `PieceStep` values that the
//! move generator walks; there is no per-kind dispatch anywhere else. Pawn
//! steps depend on color (direction) and on the `moved` flag (double step
//! only while unmoved). The king carries two ±2-column castling candidate
//! steps that the generator accepts only after full castling legality
//! checks.

use crate::pieces::piece_types::{Piece, PieceKind};

/// One movement descriptor: a board delta plus the rules for walking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceStep {
    pub d_row: i8,
    pub d_column: i8,
    /// Maximum repetitions of the delta; `None` slides until blocked.
    pub limit: Option<u8>,
    /// The step is only playable as a capture (pawn diagonals).
    pub requires_take: bool,
    /// The step may never capture (pawn pushes, castling candidates).
    pub excludes_take: bool,
    /// Landing on the en-passant target square captures the passed pawn.
    pub allows_en_passant: bool,
    pub short_castle: bool,
    pub long_castle: bool,
}

impl PieceStep {
    const fn slide(d_row: i8, d_column: i8) -> Self {
        PieceStep {
            d_row,
            d_column,
            limit: None,
            requires_take: false,
            excludes_take: false,
            allows_en_passant: false,
            short_castle: false,
            long_castle: false,
        }
    }

    const fn leap(d_row: i8, d_column: i8) -> Self {
        PieceStep {
            d_row,
            d_column,
            limit: Some(1),
            requires_take: false,
            excludes_take: false,
            allows_en_passant: false,
            short_castle: false,
            long_castle: false,
        }
    }
}

/// Movement steps for `piece` in its current state.
pub fn steps_for(piece: &Piece) -> Vec<PieceStep> {
    match piece.kind {
        PieceKind::Rook => vec![
            PieceStep::slide(0, 1),
            PieceStep::slide(1, 0),
            PieceStep::slide(0, -1),
            PieceStep::slide(-1, 0),
        ],
        PieceKind::Bishop => vec![
            PieceStep::slide(1, -1),
            PieceStep::slide(-1, -1),
            PieceStep::slide(-1, 1),
            PieceStep::slide(1, 1),
        ],
        PieceKind::Queen => vec![
            PieceStep::slide(0, 1),
            PieceStep::slide(-1, 1),
            PieceStep::slide(-1, 0),
            PieceStep::slide(-1, -1),
            PieceStep::slide(0, -1),
            PieceStep::slide(1, -1),
            PieceStep::slide(1, 0),
            PieceStep::slide(1, 1),
        ],
        PieceKind::Knight => vec![
            PieceStep::leap(2, -1),
            PieceStep::leap(1, -2),
            PieceStep::leap(-1, -2),
            PieceStep::leap(-2, -1),
            PieceStep::leap(-2, 1),
            PieceStep::leap(-1, 2),
            PieceStep::leap(1, 2),
            PieceStep::leap(2, 1),
        ],
        PieceKind::King => vec![
            PieceStep {
                excludes_take: true,
                short_castle: true,
                ..PieceStep::leap(0, 2)
            },
            PieceStep {
                excludes_take: true,
                long_castle: true,
                ..PieceStep::leap(0, -2)
            },
            PieceStep::leap(0, 1),
            PieceStep::leap(-1, 1),
            PieceStep::leap(-1, 0),
            PieceStep::leap(-1, -1),
            PieceStep::leap(0, -1),
            PieceStep::leap(1, -1),
            PieceStep::leap(1, 0),
            PieceStep::leap(1, 1),
        ],
        PieceKind::Pawn => {
            let direction = piece.color.forward();
            vec![
                PieceStep {
                    limit: Some(if piece.moved { 1 } else { 2 }),
                    excludes_take: true,
                    ..PieceStep::slide(direction, 0)
                },
                PieceStep {
                    requires_take: true,
                    allows_en_passant: true,
                    ..PieceStep::leap(direction, 1)
                },
                PieceStep {
                    requires_take: true,
                    allows_en_passant: true,
                    ..PieceStep::leap(direction, -1)
                },
            ]
        }
    }
}
