//! Algebraic move-text rendering.
//!
//! A pure, stateless consumer of recorded moves: everything needed (mover,
//! capture, castling wing, promotion, check flags) is already on the
//! `ChessMove`, so no board access is required.

use crate::moves::chess_move::ChessMove;
use crate::pieces::piece_types::{Piece, PieceColor, PieceKind};
use crate::utils::algebraic::{column_letter, location_to_algebraic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanFormat {
    /// Standard short algebraic: "Nf3", "exd5", "e8=Q+".
    Short,
    /// Long algebraic with the origin square: "Ng1-f3", "e4xd5".
    Long,
    /// Short algebraic with Unicode piece glyphs.
    Figurine,
}

#[derive(Debug, Clone, Copy)]
pub struct San {
    pub format: SanFormat,
}

impl Default for San {
    fn default() -> Self {
        San {
            format: SanFormat::Short,
        }
    }
}

impl San {
    pub fn new(format: SanFormat) -> Self {
        San { format }
    }

    pub fn format_move(&self, mv: &ChessMove) -> String {
        if mv.short_castle {
            return format!("O-O{}", check_suffix(mv));
        }
        if mv.long_castle {
            return format!("O-O-O{}", check_suffix(mv));
        }

        match self.format {
            SanFormat::Short | SanFormat::Figurine => self.format_short(mv),
            SanFormat::Long => self.format_long(mv),
        }
    }

    fn format_short(&self, mv: &ChessMove) -> String {
        let mut text = String::new();
        if mv.piece.kind == PieceKind::Pawn {
            // A capturing pawn is named by its origin file.
            if mv.is_capture() {
                text.push(column_letter(mv.from.column));
                text.push('x');
            }
        } else {
            text.push_str(&self.piece_symbol(&mv.piece));
            if mv.is_capture() {
                text.push('x');
            }
        }
        text.push_str(&location_to_algebraic(mv.to));
        text.push_str(&promotion_suffix(mv));
        text.push_str(check_suffix(mv));
        text
    }

    fn format_long(&self, mv: &ChessMove) -> String {
        let mut text = String::new();
        text.push_str(&self.piece_symbol(&mv.piece));
        text.push_str(&location_to_algebraic(mv.from));
        text.push(if mv.is_capture() { 'x' } else { '-' });
        text.push_str(&location_to_algebraic(mv.to));
        text.push_str(&promotion_suffix(mv));
        text.push_str(check_suffix(mv));
        text
    }

    fn piece_symbol(&self, piece: &Piece) -> String {
        match self.format {
            SanFormat::Figurine => figurine(piece).to_string(),
            SanFormat::Short | SanFormat::Long => match piece.kind {
                PieceKind::Pawn => String::new(),
                PieceKind::Knight => "N".to_owned(),
                PieceKind::Bishop => "B".to_owned(),
                PieceKind::Rook => "R".to_owned(),
                PieceKind::Queen => "Q".to_owned(),
                PieceKind::King => "K".to_owned(),
            },
        }
    }
}

fn promotion_suffix(mv: &ChessMove) -> String {
    match mv.promotion {
        Some(PieceKind::Queen) => "=Q".to_owned(),
        Some(PieceKind::Rook) => "=R".to_owned(),
        Some(PieceKind::Bishop) => "=B".to_owned(),
        Some(PieceKind::Knight) => "=N".to_owned(),
        _ => String::new(),
    }
}

fn check_suffix(mv: &ChessMove) -> &'static str {
    if mv.checkmate {
        "#"
    } else if mv.check {
        "+"
    } else {
        ""
    }
}

fn figurine(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (PieceColor::Light, PieceKind::Pawn) => '♙',
        (PieceColor::Light, PieceKind::Knight) => '♘',
        (PieceColor::Light, PieceKind::Bishop) => '♗',
        (PieceColor::Light, PieceKind::Rook) => '♖',
        (PieceColor::Light, PieceKind::Queen) => '♕',
        (PieceColor::Light, PieceKind::King) => '♔',
        (PieceColor::Dark, PieceKind::Pawn) => '♟',
        (PieceColor::Dark, PieceKind::Knight) => '♞',
        (PieceColor::Dark, PieceKind::Bishop) => '♝',
        (PieceColor::Dark, PieceKind::Rook) => '♜',
        (PieceColor::Dark, PieceKind::Queen) => '♛',
        (PieceColor::Dark, PieceKind::King) => '♚',
    }
}
