//! Core piece model: colors, kinds, and the per-piece `moved` flag.
//!
//! A piece's identity is the `(color, kind)` pair and never changes; the
//! `moved` flag is the only mutable state and feeds castling and pawn
//! double-step eligibility.

/// The side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceColor {
    /// The light (white) side.
    Light,
    /// The dark (black) side.
    Dark,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::Light => PieceColor::Dark,
            PieceColor::Dark => PieceColor::Light,
        }
    }

    /// Row direction pawns of this color advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            PieceColor::Light => 1,
            PieceColor::Dark => -1,
        }
    }

    /// Back rank: where the king and rooks start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            PieceColor::Light => 1,
            PieceColor::Dark => 8,
        }
    }

    /// Rank pawns of this color start on.
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            PieceColor::Light => 2,
            PieceColor::Dark => 7,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            PieceColor::Light => 8,
            PieceColor::Dark => 1,
        }
    }
}

/// The kind (class) of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board: immutable identity plus the mutable `moved` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
    pub moved: bool,
}

impl Piece {
    pub const fn new(color: PieceColor, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            moved: false,
        }
    }

    #[inline]
    pub fn is_opponent(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Decodes a FEN piece letter; uppercase is light, lowercase dark.
    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            PieceColor::Light
        } else if ch.is_ascii_lowercase() {
            PieceColor::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Piece::new(color, kind))
    }

    pub fn fen_char(&self) -> char {
        let lower = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            PieceColor::Light => lower.to_ascii_uppercase(),
            PieceColor::Dark => lower,
        }
    }
}
