//! The game state machine.
//!
//! `GameState` owns the board, turn, castling rights, en-passant target,
//! clocks and derived check/terminal flags, and is the only place a live
//! board is ever mutated. `make_move`/`undo_move` are an exactly reversible
//! pair; `apply_move` layers derived-state recomputation (check, checkmate,
//! stalemate) on top; `try_move` is the validate-then-apply entry point
//! used by callers proposing moves.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::chess_errors::ChessErrors;
use crate::game_state::castling_state::CastlingState;
use crate::game_state::chess_rules::{LONG_ROOK_COLUMN, SHORT_ROOK_COLUMN, STARTING_POSITION_FEN};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::check_inspection::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, legal_moves_from};
use crate::moves::chess_move::{ChessMove, EnPassantState};
use crate::pieces::piece_types::{Piece, PieceColor, PieceKind};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Terminal result of a game. Check by itself is not terminal and lives in
/// `GameState::in_check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate { winner: PieceColor },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: ChessBoard,
    pub turn: PieceColor,
    pub castling: CastlingState,
    /// Set exactly when the immediately preceding move was a two-square
    /// pawn advance; cleared by every other move.
    pub en_passant: Option<EnPassantState>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Whether the side to move is currently in check.
    pub in_check: bool,
    pub outcome: GameOutcome,

    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            board: ChessBoard::new_empty(),
            turn: PieceColor::Light,
            castling: CastlingState::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            in_check: false,
            outcome: GameOutcome::Ongoing,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Validates a proposed move and applies it atomically.
    ///
    /// Rejection leaves the state untouched; probing with illegal moves is
    /// the expected caller workflow.
    pub fn try_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        if self.outcome != GameOutcome::Ongoing {
            return Err(ChessErrors::GameOver);
        }
        let mv = self.find_legal_move(from, to, promotion)?;
        self.apply_move(mv)
    }

    /// Looks up the unique legal move matching a proposal without mutating
    /// anything.
    pub fn find_legal_move(
        &self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        if let Some(kind) = promotion {
            if matches!(kind, PieceKind::King | PieceKind::Pawn) {
                return Err(ChessErrors::InvalidPromotionChoice(Some(kind)));
            }
        }

        let mut reaches_destination = false;
        for candidate in legal_moves_from(self, from) {
            if candidate.to != to {
                continue;
            }
            reaches_destination = true;
            if candidate.promotion == promotion {
                return Ok(candidate);
            }
        }

        if reaches_destination {
            // The square is reachable; only the promotion choice is wrong
            // (missing where required, or supplied where impossible).
            Err(ChessErrors::InvalidPromotionChoice(promotion))
        } else {
            Err(ChessErrors::IllegalMove { from, to })
        }
    }

    /// Applies a generated move and recomputes derived state: the check
    /// flag for the side now to move, and checkmate/stalemate when that
    /// side has no legal reply. Returns the committed move annotated with
    /// its check/checkmate flags.
    pub fn apply_move(&mut self, mut mv: ChessMove) -> Result<ChessMove, ChessErrors> {
        for color in [PieceColor::Light, PieceColor::Dark] {
            if self.board.king_location(color).is_none() {
                return Err(ChessErrors::NoKingFound(color));
            }
        }

        self.make_move(&mv)?;

        self.in_check = is_king_in_check(self, self.turn);
        let has_reply = has_any_legal_move(self);
        self.outcome = if self.in_check && !has_reply {
            GameOutcome::Checkmate {
                winner: mv.piece.color,
            }
        } else if !has_reply {
            GameOutcome::Stalemate
        } else {
            GameOutcome::Ongoing
        };

        mv.check = self.in_check;
        mv.checkmate = matches!(self.outcome, GameOutcome::Checkmate { .. });
        Ok(mv)
    }

    /// Raw reversible transition: relocates piece(s), updates rights,
    /// en-passant target, clocks and turn, and pushes an undo snapshot.
    /// Derived check/terminal flags are left for `apply_move`; legality is
    /// the generator's responsibility.
    pub fn make_move(&mut self, mv: &ChessMove) -> Result<(), ChessErrors> {
        let mut moving = self
            .board
            .get(mv.from)
            .ok_or(ChessErrors::EmptySquare(mv.from))?;

        self.undo_stack.push(UndoState {
            mv: mv.clone(),
            prev_castling: self.castling,
            prev_en_passant: self.en_passant,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            prev_in_check: self.in_check,
            prev_outcome: self.outcome,
        });

        // The en-passant victim is never on the destination square.
        if let Some(ep) = mv.en_passant {
            self.board.set(ep.pawn_location, None);
        }

        self.board.set(mv.from, None);
        moving.moved = true;
        if let Some(kind) = mv.promotion {
            moving = Piece {
                color: moving.color,
                kind,
                moved: true,
            };
        }
        self.board.set(mv.to, Some(moving));

        if let Some(castling) = mv.castling {
            if let Some(mut rook) = self.board.take(castling.rook_from) {
                rook.moved = true;
                self.board.set(castling.rook_to, Some(rook));
            }
        }

        self.update_castling_rights(mv);

        self.en_passant = double_step_target(mv);

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.turn == PieceColor::Dark {
            self.fullmove_number += 1;
        }
        self.turn = self.turn.opposite();

        Ok(())
    }

    /// Exact reversal of the most recent `make_move`.
    pub fn undo_move(&mut self) -> Result<ChessMove, ChessErrors> {
        let undo = self.undo_stack.pop().ok_or(ChessErrors::EmptyHistory)?;
        let mv = undo.mv;

        // Remove the moved (possibly promoted) piece and restore the
        // original snapshot, pre-move `moved` flag included.
        self.board.take(mv.to);
        self.board.set(mv.from, Some(mv.piece));

        if let Some(ep) = mv.en_passant {
            self.board.set(ep.pawn_location, mv.takes);
        } else {
            self.board.set(mv.to, mv.takes);
        }

        if let Some(castling) = mv.castling {
            if let Some(mut rook) = self.board.take(castling.rook_to) {
                // Castling preconditions guarantee the rook was unmoved.
                rook.moved = false;
                self.board.set(castling.rook_from, Some(rook));
            }
        }

        self.castling = undo.prev_castling;
        self.en_passant = undo.prev_en_passant;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;
        self.in_check = undo.prev_in_check;
        self.outcome = undo.prev_outcome;
        self.turn = self.turn.opposite();

        Ok(mv)
    }

    fn update_castling_rights(&mut self, mv: &ChessMove) {
        let color = mv.piece.color;
        match mv.piece.kind {
            PieceKind::King => self.castling.revoke_all(color),
            PieceKind::Rook => {
                if let Some(short) = rook_corner_side(color, mv.from) {
                    self.castling.revoke(color, short);
                }
            }
            _ => {}
        }

        // Capturing a rook on its home corner kills the victim's right,
        // so encoded positions never advertise a right without its rook.
        if let Some(taken) = mv.takes {
            if taken.kind == PieceKind::Rook && mv.en_passant.is_none() {
                if let Some(short) = rook_corner_side(taken.color, mv.to) {
                    self.castling.revoke(taken.color, short);
                }
            }
        }
    }
}

/// Which castling wing a rook square belongs to, if it is a home corner.
fn rook_corner_side(color: PieceColor, location: BoardLocation) -> Option<bool> {
    if location.row != color.home_row() {
        return None;
    }
    if location.column == SHORT_ROOK_COLUMN {
        Some(true)
    } else if location.column == LONG_ROOK_COLUMN {
        Some(false)
    } else {
        None
    }
}

/// En-passant target created by a two-square pawn advance, if any.
fn double_step_target(mv: &ChessMove) -> Option<EnPassantState> {
    if mv.piece.kind != PieceKind::Pawn || (mv.to.row - mv.from.row).abs() != 2 {
        return None;
    }
    Some(EnPassantState {
        target: BoardLocation {
            row: (mv.from.row + mv.to.row) / 2,
            column: mv.from.column,
        },
        pawn_location: mv.to,
    })
}
