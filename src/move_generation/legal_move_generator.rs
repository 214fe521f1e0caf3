//! Candidate and legal move generation.
//!
//! Candidates are produced by walking each piece's step catalog: bounds,
//! blocking, captures, en passant, castling preconditions, and promotion
//! fan-out all happen here. Legality filtering then clone-applies every
//! candidate and discards the ones that leave the mover's own king
//! attacked.

use crate::board::board_location::BoardLocation;
use crate::game_state::chess_rules::{
    KING_HOME_COLUMN, LONG_ROOK_COLUMN, PROMOTION_CHOICES, SHORT_ROOK_COLUMN,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_inspection::{is_king_in_check, is_square_attacked};
use crate::moves::chess_move::{CastlingMove, ChessMove, EnPassantState};
use crate::pieces::piece_steps::{steps_for, PieceStep};
use crate::pieces::piece_types::{Piece, PieceColor, PieceKind};

/// Longest possible ray on an 8×8 board.
const MAX_RAY: i8 = 7;

/// Pseudo-legal candidates for the piece on `from`.
///
/// Empty when the square is empty or the piece does not belong to
/// `for_color`. Castling candidates are only expanded when
/// `include_castling` is set; opponent-attack scans must keep it off.
pub fn candidate_moves_from(
    game: &GameState,
    from: BoardLocation,
    for_color: PieceColor,
    include_castling: bool,
) -> Vec<ChessMove> {
    let piece = match game.board.get(from) {
        Some(piece) if piece.color == for_color => piece,
        _ => return Vec::new(),
    };

    let mut moves = Vec::new();
    for step in steps_for(&piece) {
        if step.short_castle || step.long_castle {
            if include_castling {
                if let Some(mv) = castling_candidate(game, from, piece, step.short_castle) {
                    moves.push(mv);
                }
            }
            continue;
        }

        let limit = step.limit.map(|l| l as i8).unwrap_or(MAX_RAY);
        for repetition in 1..=limit {
            let target = match from.offset_by(step.d_row * repetition, step.d_column * repetition)
            {
                Ok(target) => target,
                Err(_) => break,
            };

            match game.board.get(target) {
                Some(occupant) => {
                    if occupant.color == piece.color || step.excludes_take {
                        break;
                    }
                    let mut mv = ChessMove::plain(from, target, piece);
                    mv.takes = Some(occupant);
                    push_with_promotions(&mut moves, mv, &piece);
                    // A capture terminates the ray.
                    break;
                }
                None => {
                    if let Some(ep) = en_passant_capture(game, &piece, &step, target) {
                        let mut mv = ChessMove::plain(from, target, piece);
                        mv.takes = game.board.get(ep.pawn_location);
                        mv.en_passant = Some(ep);
                        moves.push(mv);
                        continue;
                    }
                    if step.requires_take {
                        break;
                    }
                    let mv = ChessMove::plain(from, target, piece);
                    push_with_promotions(&mut moves, mv, &piece);
                }
            }
        }
    }

    moves
}

/// Fully legal moves for the side to move from `from`.
///
/// Each candidate is applied to a cloned state (paired rook move, promotion
/// and en-passant removal included) and rejected if the mover's own king is
/// then attacked; survivors are annotated with whether they give check.
pub fn legal_moves_from(game: &GameState, from: BoardLocation) -> Vec<ChessMove> {
    let for_color = game.turn;
    let mut legal = Vec::new();

    for mut candidate in candidate_moves_from(game, from, for_color, true) {
        let mut probe = game.clone();
        if probe.make_move(&candidate).is_err() {
            continue;
        }
        if is_king_in_check(&probe, for_color) {
            continue;
        }
        candidate.check = is_king_in_check(&probe, for_color.opposite());
        legal.push(candidate);
    }

    legal
}

/// Every legal move for the side to move.
pub fn generate_all_legal_moves(game: &GameState) -> Vec<ChessMove> {
    let mut moves = Vec::new();
    for from in game.board.occupied_locations(game.turn) {
        moves.extend(legal_moves_from(game, from));
    }
    moves
}

/// Early-exit form used by checkmate and stalemate detection.
pub fn has_any_legal_move(game: &GameState) -> bool {
    for from in game.board.occupied_locations(game.turn) {
        if !legal_moves_from(game, from).is_empty() {
            return true;
        }
    }
    false
}

fn en_passant_capture(
    game: &GameState,
    piece: &Piece,
    step: &PieceStep,
    target: BoardLocation,
) -> Option<EnPassantState> {
    if piece.kind != PieceKind::Pawn || !step.allows_en_passant {
        return None;
    }
    let ep = game.en_passant?;
    if ep.target != target {
        return None;
    }
    match game.board.get(ep.pawn_location) {
        Some(victim) if victim.color != piece.color && victim.kind == PieceKind::Pawn => Some(ep),
        _ => None,
    }
}

/// Expands a pawn move reaching the last rank into one candidate per
/// promotion choice; passes every other move through unchanged.
fn push_with_promotions(moves: &mut Vec<ChessMove>, mv: ChessMove, piece: &Piece) {
    if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row() {
        for kind in PROMOTION_CHOICES {
            let mut promoting = mv.clone();
            promoting.promotion = Some(kind);
            moves.push(promoting);
        }
    } else {
        moves.push(mv);
    }
}

/// Builds a castling candidate after checking full castling legality:
/// unmoved king on its home square, the right still held, an unmoved rook
/// on the matching corner, an empty path, and no check on the king's
/// current, transited, or landing square.
fn castling_candidate(
    game: &GameState,
    from: BoardLocation,
    piece: Piece,
    short: bool,
) -> Option<ChessMove> {
    if piece.kind != PieceKind::King || piece.moved {
        return None;
    }
    let color = piece.color;
    let row = color.home_row();
    if from.row != row || from.column != KING_HOME_COLUMN {
        return None;
    }
    if !game.castling.allows(color, short) {
        return None;
    }

    let rook_column = if short {
        SHORT_ROOK_COLUMN
    } else {
        LONG_ROOK_COLUMN
    };
    let rook_from = BoardLocation {
        row,
        column: rook_column,
    };
    match game.board.get(rook_from) {
        Some(rook) if rook.color == color && rook.kind == PieceKind::Rook && !rook.moved => {}
        _ => return None,
    }

    let between: &[i8] = if short { &[6, 7] } else { &[2, 3, 4] };
    for &column in between {
        if game.board.get(BoardLocation { row, column }).is_some() {
            return None;
        }
    }

    if is_king_in_check(game, color) {
        return None;
    }
    let king_path: &[i8] = if short { &[6, 7] } else { &[4, 3] };
    for &column in king_path {
        if is_square_attacked(game, BoardLocation { row, column }, color.opposite()) {
            return None;
        }
    }

    let mut mv = ChessMove::plain(
        from,
        BoardLocation {
            row,
            column: if short { 7 } else { 3 },
        },
        piece,
    );
    mv.castling = Some(CastlingMove {
        rook_from,
        rook_to: BoardLocation {
            row,
            column: if short { 6 } else { 4 },
        },
    });
    mv.short_castle = short;
    mv.long_castle = !short;
    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::{generate_all_legal_moves, legal_moves_from};
    use crate::game_state::game_state::GameState;
    use crate::pieces::piece_types::PieceKind;
    use crate::utils::algebraic::algebraic_to_location;

    #[test]
    fn twenty_legal_moves_from_the_start_position() {
        let game = GameState::new_game();
        assert_eq!(generate_all_legal_moves(&game).len(), 20);
    }

    #[test]
    fn blocked_sliders_stay_home() {
        let game = GameState::new_game();
        let a1 = algebraic_to_location("a1").expect("a1 should parse");
        let c1 = algebraic_to_location("c1").expect("c1 should parse");
        let d1 = algebraic_to_location("d1").expect("d1 should parse");
        assert!(legal_moves_from(&game, a1).is_empty());
        assert!(legal_moves_from(&game, c1).is_empty());
        assert!(legal_moves_from(&game, d1).is_empty());
    }

    #[test]
    fn pinned_piece_has_no_legal_moves() {
        // The d2 knight shields the light king from the d8 rook.
        let game = GameState::from_fen("3r3k/8/8/8/8/8/3N4/3K4 w - - 0 1")
            .expect("position should parse");
        let d2 = algebraic_to_location("d2").expect("d2 should parse");
        assert!(legal_moves_from(&game, d2).is_empty());
    }

    #[test]
    fn capturing_promotion_fans_out_into_four_choices() {
        let game = GameState::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1")
            .expect("position should parse");
        let b7 = algebraic_to_location("b7").expect("b7 should parse");
        let moves = legal_moves_from(&game, b7);

        let a8 = algebraic_to_location("a8").expect("a8 should parse");
        let captures: Vec<_> = moves.iter().filter(|m| m.to == a8).collect();
        assert_eq!(captures.len(), 4);
        assert!(captures.iter().all(|m| m.takes.is_some()));
        let choices: Vec<_> = captures.iter().filter_map(|m| m.promotion).collect();
        assert!(choices.contains(&PieceKind::Queen));
        assert!(choices.contains(&PieceKind::Rook));
        assert!(choices.contains(&PieceKind::Bishop));
        assert!(choices.contains(&PieceKind::Knight));

        // The quiet push promotes too: eight candidates in total.
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn castling_obeys_rights_path_and_attacks() {
        let open = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("position should parse");
        let e1 = algebraic_to_location("e1").expect("e1 should parse");
        let moves = legal_moves_from(&open, e1);
        assert!(moves.iter().any(|m| m.short_castle));
        assert!(moves.iter().any(|m| m.long_castle));

        // A rook eyeing f1 forbids the short transit but not the long one.
        let covered = GameState::from_fen("5r1k/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("position should parse");
        let moves = legal_moves_from(&covered, e1);
        assert!(!moves.iter().any(|m| m.short_castle));
        assert!(moves.iter().any(|m| m.long_castle));

        // A checked king may not castle at all.
        let checked = GameState::from_fen("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1")
            .expect("position should parse");
        let moves = legal_moves_from(&checked, e1);
        assert!(!moves.iter().any(|m| m.short_castle || m.long_castle));

        // Without the right, structure alone is not enough.
        let no_rights = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1")
            .expect("position should parse");
        let moves = legal_moves_from(&no_rights, e1);
        assert!(!moves.iter().any(|m| m.short_castle || m.long_castle));
    }

    #[test]
    fn wrong_color_square_yields_nothing() {
        let game = GameState::new_game();
        let e7 = algebraic_to_location("e7").expect("e7 should parse");
        assert!(legal_moves_from(&game, e7).is_empty());
    }
}
