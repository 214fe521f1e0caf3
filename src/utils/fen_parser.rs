//! FEN-to-GameState parser.
//!
//! Builds a fully populated game state from a Forsyth-Edwards Notation
//! string: placement, side to move, castling rights (validated against rook
//! presence), en-passant target, and clocks. Derived check and terminal
//! flags are recomputed after the load so a decoded mate reads as a mate.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::chess_errors::ChessErrors;
use crate::game_state::castling_state::CastlingState;
use crate::game_state::game_state::{GameOutcome, GameState};
use crate::move_generation::check_inspection::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::moves::chess_move::EnPassantState;
use crate::pieces::piece_types::{Piece, PieceColor, PieceKind};
use crate::utils::algebraic::algebraic_to_location;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| malformed("Missing board layout in FEN"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| malformed("Missing side-to-move in FEN"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| malformed("Missing castling rights in FEN"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| malformed("Missing en-passant square in FEN"))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| malformed("Missing halfmove clock in FEN"))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| malformed("Missing fullmove number in FEN"))?;

    if parts.next().is_some() {
        return Err(malformed("FEN has extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    game_state.board = parse_board(board_part)?;
    game_state.turn = parse_side_to_move(side_part)?;
    game_state.castling = CastlingState::from_fen_field(castling_part, &game_state.board)?;
    game_state.en_passant = parse_en_passant(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("Invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| malformed(&format!("Invalid fullmove number: {fullmove_part}")))?;

    game_state.in_check = is_king_in_check(&game_state, game_state.turn);
    if !has_any_legal_move(&game_state) {
        game_state.outcome = if game_state.in_check {
            GameOutcome::Checkmate {
                winner: game_state.turn.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        };
    }

    Ok(game_state)
}

fn parse_board(board_part: &str) -> Result<ChessBoard, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(malformed("Board layout must contain 8 ranks"));
    }

    let mut board = ChessBoard::new_empty();

    // FEN lists rank 8 first.
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 8 - fen_rank_idx as i8;
        let mut column = 1i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(malformed(&format!("Invalid empty-square count '{ch}'")));
                }
                column += empty_count as i8;
                continue;
            }

            let mut piece = Piece::from_fen_char(ch).ok_or_else(|| {
                malformed(&format!("Invalid piece character '{ch}' in board layout"))
            })?;

            if column > 8 {
                return Err(malformed("Board rank has too many files"));
            }

            // A pawn off its home rank must have moved, or a decoded
            // position would fabricate double-step eligibility.
            if piece.kind == PieceKind::Pawn && row != piece.color.pawn_row() {
                piece.moved = true;
            }

            board.set(BoardLocation { row, column }, Some(piece));
            column += 1;
        }

        if column != 9 {
            return Err(malformed("Board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<PieceColor, ChessErrors> {
    match side_part {
        "w" => Ok(PieceColor::Light),
        "b" => Ok(PieceColor::Dark),
        _ => Err(malformed(&format!(
            "Invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_en_passant(en_passant_part: &str) -> Result<Option<EnPassantState>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_location(en_passant_part)
        .map_err(|_| malformed(&format!("Invalid en-passant square: {en_passant_part}")))?;

    // The capturable pawn stands one rank behind the landing square.
    let pawn_row = match target.row {
        3 => 4,
        6 => 5,
        _ => {
            return Err(malformed(&format!(
                "En-passant square must be on rank 3 or 6: {en_passant_part}"
            )))
        }
    };

    Ok(Some(EnPassantState {
        target,
        pawn_location: BoardLocation {
            row: pawn_row,
            column: target.column,
        },
    }))
}

fn malformed(message: &str) -> ChessErrors {
    ChessErrors::MalformedFen(message.to_owned())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::pieces::piece_types::PieceColor;
    use crate::utils::algebraic::algebraic_to_location;

    #[test]
    fn parses_the_starting_position() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game_state.turn, PieceColor::Light);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert!(!game_state.in_check);
        assert!(game_state.castling.light_short && game_state.castling.dark_long);

        let e2 = algebraic_to_location("e2").expect("e2 should parse");
        let pawn = game_state.board.get(e2).expect("e2 should hold a pawn");
        assert!(!pawn.moved);
    }

    #[test]
    fn pawns_off_their_home_rank_lose_the_double_step() {
        let game_state = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
            .expect("FEN should parse");
        let e4 = algebraic_to_location("e4").expect("e4 should parse");
        assert!(game_state.board.get(e4).expect("pawn on e4").moved);
        let a2 = algebraic_to_location("a2").expect("a2 should parse");
        assert!(!game_state.board.get(a2).expect("pawn on a2").moved);
    }

    #[test]
    fn en_passant_field_keeps_target_and_pawn_distinct() {
        let game_state =
            parse_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2")
                .expect("FEN should parse");
        let ep = game_state.en_passant.expect("en-passant state should load");
        assert_eq!(ep.target, algebraic_to_location("d6").expect("d6"));
        assert_eq!(ep.pawn_location, algebraic_to_location("d5").expect("d5"));
        assert_ne!(ep.target, ep.pawn_location);
    }

    #[test]
    fn malformed_fens_fail_fast() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPX/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e5 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1").is_err());
        assert!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra").is_err()
        );
    }

    #[test]
    fn decoded_mate_reads_as_mate() {
        // Fool's mate final position.
        let game_state =
            parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("FEN should parse");
        assert!(game_state.in_check);
        assert!(matches!(
            game_state.outcome,
            crate::game_state::game_state::GameOutcome::Checkmate {
                winner: PieceColor::Dark
            }
        ));
    }
}
