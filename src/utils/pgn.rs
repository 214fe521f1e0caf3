//! PGN export for game history interchange.
//!
//! Serializes the seven-tag roster and the history tree's main line to PGN
//! movetext. Games that did not start from the standard position get
//! SetUp/FEN tags so the receiver can reconstruct them.

use chrono::{Local, NaiveDate};

use crate::game_state::chess_game::ChessGame;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameOutcome;
use crate::pieces::piece_types::PieceColor;
use crate::utils::san::San;

/// Header metadata supplied by the caller; everything has a sensible
/// placeholder default.
#[derive(Debug, Clone)]
pub struct GameDetails {
    pub event: String,
    pub site: String,
    pub round: String,
    pub white_name: String,
    pub black_name: String,
    /// Stamped with today's date when absent.
    pub date: Option<NaiveDate>,
}

impl Default for GameDetails {
    fn default() -> Self {
        GameDetails {
            event: "Unknown".to_owned(),
            site: "Unknown".to_owned(),
            round: "?".to_owned(),
            white_name: "White".to_owned(),
            black_name: "Black".to_owned(),
            date: None,
        }
    }
}

pub fn write_pgn(game: &ChessGame, details: &GameDetails) -> String {
    let mut out = String::new();

    let date = match details.date {
        Some(date) => date.format("%Y.%m.%d").to_string(),
        None => Local::now().format("%Y.%m.%d").to_string(),
    };
    let result = result_token(game.state.outcome);

    push_tag(&mut out, "Event", &details.event);
    push_tag(&mut out, "Site", &details.site);
    push_tag(&mut out, "Date", &date);
    push_tag(&mut out, "Round", &details.round);
    push_tag(&mut out, "White", &details.white_name);
    push_tag(&mut out, "Black", &details.black_name);
    push_tag(&mut out, "Result", result);

    if game.initial_fen != STARTING_POSITION_FEN {
        push_tag(&mut out, "SetUp", "1");
        push_tag(&mut out, "FEN", &game.initial_fen);
    }

    out.push('\n');

    let san = San::default();
    let mut movetext_parts = Vec::<String>::new();
    let mut move_number = 1u32;
    for node in game.move_tree.main_line() {
        if node.mv.piece.color == PieceColor::Light {
            movetext_parts.push(format!("{move_number}. {}", san.format_move(&node.mv)));
            move_number += 1;
        } else {
            movetext_parts.push(san.format_move(&node.mv));
        }
    }
    movetext_parts.push(result.to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn result_token(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Ongoing => "*",
        GameOutcome::Checkmate {
            winner: PieceColor::Light,
        } => "1-0",
        GameOutcome::Checkmate {
            winner: PieceColor::Dark,
        } => "0-1",
        GameOutcome::Stalemate => "1/2-1/2",
    }
}

fn push_tag(out: &mut String, tag: &str, value: &str) {
    out.push_str(&format!("[{} \"{}\"]\n", tag, value.replace('"', "\\\"")));
}
