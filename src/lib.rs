//! Crate root module declarations for the Arbor Chess rules engine.
//!
//! This file exposes all top-level subsystems (board and piece model, move
//! generation, game state machinery, move history, and notation utilities)
//! so tests, benches, and external tooling can import stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board_location;
    pub mod chess_board;
}

pub mod pieces {
    pub mod piece_steps;
    pub mod piece_types;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod check_inspection;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod game_state {
    pub mod castling_state;
    pub mod chess_game;
    pub mod chess_rules;
    pub mod game_state;
    pub mod undo_state;
}

pub mod history {
    pub mod move_tree;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
    pub mod playout;
    pub mod render_game_state;
    pub mod san;
}
