//! Awale-Engine: a minimax player for a three-seed Mancala variant.
//!
//! The game is played on a ring of 16 pits holding red, blue and reserve
//! (transparent) seeds. Player A owns the even pits, player B the odd ones.
//! This crate provides the rules engine, a fixed-depth alpha-beta search and
//! the line protocol used to play against an external arbiter.
//!
//! ## Modules
//!
//! - [`constants`] - Ring geometry, termination thresholds, search and evaluation parameters
//! - [`board`] - Board state, players, seed kinds
//! - [`action`] - Actions and their text encoding
//! - [`movegen`] - Legal action generation and validation
//! - [`sowing`] - Sowing, chain captures, famine and the terminal test
//! - [`eval`] - Heuristic position evaluation
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`snapshot`] - `STATE` position lines
//! - [`playout`] - Seeded random games
//! - [`arbiter`] - Session loop for the arbiter protocol
//!
//! ## Example
//!
//! ```
//! use awale_engine::action::Action;
//! use awale_engine::board::{Board, Player};
//! use awale_engine::search::best_move_at_depth;
//! use awale_engine::sowing::apply_action;
//!
//! // Start a game and let the opponent open
//! let mut board = Board::new();
//! let opening: Action = "3R".parse().unwrap();
//! apply_action(&mut board, Player::A, &opening);
//!
//! // Search for the best reply
//! let (reply, score) = best_move_at_depth(&board, Player::B, 3).unwrap();
//! println!("Best reply: {reply} ({score})");
//! ```

pub mod action;
pub mod arbiter;
pub mod board;
pub mod constants;
pub mod eval;
pub mod movegen;
pub mod playout;
pub mod search;
pub mod snapshot;
pub mod sowing;
