//! Constants for the ring geometry, game termination, search and evaluation.
//!
//! This module contains all the tunable parameters of the engine.
//! The board is a ring of 16 pits; even pits belong to player A and odd
//! pits to player B.
//!
//! # Parallel root search
//!
//! Scoring the root actions on the rayon pool is controlled by a Cargo
//! feature:
//! - `parallel` (default): `best_move_parallel` splits the root loop
//!
//! To compile a strictly single-threaded engine:
//! ```sh
//! cargo build --no-default-features
//! ```

// =============================================================================
// Ring Geometry
// =============================================================================

/// Number of pits on the ring.
pub const NUM_PITS: usize = 16;

/// Seeds of each kind placed in every pit at the start of a game.
pub const INITIAL_SEEDS_PER_KIND: u32 = 2;

/// Total number of seeds in play at the start of a game (16 pits x 3 kinds x 2).
pub const TOTAL_SEEDS: u32 = NUM_PITS as u32 * 3 * INITIAL_SEEDS_PER_KIND;

// =============================================================================
// Game Termination
// =============================================================================

/// Captured seeds needed to win outright (more than half of `TOTAL_SEEDS`).
pub const WINNING_CAPTURES: u32 = 49;

/// The game ends once fewer than this many seeds remain on the board.
pub const MIN_BOARD_SEEDS: u32 = 10;

/// Maximum game length in plies.
pub const MAX_PLIES: u32 = 400;

// =============================================================================
// Capture Rule
// =============================================================================

/// Smallest pit total that gets captured at the end of a sowing.
pub const CAPTURE_MIN: u32 = 2;

/// Largest pit total that gets captured at the end of a sowing.
pub const CAPTURE_MAX: u32 = 3;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const SEARCH_DEPTH: u32 = 6;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight of the capture differential.
pub const CAPTURE_WEIGHT: i32 = 20;

/// Baseline for the starvation-pressure term (`baseline - opponent seeds`).
pub const STARVATION_BASELINE: i32 = 20;

/// Bonus per opponent pit sitting at a capturable total (penalty for our own).
pub const VULNERABLE_PIT_BONUS: i32 = 6;
