//! Static position evaluation.

use crate::board::{Board, Player};
use crate::constants::{
    CAPTURE_MAX, CAPTURE_MIN, CAPTURE_WEIGHT, NUM_PITS, STARVATION_BASELINE,
    VULNERABLE_PIT_BONUS,
};

/// Score `board` from `perspective`'s point of view; higher is better.
///
/// The score adds up:
/// - the capture differential, weighted by `CAPTURE_WEIGHT`
/// - the difference in seeds on each side of the board
/// - starvation pressure: `STARVATION_BASELINE` minus the opponent's seeds
/// - `VULNERABLE_PIT_BONUS` per opponent pit at 2 or 3 seeds, minus the same
///   per own pit at 2 or 3
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let opponent = perspective.opponent();
    let own_cap = board.captured(perspective) as i32;
    let opp_cap = board.captured(opponent) as i32;

    let mut own_seeds = 0i32;
    let mut opp_seeds = 0i32;
    let mut vulnerability = 0i32;

    for i in 0..NUM_PITS {
        let total = board.pit_total(i);
        let mine = perspective.owns(i);
        if mine {
            own_seeds += total as i32;
        } else {
            opp_seeds += total as i32;
        }
        if (CAPTURE_MIN..=CAPTURE_MAX).contains(&total) {
            vulnerability += if mine {
                -VULNERABLE_PIT_BONUS
            } else {
                VULNERABLE_PIT_BONUS
            };
        }
    }

    (own_cap - opp_cap) * CAPTURE_WEIGHT
        + (own_seeds - opp_seeds)
        + (STARVATION_BASELINE - opp_seeds)
        + vulnerability
}
