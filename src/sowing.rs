//! Action execution: sowing, chain captures and famine.
//!
//! Applying an action runs three phases on the board in place:
//!
//! 1. **Sowing** - the lifted seeds are dropped one per pit, clockwise,
//!    skipping the source pit. Red sowing feeds every pit; blue sowing feeds
//!    only the opponent's pits. A reserve action sows the reserve seeds first
//!    and then the chosen color's seeds, continuing where the reserve ended.
//! 2. **Capture** - walking back from the last pit sown, every pit holding
//!    exactly 2 or 3 seeds is emptied into the mover's store, until the
//!    first pit that doesn't qualify.
//! 3. **Famine** - if the opponent is left with no seeds at all, the mover
//!    takes everything remaining on the board.

use crate::action::Action;
use crate::board::{next_pit, prev_pit, Board, Color, Player, Seed};
use crate::constants::{
    CAPTURE_MAX, CAPTURE_MIN, MAX_PLIES, MIN_BOARD_SEEDS, NUM_PITS, WINNING_CAPTURES,
};

/// What happened while applying an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Last pit that received a seed (the source pit if nothing was sown).
    pub last_hole: usize,
    /// Seeds taken by the capture chain, not counting famine.
    pub captured: u32,
    /// Seeds swept off the board because the opponent starved.
    pub famine: u32,
    /// Whether the resulting position ends the game.
    pub terminal: bool,
}

/// Apply `action` for `player`.
///
/// The action is assumed valid; see [`crate::movegen::is_valid_action`].
pub fn apply_action(board: &mut Board, player: Player, action: &Action) -> Outcome {
    board.ply += 1;

    let source = action.pit;
    let color_seed = Seed::from(action.color);

    let mut last = source;
    if action.use_reserve {
        let count = board.pits[source].take(Seed::Reserve);
        last = sow(board, player, source, last, count, Seed::Reserve, action.color);
    }
    let count = board.pits[source].take(color_seed);
    if count > 0 {
        last = sow(board, player, source, last, count, color_seed, action.color);
    }

    let captured = capture_chain(board, player, source, last);
    let famine = apply_famine(board, player);

    Outcome {
        last_hole: last,
        captured,
        famine,
        terminal: is_terminal(board),
    }
}

/// Drop `count` seeds of kind `seed` one per pit, starting after `cursor`.
///
/// `rule` selects the placement: red feeds every pit but the source, blue
/// feeds only pits owned by the opponent of `player`. Returns the last pit
/// that received a seed, or `cursor` when `count` is zero.
pub fn sow(
    board: &mut Board,
    player: Player,
    source: usize,
    cursor: usize,
    count: u32,
    seed: Seed,
    rule: Color,
) -> usize {
    let opponent = player.opponent();
    let mut last = cursor;
    let mut h = next_pit(cursor);

    for _ in 0..count {
        loop {
            if h == source {
                h = next_pit(h);
                continue;
            }
            if rule == Color::Red || opponent.owns(h) {
                break;
            }
            h = next_pit(h);
        }
        *board.pits[h].count_mut(seed) += 1;
        last = h;
        h = next_pit(h);
    }
    last
}

/// Capture backwards from `last` while pits hold exactly 2 or 3 seeds.
///
/// The chain stops at the first pit with any other total and never takes the
/// source pit of the move. Returns the number of seeds captured.
pub fn capture_chain(board: &mut Board, player: Player, source: usize, last: usize) -> u32 {
    let mut captured = 0;
    let mut h = last;
    for _ in 0..NUM_PITS {
        if h == source {
            break;
        }
        let total = board.pit_total(h);
        if !(CAPTURE_MIN..=CAPTURE_MAX).contains(&total) {
            break;
        }
        captured += board.pits[h].clear();
        h = prev_pit(h);
    }
    board.add_captures(player, captured);
    captured
}

/// Sweep the board into `player`'s store if the opponent has no seeds left.
fn apply_famine(board: &mut Board, player: Player) -> u32 {
    if board.opponent_seeds(player) != 0 {
        return 0;
    }
    let rest: u32 = board.pits.iter_mut().map(|p| p.clear()).sum();
    board.add_captures(player, rest);
    rest
}

/// Whether the game is over: a decisive capture total, too few seeds left on
/// the board, or the ply limit reached.
pub fn is_terminal(board: &Board) -> bool {
    board.captures.iter().any(|&c| c >= WINNING_CAPTURES)
        || board.total_seeds() < MIN_BOARD_SEEDS
        || board.ply >= MAX_PLIES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pit;

    #[test]
    fn test_red_sowing_skips_nothing_but_source() {
        let mut board = Board::empty();
        board.pits[0] = Pit::new(17, 0, 0);
        board.pits[1] = Pit::new(0, 0, 9);
        let last = {
            let count = board.pits[0].take(Seed::Red);
            sow(&mut board, Player::A, 0, 0, count, Seed::Red, Color::Red)
        };
        // 15 other pits get one seed, then pits 1 and 2 a second one
        assert_eq!(last, 2);
        assert_eq!(board.pits[0].red, 0);
        assert_eq!(board.pits[1].red, 2);
        assert_eq!(board.pits[2].red, 2);
        assert_eq!(board.pits[3].red, 1);
        assert_eq!(board.pits[15].red, 1);
    }

    #[test]
    fn test_blue_sowing_feeds_opponent_only() {
        let mut board = Board::empty();
        board.pits[4] = Pit::new(0, 3, 0);
        let outcome = apply_action(&mut board, Player::A, &Action::new(4, Color::Blue));
        assert_eq!(outcome.last_hole, 9);
        assert_eq!(board.pits[5].blue, 1);
        assert_eq!(board.pits[7].blue, 1);
        assert_eq!(board.pits[9].blue, 1);
        assert_eq!(board.pits[6].blue, 0);
        assert_eq!(board.pits[8].blue, 0);
    }

    #[test]
    fn test_reserve_then_color_continue_from_last_hole() {
        let mut board = Board::empty();
        board.pits[0] = Pit::new(2, 0, 2);
        board.pits[8] = Pit::new(5, 5, 5);
        let outcome = apply_action(&mut board, Player::A, &Action::reserve(0, Color::Red));
        assert_eq!(board.pits[1].reserve, 1);
        assert_eq!(board.pits[2].reserve, 1);
        assert_eq!(board.pits[3].red, 1);
        assert_eq!(board.pits[4].red, 1);
        assert_eq!(board.pits[0].total(), 0);
        assert_eq!(outcome.last_hole, 4);
        assert_eq!(board.ply, 1);
    }

    #[test]
    fn test_reserve_as_blue_continues_on_opponent_pits() {
        // Both sowings feed only B's pits: reserve to 1 and 3, blue on to 5 and 7.
        let mut board = Board::empty();
        board.pits[0] = Pit::new(0, 2, 2);
        board.pits[9] = Pit::new(5, 0, 0);
        let outcome = apply_action(&mut board, Player::A, &Action::reserve(0, Color::Blue));
        assert_eq!(board.pits[1], Pit::new(0, 0, 1));
        assert_eq!(board.pits[3], Pit::new(0, 0, 1));
        assert_eq!(board.pits[5], Pit::new(0, 1, 0));
        assert_eq!(board.pits[7], Pit::new(0, 1, 0));
        for i in [2, 4, 6, 8] {
            assert_eq!(board.pits[i].total(), 0, "own pit {i} was fed");
        }
        assert_eq!(board.pits[0].total(), 0);
        assert_eq!(outcome.last_hole, 7);
        assert_eq!(outcome.captured, 0);
    }

    #[test]
    fn test_reserve_without_companion_color() {
        let mut board = Board::empty();
        board.pits[2] = Pit::new(0, 4, 1);
        board.pits[9] = Pit::new(5, 0, 0);
        let outcome = apply_action(&mut board, Player::A, &Action::reserve(2, Color::Red));
        assert_eq!(board.pits[3].reserve, 1);
        assert_eq!(board.pits[2].blue, 4);
        assert_eq!(outcome.last_hole, 3);
    }

    #[test]
    fn test_capture_chain_stops_at_first_miss() {
        let mut board = Board::empty();
        board.pits[12] = Pit::new(4, 0, 0);
        board.pits[13] = Pit::new(1, 1, 0);
        board.pits[14] = Pit::new(1, 1, 1);
        board.pits[3] = Pit::new(9, 0, 0);
        let captured = capture_chain(&mut board, Player::A, 0, 14);
        assert_eq!(captured, 5);
        assert_eq!(board.pit_total(14), 0);
        assert_eq!(board.pit_total(13), 0);
        assert_eq!(board.pit_total(12), 4);
        assert_eq!(board.captured(Player::A), 5);
    }

    #[test]
    fn test_capture_chain_never_takes_source() {
        let mut board = Board::empty();
        board.pits[0] = Pit::new(0, 2, 0);
        board.pits[1] = Pit::new(2, 0, 0);
        let captured = capture_chain(&mut board, Player::A, 0, 1);
        assert_eq!(captured, 2);
        assert_eq!(board.pit_total(0), 2);
    }

    #[test]
    fn test_famine_sweeps_board() {
        let mut board = Board::empty();
        board.pits[0] = Pit::new(1, 0, 0);
        board.pits[1] = Pit::new(0, 1, 0);
        board.pits[2] = Pit::new(5, 0, 0);
        let outcome = apply_action(&mut board, Player::A, &Action::new(0, Color::Red));
        assert_eq!(outcome.last_hole, 1);
        assert_eq!(outcome.captured, 2);
        assert_eq!(outcome.famine, 5);
        assert!(outcome.terminal);
        assert_eq!(board.total_seeds(), 0);
        assert_eq!(board.captured(Player::A), 7);
    }

    #[test]
    fn test_no_famine_while_opponent_has_seeds() {
        let mut board = Board::empty();
        board.pits[2] = Pit::new(3, 3, 0);
        let before = board.total_seeds();
        let outcome = apply_action(&mut board, Player::A, &Action::new(2, Color::Blue));
        // pits 3, 5 and 7 end up with one seed each
        assert_eq!(outcome.captured, 0);
        assert_eq!(outcome.famine, 0);
        assert_eq!(board.total_seeds(), before);
    }

    #[test]
    fn test_terminal_conditions() {
        let mut board = Board::new();
        assert!(!is_terminal(&board));
        board.ply = MAX_PLIES;
        assert!(is_terminal(&board));

        let mut board = Board::new();
        board.set_captured(Player::B, WINNING_CAPTURES);
        assert!(is_terminal(&board));

        let mut board = Board::empty();
        board.pits[0] = Pit::new(9, 0, 0);
        assert!(is_terminal(&board));
    }
}
