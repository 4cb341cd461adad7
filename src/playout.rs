//! Random playouts (uniform random game simulation).
//!
//! A playout picks uniformly among the legal actions until the game ends or
//! the side to move is stuck. The generator is always passed in explicitly so
//! games are reproducible from a seed.

use fastrand::Rng;

use crate::action::Action;
use crate::board::{Board, Player};
use crate::movegen::generate_actions;
use crate::sowing::{apply_action, is_terminal};

/// Choose a uniformly random legal action for `player`.
pub fn random_action(board: &Board, player: Player, rng: &mut Rng) -> Option<Action> {
    let actions = generate_actions(board, player);
    if actions.is_empty() {
        return None;
    }
    Some(actions[rng.usize(..actions.len())])
}

/// Play random actions from `board` until it is terminal, `to_move` has no
/// action, or `max_plies` actions have been applied.
///
/// Returns the actions played, in order, with the player who played each.
pub fn play_random_game(
    board: &mut Board,
    mut to_move: Player,
    rng: &mut Rng,
    max_plies: u32,
) -> Vec<(Player, Action)> {
    let mut history = Vec::new();
    while !is_terminal(board) && (history.len() as u32) < max_plies {
        let Some(action) = random_action(board, to_move, rng) else {
            break;
        };
        apply_action(board, to_move, &action);
        history.push((to_move, action));
        to_move = to_move.opponent();
    }
    history
}

/// The player with more captured seeds, or `None` on a tie.
pub fn leader(board: &Board) -> Option<Player> {
    let a = board.captured(Player::A);
    let b = board.captured(Player::B);
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Some(Player::A),
        std::cmp::Ordering::Less => Some(Player::B),
        std::cmp::Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_SEEDS;

    #[test]
    fn test_same_seed_same_game() {
        let mut b1 = Board::new();
        let mut b2 = Board::new();
        let g1 = play_random_game(&mut b1, Player::A, &mut Rng::with_seed(42), 60);
        let g2 = play_random_game(&mut b2, Player::A, &mut Rng::with_seed(42), 60);
        assert_eq!(g1, g2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_playout_alternates_players() {
        let mut board = Board::new();
        let history = play_random_game(&mut board, Player::B, &mut Rng::with_seed(7), 20);
        for (i, (player, _)) in history.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::B } else { Player::A };
            assert_eq!(*player, expected);
        }
        assert_eq!(board.seed_count(), TOTAL_SEEDS);
    }

    #[test]
    fn test_random_action_none_when_stuck() {
        let board = Board::empty();
        assert_eq!(random_action(&board, Player::A, &mut Rng::with_seed(1)), None);
    }

    #[test]
    fn test_leader() {
        let mut board = Board::new();
        assert_eq!(leader(&board), None);
        board.add_captures(Player::B, 2);
        assert_eq!(leader(&board), Some(Player::B));
    }
}
