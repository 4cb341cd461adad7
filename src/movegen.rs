//! Legal action generation and validation.

use crate::action::Action;
use crate::board::{Board, Color, Player};
use crate::constants::NUM_PITS;

/// Generate every legal action for `player`.
///
/// Pits are visited in ascending order; for each owned pit the order is red,
/// blue, reserve-as-red, reserve-as-blue. The search relies on this order
/// being stable to break ties reproducibly.
pub fn generate_actions(board: &Board, player: Player) -> Vec<Action> {
    let mut actions = Vec::with_capacity(NUM_PITS * 2);
    for (i, pit) in board.pits.iter().enumerate() {
        if !player.owns(i) {
            continue;
        }
        if pit.red > 0 {
            actions.push(Action::new(i, Color::Red));
        }
        if pit.blue > 0 {
            actions.push(Action::new(i, Color::Blue));
        }
        if pit.reserve > 0 {
            actions.push(Action::reserve(i, Color::Red));
            actions.push(Action::reserve(i, Color::Blue));
        }
    }
    actions
}

/// Check whether `player` may play `action` on `board`.
///
/// Actions that arrive from outside (the opponent's reported move) must go
/// through this before being applied.
pub fn is_valid_action(board: &Board, player: Player, action: &Action) -> bool {
    if action.pit >= NUM_PITS || !player.owns(action.pit) {
        return false;
    }
    board.pits[action.pit].count(action.lifted_seed()) > 0
}

/// The action to report when there is nothing better to say.
///
/// This is the first legal action if one exists, otherwise "sow red from the
/// player's lowest pit", which may itself be illegal. Callers must not apply
/// the fallback without validating it.
pub fn fallback_action(board: &Board, player: Player) -> Action {
    generate_actions(board, player)
        .into_iter()
        .next()
        .unwrap_or(Action::new(player.first_pit(), Color::Red))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pit;

    #[test]
    fn test_generate_initial_position() {
        let board = Board::new();
        let actions = generate_actions(&board, Player::A);
        // 8 pits, 4 actions each
        assert_eq!(actions.len(), 32);
        assert_eq!(actions[0], Action::new(0, Color::Red));
        assert_eq!(actions[1], Action::new(0, Color::Blue));
        assert_eq!(actions[2], Action::reserve(0, Color::Red));
        assert_eq!(actions[3], Action::reserve(0, Color::Blue));
        assert_eq!(actions[4], Action::new(2, Color::Red));
    }

    #[test]
    fn test_generate_skips_empty_kinds() {
        let mut board = Board::empty();
        board.pits[3] = Pit::new(0, 2, 0);
        board.pits[5] = Pit::new(0, 0, 1);
        let actions = generate_actions(&board, Player::B);
        assert_eq!(
            actions,
            vec![
                Action::new(3, Color::Blue),
                Action::reserve(5, Color::Red),
                Action::reserve(5, Color::Blue),
            ]
        );
        assert!(generate_actions(&board, Player::A).is_empty());
    }

    #[test]
    fn test_validate() {
        let mut board = Board::empty();
        board.pits[2] = Pit::new(1, 0, 0);
        assert!(is_valid_action(&board, Player::A, &Action::new(2, Color::Red)));
        assert!(!is_valid_action(&board, Player::A, &Action::new(2, Color::Blue)));
        assert!(!is_valid_action(&board, Player::A, &Action::reserve(2, Color::Red)));
        assert!(!is_valid_action(&board, Player::B, &Action::new(2, Color::Red)));
        assert!(!is_valid_action(&board, Player::A, &Action::new(16, Color::Red)));
    }

    #[test]
    fn test_fallback_action() {
        let mut board = Board::empty();
        assert_eq!(fallback_action(&board, Player::B), Action::new(1, Color::Red));
        board.pits[7] = Pit::new(0, 1, 0);
        assert_eq!(fallback_action(&board, Player::B), Action::new(7, Color::Blue));
    }
}
