//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every node works on its own copy of the board, so the recursion never
//! aliases state and the caller's board is never touched. There is no move
//! ordering beyond the generator's natural order and no transposition table;
//! the depth bound is the only thing that stops the search.
//!
//! The root is not searched with a shared window: each root action gets a
//! full `(-inf, +inf)` window, so root scores are exact minimax values and the
//! chosen action is the same one an unpruned search would pick.

use log::debug;

use crate::action::Action;
use crate::board::{Board, Player};
use crate::constants::SEARCH_DEPTH;
use crate::eval::evaluate;
use crate::movegen::{generate_actions, is_valid_action};
use crate::sowing::{apply_action, is_terminal};

/// Lower bound for alpha-beta windows.
pub const NEG_INF: i32 = i32::MIN;

/// Upper bound for alpha-beta windows.
pub const POS_INF: i32 = i32::MAX;

/// Legal actions for `player`, in generator order.
fn legal_actions(board: &Board, player: Player) -> Vec<Action> {
    let mut actions = generate_actions(board, player);
    actions.retain(|a| is_valid_action(board, player, a));
    actions
}

/// Minimax value of `board` for `perspective`, searched `depth` plies deep.
///
/// `to_move` is the side whose actions are expanded at this node and
/// `maximizing` says whether that side is `perspective`. Leaves, terminal
/// positions and positions where `to_move` has no action are scored with
/// [`evaluate`].
pub fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    perspective: Player,
    to_move: Player,
) -> i32 {
    if depth == 0 || is_terminal(board) {
        return evaluate(board, perspective);
    }

    let actions = legal_actions(board, to_move);
    if actions.is_empty() {
        return evaluate(board, perspective);
    }

    let next = to_move.opponent();
    if maximizing {
        let mut best = NEG_INF;
        for action in &actions {
            let mut child = *board;
            apply_action(&mut child, to_move, action);
            let val = minimax(&child, depth - 1, alpha, beta, false, perspective, next);
            best = best.max(val);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = POS_INF;
        for action in &actions {
            let mut child = *board;
            apply_action(&mut child, to_move, action);
            let val = minimax(&child, depth - 1, alpha, beta, true, perspective, next);
            best = best.min(val);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Score one root action: apply it and search the reply tree with a full window.
fn score_root_action(board: &Board, player: Player, action: &Action, depth: u32) -> i32 {
    let mut child = *board;
    apply_action(&mut child, player, action);
    minimax(
        &child,
        depth.saturating_sub(1),
        NEG_INF,
        POS_INF,
        false,
        player,
        player.opponent(),
    )
}

/// Every legal root action for `player` with its minimax score at `depth`.
pub fn search_root(board: &Board, player: Player, depth: u32) -> Vec<(Action, i32)> {
    legal_actions(board, player)
        .into_iter()
        .map(|action| (action, score_root_action(board, player, &action, depth)))
        .collect()
}

/// Pick the strictly highest score; the first one seen wins ties.
///
/// Takes the output of [`search_root`], so callers that already scored the
/// root don't have to search it again.
pub fn pick_best(scored: Vec<(Action, i32)>) -> Option<(Action, i32)> {
    let mut best: Option<(Action, i32)> = None;
    for (action, score) in scored {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((action, score)),
        }
    }
    best
}

/// Best action for `player` searched `depth` plies deep, with its score.
///
/// Returns `None` when `player` has no legal action.
pub fn best_move_at_depth(board: &Board, player: Player, depth: u32) -> Option<(Action, i32)> {
    let scored = search_root(board, player, depth);
    let n = scored.len();
    let best = pick_best(scored);
    if let Some((action, score)) = best {
        debug!("player {player}: {action} scores {score} ({n} candidates, depth {depth})");
    }
    best
}

/// Best action for `player` at the default depth.
pub fn best_move(board: &Board, player: Player) -> Option<Action> {
    best_move_at_depth(board, player, SEARCH_DEPTH).map(|(action, _)| action)
}

/// Same result as [`best_move_at_depth`], with the root actions scored on the
/// rayon thread pool. Deeper levels stay sequential.
#[cfg(feature = "parallel")]
pub fn best_move_parallel(board: &Board, player: Player, depth: u32) -> Option<(Action, i32)> {
    use rayon::prelude::*;

    let actions = legal_actions(board, player);
    let n = actions.len();
    // `collect` keeps generator order, so ties resolve as in the sequential search.
    let scored: Vec<(Action, i32)> = actions
        .into_par_iter()
        .map(|action| (action, score_root_action(board, player, &action, depth)))
        .collect();
    let best = pick_best(scored);
    if let Some((action, score)) = best {
        debug!("player {player}: {action} scores {score} ({n} candidates, depth {depth}, parallel)");
    }
    best
}
