//! Line protocol spoken with the game arbiter.
//!
//! The arbiter drives the game over stdin/stdout, one message per line:
//!
//! - `START` - we are player A and make the first move
//! - `END` - the session is over
//! - `STATE <player> <ply> <capA> <capB> <pits>` - answer with the best move
//!   for that position (see [`crate::snapshot`]); the live game is untouched
//! - anything else - the opponent's last move, e.g. `7TR`
//!
//! Every message except `END` is answered with exactly one move token. The
//! first message decides our side: `START` makes us player A, anything else
//! makes us player B.
//!
//! ## Example
//!
//! ```ignore
//! use awale_engine::arbiter::ArbiterSession;
//! let mut session = ArbiterSession::new();
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{BufRead, Write};

use anyhow::Context;
use log::{debug, info, warn};

use crate::action::Action;
use crate::board::{Board, Player};
use crate::constants::SEARCH_DEPTH;
use crate::movegen::{fallback_action, is_valid_action};
use crate::search::best_move_at_depth;
use crate::snapshot::{STATE_KEYWORD, Snapshot};
use crate::sowing::apply_action;

/// Message telling us to open the game.
pub const START: &str = "START";

/// Message ending the session.
pub const END: &str = "END";

/// What to send back for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to send (blank input).
    Silent,
    /// Send this move token.
    Move(String),
    /// Stop reading.
    Quit,
}

/// State of one game against the arbiter.
pub struct ArbiterSession {
    /// Live game position
    board: Board,
    /// Our side, decided by the first message
    me: Option<Player>,
    /// Search depth in plies
    depth: u32,
    /// Score root actions on the rayon pool
    parallel: bool,
}

impl Default for ArbiterSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbiterSession {
    /// Create a session with the default search depth.
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    /// Create a session searching `depth` plies per move.
    pub fn with_depth(depth: u32) -> Self {
        Self {
            board: Board::new(),
            me: None,
            depth: depth.max(1),
            parallel: false,
        }
    }

    /// Split the root of each search across threads. Has no effect when the
    /// crate is built without the `parallel` feature.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Our side, once the first message has been seen.
    pub fn me(&self) -> Option<Player> {
        self.me
    }

    /// Read messages from `input` and write replies to `output` until `END`
    /// or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read from arbiter")?;
            match self.handle_line(&line) {
                Reply::Silent => continue,
                Reply::Move(token) => {
                    writeln!(output, "{token}").context("failed to write move")?;
                    output.flush().context("failed to flush move")?;
                }
                Reply::Quit => break,
            }
        }
        info!("session over after {} plies", self.board.ply);
        Ok(())
    }

    /// Handle one message and return the reply.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::Silent;
        }
        if line == END {
            return Reply::Quit;
        }
        if line.split_whitespace().next() == Some(STATE_KEYWORD) {
            return self.answer_snapshot(line);
        }

        let me = match self.me {
            Some(me) => me,
            None => {
                let me = if line == START { Player::A } else { Player::B };
                info!("playing as {me}");
                self.board = Board::new();
                self.me = Some(me);
                me
            }
        };

        if line != START {
            self.apply_opponent_move(me.opponent(), line);
        }
        self.play_own_move(me)
    }

    #[cfg(feature = "parallel")]
    fn choose(&self, board: &Board, player: Player) -> Option<Action> {
        let best = if self.parallel {
            crate::search::best_move_parallel(board, player, self.depth)
        } else {
            best_move_at_depth(board, player, self.depth)
        };
        best.map(|(action, _)| action)
    }

    #[cfg(not(feature = "parallel"))]
    fn choose(&self, board: &Board, player: Player) -> Option<Action> {
        best_move_at_depth(board, player, self.depth).map(|(action, _)| action)
    }

    fn answer_snapshot(&self, line: &str) -> Reply {
        match line.parse::<Snapshot>() {
            Ok(snap) => {
                let action = self
                    .choose(&snap.board, snap.to_move)
                    .unwrap_or_else(|| fallback_action(&snap.board, snap.to_move));
                Reply::Move(action.to_string())
            }
            Err(e) => {
                warn!("bad snapshot: {e}");
                let player = self.me.unwrap_or(Player::A);
                Reply::Move(fallback_action(&self.board, player).to_string())
            }
        }
    }

    fn apply_opponent_move(&mut self, opponent: Player, token: &str) {
        match token.parse::<Action>() {
            Ok(action) if is_valid_action(&self.board, opponent, &action) => {
                let outcome = apply_action(&mut self.board, opponent, &action);
                debug!("opponent {action}: {outcome:?}");
            }
            Ok(action) => warn!("ignoring illegal opponent move {action}"),
            Err(e) => warn!("ignoring input {token:?}: {e}"),
        }
    }

    fn play_own_move(&mut self, me: Player) -> Reply {
        match self.choose(&self.board, me) {
            Some(action) => {
                let outcome = apply_action(&mut self.board, me, &action);
                debug!("own {action}: {outcome:?}");
                Reply::Move(action.to_string())
            }
            None => {
                let action = fallback_action(&self.board, me);
                warn!("no legal move, answering {action}");
                Reply::Move(action.to_string())
            }
        }
    }
}
