//! Full position snapshots as sent by the arbiter.
//!
//! A snapshot is a single line:
//!
//! ```text
//! STATE <player> <ply> <capA> <capB> 1:r,b,t;2:r,b,t;...;16:r,b,t
//! ```
//!
//! Pit groups are 1-indexed and may come in any order. Groups that don't
//! parse are skipped, but all sixteen pits must be present in the end. A
//! snapshot holding more seeds than a game starts with, or a ply past the
//! move limit, is rejected.

use std::fmt;
use std::str::FromStr;

use crate::action::DecodeError;
use crate::board::{Board, Pit, Player};
use crate::constants::{MAX_PLIES, NUM_PITS, TOTAL_SEEDS};

/// Leading keyword of a snapshot line.
pub const STATE_KEYWORD: &str = "STATE";

/// A decoded position together with the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub to_move: Player,
    pub board: Board,
}

fn parse_player(token: &str) -> Result<Player, DecodeError> {
    match token.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A') => Ok(Player::A),
        Some('B') => Ok(Player::B),
        _ => Err(DecodeError::UnknownPlayer(token.to_string())),
    }
}

fn parse_field(token: Option<&str>, field: &'static str) -> Result<u32, DecodeError> {
    let token = token.ok_or(DecodeError::MissingField(field))?;
    token.parse().map_err(|_| DecodeError::InvalidField {
        field,
        value: token.to_string(),
    })
}

/// Parse one `i:r,b,t` group into a 0-indexed pit and its counts.
fn parse_group(group: &str) -> Option<(usize, Pit)> {
    let (index, counts) = group.split_once(':')?;
    let index: usize = index.trim().parse().ok()?;
    if !(1..=NUM_PITS).contains(&index) {
        return None;
    }
    let mut counts = counts.split(',').map(|c| c.trim().parse::<u32>());
    let red = counts.next()?.ok()?;
    let blue = counts.next()?.ok()?;
    let reserve = counts.next()?.ok()?;
    if counts.next().is_some() {
        return None;
    }
    Some((index - 1, Pit::new(red, blue, reserve)))
}

impl FromStr for Snapshot {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match tokens.next() {
            Some(STATE_KEYWORD) => {}
            Some(_) => return Err(DecodeError::NotState),
            None => return Err(DecodeError::Empty),
        }

        let to_move = parse_player(tokens.next().ok_or(DecodeError::MissingField("player"))?)?;
        let ply = parse_field(tokens.next(), "ply")?;
        let cap_a = parse_field(tokens.next(), "capA")?;
        let cap_b = parse_field(tokens.next(), "capB")?;
        if ply > MAX_PLIES {
            return Err(DecodeError::PlyOutOfRange(ply));
        }

        let mut board = Board::empty();
        board.ply = ply;
        board.set_captured(Player::A, cap_a);
        board.set_captured(Player::B, cap_b);

        let mut seen = [false; NUM_PITS];
        let mut any_groups = false;
        for group in tokens.flat_map(|t| t.split(';')).filter(|g| !g.is_empty()) {
            any_groups = true;
            if let Some((i, pit)) = parse_group(group) {
                board.pits[i] = pit;
                seen[i] = true;
            }
        }
        if !any_groups {
            return Err(DecodeError::MissingField("pits"));
        }

        let parsed = seen.iter().filter(|&&s| s).count();
        if parsed != NUM_PITS {
            return Err(DecodeError::MissingPits(parsed));
        }

        // Summed wide so hostile counts can't overflow the check itself.
        let seeds = board
            .pits
            .iter()
            .map(|p| p.red as u64 + p.blue as u64 + p.reserve as u64)
            .sum::<u64>()
            + cap_a as u64
            + cap_b as u64;
        if seeds > TOTAL_SEEDS as u64 {
            return Err(DecodeError::TooManySeeds(seeds));
        }
        Ok(Snapshot { to_move, board })
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.board;
        write!(
            f,
            "{STATE_KEYWORD} {} {} {} {} ",
            self.to_move,
            b.ply,
            b.captured(Player::A),
            b.captured(Player::B)
        )?;
        for (i, pit) in b.pits.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}:{},{},{}", i + 1, pit.red, pit.blue, pit.reserve)?;
        }
        Ok(())
    }
}
