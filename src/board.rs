//! Board representation: sixteen pits on a ring, two capture totals and a
//! ply counter.
//!
//! The board is a small `Copy` value. The search clones it for every node it
//! explores, so nothing in here is ever shared or aliased.

use std::fmt;

use crate::constants::{INITIAL_SEEDS_PER_KIND, NUM_PITS};

/// One of the two sides. Player A owns the even pits, player B the odd ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Whether this player owns pit `pit` (0-indexed).
    #[inline]
    pub fn owns(self, pit: usize) -> bool {
        match self {
            Player::A => pit % 2 == 0,
            Player::B => pit % 2 == 1,
        }
    }

    /// The lowest-indexed pit owned by this player.
    #[inline]
    pub fn first_pit(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// A regular seed color.
///
/// Besides naming a seed kind, the color selects the placement rule used when
/// sowing: red seeds go into every pit, blue seeds only into the opponent's.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

/// The three kinds of seed a pit can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Seed {
    Red,
    Blue,
    /// Transparent seeds, sown under the rule of a color chosen by the mover.
    Reserve,
}

impl From<Color> for Seed {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => Seed::Red,
            Color::Blue => Seed::Blue,
        }
    }
}

/// Seed counts of a single pit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pit {
    pub red: u32,
    pub blue: u32,
    pub reserve: u32,
}

impl Pit {
    pub const fn new(red: u32, blue: u32, reserve: u32) -> Self {
        Self { red, blue, reserve }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.red + self.blue + self.reserve
    }

    #[inline]
    pub fn count(&self, seed: Seed) -> u32 {
        match seed {
            Seed::Red => self.red,
            Seed::Blue => self.blue,
            Seed::Reserve => self.reserve,
        }
    }

    #[inline]
    pub fn count_mut(&mut self, seed: Seed) -> &mut u32 {
        match seed {
            Seed::Red => &mut self.red,
            Seed::Blue => &mut self.blue,
            Seed::Reserve => &mut self.reserve,
        }
    }

    /// Remove every seed of one kind and return how many there were.
    #[inline]
    pub fn take(&mut self, seed: Seed) -> u32 {
        std::mem::take(self.count_mut(seed))
    }

    /// Empty the pit and return its former total.
    #[inline]
    pub fn clear(&mut self) -> u32 {
        let total = self.total();
        *self = Pit::default();
        total
    }
}

/// A game position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub pits: [Pit; NUM_PITS],
    /// Seeds captured so far, indexed by player (A then B).
    pub captures: [u32; 2],
    /// Number of actions applied since the start of the game.
    pub ply: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The opening position: every pit holds two seeds of each kind.
    pub fn new() -> Self {
        let k = INITIAL_SEEDS_PER_KIND;
        Self {
            pits: [Pit::new(k, k, k); NUM_PITS],
            captures: [0, 0],
            ply: 0,
        }
    }

    /// A board with no seeds anywhere, for building positions by hand.
    pub fn empty() -> Self {
        Self {
            pits: [Pit::default(); NUM_PITS],
            captures: [0, 0],
            ply: 0,
        }
    }

    #[inline]
    pub fn pit_total(&self, pit: usize) -> u32 {
        self.pits[pit].total()
    }

    /// Total seeds in the pits owned by `player`.
    pub fn seeds_owned_by(&self, player: Player) -> u32 {
        self.pits
            .iter()
            .enumerate()
            .filter(|(i, _)| player.owns(*i))
            .map(|(_, p)| p.total())
            .sum()
    }

    /// Total seeds in the pits owned by the opponent of `player`.
    #[inline]
    pub fn opponent_seeds(&self, player: Player) -> u32 {
        self.seeds_owned_by(player.opponent())
    }

    /// Total seeds left on the board.
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().map(Pit::total).sum()
    }

    #[inline]
    pub fn captured(&self, player: Player) -> u32 {
        self.captures[player.index()]
    }

    #[inline]
    pub fn add_captures(&mut self, player: Player, seeds: u32) {
        self.captures[player.index()] += seeds;
    }

    pub fn set_captured(&mut self, player: Player, seeds: u32) {
        self.captures[player.index()] = seeds;
    }

    /// Seeds on the board plus both capture totals. Constant over a game.
    pub fn seed_count(&self) -> u32 {
        self.total_seeds() + self.captures[0] + self.captures[1]
    }
}

/// Index of the pit after `pit`, clockwise.
#[inline]
pub fn next_pit(pit: usize) -> usize {
    (pit + 1) % NUM_PITS
}

/// Index of the pit before `pit`, counter-clockwise.
#[inline]
pub fn prev_pit(pit: usize) -> usize {
    (pit + NUM_PITS - 1) % NUM_PITS
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ply {}  captures A={} B={}",
            self.ply, self.captures[0], self.captures[1]
        )?;
        for (i, pit) in self.pits.iter().enumerate() {
            let owner = if Player::A.owns(i) { 'A' } else { 'B' };
            write!(f, "{:>2}{owner} {}/{}/{}", i + 1, pit.red, pit.blue, pit.reserve)?;
            if i % 4 == 3 {
                writeln!(f)?;
            } else {
                write!(f, "   ")?;
            }
        }
        Ok(())
    }
}
