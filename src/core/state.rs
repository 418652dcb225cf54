//! Live puzzle state, as driven by an interactive front-end.
//!
//! ## LockState
//!
//! The colors currently on the ring. Operations take the state by value
//! and return the next one; `im::Vector` keeps the clone a front-end makes
//! per frame O(1). Decoding applies the same checks as construction: the
//! palette is non-empty and every color lies inside it.
//!
//! ## LockSession
//!
//! The turn structure of one game, without any rendering:
//!
//! ```text
//! Select --(n distinct holes)--> Modify --commit--> Adversary --rotate--> Select
//!    \____________________ monochromatic ring ____________________/--> Victory
//! ```
//!
//! Inputs that do not apply to the current phase are ignored and reported
//! as `false`, the way a click on the wrong hole does nothing.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coloring::TupleColoring;
use super::config::LockConfig;
use super::error::{Result, ValidationError};
use super::rng::LockRng;
use super::selection::Selection;
use crate::lock::LockLocation;

/// Colors currently on the ring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLockState")]
pub struct LockState {
    colors: Vector<u8>,
    palette: u8,
}

/// Unchecked wire form of `LockState`.
#[derive(Deserialize)]
struct RawLockState {
    colors: Vector<u8>,
    palette: u8,
}

impl TryFrom<RawLockState> for LockState {
    type Error = ValidationError;

    fn try_from(raw: RawLockState) -> Result<Self> {
        if raw.palette == 0 {
            return Err(ValidationError::EmptyPalette);
        }
        if let Some(&color) = raw.colors.iter().find(|&&c| c >= raw.palette) {
            return Err(ValidationError::ColorOutOfPalette {
                color,
                palette: raw.palette,
            });
        }
        Ok(Self {
            colors: raw.colors,
            palette: raw.palette,
        })
    }
}

impl LockState {
    /// State with the given colors. Colors are reduced modulo `palette`.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = u8>, palette: u8) -> Self {
        let palette = palette.max(1);
        Self {
            colors: colors.into_iter().map(|c| c % palette).collect(),
            palette,
        }
    }

    /// Uniformly random coloring of `holes` positions.
    #[must_use]
    pub fn random(holes: usize, palette: u8, rng: &mut LockRng) -> Self {
        let palette = palette.max(1);
        Self {
            colors: (0..holes).map(|_| rng.gen_color(palette)).collect(),
            palette,
        }
    }

    #[must_use]
    pub fn holes(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn palette(&self) -> u8 {
        self.palette
    }

    #[must_use]
    pub fn color(&self, hole: usize) -> Option<u8> {
        self.colors.get(hole).copied()
    }

    /// Cyclic permutation: the color at hole `i` moves to `(i + amount) mod N`.
    #[must_use]
    pub fn rotate(mut self, amount: usize) -> Self {
        let holes = self.colors.len();
        if holes == 0 {
            return self;
        }
        let amount = amount % holes;
        if amount > 0 {
            let tail = self.colors.split_off(holes - amount);
            let mut rotated = tail;
            rotated.append(self.colors);
            self.colors = rotated;
        }
        self
    }

    /// Advance one hole to the next color of the palette.
    #[must_use]
    pub fn cycle(mut self, hole: usize) -> Self {
        let palette = self.palette;
        if let Some(color) = self.colors.get_mut(hole) {
            *color = (*color + 1) % palette;
        }
        self
    }

    /// Assign `recoloring[i]` to hole `selection[i]`.
    #[must_use]
    pub fn recolor(mut self, selection: &Selection, recoloring: &[u8]) -> Self {
        let palette = self.palette;
        for (hole, &color) in selection.holes().zip(recoloring) {
            if let Some(slot) = self.colors.get_mut(hole) {
                *slot = color % palette;
            }
        }
        self
    }

    /// Sequential-adjacency check: every hole equals the next one.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.colors
            .iter()
            .zip(self.colors.iter().skip(1))
            .all(|(a, b)| a == b)
    }

    #[must_use]
    pub fn to_coloring(&self) -> TupleColoring {
        TupleColoring(self.colors.iter().copied().collect())
    }

    /// The k-color graph location this state corresponds to between turns.
    #[must_use]
    pub fn to_location(&self) -> LockLocation<TupleColoring> {
        LockLocation::new(self.to_coloring(), Selection::empty())
    }
}

/// Turn phase of a live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Player is choosing holes for the hand.
    Select,
    /// Player is recoloring the selected holes.
    Modify,
    /// Adversary rotates the ring.
    Adversary,
    /// The ring is monochromatic. Terminal.
    Victory,
}

/// One game of the lock puzzle.
#[derive(Clone, Debug)]
pub struct LockSession {
    state: LockState,
    phase: Phase,
    hand: usize,
    selection: SmallVec<[u8; 16]>,
    adversary: LockRng,
    rounds: u32,
}

impl LockSession {
    /// Start a session with a random initial coloring drawn from `config.seed`.
    pub fn new(config: &LockConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = LockRng::new(config.seed);
        let state = LockState::random(config.holes, config.colors as u8, &mut rng);
        Ok(Self::with_state(state, config.hand, rng.fork()))
    }

    /// Start a session from a known coloring.
    #[must_use]
    pub fn with_state(state: LockState, hand: usize, adversary: LockRng) -> Self {
        let mut session = Self {
            state,
            phase: Phase::Select,
            hand,
            selection: SmallVec::new(),
            adversary,
            rounds: 0,
        };
        session.check_victory();
        session
    }

    #[must_use]
    pub fn state(&self) -> &LockState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Holes selected so far this turn, in click order.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::from_holes(&self.selection)
    }

    /// Completed adversary rotations.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Add `hole` to the hand. Once the hand is full the phase moves to `Modify`.
    pub fn select(&mut self, hole: usize) -> bool {
        if self.phase != Phase::Select || hole >= self.state.holes() {
            return false;
        }
        let Ok(hole) = u8::try_from(hole) else {
            return false;
        };
        if self.selection.contains(&hole) {
            return false;
        }
        self.selection.push(hole);
        if self.selection.len() >= self.hand {
            self.phase = Phase::Modify;
        }
        true
    }

    /// Cycle the color of a selected hole.
    pub fn cycle(&mut self, hole: usize) -> bool {
        let selected = u8::try_from(hole).is_ok_and(|h| self.selection.contains(&h));
        if self.phase != Phase::Modify || !selected {
            return false;
        }
        self.state = self.state.clone().cycle(hole);
        self.check_victory();
        true
    }

    /// End the player's turn and hand the ring to the adversary.
    pub fn commit(&mut self) -> bool {
        if self.phase != Phase::Modify {
            return false;
        }
        self.selection.clear();
        self.phase = Phase::Adversary;
        true
    }

    /// Rotate the ring by a random amount. Returns the rotation applied.
    pub fn adversary_turn(&mut self) -> Option<usize> {
        if self.phase != Phase::Adversary {
            return None;
        }
        let amount = self.adversary.gen_range_usize(0..self.state.holes().max(1));
        self.state = self.state.clone().rotate(amount);
        self.rounds += 1;
        self.phase = Phase::Select;
        debug!("adversary rotated by {} (round {})", amount, self.rounds);
        self.check_victory();
        Some(amount)
    }

    fn check_victory(&mut self) {
        if self.state.is_won() {
            self.phase = Phase::Victory;
        }
    }
}
