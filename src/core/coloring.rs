//! Ring colorings and the rotate / recolor primitives.
//!
//! Two representations share one interface:
//! - `BitColoring`: two colors packed into a `u32`, bit `i` = hole `i`
//! - `TupleColoring`: one `u8` color per hole, any alphabet size
//!
//! Both rotate in the same direction: the color at hole `i` moves to hole
//! `(i + amount) mod N`. They differ in their monochromatic check. The bit
//! form compares against all-zeros and all-ones; the tuple form compares
//! sequential neighbours only and never wraps from the last hole to the
//! first.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::selection::Selection;

/// A full assignment of colors to ring positions.
pub trait Coloring: Clone + Eq + Hash + Debug + Display {
    /// One recoloring of a full hand.
    type Recoloring: Clone + Debug;

    /// Every coloring of a ring of `holes` positions over `colors` colors.
    fn all(holes: usize, colors: usize) -> Vec<Self>;

    /// Every recoloring of a hand of `hand` positions over `colors` colors.
    fn recolorings(hand: usize, colors: usize) -> Vec<Self::Recoloring>;

    /// Cyclic rotation by `amount` positions.
    #[must_use]
    fn rotate(&self, amount: usize, holes: usize) -> Self;

    /// Assign `recoloring[i]` to hole `selection[i]`; other holes keep their color.
    #[must_use]
    fn recolor(&self, selection: &Selection, recoloring: &Self::Recoloring) -> Self;

    fn is_monochromatic(&self, holes: usize) -> bool;
}

/// Two-color ring packed into the low `holes` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BitColoring(pub u32);

impl BitColoring {
    /// All-ones mask for a ring of `holes` positions.
    #[must_use]
    pub const fn mask(holes: usize) -> u32 {
        if holes >= 32 {
            u32::MAX
        } else {
            (1u32 << holes) - 1
        }
    }

    /// Color (0 or 1) at `hole`.
    #[must_use]
    pub const fn color(self, hole: usize) -> u8 {
        ((self.0 >> hole) & 1) as u8
    }

    /// Expand to one entry per hole.
    #[must_use]
    pub fn to_tuple(self, holes: usize) -> TupleColoring {
        TupleColoring((0..holes).map(|h| self.color(h)).collect())
    }
}

impl Display for BitColoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

impl Coloring for BitColoring {
    /// Bit `i` is the new color of `selection[i]`.
    type Recoloring = u32;

    fn all(holes: usize, _colors: usize) -> Vec<Self> {
        (0..=Self::mask(holes)).map(BitColoring).collect()
    }

    fn recolorings(hand: usize, _colors: usize) -> Vec<u32> {
        (0..=Self::mask(hand)).collect()
    }

    fn rotate(&self, amount: usize, holes: usize) -> Self {
        if holes == 0 {
            return *self;
        }
        let amount = amount % holes;
        if amount == 0 {
            return *self;
        }
        let c = self.0;
        BitColoring(Self::mask(holes) & ((c << amount) | (c >> (holes - amount))))
    }

    fn recolor(&self, selection: &Selection, recoloring: &u32) -> Self {
        let mut bits = self.0;
        for (i, hole) in selection.holes().enumerate() {
            if recoloring & (1 << i) != 0 {
                bits |= 1 << hole;
            } else {
                bits &= !(1 << hole);
            }
        }
        BitColoring(bits)
    }

    fn is_monochromatic(&self, holes: usize) -> bool {
        self.0 == 0 || self.0 == Self::mask(holes)
    }
}

/// One color per hole, values in `[0, k)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TupleColoring(pub SmallVec<[u8; 16]>);

impl TupleColoring {
    #[must_use]
    pub fn from_colors(colors: &[u8]) -> Self {
        Self(SmallVec::from_slice(colors))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.0
    }
}

impl Display for TupleColoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", color)?;
        }
        write!(f, "]")
    }
}

/// Every length-`len` tuple over `0..colors`, first entry most significant.
fn tuples(len: usize, colors: usize) -> Vec<SmallVec<[u8; 16]>> {
    let mut out: Vec<SmallVec<[u8; 16]>> = vec![SmallVec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix| {
                (0..colors as u8).map(move |c| {
                    let mut next = prefix.clone();
                    next.push(c);
                    next
                })
            })
            .collect();
    }
    out
}

impl Coloring for TupleColoring {
    type Recoloring = SmallVec<[u8; 16]>;

    fn all(holes: usize, colors: usize) -> Vec<Self> {
        tuples(holes, colors).into_iter().map(TupleColoring).collect()
    }

    fn recolorings(hand: usize, colors: usize) -> Vec<Self::Recoloring> {
        tuples(hand, colors)
    }

    fn rotate(&self, amount: usize, holes: usize) -> Self {
        let mut rotated = self.0.clone();
        if holes > 0 {
            rotated.rotate_right(amount % holes);
        }
        TupleColoring(rotated)
    }

    fn recolor(&self, selection: &Selection, recoloring: &Self::Recoloring) -> Self {
        let mut colors = self.0.clone();
        for (hole, &color) in selection.holes().zip(recoloring.iter()) {
            colors[hole] = color;
        }
        TupleColoring(colors)
    }

    fn is_monochromatic(&self, _holes: usize) -> bool {
        self.0.windows(2).all(|w| w[0] == w[1])
    }
}
