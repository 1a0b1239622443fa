//! RNG module - piece selection
//!
//! Pieces are drawn uniformly at random with replacement: each draw is
//! independent of the previous ones (no 7-bag). The session pulls kinds from
//! a [`PieceSource`], so tests and benches can script the sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::pieces::{shape_of, Shape};
use crate::types::PieceKind;

/// Draw one catalog shape uniformly at random.
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    shape_of(random_kind(rng))
}

fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    // ALL is non-empty.
    *PieceKind::ALL.choose(rng).unwrap_or(&PieceKind::I)
}

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Uniform random piece source backed by a seedable `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandomPieces {
    /// Reproducible sequence for the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Sequence seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this source was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> PieceKind {
        random_kind(&mut self.rng)
    }
}

/// Cycles through a fixed sequence of kinds.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl ScriptedPieces {
    /// An empty sequence falls back to repeating `I`.
    pub fn new(sequence: impl Into<Vec<PieceKind>>) -> Self {
        let mut sequence = sequence.into();
        if sequence.is_empty() {
            sequence.push(PieceKind::I);
        }
        Self { sequence, index: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.index];
        self.index = (self.index + 1) % self.sequence.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_piece(&mut self) -> PieceKind {
        (**self).next_piece()
    }
}
