//! Solvable shuffle generation for sliding-tile puzzles.
//!
//! [`ShuffleGenerator`] produces uniformly random arrangements that are
//! guaranteed to be solvable. Tiles are shuffled with Fisher–Yates, the blank is
//! placed in the last slot, and the candidate is kept only if it passes the
//! inversion-parity test. About half of all candidates pass, so the expected
//! number of attempts is close to two. There is no retry cap.
//!
//! Every shuffle is derived from a [`ShuffleSeed`], so a game can be replayed
//! from the seed it was generated with.
//!
//! # Examples
//!
//! ```
//! use slidetile_core::GridSize;
//! use slidetile_generator::ShuffleGenerator;
//!
//! let generator = ShuffleGenerator::new();
//! let shuffle = generator.generate(GridSize::MEDIUM);
//! assert!(shuffle.arrangement.is_solvable());
//!
//! // The same seed reproduces the same shuffle.
//! let again = generator.generate_with_seed(GridSize::MEDIUM, shuffle.seed);
//! assert_eq!(again.arrangement, shuffle.arrangement);
//! ```

use std::num::NonZero;

use rand::{RngExt, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use slidetile_core::{Arrangement, GridSize, PieceId};

pub use self::seed::{ParseSeedError, ShuffleSeed};

mod seed;

/// Result of a shuffle generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedShuffle {
    /// The solvable arrangement, blank in the last slot.
    pub arrangement: Arrangement,
    /// Seed the arrangement was generated from.
    pub seed: ShuffleSeed,
    /// Number of candidates drawn before one was solvable.
    pub attempts: NonZero<u32>,
}

/// Generator of solvable shuffles.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShuffleGenerator {
    _private: (),
}

impl ShuffleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Generates a solvable shuffle from a fresh random seed.
    #[must_use]
    pub fn generate(&self, size: GridSize) -> GeneratedShuffle {
        self.generate_with_seed(size, ShuffleSeed::random())
    }

    /// Generates the solvable shuffle determined by `seed` and `size`.
    #[must_use]
    pub fn generate_with_seed(&self, size: GridSize, seed: ShuffleSeed) -> GeneratedShuffle {
        let mut rng = Pcg64Mcg::from_seed(seed.rng_seed(size));
        let (arrangement, attempts) = generate_solvable_shuffle(size, &mut rng);
        log::debug!("generated {size} shuffle in {attempts} attempt(s), seed={seed}");
        GeneratedShuffle {
            arrangement,
            seed,
            attempts,
        }
    }
}

/// Draws candidates from `rng` until one is solvable.
///
/// Returns the arrangement together with the number of candidates drawn.
pub fn generate_solvable_shuffle<R>(size: GridSize, rng: &mut R) -> (Arrangement, NonZero<u32>)
where
    R: RngExt + ?Sized,
{
    let mut attempts = NonZero::<u32>::MIN;
    loop {
        let candidate = shuffled_candidate(size, rng);
        if candidate.is_solvable() {
            return (candidate, attempts);
        }
        log::trace!("rejected unsolvable candidate #{attempts}: {candidate}");
        attempts = attempts.saturating_add(1);
    }
}

/// Fisher–Yates shuffles the tiles and appends the blank.
fn shuffled_candidate<R>(size: GridSize, rng: &mut R) -> Arrangement
where
    R: RngExt + ?Sized,
{
    let mut ids: Vec<PieceId> = (0..size.tile_count()).map(PieceId::Tile).collect();
    for i in (1..ids.len()).rev() {
        let j = rng.random_range(0..=i);
        ids.swap(i, j);
    }
    ids.push(PieceId::Blank);
    Arrangement::new(ids, size)
        .unwrap_or_else(|err| unreachable!("shuffled identity is always a permutation: {err}"))
}
