use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The single random source of a battle session
///
/// Every draw the core makes (identifiers, moveset picks, critical hits,
/// damage variance, AI choices) goes through one of these, so a session
/// replays identically from the same seed.
#[derive(Debug, Clone)]
pub struct BattleRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Only the seed is persisted, a restored session starts its stream over
impl Serialize for BattleRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BattleRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(BattleRng::new(seed))
    }
}

impl BattleRng {
    /// Creates a new random source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new random source with a seed taken from the OS
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A full-width 32 bit draw, used for creature identifiers
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// A full-width 16 bit draw, used for session salts
    pub fn next_u16(&mut self) -> u16 {
        (self.rng.next_u32() >> 16) as u16
    }

    /// Returns a value in `0..n`, or 0 when `n` is 0
    pub fn rand_int(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns an index in `0..len`, or 0 when `len` is 0
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    /// Returns a value in `low..=high`
    pub fn range_inclusive(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    /// True with probability `1/n`
    pub fn one_in(&mut self, n: u32) -> bool {
        self.rand_int(n) == 0
    }
}

impl Default for BattleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
