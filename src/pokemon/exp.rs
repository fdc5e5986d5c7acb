use serde::{Deserialize, Serialize};

/// Highest level a creature can reach
pub const MAX_LEVEL: u32 = 100;

/// The experience curve of a species
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrowthRate {
    Erratic,
    Fast,
    MediumFast,
    MediumSlow,
    Slow,
    Fluctuating,
}

impl GrowthRate {
    /// Total experience needed to reach `level`
    ///
    /// Level 1 always needs 0. Levels above [`MAX_LEVEL`] are clamped.
    pub fn total_exp(self, level: u32) -> u32 {
        let n = level.clamp(1, MAX_LEVEL) as i64;
        if n == 1 {
            return 0;
        }
        let cube = n * n * n;
        let total = match self {
            GrowthRate::Erratic => match n {
                ..50 => cube * (100 - n) / 50,
                50..68 => cube * (150 - n) / 100,
                68..98 => cube * ((1911 - 10 * n) / 3) / 500,
                _ => cube * (160 - n) / 100,
            },
            GrowthRate::Fast => 4 * cube / 5,
            GrowthRate::MediumFast => cube,
            GrowthRate::MediumSlow => 6 * cube / 5 - 15 * n * n + 100 * n - 140,
            GrowthRate::Slow => 5 * cube / 4,
            GrowthRate::Fluctuating => match n {
                ..15 => cube * ((n + 1) / 3 + 24) / 50,
                15..36 => cube * (n + 14) / 50,
                _ => cube * (n / 2 + 32) / 50,
            },
        };
        total.max(0) as u32
    }
}

/// Experience a defeated creature of `base_exp` at `defeated_level` yields to a victor
pub fn exp_yield(base_exp: u32, defeated_level: u32, victor_level: u32) -> u32 {
    let def = defeated_level as f64;
    let vic = victor_level as f64;
    let own = 2.0 * def + 10.0;
    let both = def + vic + 10.0;
    let scale = (own.sqrt().round() * own.powi(2)) / (both.sqrt().round() * both.powi(2));
    ((base_exp as f64 * def / 5.0) * scale).floor() as u32 + 1
}
