// SPDX-License-Identifier: MIT
//! Secondary-hue harmonization.
//!
//! Rotates the secondary seed to a hue that sits in a classic relationship
//! with the primary, keeping the secondary's own lightness and chroma. The
//! primary is never touched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinto_color::{Color, try_hex_to_oklch};

use crate::clamp::{ClampContext, clamp_oklch};
use crate::error::ThemeError;

/// Offset used by the analogous strategy, applied in either direction.
const ANALOGOUS_OFFSET: f32 = 45.0;

// ---------------------------------------------------------------------------
// Seeded coin
// ---------------------------------------------------------------------------

/// Golden-ratio multiplier spreading nearby seeds across the state space.
const SEED_MIX: u32 = 0x9E37_79B9;

/// Outputs discarded after seeding.
const WARM_UP_ROUNDS: u32 = 4;

/// Minimal deterministic PRNG for seeded harmonization.
struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Small seeds leave the high bits of the first outputs at zero, so the
    /// seed is mixed and a few outputs are dropped before use.
    fn new(seed: u32) -> Self {
        let mut rng = Self { state: seed.wrapping_mul(SEED_MIX).max(1) };
        for _ in 0..WARM_UP_ROUNDS {
            rng.next();
        }
        rng
    }

    const fn next(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Fair coin flip from the high bit.
    const fn coin(&mut self) -> bool {
        self.next() & 0x8000_0000 != 0
    }
}

// ---------------------------------------------------------------------------
// HarmonyStrategy
// ---------------------------------------------------------------------------

/// Hue relationship between primary and harmonized secondary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyStrategy {
    /// Opposite side of the wheel (+180°).
    #[default]
    Complementary,
    /// One third of the wheel (+120°).
    Triadic,
    /// Neighbouring hue (±45°, direction chosen by coin flip).
    Analogous,
}

impl HarmonyStrategy {
    /// Hue offset from the primary. `clockwise` only matters for analogous.
    #[must_use]
    pub const fn offset(self, clockwise: bool) -> f32 {
        match self {
            Self::Complementary => 180.0,
            Self::Triadic => 120.0,
            Self::Analogous if clockwise => ANALOGOUS_OFFSET,
            Self::Analogous => -ANALOGOUS_OFFSET,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
        }
    }
}

impl fmt::Display for HarmonyStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyStrategy {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "complementary" => Ok(Self::Complementary),
            "triadic" => Ok(Self::Triadic),
            "analogous" => Ok(Self::Analogous),
            other => Err(ThemeError::UnknownStrategy(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// harmonize_secondary
// ---------------------------------------------------------------------------

/// Re-hue the secondary relative to the primary.
///
/// The analogous direction is an unseeded coin flip; use
/// [`harmonize_secondary_seeded`] when results must be reproducible.
/// Malformed input returns `secondary_hex` unchanged.
#[must_use]
pub fn harmonize_secondary(primary_hex: &str, secondary_hex: &str, strategy: HarmonyStrategy) -> String {
    let clockwise = rand::random::<bool>();
    harmonize_or_keep(primary_hex, secondary_hex, strategy, clockwise)
}

/// [`harmonize_secondary`] with the analogous coin flip driven by `seed`.
#[must_use]
pub fn harmonize_secondary_seeded(
    primary_hex: &str,
    secondary_hex: &str,
    strategy: HarmonyStrategy,
    seed: u32,
) -> String {
    let clockwise = Xorshift32::new(seed).coin();
    harmonize_or_keep(primary_hex, secondary_hex, strategy, clockwise)
}

fn harmonize_or_keep(
    primary_hex: &str,
    secondary_hex: &str,
    strategy: HarmonyStrategy,
    clockwise: bool,
) -> String {
    match try_harmonize(primary_hex, secondary_hex, strategy, clockwise) {
        Ok(hex) => hex,
        Err(err) => {
            tracing::warn!(%strategy, error = %err, "harmonization failed, keeping secondary");
            secondary_hex.to_string()
        }
    }
}

fn try_harmonize(
    primary_hex: &str,
    secondary_hex: &str,
    strategy: HarmonyStrategy,
    clockwise: bool,
) -> Result<String, ThemeError> {
    let primary = try_hex_to_oklch(primary_hex)?;
    let secondary = try_hex_to_oklch(secondary_hex)?;
    let c_max = ClampContext::Ui.limits().c_max;

    let rotated = Color::oklch(secondary.l, secondary.c.min(c_max), primary.h)
        .shift_hue(strategy.offset(clockwise));
    let result = clamp_oklch(rotated, ClampContext::Ui, true);

    tracing::debug!(
        %strategy,
        from = secondary_hex,
        to = %result.hex,
        hue = result.color.h,
        "harmonized secondary"
    );
    Ok(result.hex)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
