//! Tier table — maps a realization percentage to a bonus band.
//!
//! RULE: The table is validated once at construction. After that,
//! lookup is total: every percentage resolves to exactly one band.

use crate::error::{PremiumError, PremiumResult};
use serde::{Deserialize, Serialize};

/// One row of the tier table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierBand {
    /// Minimum realization percentage (inclusive) for this band.
    pub min: f64,
    /// Flat bonus amount for a target-sized employee at this band.
    pub amount: f64,
    /// Bonus percent, stored as a ratio of 100 (1.00 = 100 %).
    pub percent: f64,
}

impl TierBand {
    pub const fn new(min: f64, amount: f64, percent: f64) -> Self {
        Self { min, amount, percent }
    }

    fn is_sentinel(&self) -> bool {
        self.min == 0.0
    }
}

/// The band list shipped with the calculator.
pub const STANDARD_BANDS: [TierBand; 14] = [
    TierBand::new(250.0, 51000.0, 2.50),
    TierBand::new(200.0, 36000.0, 2.00),
    TierBand::new(160.0, 25500.0, 1.60),
    TierBand::new(150.0, 21500.0, 1.50),
    TierBand::new(140.0, 18500.0, 1.40),
    TierBand::new(130.0, 16000.0, 1.30),
    TierBand::new(120.0, 14000.0, 1.20),
    TierBand::new(110.0, 12000.0, 1.10),
    TierBand::new(100.0, 10000.0, 1.00),
    TierBand::new(90.0,  8000.0,  0.90),
    TierBand::new(80.0,  6000.0,  0.80),
    TierBand::new(70.0,  4000.0,  0.70),
    TierBand::new(55.0,  2000.0,  0.55),
    TierBand::new(0.0,   0.0,     0.0),
];

/// An ordered, validated band list. Bands are held in strictly
/// descending threshold order and end with the zero sentinel.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct TierTable {
    bands: Vec<TierBand>,
}

impl TierTable {
    /// Validate and wrap a band list.
    ///
    /// Rejects: an empty list, non-finite fields, negative thresholds,
    /// thresholds that are not strictly descending, and any list without
    /// exactly one zero sentinel carrying zero amount and zero percent.
    pub fn new(bands: Vec<TierBand>) -> PremiumResult<Self> {
        let invalid = |reason: String| PremiumError::InvalidTierTable { reason };

        if bands.is_empty() {
            return Err(invalid("table has no bands".into()));
        }

        for (i, band) in bands.iter().enumerate() {
            if !(band.min.is_finite() && band.amount.is_finite() && band.percent.is_finite()) {
                return Err(invalid(format!("band {i} has a non-finite field")));
            }
            if band.min < 0.0 {
                return Err(invalid(format!("band {i} has negative threshold {}", band.min)));
            }
        }

        if let Some(pair) = bands.windows(2).find(|w| w[0].min <= w[1].min) {
            return Err(invalid(format!(
                "thresholds must be strictly descending ({} then {})",
                pair[0].min, pair[1].min
            )));
        }

        let sentinels = bands.iter().filter(|b| b.is_sentinel()).count();
        if sentinels != 1 {
            return Err(invalid(format!("expected exactly one 0-threshold band, found {sentinels}")));
        }

        // Strictly descending + non-negative puts the sentinel last.
        let sentinel = bands[bands.len() - 1];
        if sentinel.amount != 0.0 || sentinel.percent != 0.0 {
            return Err(invalid("0-threshold band must carry zero amount and zero percent".into()));
        }

        Ok(Self { bands })
    }

    /// The built-in table.
    pub fn standard() -> Self {
        Self { bands: STANDARD_BANDS.to_vec() }
    }

    /// Select the band with the highest threshold not exceeding
    /// `realization_percent`. A boundary value selects its own band.
    ///
    /// Percentages below every threshold (negative collections) resolve
    /// to the sentinel, which yields a zero rate.
    pub fn lookup(&self, realization_percent: f64) -> &TierBand {
        self.bands
            .iter()
            .find(|band| realization_percent >= band.min)
            .unwrap_or_else(|| self.sentinel())
    }

    pub fn sentinel(&self) -> &TierBand {
        // Non-empty and sentinel-terminated, checked in new().
        &self.bands[self.bands.len() - 1]
    }

    /// The band with the highest threshold.
    pub fn top(&self) -> &TierBand {
        &self.bands[0]
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'de> Deserialize<'de> for TierTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bands = Vec::<TierBand>::deserialize(deserializer)?;
        TierTable::new(bands).map_err(serde::de::Error::custom)
    }
}
