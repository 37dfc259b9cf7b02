use crate::{
    error::{PremiumError, PremiumResult},
    roster::EmployeeInput,
    tier_table::{TierBand, TierTable},
    types::Amount,
};
use serde::{Deserialize, Serialize};

// ── Rates ──────────────────────────────────────────────────────────

/// Fixed rate constants applied on top of the tier table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RateConfig {
    /// Share of individual-file collections paid as premium.
    pub individual: f64,
    /// Share of litigation-file collections paid as premium.
    pub litigation: f64,
    /// Share of the team's pool-eligible collection that funds the pool.
    pub pool: f64,
    /// Bonus multiplier added per tenure credit (green month).
    pub tenure_per_credit: f64,
}

impl RateConfig {
    pub fn standard() -> Self {
        Self {
            individual:        0.0025,
            litigation:        0.01,
            pool:              0.02,
            tenure_per_credit: 0.05,
        }
    }

    pub fn validate(&self) -> PremiumResult<()> {
        let named = [
            ("individual", self.individual),
            ("litigation", self.litigation),
            ("pool", self.pool),
            ("tenure_per_credit", self.tenure_per_credit),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(PremiumError::InvalidRate { name: name.to_string(), value });
            }
        }
        Ok(())
    }
}

// ── Roster defaults ────────────────────────────────────────────────

/// Field values given to an employee added to an existing roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEmployeeTemplate {
    /// Display name prefix; the roster position is appended.
    pub name_prefix: String,
    pub target: Amount,
    pub collection: Amount,
    pub individual_collection: Amount,
    pub litigation_collection: Amount,
    pub tenure_credits: i32,
}

/// Starting state of a desk, and what `Reset` returns to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterDefaults {
    pub initial_employee: EmployeeInput,
    pub initial_pool_collection: Amount,
    pub new_employee: NewEmployeeTemplate,
}

impl RosterDefaults {
    pub fn standard() -> Self {
        Self {
            initial_employee: EmployeeInput {
                id:                    "1".into(),
                name:                  "Personel 1".into(),
                target:                4_000_000.0,
                collection:            4_200_000.0,
                individual_collection: 100_000.0,
                litigation_collection: 0.0,
                tenure_credits:        2,
            },
            initial_pool_collection: 500_000.0,
            new_employee: NewEmployeeTemplate {
                name_prefix:           "Personel".into(),
                target:                3_000_000.0,
                collection:            0.0,
                individual_collection: 0.0,
                litigation_collection: 0.0,
                tenure_credits:        0,
            },
        }
    }

    /// Build the employee that would occupy roster position `position`
    /// (1-based) when added.
    pub fn new_employee(&self, id: String, position: usize) -> EmployeeInput {
        let t = &self.new_employee;
        EmployeeInput {
            id,
            name: format!("{} {position}", t.name_prefix),
            target: t.target,
            collection: t.collection,
            individual_collection: t.individual_collection,
            litigation_collection: t.litigation_collection,
            tenure_credits: t.tenure_credits,
        }
    }
}

// ── Top-level config ───────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct TierBandsFile {
    bands: Vec<TierBand>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumConfig {
    pub tier_table: TierTable,
    pub rates: RateConfig,
    pub defaults: RosterDefaults,
}

impl PremiumConfig {
    /// Load from the data/ directory.
    /// In tests, use PremiumConfig::standard().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let bands_path = format!("{data_dir}/premium/tier_bands.json");
        let bands_content = std::fs::read_to_string(&bands_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {bands_path}: {e}"))?;
        let bands_file: TierBandsFile = serde_json::from_str(&bands_content)?;
        let tier_table = TierTable::new(bands_file.bands)
            .map_err(|e| anyhow::anyhow!("{bands_path}: {e}"))?;

        let rates_path = format!("{data_dir}/premium/rates.json");
        let rates_content = std::fs::read_to_string(&rates_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {rates_path}: {e}"))?;
        let rates: RateConfig = serde_json::from_str(&rates_content)?;
        rates
            .validate()
            .map_err(|e| anyhow::anyhow!("{rates_path}: {e}"))?;

        let defaults_path = format!("{data_dir}/premium/defaults.json");
        let defaults_content = std::fs::read_to_string(&defaults_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {defaults_path}: {e}"))?;
        let defaults: RosterDefaults = serde_json::from_str(&defaults_content)?;

        log::info!(
            "Loaded premium config from {data_dir}: {} tier bands",
            tier_table.bands().len()
        );

        Ok(Self { tier_table, rates, defaults })
    }

    /// The built-in configuration. Matches the files shipped in data/.
    pub fn standard() -> Self {
        Self {
            tier_table: TierTable::standard(),
            rates:      RateConfig::standard(),
            defaults:   RosterDefaults::standard(),
        }
    }
}

impl Default for PremiumConfig {
    fn default() -> Self {
        Self::standard()
    }
}
