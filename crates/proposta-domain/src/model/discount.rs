//! Volume discount tiers

use proposta_types::CatalogError;
use serde::{Deserialize, Serialize};

/// One step of the volume discount ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Lowest monthly patient count that earns this rate
    pub min_patients: u32,
    /// Discount rate (0.0 - 1.0)
    pub rate: f64,
}

/// Step function from monthly patient volume to discount rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountTier>", into = "Vec<DiscountTier>")]
pub struct DiscountLadder {
    /// Sorted by descending threshold
    tiers: Vec<DiscountTier>,
}

impl DiscountLadder {
    /// Build a ladder, rejecting duplicate thresholds and out-of-range rates
    pub fn new(mut tiers: Vec<DiscountTier>) -> Result<Self, CatalogError> {
        for tier in &tiers {
            if tier.min_patients == 0 {
                return Err(CatalogError::InvalidDiscountThreshold);
            }
            if !tier.rate.is_finite() || tier.rate < 0.0 || tier.rate >= 1.0 {
                return Err(CatalogError::InvalidDiscountRate(tier.rate));
            }
        }

        tiers.sort_by(|a, b| b.min_patients.cmp(&a.min_patients));
        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| pair[0].min_patients == pair[1].min_patients)
        {
            return Err(CatalogError::DuplicateDiscountTier(pair[0].min_patients));
        }

        Ok(Self { tiers })
    }

    /// 15% from 50 patients, 10% from 30, 5% from 15
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                DiscountTier {
                    min_patients: 50,
                    rate: 0.15,
                },
                DiscountTier {
                    min_patients: 30,
                    rate: 0.10,
                },
                DiscountTier {
                    min_patients: 15,
                    rate: 0.05,
                },
            ],
        }
    }

    /// Discount rate for a monthly patient volume
    pub fn rate_for(&self, patients_per_month: u32) -> f64 {
        self.tiers
            .iter()
            .find(|tier| patients_per_month >= tier.min_patients)
            .map(|tier| tier.rate)
            .unwrap_or(0.0)
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }
}

impl Default for DiscountLadder {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<DiscountTier>> for DiscountLadder {
    type Error = CatalogError;

    fn try_from(tiers: Vec<DiscountTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<DiscountLadder> for Vec<DiscountTier> {
    fn from(ladder: DiscountLadder) -> Self {
        ladder.tiers
    }
}
