//! Service option definitions

use proposta_types::{CatalogError, ConsultDuration};
use serde::{Deserialize, Serialize};

/// Base price for one consultation length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationPrice {
    pub minutes: ConsultDuration,
    /// Price per patient before volume discount
    pub price: f64,
}

/// How a service option is priced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PricingModel {
    /// Price looked up by consultation length, then volume-discounted
    PerDuration { prices: Vec<DurationPrice> },
    /// Flat price per patient, no duration and no discount
    Bundle { flat_price: f64 },
}

impl PricingModel {
    pub fn is_bundle(&self) -> bool {
        matches!(self, PricingModel::Bundle { .. })
    }

    /// Undiscounted price for a duration. Bundles ignore the duration.
    pub fn base_price(&self, duration: ConsultDuration) -> Option<f64> {
        match self {
            PricingModel::PerDuration { prices } => prices
                .iter()
                .find(|p| p.minutes == duration)
                .map(|p| p.price),
            PricingModel::Bundle { flat_price } => Some(*flat_price),
        }
    }
}

/// One service category offered by a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOption {
    /// Canonical slug (e.g. "agenda-on-demand")
    pub id: String,
    /// Alternate slugs accepted as input
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Display name
    pub name: String,
    /// Short pitch shown when choosing an option
    pub summary: String,
    /// Description attached to quotes
    pub description: String,
    /// What the quote includes, in display order
    #[serde(default)]
    pub includes: Vec<String>,
    pub pricing: PricingModel,
}

impl ServiceOption {
    /// True if `slug` is the id or one of the aliases
    pub fn answers_to(&self, slug: &str) -> bool {
        self.id == slug || self.aliases.iter().any(|a| a == slug)
    }

    pub fn is_bundle(&self) -> bool {
        self.pricing.is_bundle()
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |price: f64| !price.is_finite() || price <= 0.0;

        match &self.pricing {
            PricingModel::Bundle { flat_price } => {
                if invalid(*flat_price) {
                    return Err(CatalogError::InvalidPrice {
                        service: self.id.clone(),
                        price: *flat_price,
                    });
                }
            }
            PricingModel::PerDuration { prices } => {
                if prices.is_empty() {
                    return Err(CatalogError::NoDurationPrices(self.id.clone()));
                }
                for (i, entry) in prices.iter().enumerate() {
                    if invalid(entry.price) {
                        return Err(CatalogError::InvalidPrice {
                            service: self.id.clone(),
                            price: entry.price,
                        });
                    }
                    if prices[..i].iter().any(|p| p.minutes == entry.minutes) {
                        return Err(CatalogError::DuplicateDuration {
                            service: self.id.clone(),
                            minutes: entry.minutes.minutes(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
