//! Pricing catalog: one product configuration of service options and rates

use super::discount::DiscountLadder;
use super::service_option::ServiceOption;
use proposta_types::{CatalogError, ConsultDuration};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Service options, price tables and discount ladder of one product line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCatalog {
    /// Short name (e.g. "staffing")
    pub name: String,
    /// Display title
    pub title: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Duration used when a request omits one
    #[serde(default)]
    pub default_duration: ConsultDuration,

    /// Days a proposal stays valid after issue
    #[serde(default = "default_validity_days")]
    pub validity_days: u32,

    #[serde(default)]
    pub discounts: DiscountLadder,

    pub services: Vec<ServiceOption>,
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

/// Longest proposal validity a catalog may declare (ten years)
pub const MAX_VALIDITY_DAYS: u32 = 3650;

fn default_validity_days() -> u32 {
    30
}

impl PricingCatalog {
    /// Find a service option by id or alias
    pub fn find_service(&self, slug: &str) -> Option<&ServiceOption> {
        self.services.iter().find(|s| s.answers_to(slug))
    }

    /// Check the catalog for empty, ambiguous or unpriceable entries
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.services.is_empty() {
            return Err(CatalogError::Empty(self.name.clone()));
        }

        if self.validity_days == 0 || self.validity_days > MAX_VALIDITY_DAYS {
            return Err(CatalogError::InvalidValidityDays {
                days: self.validity_days,
                max: MAX_VALIDITY_DAYS,
            });
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            for slug in std::iter::once(&service.id).chain(service.aliases.iter()) {
                if !seen.insert(slug.as_str()) {
                    return Err(CatalogError::DuplicateService(slug.clone()));
                }
            }
            service.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::service_option::PricingModel;

    fn bundle(id: &str) -> ServiceOption {
        ServiceOption {
            id: id.to_string(),
            aliases: vec![],
            name: "Pacote".to_string(),
            summary: String::new(),
            description: "Pacote completo".to_string(),
            includes: vec!["Relatórios unificados".to_string()],
            pricing: PricingModel::Bundle { flat_price: 450.0 },
        }
    }

    fn catalog(services: Vec<ServiceOption>) -> PricingCatalog {
        PricingCatalog {
            name: "test".to_string(),
            title: "Test".to_string(),
            currency_symbol: default_currency_symbol(),
            default_duration: ConsultDuration::default(),
            validity_days: default_validity_days(),
            discounts: DiscountLadder::standard(),
            services,
        }
    }

    #[test]
    fn test_find_service() {
        let catalog = catalog(vec![bundle("pacotes-atendimento")]);
        assert!(catalog.find_service("pacotes-atendimento").is_some());
        assert!(catalog.find_service("agenda-on-demand").is_none());
    }

    #[test]
    fn test_validate_empty_catalog() {
        assert_eq!(
            catalog(vec![]).validate(),
            Err(CatalogError::Empty("test".to_string()))
        );
    }

    #[test]
    fn test_validate_duplicate_alias() {
        let mut second = bundle("pacote-b");
        second.aliases = vec!["pacote-a".to_string()];

        assert_eq!(
            catalog(vec![bundle("pacote-a"), second]).validate(),
            Err(CatalogError::DuplicateService("pacote-a".to_string()))
        );
    }

    #[test]
    fn test_validate_validity_days_range() {
        let mut catalog = catalog(vec![bundle("pacote")]);

        catalog.validity_days = MAX_VALIDITY_DAYS;
        assert!(catalog.validate().is_ok());

        for days in [0, MAX_VALIDITY_DAYS + 1, u32::MAX] {
            catalog.validity_days = days;
            assert_eq!(
                catalog.validate(),
                Err(CatalogError::InvalidValidityDays {
                    days,
                    max: MAX_VALIDITY_DAYS
                })
            );
        }
    }

    #[test]
    fn test_defaults_from_json() {
        let json = r#"{
            "name": "mini",
            "title": "Mini",
            "services": [{
                "id": "pacote",
                "name": "Pacote",
                "summary": "",
                "description": "Pacote",
                "pricing": { "type": "bundle", "flat_price": 300.0 }
            }]
        }"#;

        let catalog: PricingCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.currency_symbol, "R$");
        assert_eq!(catalog.default_duration, ConsultDuration::Min30);
        assert_eq!(catalog.validity_days, 30);
        assert_eq!(catalog.discounts, DiscountLadder::standard());
        assert!(catalog.validate().is_ok());
    }
}
