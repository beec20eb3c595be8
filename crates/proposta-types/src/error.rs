//! Error types for the proposal calculator

use thiserror::Error;

/// Invalid input to the pricing engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Patients per month must be at least 1 (got {0})")]
    InvalidPatientVolume(u32),

    #[error("Unsupported consultation duration: {0} minutes (expected 25, 30 or 40)")]
    InvalidDuration(u32),

    #[error("Unknown service option: {0}")]
    UnknownService(String),

    #[error("Service option '{service}' has no price for {minutes}-minute consultations")]
    MissingPrice { service: String, minutes: u32 },
}

/// Pricing catalog rejected on load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Catalog '{0}' defines no service options")]
    Empty(String),

    #[error("Service id or alias '{0}' is defined more than once")]
    DuplicateService(String),

    #[error("Service option '{service}' has an invalid price: {price}")]
    InvalidPrice { service: String, price: f64 },

    #[error("Service option '{0}' has no duration prices")]
    NoDurationPrices(String),

    #[error("Service option '{service}' lists {minutes} minutes more than once")]
    DuplicateDuration { service: String, minutes: u32 },

    #[error("Discount tier threshold must be at least 1 patient")]
    InvalidDiscountThreshold,

    #[error("Discount tier for {0} patients is defined more than once")]
    DuplicateDiscountTier(u32),

    #[error("Discount rate must be within [0, 1): {0}")]
    InvalidDiscountRate(f64),

    #[error("Proposal validity must be between 1 and {max} days (got {days})")]
    InvalidValidityDays { days: u32, max: u32 },
}

/// A single rejected lead form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Lead contact details failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid lead: {}", summarize(.fields))]
pub struct LeadValidationError {
    pub fields: Vec<FieldError>,
}

impl LeadValidationError {
    /// Look up the message for a given field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.message.as_str())
    }
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Unknown catalog: {0}")]
    UnknownCatalog(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("{0}")]
    Lead(#[from] LeadValidationError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_error_lists_every_field() {
        let err = LeadValidationError {
            fields: vec![
                FieldError {
                    field: "email",
                    message: "E-mail inválido".to_string(),
                },
                FieldError {
                    field: "phone",
                    message: "Telefone inválido".to_string(),
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "Invalid lead: email: E-mail inválido; phone: Telefone inválido"
        );
        assert_eq!(err.message_for("phone"), Some("Telefone inválido"));
        assert_eq!(err.message_for("company_name"), None);
    }

    #[test]
    fn test_pricing_error_converts_into_error() {
        let err: Error = PricingError::InvalidDuration(35).into();
        assert!(matches!(err, Error::Pricing(PricingError::InvalidDuration(35))));
        assert!(err.to_string().contains("35 minutes"));
    }
}
