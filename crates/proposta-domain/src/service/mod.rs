//! Domain services

pub mod currency;
pub mod lead_validator;
pub mod pricing_calculator;
pub mod proposal_report;

pub use currency::{format_currency, format_percent};
pub use lead_validator::validate_lead;
pub use pricing_calculator::calculate_pricing;
pub use proposal_report::generate_proposal_report;
