//! Domain model types

pub mod catalog;
pub mod discount;
pub mod service_option;

pub use catalog::{PricingCatalog, MAX_VALIDITY_DAYS};
pub use discount::{DiscountLadder, DiscountTier};
pub use service_option::{DurationPrice, PricingModel, ServiceOption};
