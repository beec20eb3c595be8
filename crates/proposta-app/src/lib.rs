//! Application service layer - config and proposal use cases

pub mod app;
pub mod config;

pub use app::ProposalService;
pub use config::Config;
