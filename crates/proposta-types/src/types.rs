//! Shared request/result types for proposal pricing

use crate::error::PricingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consultation length offered for non-bundle service options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ConsultDuration {
    /// 25 minutes
    Min25,
    /// 30 minutes
    #[default]
    Min30,
    /// 40 minutes
    Min40,
}

impl ConsultDuration {
    /// All durations, shortest first
    pub const ALL: [ConsultDuration; 3] = [
        ConsultDuration::Min25,
        ConsultDuration::Min30,
        ConsultDuration::Min40,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            ConsultDuration::Min25 => 25,
            ConsultDuration::Min30 => 30,
            ConsultDuration::Min40 => 40,
        }
    }

    /// Get display label in Portuguese
    pub fn label(&self) -> String {
        format!("{} minutos", self.minutes())
    }
}

impl TryFrom<u32> for ConsultDuration {
    type Error = PricingError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            25 => Ok(ConsultDuration::Min25),
            30 => Ok(ConsultDuration::Min30),
            40 => Ok(ConsultDuration::Min40),
            other => Err(PricingError::InvalidDuration(other)),
        }
    }
}

impl From<ConsultDuration> for u32 {
    fn from(duration: ConsultDuration) -> Self {
        duration.minutes()
    }
}

impl std::fmt::Display for ConsultDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

/// Input to the pricing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Service option id (or alias) within the active catalog
    pub service: String,
    pub patients_per_month: u32,
    /// Falls back to the catalog default when absent
    #[serde(default)]
    pub consult_duration: Option<ConsultDuration>,
}

impl PricingRequest {
    pub fn new(service: impl Into<String>, patients_per_month: u32) -> Self {
        Self {
            service: service.into(),
            patients_per_month,
            consult_duration: None,
        }
    }

    pub fn with_duration(mut self, duration: ConsultDuration) -> Self {
        self.consult_duration = Some(duration);
        self
    }
}

/// Computed monthly estimate for one service option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingQuote {
    /// Canonical id of the priced service option
    pub service_id: String,
    /// Price per patient after the volume discount
    pub unit_price: f64,
    /// Table price before the volume discount
    pub base_unit_price: f64,
    /// Applied discount (0.0 - 1.0)
    pub discount_rate: f64,
    pub patients_per_month: u32,
    /// None for bundle options
    pub consult_duration: Option<ConsultDuration>,
    /// unit_price x patients_per_month
    pub total_monthly: f64,
    pub description: String,
    pub includes: Vec<String>,
}

/// Contact details of a prospective client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadContact {
    /// Clinic or hospital name
    pub company_name: String,
    pub email: String,
    pub phone: String,
}

/// Commercial proposal issued to a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    /// Title of the catalog the quote was priced from
    pub catalog_title: String,
    /// Display name of the selected service option
    pub service_name: String,
    pub lead: LeadContact,
    pub quote: PricingQuote,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
}
