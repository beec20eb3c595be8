//! Proposal use cases: quoting and issuing proposals against one catalog

use crate::config::Config;
use chrono::{Duration, NaiveDate};
use proposta_domain::service::{calculate_pricing, generate_proposal_report, validate_lead};
use proposta_domain::{PricingCatalog, MAX_VALIDITY_DAYS};
use proposta_infra::{builtin_catalog, load_catalog_from_file};
use proposta_types::{
    CatalogError, LeadContact, PricingError, PricingQuote, PricingRequest, Proposal, Result,
};
use tracing::{debug, info};

/// Prices requests and issues proposals from a single catalog
#[derive(Debug, Clone)]
pub struct ProposalService {
    catalog: PricingCatalog,
}

impl ProposalService {
    pub fn new(catalog: PricingCatalog) -> Self {
        Self { catalog }
    }

    /// Open the catalog selected by config
    ///
    /// An explicit catalog file wins over the named built-in catalog.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_file {
            Some(path) => load_catalog_from_file(path)?,
            None => builtin_catalog(&config.catalog)?,
        };
        info!(catalog = %catalog.name, "using pricing catalog");
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Price a request against the active catalog
    pub fn quote(&self, request: &PricingRequest) -> Result<PricingQuote> {
        let quote = calculate_pricing(&self.catalog, request)?;
        debug!(
            service = %quote.service_id,
            patients = quote.patients_per_month,
            discount = quote.discount_rate,
            total = quote.total_monthly,
            "quote calculated"
        );
        Ok(quote)
    }

    /// Validate a lead, price its request and stamp the proposal dates
    pub fn propose(
        &self,
        lead: LeadContact,
        request: &PricingRequest,
        issued_on: NaiveDate,
    ) -> Result<Proposal> {
        validate_lead(&lead)?;
        let quote = self.quote(request)?;

        let service_name = self
            .catalog
            .find_service(&quote.service_id)
            .map(|s| s.name.clone())
            .ok_or_else(|| PricingError::UnknownService(quote.service_id.clone()))?;

        let validity_days = self.catalog.validity_days;
        let valid_until = issued_on
            .checked_add_signed(Duration::days(i64::from(validity_days)))
            .ok_or(CatalogError::InvalidValidityDays {
                days: validity_days,
                max: MAX_VALIDITY_DAYS,
            })?;
        debug!(service = %quote.service_id, %valid_until, "proposal issued");

        Ok(Proposal {
            catalog_title: self.catalog.title.clone(),
            service_name,
            lead,
            quote,
            issued_on,
            valid_until,
        })
    }

    /// Render a proposal with the catalog's currency
    pub fn render(&self, proposal: &Proposal) -> String {
        generate_proposal_report(proposal, &self.catalog.currency_symbol)
    }
}
