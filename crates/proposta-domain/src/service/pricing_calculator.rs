//! Pricing engine
//!
//! Maps a service option, a monthly patient volume and an optional
//! consultation length to a per-patient price and a monthly estimate.

use crate::model::{PricingCatalog, PricingModel};
use proposta_types::{PricingError, PricingQuote, PricingRequest};

/// Price a request against a catalog
///
/// Bundle options charge their flat price per patient with no volume
/// discount. Other options look up the base price for the requested
/// duration (or the catalog default) and apply the catalog's discount
/// ladder.
///
/// # Errors
/// * `InvalidPatientVolume` - zero patients per month
/// * `UnknownService` - no option answers to the requested id
/// * `MissingPrice` - the option has no price for the duration
pub fn calculate_pricing(
    catalog: &PricingCatalog,
    request: &PricingRequest,
) -> Result<PricingQuote, PricingError> {
    let patients = request.patients_per_month;
    if patients == 0 {
        return Err(PricingError::InvalidPatientVolume(patients));
    }

    let service = catalog
        .find_service(&request.service)
        .ok_or_else(|| PricingError::UnknownService(request.service.clone()))?;

    let (base_unit_price, discount_rate, consult_duration) = match &service.pricing {
        PricingModel::Bundle { flat_price } => (*flat_price, 0.0, None),
        PricingModel::PerDuration { .. } => {
            let duration = request.consult_duration.unwrap_or(catalog.default_duration);
            let base = service.pricing.base_price(duration).ok_or_else(|| {
                PricingError::MissingPrice {
                    service: service.id.clone(),
                    minutes: duration.minutes(),
                }
            })?;
            (base, catalog.discounts.rate_for(patients), Some(duration))
        }
    };

    let unit_price = base_unit_price * (1.0 - discount_rate);
    let total_monthly = unit_price * f64::from(patients);

    Ok(PricingQuote {
        service_id: service.id.clone(),
        unit_price,
        base_unit_price,
        discount_rate,
        patients_per_month: patients,
        consult_duration,
        total_monthly,
        description: service.description.clone(),
        includes: service.includes.clone(),
    })
}
