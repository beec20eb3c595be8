//! Output formatting module

use proposta_app::ProposalService;
use proposta_domain::service::{format_currency, format_percent};
use proposta_domain::{PricingCatalog, PricingModel};
use proposta_types::{ConsultDuration, OutputFormat, PricingQuote, Proposal, Result};

pub fn output_quote(
    output_format: OutputFormat,
    catalog: &PricingCatalog,
    quote: &PricingQuote,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
        return Ok(());
    }

    let money = |amount: f64| format_currency(amount, &catalog.currency_symbol);
    let name = catalog
        .find_service(&quote.service_id)
        .map(|s| s.name.as_str())
        .unwrap_or(quote.service_id.as_str());

    println!("\nQuote");
    println!("=====");
    println!("Service:            {}", name);
    println!("Patients/month:     {}", quote.patients_per_month);
    match quote.consult_duration {
        Some(duration) => println!("Consultation:       {}", duration),
        None => println!("Consultation:       (bundle)"),
    }
    println!("Base price:         {}", money(quote.base_unit_price));
    if quote.discount_rate > 0.0 {
        println!("Volume discount:    {}", format_percent(quote.discount_rate));
    }
    println!("Price per patient:  {}", money(quote.unit_price));
    println!("Monthly estimate:   {}", money(quote.total_monthly));

    println!("\n{}", quote.description);
    for item in &quote.includes {
        println!("  * {}", item);
    }

    Ok(())
}

pub fn output_proposal(
    output_format: OutputFormat,
    service: &ProposalService,
    proposal: &Proposal,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(proposal)?;
        println!("{}", content);
    } else {
        print!("{}", service.render(proposal));
    }

    Ok(())
}

pub fn output_options(output_format: OutputFormat, catalog: &PricingCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog)?;
        println!("{}", content);
        return Ok(());
    }

    let money = |amount: f64| format_currency(amount, &catalog.currency_symbol);

    println!("\n{} ({})", catalog.title, catalog.name);
    println!("{}", "=".repeat(catalog.title.chars().count() + catalog.name.len() + 3));

    for option in &catalog.services {
        println!("\n{:<30} {}", option.id, option.name);
        println!("  {}", option.summary);
        if !option.aliases.is_empty() {
            println!("  Aliases: {}", option.aliases.join(", "));
        }
        match &option.pricing {
            PricingModel::Bundle { flat_price } => {
                println!("  Flat price: {} per patient", money(*flat_price));
            }
            PricingModel::PerDuration { prices } => {
                let table: Vec<String> = prices
                    .iter()
                    .map(|p| format!("{}: {}", p.minutes, money(p.price)))
                    .collect();
                println!("  {}", table.join(" | "));
            }
        }
    }

    println!("\nDurations:");
    for duration in ConsultDuration::ALL {
        let marker = if duration == catalog.default_duration {
            " (default)"
        } else {
            ""
        };
        println!("  {}{}", duration.label(), marker);
    }

    println!("\nVolume discounts:");
    if catalog.discounts.tiers().is_empty() {
        println!("  (none)");
    }
    for tier in catalog.discounts.tiers() {
        println!(
            "  >= {:>4} patients/month: {}",
            tier.min_patients,
            format_percent(tier.rate)
        );
    }

    Ok(())
}

pub fn output_catalogs(output_format: OutputFormat, names: &[&str]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(names)?;
        println!("{}", content);
    } else {
        println!("Built-in catalogs:");
        for name in names {
            println!("  {}", name);
        }
    }

    Ok(())
}
