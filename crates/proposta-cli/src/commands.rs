//! Command handlers

use crate::cli::{Cli, Commands, PricingArgs};
use crate::output::{output_catalogs, output_options, output_proposal, output_quote};
use chrono::Local;
use proposta_app::{Config, ProposalService};
use proposta_infra::builtin_catalog_names;
use proposta_types::{ConsultDuration, LeadContact, OutputFormat, PricingRequest, Result};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;
    init_tracing(cli.verbose, &config.log_level);

    // Override from CLI args
    if let Some(ref catalog) = cli.catalog {
        config.catalog = catalog.clone();
        config.catalog_file = None;
    }
    if cli.catalog_file.is_some() {
        config.catalog_file = cli.catalog_file.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(catalog = %config.catalog, format = %output_format, "configuration resolved");

    match &cli.command {
        Commands::Quote { pricing } => cmd_quote(&config, pricing, output_format),

        Commands::Propose {
            pricing,
            company,
            email,
            phone,
        } => {
            let lead = LeadContact {
                company_name: company.clone(),
                email: email.clone(),
                phone: phone.clone(),
            };
            cmd_propose(&config, pricing, lead, output_format)
        }

        Commands::Options => cmd_options(&config, output_format),

        Commands::Catalogs => output_catalogs(output_format, &builtin_catalog_names()),

        Commands::Config {
            show,
            set_catalog,
            set_catalog_file,
            clear_catalog_file,
            set_output,
            set_log_level,
            reset,
        } => cmd_config(
            *show,
            set_catalog.clone(),
            set_catalog_file.clone(),
            *clear_catalog_file,
            *set_output,
            set_log_level.clone(),
            *reset,
        ),
    }
}

/// Install the stderr log subscriber. RUST_LOG wins, then --verbose, then config.
fn init_tracing(verbose: bool, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { configured_level })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn pricing_request(args: &PricingArgs) -> Result<PricingRequest> {
    let mut request = PricingRequest::new(args.service.clone(), args.patients);
    if let Some(minutes) = args.duration {
        request = request.with_duration(ConsultDuration::try_from(minutes)?);
    }
    Ok(request)
}

fn cmd_quote(config: &Config, args: &PricingArgs, output_format: OutputFormat) -> Result<()> {
    let service = ProposalService::from_config(config)?;
    let request = pricing_request(args)?;
    let quote = service.quote(&request)?;

    output_quote(output_format, service.catalog(), &quote)
}

fn cmd_propose(
    config: &Config,
    args: &PricingArgs,
    lead: LeadContact,
    output_format: OutputFormat,
) -> Result<()> {
    let service = ProposalService::from_config(config)?;
    let request = pricing_request(args)?;
    let issued_on = Local::now().date_naive();
    let proposal = service.propose(lead, &request, issued_on)?;

    output_proposal(output_format, &service, &proposal)
}

fn cmd_options(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = ProposalService::from_config(config)?;
    output_options(output_format, service.catalog())
}

fn cmd_config(
    show: bool,
    set_catalog: Option<String>,
    set_catalog_file: Option<PathBuf>,
    clear_catalog_file: bool,
    set_output: Option<OutputFormat>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(catalog) = set_catalog {
        // Reject names that would fail on the next quote
        proposta_infra::builtin_catalog(&catalog)?;
        config.catalog = catalog;
        changed = true;
    }

    if let Some(path) = set_catalog_file {
        proposta_infra::load_catalog_from_file(&path)?;
        config.catalog_file = Some(path);
        changed = true;
    }

    if clear_catalog_file {
        config.catalog_file = None;
        changed = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
