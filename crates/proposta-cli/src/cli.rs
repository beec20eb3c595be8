//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use proposta_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proposta")]
#[command(author = "prontta")]
#[command(version)]
#[command(about = "Indicative monthly quotes for outsourced medical services")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Built-in catalog to price from (staffing, follow-up-care)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Catalog TOML file (overrides --catalog)
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Service selection shared by `quote` and `propose`
#[derive(Args, Clone)]
pub struct PricingArgs {
    /// Service option id (e.g. "agenda-on-demand")
    pub service: String,

    /// Patients per month
    #[arg(long, short = 'p')]
    pub patients: u32,

    /// Consultation length in minutes (25, 30, 40). Uses the catalog default if not specified.
    #[arg(long, short = 'd')]
    pub duration: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a monthly estimate
    Quote {
        #[command(flatten)]
        pricing: PricingArgs,
    },

    /// Issue a commercial proposal for a clinic
    Propose {
        #[command(flatten)]
        pricing: PricingArgs,

        /// Clinic or hospital name
        #[arg(long)]
        company: String,

        /// Contact e-mail
        #[arg(long)]
        email: String,

        /// Contact phone (e.g. "(11) 99999-9999")
        #[arg(long)]
        phone: String,
    },

    /// List service options, durations and discount tiers
    Options,

    /// List built-in catalogs
    Catalogs,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default built-in catalog
        #[arg(long)]
        set_catalog: Option<String>,

        /// Set catalog TOML file
        #[arg(long)]
        set_catalog_file: Option<PathBuf>,

        /// Go back to the built-in catalog
        #[arg(long)]
        clear_catalog_file: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set log filter used when RUST_LOG is unset
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
