//! Proposta - indicative monthly quotes for outsourced medical services
//!
//! A CLI that prices service options from a catalog and issues commercial
//! proposals for prospective clinics.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
