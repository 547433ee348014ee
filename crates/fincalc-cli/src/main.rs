//! Fincalc CLI - Command-line interface for the fincalc financial calculator.
//!
//! # Usage
//!
//! ```bash
//! # Present value of a cash-flow series
//! fincalc pv --rate 0.05 --cash-flows 100,200,300
//!
//! # Future value of a compounding principal
//! fincalc fv --principal 1000 --rate 0.05 --periods 10
//!
//! # Effective annual rate from a nominal rate
//! fincalc ear --nominal 0.12 --periods 12
//!
//! # Full demonstration walkthrough
//! fincalc demo
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let format = cli.format;

    match cli.command {
        Commands::Pv(args) => commands::pv::execute(args, format)?,
        Commands::Fv(args) => commands::fv::execute(args, format)?,
        Commands::Ear(args) => commands::ear::execute(args, format)?,
        Commands::Demo => commands::demo::execute()?,
    }

    Ok(())
}
