mod cli;
mod config;
mod error;
mod pkgmgr;
mod report;
mod upgrade;
mod utils;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var("WHATSNEW_VERBOSE", "1");
        }
    }

    let options = workflow::PlanOptions {
        allow_prerelease: cli.prerelease,
        apply_next_step: cli.apply,
    };

    let result = workflow::execute_plan(&cli.path, &cli.dependency, cli.pkgmgr.as_deref(), options);

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
