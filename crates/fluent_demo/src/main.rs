//! `fluent-demo`: resolve Fluent control tokens from the command line.

mod cli;
mod commands;
mod controls;
mod logging;
mod table;

use anyhow::Result;
use clap::Parser;
use comfy_table::Cell;
use fluent_theme::ThemePreset;

use crate::cli::{Cli, Command};
use crate::commands::{run_check, run_scenario, run_tokens};
use crate::logging::{init_logging, LogConfig};
use crate::table::{header_cell, new_table, preset_table, source_cell, swatch_cell, token_table};

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config(&cli));

    if let Err(error) = run(cli.command) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn log_config(cli: &Cli) -> LogConfig {
    let config = LogConfig::from_verbosity(cli.verbose);
    match cli.log_level {
        Some(level) => config.with_level(level.into()),
        None => config,
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Tokens(args) => {
            let report = run_tokens(&args, args.appearance.appearance())?;
            println!(
                "{} tokens | theme {} | {}",
                report.control, report.theme, report.appearance
            );
            println!("{}", token_table(&report.rows));
        }
        Command::Presets => {
            println!("{}", preset_table(ThemePreset::all()));
        }
        Command::Check(args) => {
            let report = run_check(&args.path)?;
            let controls = if report.controls.is_empty() {
                "none".to_string()
            } else {
                report.controls.join(", ")
            };
            println!("{}: ok", args.path.display());
            println!("  theme:           {}", report.name);
            println!("  preset:          {}", report.preset.id());
            println!("  alias overrides: {}", report.alias_overrides);
            println!("  controls:        {controls}");
        }
        Command::Scenario(args) => {
            let appearance = args.appearance.appearance();
            let mut table = new_table();
            table.set_header(vec![
                header_cell("#"),
                header_cell("Step"),
                header_cell("background_tint_color"),
                header_cell("Source"),
            ]);
            for (index, step) in run_scenario(appearance).into_iter().enumerate() {
                table.add_row(vec![
                    Cell::new(index + 1),
                    Cell::new(step.label),
                    swatch_cell(step.color),
                    source_cell(step.source),
                ]);
            }
            println!("neutral badge walkthrough | {appearance}");
            println!("{table}");
        }
    }
    Ok(())
}
