//! tsconv CLI Application
//!
//! Command-line interface for converting timestamps to dates and back across
//! time zones, plus an interactive converter panel.

mod args;
mod cli;
mod host;
mod panel;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, NowArgs};
use log::info;
use panel::run_panel;
use renderer::TerminalRenderer;
use tsconv_core::{Config, PanelOptions, ProviderBuilder};
use Commands::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        json,
        locale,
        command,
    } = Args::parse();

    let mut config = Config::load(config.as_deref()).context("Failed to load configuration")?;
    if let Some(locale) = locale {
        config.locale = locale;
    }

    let provider = ProviderBuilder::from_config(&config).build();
    let renderer = TerminalRenderer::new(!no_color);

    info!("tsconv started");

    match command {
        Some(Panel(args)) => {
            let options = PanelOptions {
                unit: config.unit,
                timezone: config.timezone.clone(),
            };
            run_panel(provider, renderer, options, args).await
        }
        Some(Validate(args)) => {
            let valid = Cli::new(provider, renderer, json).validate(&args.into_params(&config))?;
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Convert(args)) => Cli::new(provider, renderer, json).convert(&args.into_params(&config)),
        Some(Now(args)) => Cli::new(provider, renderer, json).now(&args.into_params(&config)),
        Some(Reverse(args)) => Cli::new(provider, renderer, json).reverse(&args.into()),
        Some(Zones(args)) => Cli::new(provider, renderer, json).zones(&args.into()),
        Some(Multi(args)) => Cli::new(provider, renderer, json).multi(&args.into_params(&config)),
        Some(Support) => Cli::new(provider, renderer, json).support(),
        Some(Info) => Cli::new(provider, renderer, json).info(),
        None => Cli::new(provider, renderer, json).now(&NowArgs::default().into_params(&config)),
    }
}
