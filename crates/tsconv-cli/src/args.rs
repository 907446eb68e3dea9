use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tsconv_core::Locale;

use crate::cli::{
    ConvertArgs, MultiArgs, NowArgs, PanelArgs, ReverseArgs, ValidateArgs, ZonesArgs,
};

/// Command-line arguments for tsconv
#[derive(Parser)]
#[command(
    version,
    about = "Convert Unix timestamps to dates and back across time zones",
    name = "tsconv"
)]
pub struct Args {
    /// Path to the configuration file (defaults to
    /// $XDG_CONFIG_HOME/tsconv/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and rich formatting
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Output locale (en, zh-CN); overrides the configuration file
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a timestamp to a date and time
    #[command(alias = "c")]
    Convert(ConvertArgs),
    /// Show the current time (default when no command is given)
    #[command(alias = "n")]
    Now(NowArgs),
    /// Convert a date and time back to a timestamp
    #[command(alias = "r")]
    Reverse(ReverseArgs),
    /// List the selectable time zones
    #[command(alias = "z")]
    Zones(ZonesArgs),
    /// Convert one timestamp in several time zones
    #[command(alias = "m")]
    Multi(MultiArgs),
    /// Check whether a timestamp lies between 1970 and 2100
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Report time zone support of this build
    Support,
    /// Show plugin information
    Info,
    /// Run the interactive converter panel on the terminal
    #[command(alias = "p")]
    Panel(PanelArgs),
}
