use std::fmt::Display;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tsconv_core::{
    display::{ConvertResult, ReverseConvertResult, TimezoneList, ValidationResult},
    handlers::{
        handle_convert, handle_info, handle_list_timezones, handle_multi, handle_now,
        handle_reverse, handle_support, handle_validate,
    },
    models::TimestampInput,
    params::{
        ConvertTimestamp, CurrentTime, ListTimezones, MultiConvert, ReverseConvert,
        ValidateTimestamp,
    },
    Config, Provider, TimestampUnit,
};

use crate::renderer::TerminalRenderer;

#[derive(Args)]
pub struct ConvertArgs {
    /// Timestamp to convert
    #[arg(allow_hyphen_values = true)]
    pub timestamp: String,

    #[arg(short, long, help = "Timestamp unit: s or ms (defaults to the configured unit)")]
    pub unit: Option<TimestampUnit>,

    #[arg(short = 'z', long, help = "Target time zone (defaults to your zone)")]
    pub timezone: Option<String>,
}

impl ConvertArgs {
    pub fn into_params(self, config: &Config) -> ConvertTimestamp {
        ConvertTimestamp {
            timestamp: self.timestamp,
            unit: self.unit.unwrap_or(config.unit),
            timezone: self.timezone.or_else(|| config.timezone.clone()),
        }
    }
}

#[derive(Args, Default)]
pub struct NowArgs {
    #[arg(short = 'z', long, help = "Time zone (defaults to your zone)")]
    pub timezone: Option<String>,
}

impl NowArgs {
    pub fn into_params(self, config: &Config) -> CurrentTime {
        CurrentTime {
            timezone: self.timezone.or_else(|| config.timezone.clone()),
        }
    }
}

#[derive(Args)]
pub struct ReverseArgs {
    /// Date and time, e.g. "2024-01-01 08:00:00" or an ISO 8601 timestamp
    pub datetime: String,

    #[arg(
        short = 'z',
        long,
        help = "Zone of the wall-clock time (defaults to your zone)"
    )]
    pub timezone: Option<String>,
}

impl From<ReverseArgs> for ReverseConvert {
    fn from(args: ReverseArgs) -> Self {
        ReverseConvert {
            datetime: args.datetime,
            timezone: args.timezone,
        }
    }
}

#[derive(Args)]
pub struct ZonesArgs {
    #[arg(short, long, help = "Only list the popular zones")]
    pub popular: bool,

    #[arg(short, long, help = "Case-insensitive filter on zone id or label")]
    pub filter: Option<String>,
}

impl From<ZonesArgs> for ListTimezones {
    fn from(args: ZonesArgs) -> Self {
        ListTimezones {
            popular: args.popular,
            filter: args.filter,
        }
    }
}

#[derive(Args)]
pub struct MultiArgs {
    /// Timestamp to convert
    #[arg(allow_hyphen_values = true)]
    pub timestamp: String,

    #[arg(short, long, help = "Timestamp unit: s or ms (defaults to the configured unit)")]
    pub unit: Option<TimestampUnit>,

    #[arg(
        short = 'z',
        long = "timezones",
        value_delimiter = ',',
        required = true,
        help = "Comma-separated list of time zones"
    )]
    pub timezones: Vec<String>,
}

impl MultiArgs {
    pub fn into_params(self, config: &Config) -> MultiConvert {
        MultiConvert {
            timestamp: self.timestamp,
            unit: self.unit.unwrap_or(config.unit),
            timezones: self.timezones,
        }
    }
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Timestamp to check
    #[arg(allow_hyphen_values = true)]
    pub timestamp: String,

    #[arg(short, long, help = "Timestamp unit: s or ms (defaults to the configured unit)")]
    pub unit: Option<TimestampUnit>,
}

impl ValidateArgs {
    pub fn into_params(self, config: &Config) -> ValidateTimestamp {
        ValidateTimestamp {
            timestamp: self.timestamp,
            unit: self.unit.unwrap_or(config.unit),
        }
    }
}

#[derive(Args)]
pub struct PanelArgs {
    #[arg(
        long,
        help = "Activation replayed on start, as JSON: {\"code\": \"convert\", \"payload\": \"1700000000\"}"
    )]
    pub action: Option<String>,

    #[arg(long, help = "Run without a host bridge")]
    pub no_host: bool,

    #[arg(
        long,
        help = "Command run with the section name to open hotkey settings"
    )]
    pub hotkey_command: Option<String>,
}

/// Runs one-shot commands and prints their results.
pub struct Cli {
    provider: Provider,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(provider: Provider, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            provider,
            renderer,
            json,
        }
    }

    fn emit<T: Serialize + ?Sized>(&self, value: &T, markdown: impl Display) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    pub fn convert(&self, params: &ConvertTimestamp) -> Result<()> {
        let result = handle_convert(&self.provider, params)
            .with_context(|| format!("Failed to convert timestamp '{}'", params.timestamp))?;
        let input = TimestampInput::parse(&params.timestamp, params.unit)?;
        self.emit(&result, ConvertResult::new(input.value, input.unit, &result))
    }

    pub fn now(&self, params: &CurrentTime) -> Result<()> {
        let result =
            handle_now(&self.provider, params).context("Failed to format the current time")?;
        self.emit(&result, &result)
    }

    pub fn reverse(&self, params: &ReverseConvert) -> Result<()> {
        let result = handle_reverse(&self.provider, params)
            .with_context(|| format!("Failed to convert '{}'", params.datetime))?;
        self.emit(&result, ReverseConvertResult::new(&params.datetime, result))
    }

    pub fn zones(&self, params: &ListTimezones) -> Result<()> {
        let options = handle_list_timezones(&self.provider, params);
        self.emit(&options, TimezoneList(options.clone()))
    }

    pub fn multi(&self, params: &MultiConvert) -> Result<()> {
        let results = handle_multi(&self.provider, params)
            .with_context(|| format!("Failed to convert timestamp '{}'", params.timestamp))?;
        self.emit(&results, &results)
    }

    /// Prints the range check and returns whether the timestamp is valid.
    pub fn validate(&self, params: &ValidateTimestamp) -> Result<bool> {
        let valid = handle_validate(&self.provider, params);
        let report = serde_json::json!({
            "timestamp": params.timestamp,
            "unit": params.unit,
            "valid": valid,
        });
        self.emit(
            &report,
            ValidationResult::new(&params.timestamp, params.unit, valid),
        )?;
        Ok(valid)
    }

    pub fn support(&self) -> Result<()> {
        let support = handle_support(&self.provider);
        self.emit(&support, support)
    }

    pub fn info(&self) -> Result<()> {
        let info = handle_info(&self.provider);
        self.emit(&info, &info)
    }
}
