//! Display implementations for domain models.
//!
//! All output is markdown so the CLI's terminal renderer can style it.

use std::fmt;

use crate::models::{
    FormattedResult, MultiZoneResults, PluginInfo, ReverseResult, TimezoneOption,
    TimezoneSupport, ZoneConversion,
};

impl fmt::Display for FormattedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.timezone, self.timezone_short)?;
        writeln!(f)?;
        writeln!(f, "- **Standard**: {}", self.standard)?;
        writeln!(f, "- **Date**: {}", self.date)?;
        writeln!(f, "- **Time**: {}", self.time)?;
        writeln!(f, "- **Weekday**: {}", self.weekday)?;
        writeln!(f, "- **ISO 8601**: `{}`", self.iso)?;
        writeln!(f, "- **Relative**: {}", self.relative)?;
        writeln!(f, "- **Offset**: {}", self.timezone_offset)?;
        writeln!(f, "- **Unix**: `{}` s / `{}` ms", self.unix, self.unix_ms)
    }
}

impl fmt::Display for ZoneConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneConversion::Converted(result) => write!(f, "{result}"),
            ZoneConversion::Failed { error } => writeln!(f, "Error: {error}"),
        }
    }
}

impl fmt::Display for MultiZoneResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No time zones requested.");
        }
        for (index, (zone, outcome)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            match outcome {
                ZoneConversion::Converted(result) => write!(f, "{result}")?,
                ZoneConversion::Failed { error } => {
                    writeln!(f, "## {zone}")?;
                    writeln!(f)?;
                    writeln!(f, "Error: {error}")?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ReverseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Milliseconds**: `{}`", self.milliseconds)?;
        writeln!(f, "- **Seconds**: `{}`", self.seconds)
    }
}

impl fmt::Display for TimezoneOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_separator() {
            writeln!(f, "### {}", self.label)
        } else {
            writeln!(f, "- `{}` {}", self.value, self.label)
        }
    }
}

impl fmt::Display for TimezoneSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |flag: bool| if flag { "✓" } else { "✗" };
        writeln!(f, "- Zone enumeration: {}", mark(self.supported_values_of))?;
        writeln!(f, "- Date/time formatting: {}", mark(self.date_time_format))?;
        writeln!(f, "- Relative time: {}", mark(self.relative_time_format))?;
        writeln!(f, "- Time zones: {}", mark(self.time_zone_support))
    }
}

impl fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} {}", self.name, self.version)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)
    }
}
