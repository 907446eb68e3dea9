//! Localized text used by the formatter.
//!
//! Two locales are supported: English (`en`) and Simplified Chinese
//! (`zh-CN`). The locale controls date patterns, weekday names, relative
//! phrases and the friendly names of the popular zones.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// Output locale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

/// Units of the relative-time phrase, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl RelativeUnit {
    fn english(&self) -> &'static str {
        match self {
            RelativeUnit::Year => "year",
            RelativeUnit::Month => "month",
            RelativeUnit::Day => "day",
            RelativeUnit::Hour => "hour",
            RelativeUnit::Minute => "minute",
            RelativeUnit::Second => "second",
        }
    }

    fn chinese(&self) -> &'static str {
        match self {
            RelativeUnit::Year => "年",
            RelativeUnit::Month => "个月",
            RelativeUnit::Day => "天",
            RelativeUnit::Hour => "小时",
            RelativeUnit::Minute => "分钟",
            RelativeUnit::Second => "秒钟",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh-hans" => Ok(Locale::ZhCn),
            _ => Err(format!("Unsupported locale: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        })
    }
}

impl Locale {
    /// strftime pattern for the date part.
    pub fn date_pattern(&self) -> &'static str {
        match self {
            Locale::En => "%Y-%m-%d",
            Locale::ZhCn => "%Y/%m/%d",
        }
    }

    /// strftime pattern for the time part.
    pub fn time_pattern(&self) -> &'static str {
        "%H:%M:%S"
    }

    /// strftime pattern for date and time together.
    pub fn standard_pattern(&self) -> &'static str {
        match self {
            Locale::En => "%Y-%m-%d %H:%M:%S",
            Locale::ZhCn => "%Y/%m/%d %H:%M:%S",
        }
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match self {
            Locale::En => match weekday {
                Weekday::Monday => "Monday",
                Weekday::Tuesday => "Tuesday",
                Weekday::Wednesday => "Wednesday",
                Weekday::Thursday => "Thursday",
                Weekday::Friday => "Friday",
                Weekday::Saturday => "Saturday",
                Weekday::Sunday => "Sunday",
            },
            Locale::ZhCn => match weekday {
                Weekday::Monday => "星期一",
                Weekday::Tuesday => "星期二",
                Weekday::Wednesday => "星期三",
                Weekday::Thursday => "星期四",
                Weekday::Friday => "星期五",
                Weekday::Saturday => "星期六",
                Weekday::Sunday => "星期日",
            },
        }
    }

    /// Phrase used when the difference is below one second.
    pub fn just_now(&self) -> &'static str {
        match self {
            Locale::En => "just now",
            Locale::ZhCn => "刚刚",
        }
    }

    /// Label of the separator between popular and other zones.
    pub fn separator_label(&self) -> &'static str {
        match self {
            Locale::En => "─────── Other time zones ───────",
            Locale::ZhCn => "─────── 其他时区 ───────",
        }
    }

    /// Relative phrase for a signed count of `unit`s; positive is future.
    ///
    /// Counts of one (and two days in Chinese) use the idiomatic words
    /// ("yesterday", "next month", "前天").
    pub fn relative(&self, count: i64, unit: RelativeUnit) -> String {
        match self {
            Locale::En => english_relative(count, unit),
            Locale::ZhCn => chinese_relative(count, unit),
        }
    }

    /// Friendly name of a zone: curated for popular zones, otherwise the last
    /// path segment of the id with underscores turned into spaces.
    pub fn friendly_name(&self, zone: &str) -> String {
        let curated = match self {
            Locale::En => english_friendly_name(zone),
            Locale::ZhCn => chinese_friendly_name(zone),
        };
        match curated {
            Some(name) => name.to_string(),
            None => zone.rsplit('/').next().unwrap_or(zone).replace('_', " "),
        }
    }
}

fn english_relative(count: i64, unit: RelativeUnit) -> String {
    let special = match (count, unit) {
        (1, RelativeUnit::Year) => Some("next year"),
        (-1, RelativeUnit::Year) => Some("last year"),
        (1, RelativeUnit::Month) => Some("next month"),
        (-1, RelativeUnit::Month) => Some("last month"),
        (1, RelativeUnit::Day) => Some("tomorrow"),
        (-1, RelativeUnit::Day) => Some("yesterday"),
        _ => None,
    };
    if let Some(phrase) = special {
        return phrase.to_string();
    }

    let magnitude = count.unsigned_abs();
    let plural = if magnitude == 1 { "" } else { "s" };
    if count > 0 {
        format!("in {magnitude} {}{plural}", unit.english())
    } else {
        format!("{magnitude} {}{plural} ago", unit.english())
    }
}

fn chinese_relative(count: i64, unit: RelativeUnit) -> String {
    let special = match (count, unit) {
        (1, RelativeUnit::Year) => Some("明年"),
        (-1, RelativeUnit::Year) => Some("去年"),
        (1, RelativeUnit::Month) => Some("下个月"),
        (-1, RelativeUnit::Month) => Some("上个月"),
        (2, RelativeUnit::Day) => Some("后天"),
        (1, RelativeUnit::Day) => Some("明天"),
        (-1, RelativeUnit::Day) => Some("昨天"),
        (-2, RelativeUnit::Day) => Some("前天"),
        _ => None,
    };
    if let Some(phrase) = special {
        return phrase.to_string();
    }

    let direction = if count > 0 { "后" } else { "前" };
    format!("{}{}{direction}", count.unsigned_abs(), unit.chinese())
}

fn english_friendly_name(zone: &str) -> Option<&'static str> {
    Some(match zone {
        "UTC" => "UTC Coordinated Universal Time",
        "Asia/Shanghai" => "Beijing Time",
        "America/New_York" => "New York Time",
        "Europe/London" => "London Time",
        "Asia/Tokyo" => "Tokyo Time",
        "Australia/Sydney" => "Sydney Time",
        "America/Los_Angeles" => "Los Angeles Time",
        "Europe/Paris" => "Paris Time",
        "Asia/Seoul" => "Seoul Time",
        "Asia/Singapore" => "Singapore Time",
        "America/Chicago" => "Chicago Time",
        "Europe/Berlin" => "Berlin Time",
        "Asia/Kolkata" => "New Delhi Time",
        "America/Sao_Paulo" => "São Paulo Time",
        "Africa/Cairo" => "Cairo Time",
        _ => return None,
    })
}

fn chinese_friendly_name(zone: &str) -> Option<&'static str> {
    Some(match zone {
        "UTC" => "UTC 协调世界时",
        "Asia/Shanghai" => "北京时间",
        "America/New_York" => "纽约时间",
        "Europe/London" => "伦敦时间",
        "Asia/Tokyo" => "东京时间",
        "Australia/Sydney" => "悉尼时间",
        "America/Los_Angeles" => "洛杉矶时间",
        "Europe/Paris" => "巴黎时间",
        "Asia/Seoul" => "首尔时间",
        "Asia/Singapore" => "新加坡时间",
        "America/Chicago" => "芝加哥时间",
        "Europe/Berlin" => "柏林时间",
        "Asia/Kolkata" => "新德里时间",
        "America/Sao_Paulo" => "圣保罗时间",
        "Africa/Cairo" => "开罗时间",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("zh_CN".parse::<Locale>().unwrap(), Locale::ZhCn);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_english_relative_phrases() {
        assert_eq!(Locale::En.relative(-3, RelativeUnit::Month), "3 months ago");
        assert_eq!(Locale::En.relative(2, RelativeUnit::Day), "in 2 days");
        assert_eq!(Locale::En.relative(-1, RelativeUnit::Day), "yesterday");
        assert_eq!(Locale::En.relative(-1, RelativeUnit::Hour), "1 hour ago");
        assert_eq!(Locale::En.relative(1, RelativeUnit::Second), "in 1 second");
    }

    #[test]
    fn test_chinese_relative_phrases() {
        assert_eq!(Locale::ZhCn.relative(-3, RelativeUnit::Month), "3个月前");
        assert_eq!(Locale::ZhCn.relative(5, RelativeUnit::Minute), "5分钟后");
        assert_eq!(Locale::ZhCn.relative(-2, RelativeUnit::Day), "前天");
        assert_eq!(Locale::ZhCn.relative(-1, RelativeUnit::Year), "去年");
    }

    #[test]
    fn test_friendly_names() {
        assert_eq!(Locale::En.friendly_name("Asia/Shanghai"), "Beijing Time");
        assert_eq!(Locale::ZhCn.friendly_name("Asia/Shanghai"), "北京时间");
        assert_eq!(
            Locale::En.friendly_name("America/Argentina/Buenos_Aires"),
            "Buenos Aires"
        );
        assert_eq!(Locale::En.friendly_name("Etc/GMT+5"), "GMT+5");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::En.weekday_name(Weekday::Friday), "Friday");
        assert_eq!(Locale::ZhCn.weekday_name(Weekday::Sunday), "星期日");
    }
}
