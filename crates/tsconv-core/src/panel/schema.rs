//! Declarative result view.
//!
//! The result area is an ordered list of fields. The first five are always
//! present; `Relative` and `TimezoneInfo` join the list the first time a
//! conversion produces them and then stay until the panel is dropped.

use serde::Serialize;

use crate::{locale::Locale, models::FormattedResult};

/// Placeholder shown in blank fields.
pub const BLANK: &str = "-";

/// Result rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ResultField {
    Standard,
    Date,
    Time,
    Weekday,
    Iso,
    Relative,
    TimezoneInfo,
}

impl ResultField {
    pub const ALL: [ResultField; 7] = [
        ResultField::Standard,
        ResultField::Date,
        ResultField::Time,
        ResultField::Weekday,
        ResultField::Iso,
        ResultField::Relative,
        ResultField::TimezoneInfo,
    ];

    /// Rows present from the start.
    pub const FIXED: [ResultField; 5] = [
        ResultField::Standard,
        ResultField::Date,
        ResultField::Time,
        ResultField::Weekday,
        ResultField::Iso,
    ];

    /// Stable element id of the row.
    pub fn id(&self) -> &'static str {
        match self {
            ResultField::Standard => "standardFormat",
            ResultField::Date => "dateFormat",
            ResultField::Time => "timeFormat",
            ResultField::Weekday => "weekdayFormat",
            ResultField::Iso => "isoFormat",
            ResultField::Relative => "relativeFormat",
            ResultField::TimezoneInfo => "timezoneInfo",
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ResultField::Standard, Locale::En) => "Standard",
            (ResultField::Date, Locale::En) => "Date",
            (ResultField::Time, Locale::En) => "Time",
            (ResultField::Weekday, Locale::En) => "Weekday",
            (ResultField::Iso, Locale::En) => "ISO 8601",
            (ResultField::Relative, Locale::En) => "Relative",
            (ResultField::TimezoneInfo, Locale::En) => "Time zone",
            (ResultField::Standard, Locale::ZhCn) => "标准格式",
            (ResultField::Date, Locale::ZhCn) => "日期",
            (ResultField::Time, Locale::ZhCn) => "时间",
            (ResultField::Weekday, Locale::ZhCn) => "星期",
            (ResultField::Iso, Locale::ZhCn) => "ISO 格式",
            (ResultField::Relative, Locale::ZhCn) => "相对时间",
            (ResultField::TimezoneInfo, Locale::ZhCn) => "时区信息",
        }
    }

    fn value_of(&self, result: &FormattedResult) -> String {
        match self {
            ResultField::Standard => result.standard.clone(),
            ResultField::Date => result.date.clone(),
            ResultField::Time => result.time.clone(),
            ResultField::Weekday => result.weekday.clone(),
            ResultField::Iso => result.iso.clone(),
            ResultField::Relative => result.relative.clone(),
            ResultField::TimezoneInfo => result.timezone_offset.clone(),
        }
    }
}

/// Current content of the result area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    rows: Vec<(ResultField, String)>,
}

impl Default for ResultPanel {
    fn default() -> Self {
        Self {
            rows: ResultField::FIXED
                .iter()
                .map(|field| (*field, BLANK.to_string()))
                .collect(),
        }
    }
}

impl ResultPanel {
    /// Rows in display order.
    pub fn rows(&self) -> &[(ResultField, String)] {
        &self.rows
    }

    pub fn get(&self, field: ResultField) -> Option<&str> {
        self.rows
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }

    /// Fills the rows from a conversion result. Optional rows are added
    /// when the result has a non-empty value for them.
    pub fn show(&mut self, result: &FormattedResult) {
        for field in ResultField::ALL {
            let value = field.value_of(result);
            let optional = !ResultField::FIXED.contains(&field);
            if optional && value.is_empty() {
                continue;
            }
            self.set(field, value);
        }
    }

    /// Blanks every present row.
    pub fn clear(&mut self) {
        for (_, value) in &mut self.rows {
            *value = BLANK.to_string();
        }
    }

    /// Blanks the standard, date and time rows.
    pub fn clear_primary(&mut self) {
        for field in [ResultField::Standard, ResultField::Date, ResultField::Time] {
            self.set(field, BLANK.to_string());
        }
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|(_, value)| value == BLANK)
    }

    fn set(&mut self, field: ResultField, value: String) {
        match self.rows.iter_mut().find(|(f, _)| *f == field) {
            Some(row) => row.1 = value,
            None => {
                let at = self.rows.partition_point(|(f, _)| *f < field);
                self.rows.insert(at, (field, value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormattedResult {
        FormattedResult {
            standard: "2021-01-01 00:00:00".into(),
            date: "2021-01-01".into(),
            time: "00:00:00".into(),
            weekday: "Friday".into(),
            iso: "2021-01-01T00:00:00.000Z".into(),
            relative: "3 years ago".into(),
            timezone: "UTC".into(),
            timezone_offset: "GMT".into(),
            timezone_short: "UTC".into(),
            unix: 1_609_459_200,
            unix_ms: 1_609_459_200_000,
        }
    }

    #[test]
    fn test_initial_rows_are_fixed_and_blank() {
        let panel = ResultPanel::default();
        let fields: Vec<_> = panel.rows().iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, ResultField::FIXED);
        assert!(panel.is_blank());
    }

    #[test]
    fn test_show_adds_optional_rows_in_order() {
        let mut panel = ResultPanel::default();
        panel.show(&sample());
        let fields: Vec<_> = panel.rows().iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, ResultField::ALL);
        assert_eq!(panel.get(ResultField::TimezoneInfo), Some("GMT"));
        assert_eq!(panel.get(ResultField::Relative), Some("3 years ago"));
    }

    #[test]
    fn test_optional_rows_stay_after_clear() {
        let mut panel = ResultPanel::default();
        panel.show(&sample());
        panel.clear();
        assert_eq!(panel.rows().len(), 7);
        assert!(panel.is_blank());
    }

    #[test]
    fn test_empty_optional_value_skips_row() {
        let mut panel = ResultPanel::default();
        let mut result = sample();
        result.relative.clear();
        panel.show(&result);
        assert_eq!(panel.get(ResultField::Relative), None);
        assert_eq!(panel.get(ResultField::TimezoneInfo), Some("GMT"));
    }

    #[test]
    fn test_clear_primary() {
        let mut panel = ResultPanel::default();
        panel.show(&sample());
        panel.clear_primary();
        assert_eq!(panel.get(ResultField::Standard), Some(BLANK));
        assert_eq!(panel.get(ResultField::Time), Some(BLANK));
        assert_eq!(panel.get(ResultField::Weekday), Some("Friday"));
    }
}
