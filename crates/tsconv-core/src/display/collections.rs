//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::TimezoneOption;

/// Newtype wrapper for displaying a time zone selector list.
///
/// Separator entries become headings; every other entry is one list item.
///
/// # Examples
///
/// ```rust
/// use tsconv_core::{display::TimezoneList, models::TimezoneOption};
///
/// let zones = TimezoneList(vec![TimezoneOption::zone(
///     "Asia/Tokyo",
///     "Tokyo Time (GMT+09:00)",
///     Some("Asia".to_string()),
/// )]);
/// let output = format!("{}", zones);
/// assert!(output.contains("Asia/Tokyo"));
/// ```
pub struct TimezoneList(pub Vec<TimezoneOption>);

impl TimezoneList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries, separators included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&TimezoneOption> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimezoneOption> {
        self.0.iter()
    }
}

impl Index<usize> for TimezoneList {
    type Output = TimezoneOption;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TimezoneList {
    type Item = TimezoneOption;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TimezoneList {
    type Item = &'a TimezoneOption;
    type IntoIter = std::slice::Iter<'a, TimezoneOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TimezoneList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No time zones found.");
        }
        for (index, option) in self.0.iter().enumerate() {
            if option.is_separator() {
                if index > 0 {
                    writeln!(f)?;
                }
                write!(f, "{option}")?;
                writeln!(f)?;
            } else {
                write!(f, "{option}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(value: &str) -> TimezoneOption {
        TimezoneOption::zone(value, format!("{value} label"), None)
    }

    #[test]
    fn test_timezone_list_display_empty() {
        assert_eq!(format!("{}", TimezoneList(vec![])), "No time zones found.\n");
    }

    #[test]
    fn test_timezone_list_display_with_separator() {
        let list = TimezoneList(vec![
            zone("UTC"),
            TimezoneOption::separator("All zones"),
            zone("Africa/Abidjan"),
        ]);
        let output = format!("{list}");
        assert_eq!(
            output,
            "- `UTC` UTC label\n\n### All zones\n\n- `Africa/Abidjan` Africa/Abidjan label\n"
        );
    }

    #[test]
    fn test_timezone_list_accessors() {
        let list = TimezoneList(vec![zone("UTC"), zone("Asia/Tokyo")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].value, "Asia/Tokyo");
        assert_eq!(list.get(2), None);
        assert_eq!((&list).into_iter().count(), 2);
    }
}
