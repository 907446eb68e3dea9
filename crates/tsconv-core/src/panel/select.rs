//! Time zone selector.

use serde::Serialize;

use crate::models::TimezoneOption;

/// A top-level entry of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SelectEntry {
    /// Disabled header taken from a separator option
    Header(String),
    /// Options sharing a region, created the first time the region is seen
    Group {
        label: String,
        options: Vec<TimezoneOption>,
    },
    /// Option without a region
    Option(TimezoneOption),
}

/// Grouped selector with a current selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimezoneSelect {
    entries: Vec<SelectEntry>,
    selected: Option<String>,
}

impl TimezoneSelect {
    /// Builds the selector from the provider's option list.
    pub fn from_options(options: Vec<TimezoneOption>) -> Self {
        let mut entries: Vec<SelectEntry> = Vec::new();

        for option in options {
            if option.is_separator() {
                entries.push(SelectEntry::Header(option.label));
                continue;
            }
            let Some(group) = option.group.clone() else {
                entries.push(SelectEntry::Option(option));
                continue;
            };
            let existing = entries.iter_mut().find_map(|entry| match entry {
                SelectEntry::Group { label, options } if *label == group => Some(options),
                _ => None,
            });
            match existing {
                Some(options) => options.push(option),
                None => entries.push(SelectEntry::Group {
                    label: group,
                    options: vec![option],
                }),
            }
        }

        Self {
            entries,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[SelectEntry] {
        &self.entries
    }

    /// Every selectable option, in display order.
    pub fn options(&self) -> impl Iterator<Item = &TimezoneOption> {
        self.entries.iter().flat_map(|entry| {
            let options: &[TimezoneOption] = match entry {
                SelectEntry::Header(_) => &[],
                SelectEntry::Group { options, .. } => options,
                SelectEntry::Option(option) => std::slice::from_ref(option),
            };
            options.iter()
        })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options().any(|option| option.value == value)
    }

    /// Selects `value` if the selector offers it.
    pub fn select(&mut self, value: &str) -> bool {
        if self.contains(value) {
            self.selected = Some(value.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn len(&self) -> usize {
        self.options().count()
    }

    pub fn is_empty(&self) -> bool {
        self.options().next().is_none()
    }
}
