use chrono::NaiveDate;
use serde::Serialize;
use crate::item::Item;

/// All items releasing on one calendar date
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub items: Vec<Item>,
}

/// The aggregated agenda: date groups in ascending date order, one group per date.
///
/// Serializes as a bare JSON array of groups.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Feed {
    pub groups: Vec<DateGroup>,
}

impl Feed {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of items across all groups
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}
