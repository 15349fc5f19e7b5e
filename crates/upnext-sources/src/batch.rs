use serde_json::Value;
use tracing::warn;
use upnext_models::{Item, SourceKind};
use crate::error::SkipReason;

/// Items extracted from one usable upstream response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarBatch {
    pub items: Vec<Item>,
    /// Records dropped because they could not be normalized
    pub skipped: usize,
}

impl CalendarBatch {
    /// Normalize every raw record, keeping the good ones and logging the rest.
    pub fn collect<F>(kind: SourceKind, records: Vec<Value>, mut normalize: F) -> Self
    where
        F: FnMut(Value) -> Result<Item, SkipReason>,
    {
        let mut batch = CalendarBatch::default();
        for (index, record) in records.into_iter().enumerate() {
            match normalize(record) {
                Ok(item) => batch.items.push(item),
                Err(SkipReason::BeforeWindow { .. }) => {
                    // Expected for movies whose only remaining release is in the past
                    batch.skipped += 1;
                }
                Err(reason) => {
                    warn!(
                        operation = "record_skipped",
                        source = %kind,
                        upstream = kind.upstream_name(),
                        record_index = index,
                        reason = %reason,
                        "Skipping upstream record that could not be normalized"
                    );
                    batch.skipped += 1;
                }
            }
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_collect_keeps_good_records_and_counts_bad_ones() {
        let records = vec![json!({"ok": "A"}), json!({"broken": true}), json!({"ok": "B"})];
        let release = Utc.with_ymd_and_hms(2025, 8, 21, 0, 0, 0).unwrap();

        let batch = CalendarBatch::collect(SourceKind::Tv, records, |value| {
            value["ok"]
                .as_str()
                .map(|title| Item::new(title, "", release, false, SourceKind::Tv))
                .ok_or(SkipReason::MissingField("ok"))
        });

        assert_eq!(batch.items.len(), 2);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.items[1].title(), "B");
    }
}
