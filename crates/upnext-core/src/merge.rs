use std::cmp::Ordering;
use std::collections::BTreeMap;
use chrono::NaiveDate;
use upnext_models::{DateGroup, Feed, Item};

/// Group items by calendar date and order everything deterministically.
///
/// Groups come out in ascending date order with one group per date. Inside a
/// group items are ordered by [`compare_items`].
pub fn merge_items<I>(items: I) -> Feed
where
    I: IntoIterator<Item = Item>,
{
    let mut by_date: BTreeMap<NaiveDate, Vec<Item>> = BTreeMap::new();
    for item in items {
        by_date.entry(item.date()).or_default().push(item);
    }

    let groups = by_date
        .into_iter()
        .map(|(date, mut items)| {
            items.sort_by(compare_items);
            DateGroup { date, items }
        })
        .collect();

    Feed { groups }
}

/// Release time, then case-insensitive title.
///
/// The remaining keys only separate items that tie on both, so the order is
/// total and repeated runs serialize identically.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    a.release_datetime()
        .cmp(&b.release_datetime())
        .then_with(|| a.title().to_lowercase().cmp(&b.title().to_lowercase()))
        .then_with(|| a.title().cmp(b.title()))
        .then_with(|| a.source().cmp(&b.source()))
        .then_with(|| a.details().cmp(b.details()))
        .then_with(|| a.has_file().cmp(&b.has_file()))
}
