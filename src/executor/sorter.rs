//! Result sorting for query execution
//!
//! One comparator per sort key, always applied with a stable sort so ties
//! keep catalog order.

use std::cmp::Ordering;

use crate::catalog::Record;
use crate::query::SortKey;

/// Sorts filtered records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort key.
    ///
    /// `Recent` leaves the slice untouched.
    pub fn sort(records: &mut [&Record], key: SortKey) {
        if let Some(compare) = Self::comparator(key) {
            // slice::sort_by is stable
            records.sort_by(|a, b| compare(a, b));
        }
    }

    /// Returns the comparator for a sort key, or None for catalog order.
    fn comparator(key: SortKey) -> Option<fn(&Record, &Record) -> Ordering> {
        match key {
            SortKey::Popularity => Some(by_views_desc),
            SortKey::Duration => Some(by_duration_asc),
            SortKey::Recent => None,
            SortKey::TitleAlphabetical => Some(by_title_bytes),
        }
    }
}

fn by_views_desc(a: &Record, b: &Record) -> Ordering {
    b.views.cmp(&a.views)
}

fn by_duration_asc(a: &Record, b: &Record) -> Ordering {
    a.duration_minutes.cmp(&b.duration_minutes)
}

/// Byte order, which for UTF-8 is code-point order
fn by_title_bytes(a: &Record, b: &Record) -> Ordering {
    a.title.as_bytes().cmp(b.title.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Language, Topic};

    fn make_record(id: &str, title: &str, duration: u32, views: u64) -> Record {
        Record::new(id, title, "Creator", Topic::Education, Language::English, duration)
            .with_views(views)
            .with_media_url("https://example.com")
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_sort_popularity_descending() {
        let a = make_record("a", "A", 10, 100);
        let b = make_record("b", "B", 10, 300);
        let c = make_record("c", "C", 10, 200);
        let mut records = vec![&a, &b, &c];

        ResultSorter::sort(&mut records, SortKey::Popularity);

        assert_eq!(ids(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_duration_ascending() {
        let a = make_record("a", "A", 50, 0);
        let b = make_record("b", "B", 20, 0);
        let c = make_record("c", "C", 35, 0);
        let mut records = vec![&a, &b, &c];

        ResultSorter::sort(&mut records, SortKey::Duration);

        assert_eq!(ids(&records), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_recent_keeps_order() {
        let a = make_record("a", "Z", 50, 1);
        let b = make_record("b", "A", 20, 9);
        let mut records = vec![&a, &b];

        ResultSorter::sort(&mut records, SortKey::Recent);

        assert_eq!(ids(&records), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_title_byte_order() {
        let a = make_record("a", "banana", 1, 0);
        let b = make_record("b", "Cherry", 1, 0);
        let c = make_record("c", "Éclair", 1, 0);
        let d = make_record("d", "apple", 1, 0);
        let mut records = vec![&a, &b, &c, &d];

        ResultSorter::sort(&mut records, SortKey::TitleAlphabetical);

        // Uppercase ASCII < lowercase ASCII < non-ASCII
        assert_eq!(ids(&records), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_stable() {
        let a = make_record("a", "Same", 30, 5);
        let b = make_record("b", "Same", 30, 5);
        let c = make_record("c", "Same", 30, 5);

        for key in SortKey::ALL {
            let mut records = vec![&a, &b, &c];
            ResultSorter::sort(&mut records, key);
            assert_eq!(ids(&records), vec!["a", "b", "c"], "{:?}", key);
        }
    }
}
