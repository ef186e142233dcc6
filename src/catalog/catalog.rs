//! Validated, ordered collection of records

use std::collections::HashSet;

use super::errors::{CatalogError, CatalogResult};
use super::types::Record;

/// An ordered, validated catalog.
///
/// Order is significant: it is the base order every query result is
/// derived from, and it is treated as most-recent-first.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Builds a catalog, validating every record and id uniqueness.
    pub fn from_records(records: Vec<Record>) -> CatalogResult<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            record
                .validate_structure()
                .map_err(|reason| CatalogError::malformed_record(index, reason))?;

            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::duplicate_id(&record.id));
            }
        }

        Ok(Self { records })
    }

    /// Records in catalog order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up a record by id
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Language, Topic};
    use crate::catalog::CatalogErrorCode;

    fn record(id: &str, title: &str) -> Record {
        Record::new(id, title, "Creator", Topic::Business, Language::German, 40)
            .with_media_url("https://example.com/watch")
    }

    #[test]
    fn test_from_records_preserves_order() {
        let catalog =
            Catalog::from_records(vec![record("b", "Second"), record("a", "First")]).unwrap();

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_records(vec![record("a", "One"), record("a", "Two")]).unwrap_err();
        assert_eq!(err.code(), CatalogErrorCode::DuplicateId);
    }

    #[test]
    fn test_malformed_record_rejected() {
        let err = Catalog::from_records(vec![record("a", "One"), record("b", "")]).unwrap_err();
        assert_eq!(err.code(), CatalogErrorCode::MalformedRecord);
        assert!(err.message().contains("position 1"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_records(vec![record("a", "One"), record("b", "Two")]).unwrap();
        assert_eq!(catalog.get("b").map(|r| r.title.as_str()), Some("Two"));
        assert!(catalog.get("zzz").is_none());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_records(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
