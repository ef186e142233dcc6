//! Wire form of a query
//!
//! Requests arrive with string labels (from the CLI or a JSON line). Turning
//! a request into a `Query` never fails: anything unrecognized degrades to
//! the nearest safe value and is reported as a `Degradation`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Language, Topic};

use super::ast::{DurationBucket, Query, Selection, SortKey, SubtitlesFilter};

/// A query request as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub search: String,
    pub topics: Vec<String>,
    pub languages: Vec<String>,
    pub duration: Option<String>,
    pub subtitles: Option<bool>,
    pub sort: Option<String>,
}

/// One request value that was replaced by a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub field: &'static str,
    pub value: String,
    pub fallback: &'static str,
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}='{}' -> {}", self.field, self.value, self.fallback)
    }
}

/// A request resolved into a query
#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    pub query: Query,
    pub degradations: Vec<Degradation>,
}

impl ResolvedQuery {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}

impl QueryRequest {
    /// Resolves the request. `default_sort` applies when no sort is named.
    pub fn resolve(&self, default_sort: SortKey) -> ResolvedQuery {
        let mut degradations = Vec::new();

        let topics = resolve_selection(&self.topics, Topic::from_label, "topics", &mut degradations);
        let languages = resolve_selection(
            &self.languages,
            Language::from_label,
            "languages",
            &mut degradations,
        );

        let duration = match self.duration.as_deref() {
            None => DurationBucket::Any,
            Some(label) => DurationBucket::from_label(label).unwrap_or_else(|| {
                degradations.push(Degradation {
                    field: "duration",
                    value: label.to_string(),
                    fallback: DurationBucket::Any.as_str(),
                });
                DurationBucket::Any
            }),
        };

        if self.subtitles == Some(false) {
            degradations.push(Degradation {
                field: "subtitles",
                value: "false".to_string(),
                fallback: "unset",
            });
        }
        let subtitles = SubtitlesFilter::from_flag(self.subtitles);

        let sort = match self.sort.as_deref() {
            None => default_sort,
            Some(label) => SortKey::from_label(label).unwrap_or_else(|| {
                degradations.push(Degradation {
                    field: "sort",
                    value: label.to_string(),
                    fallback: SortKey::Recent.as_str(),
                });
                SortKey::Recent
            }),
        };

        ResolvedQuery {
            query: Query {
                search_text: self.search.clone(),
                topics,
                languages,
                duration,
                subtitles,
                sort,
            },
            degradations,
        }
    }
}

fn resolve_selection<T: Ord>(
    labels: &[String],
    parse: fn(&str) -> Option<T>,
    field: &'static str,
    degradations: &mut Vec<Degradation>,
) -> Selection<T> {
    let mut selection = Selection::new();
    for label in labels {
        match parse(label) {
            Some(value) => {
                selection.insert(value);
            }
            None => {
                degradations.push(Degradation {
                    field,
                    value: label.clone(),
                    fallback: "no match",
                });
                selection.reject(label.as_str());
            }
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_request_is_default_query() {
        let request: QueryRequest = serde_json::from_value(json!({})).unwrap();
        let resolved = request.resolve(SortKey::Popularity);
        assert_eq!(resolved.query, Query::default());
        assert!(!resolved.is_degraded());
    }

    #[test]
    fn test_full_request() {
        let request: QueryRequest = serde_json::from_value(json!({
            "search": "cosmos",
            "topics": ["Science", "Health & Wellness"],
            "languages": ["Spanish"],
            "duration": "Medium (30-60 min)",
            "subtitles": true,
            "sort": "Title A-Z"
        }))
        .unwrap();

        let resolved = request.resolve(SortKey::Popularity);
        let query = resolved.query;
        assert_eq!(query.search_text, "cosmos");
        assert!(query.topics.contains(&Topic::Science));
        assert!(query.topics.contains(&Topic::HealthWellness));
        assert!(query.languages.contains(&Language::Spanish));
        assert_eq!(query.duration, DurationBucket::Medium);
        assert_eq!(query.subtitles, SubtitlesFilter::RequireTrue);
        assert_eq!(query.sort, SortKey::TitleAlphabetical);
        assert!(resolved.degradations.is_empty());
    }

    #[test]
    fn test_unknown_values_degrade() {
        let request = QueryRequest {
            topics: vec!["Gardening".into()],
            duration: Some("Epic".into()),
            subtitles: Some(false),
            sort: Some("Shuffle".into()),
            ..Default::default()
        };

        let resolved = request.resolve(SortKey::Popularity);
        assert_eq!(resolved.query.duration, DurationBucket::Any);
        assert_eq!(resolved.query.subtitles, SubtitlesFilter::Unset);
        assert_eq!(resolved.query.sort, SortKey::Recent);
        assert!(!resolved.query.topics.is_unrestricted());
        assert_eq!(resolved.degradations.len(), 4);

        let fields: Vec<&str> = resolved.degradations.iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["topics", "duration", "subtitles", "sort"]);
    }

    #[test]
    fn test_labels_ignore_case() {
        let request = QueryRequest {
            topics: vec!["technology".into()],
            languages: vec!["FRENCH".into()],
            duration: Some("short".into()),
            sort: Some("title a-z".into()),
            ..Default::default()
        };

        let resolved = request.resolve(SortKey::Popularity);
        assert!(resolved.query.topics.contains(&Topic::Technology));
        assert!(resolved.query.languages.contains(&Language::French));
        assert_eq!(resolved.query.duration, DurationBucket::Short);
        assert_eq!(resolved.query.sort, SortKey::TitleAlphabetical);
        assert!(!resolved.is_degraded());
    }

    #[test]
    fn test_default_sort_applies_only_when_absent() {
        let request = QueryRequest::default();
        assert_eq!(request.resolve(SortKey::Duration).query.sort, SortKey::Duration);

        let request = QueryRequest {
            sort: Some("Popularity".into()),
            ..Default::default()
        };
        assert_eq!(request.resolve(SortKey::Duration).query.sort, SortKey::Popularity);
    }

    #[test]
    fn test_degradation_display() {
        let d = Degradation {
            field: "sort",
            value: "Shuffle".into(),
            fallback: "recent",
        };
        assert_eq!(d.to_string(), "sort='Shuffle' -> recent");
    }
}
