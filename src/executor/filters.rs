//! Predicate filtering for query execution
//!
//! A record passes when all five predicates hold (AND across categories,
//! OR within a multi-select). Predicates never fail.

use crate::catalog::Record;
use crate::query::{Query, SubtitlesFilter};

/// Evaluates a query's predicates against records.
///
/// Built once per query so the search text is lowercased once, not once per
/// record.
pub struct PredicateFilter<'q> {
    query: &'q Query,
    needle: String,
}

impl<'q> PredicateFilter<'q> {
    pub fn new(query: &'q Query) -> Self {
        Self {
            query,
            needle: query.search_text.to_lowercase(),
        }
    }

    /// Checks if a record matches all predicates
    pub fn matches(&self, record: &Record) -> bool {
        self.text_match(record)
            && self.query.topics.admits(&record.topic)
            && self.query.languages.admits(&record.language)
            && self.query.duration.contains(record.duration_minutes)
            && Self::subtitles_match(self.query.subtitles, record)
    }

    /// Case-folded substring match on title, creator or description
    fn text_match(&self, record: &Record) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        [&record.title, &record.creator, &record.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    fn subtitles_match(filter: SubtitlesFilter, record: &Record) -> bool {
        match filter {
            SubtitlesFilter::Unset => true,
            SubtitlesFilter::RequireTrue => record.has_subtitles,
        }
    }
}
