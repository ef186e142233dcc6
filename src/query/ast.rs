//! Query structures
//!
//! A `Query` is a plain value describing one filter/sort request. Every
//! field has a default that places no restriction on the result, so
//! `Query::default()` returns the whole catalog in popularity order.

use std::collections::BTreeSet;

use crate::catalog::{Language, Topic};

/// A multi-select filter over a closed set of values.
///
/// An empty selection places no restriction. Labels that did not parse into
/// a known value are kept in `rejected`: they still count as a restriction,
/// but no record can match them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T: Ord> {
    selected: BTreeSet<T>,
    rejected: BTreeSet<String>,
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
            rejected: BTreeSet::new(),
        }
    }
}

impl<T: Ord> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value. Returns false if it was already selected.
    pub fn insert(&mut self, value: T) -> bool {
        self.selected.insert(value)
    }

    /// Records a label that names no known value.
    pub fn reject(&mut self, label: impl Into<String>) {
        self.rejected.insert(label.into());
    }

    /// Selects the value if absent, deselects it if present.
    pub fn toggle(&mut self, value: T) {
        if !self.selected.remove(&value) {
            self.selected.insert(value);
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.selected.contains(value)
    }

    /// True when this selection does not restrict results
    pub fn is_unrestricted(&self) -> bool {
        self.selected.is_empty() && self.rejected.is_empty()
    }

    /// Returns true if a record carrying `value` passes this selection
    pub fn admits(&self, value: &T) -> bool {
        self.is_unrestricted() || self.selected.contains(value)
    }

    /// Number of entries, rejected labels included
    pub fn len(&self) -> usize {
        self.selected.len() + self.rejected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.selected.iter()
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
            rejected: BTreeSet::new(),
        }
    }
}

/// Duration range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationBucket {
    #[default]
    Any,
    /// Under 30 minutes
    Short,
    /// 30 to 60 minutes, both ends included
    Medium,
    /// Over 60 minutes
    Long,
}

impl DurationBucket {
    /// Returns the filter panel label
    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::Any => "Any",
            DurationBucket::Short => "Short (< 30 min)",
            DurationBucket::Medium => "Medium (30-60 min)",
            DurationBucket::Long => "Long (> 60 min)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::Any => "any",
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::Long => "long",
        }
    }

    /// Parses either the panel label or the short name, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        let all = [
            DurationBucket::Any,
            DurationBucket::Short,
            DurationBucket::Medium,
            DurationBucket::Long,
        ];
        all.into_iter().find(|b| {
            b.label().eq_ignore_ascii_case(label) || b.as_str().eq_ignore_ascii_case(label)
        })
    }

    /// Returns true if a duration falls in this bucket
    pub fn contains(&self, minutes: u32) -> bool {
        match self {
            DurationBucket::Any => true,
            DurationBucket::Short => minutes < 30,
            DurationBucket::Medium => (30..=60).contains(&minutes),
            DurationBucket::Long => minutes > 60,
        }
    }
}

/// Subtitle requirement. There is no "require no subtitles" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubtitlesFilter {
    #[default]
    Unset,
    RequireTrue,
}

impl SubtitlesFilter {
    /// Maps an optional flag onto the filter; only `Some(true)` restricts.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => SubtitlesFilter::RequireTrue,
            _ => SubtitlesFilter::Unset,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SubtitlesFilter::Unset => SubtitlesFilter::RequireTrue,
            SubtitlesFilter::RequireTrue => SubtitlesFilter::Unset,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, SubtitlesFilter::RequireTrue)
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most views first
    #[default]
    Popularity,
    /// Shortest first
    Duration,
    /// Catalog order (the catalog is kept most-recent-first)
    Recent,
    /// Title, byte order
    TitleAlphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::Duration,
        SortKey::Recent,
        SortKey::TitleAlphabetical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Popularity",
            SortKey::Duration => "Duration",
            SortKey::Recent => "Recent",
            SortKey::TitleAlphabetical => "Title A-Z",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Duration => "duration",
            SortKey::Recent => "recent",
            SortKey::TitleAlphabetical => "title",
        }
    }

    /// Parses either the panel label or the short name, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| {
            k.label().eq_ignore_ascii_case(label) || k.as_str().eq_ignore_ascii_case(label)
        })
    }
}

/// A filter/sort request against a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Free text, matched case-insensitively against title, creator and description
    pub search_text: String,
    pub topics: Selection<Topic>,
    pub languages: Selection<Language>,
    pub duration: DurationBucket,
    pub subtitles: SubtitlesFilter,
    pub sort: SortKey,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.insert(topic);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.insert(language);
        self
    }

    pub fn with_duration(mut self, duration: DurationBucket) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_subtitles_required(mut self) -> Self {
        self.subtitles = SubtitlesFilter::RequireTrue;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn toggle_topic(mut self, topic: Topic) -> Self {
        self.topics.toggle(topic);
        self
    }

    pub fn toggle_language(mut self, language: Language) -> Self {
        self.languages.toggle(language);
        self
    }

    pub fn toggle_subtitles(mut self) -> Self {
        self.subtitles = self.subtitles.toggled();
        self
    }

    /// Resets every filter and the sort order
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of active filters, as shown on the filter panel badge.
    ///
    /// Search text and sort order are not filters and do not count.
    pub fn active_filter_count(&self) -> usize {
        self.topics.len()
            + self.languages.len()
            + usize::from(self.duration != DurationBucket::Any)
            + usize::from(self.subtitles.is_required())
    }
}
