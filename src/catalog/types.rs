//! Catalog record types
//!
//! Records are immutable once loaded. Topic and language are closed sets;
//! their display labels are the serialized form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Podcast topic (closed set of 8 categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Technology")]
    Technology,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
    #[serde(rename = "Business")]
    Business,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "News & Politics")]
    NewsPolitics,
    #[serde(rename = "Sports")]
    Sports,
    #[serde(rename = "Science")]
    Science,
}

impl Topic {
    /// All topics in filter panel order
    pub const ALL: [Topic; 8] = [
        Topic::Technology,
        Topic::HealthWellness,
        Topic::Business,
        Topic::Education,
        Topic::Entertainment,
        Topic::NewsPolitics,
        Topic::Sports,
        Topic::Science,
    ];

    /// Returns the display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Technology => "Technology",
            Topic::HealthWellness => "Health & Wellness",
            Topic::Business => "Business",
            Topic::Education => "Education",
            Topic::Entertainment => "Entertainment",
            Topic::NewsPolitics => "News & Politics",
            Topic::Sports => "Sports",
            Topic::Science => "Science",
        }
    }

    /// Parses a display label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spoken language of a podcast (closed set of 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single catalog entry.
///
/// `duration` and `youtubeUrl` are accepted on input so catalog files
/// exported from the web front end load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub description: String,
    pub topic: Topic,
    pub language: Language,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    pub has_subtitles: bool,
    pub views: u64,
    #[serde(alias = "youtubeUrl")]
    pub media_url: String,
}

impl Record {
    /// Creates a record with no description, no subtitles and zero views.
    ///
    /// Intended for programmatic catalogs; use the builder methods to fill
    /// in the remaining fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        creator: impl Into<String>,
        topic: Topic,
        language: Language,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            creator: creator.into(),
            description: String::new(),
            topic,
            language,
            duration_minutes,
            has_subtitles: false,
            views: 0,
            media_url: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_subtitles(mut self, has_subtitles: bool) -> Self {
        self.has_subtitles = has_subtitles;
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = media_url.into();
        self
    }

    /// Checks the fields serde cannot enforce.
    ///
    /// Returns a description of the first violation.
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".into());
        }
        if self.title.trim().is_empty() {
            return Err(format!("record '{}': title must not be empty", self.id));
        }
        if self.creator.trim().is_empty() {
            return Err(format!("record '{}': creator must not be empty", self.id));
        }
        if self.media_url.trim().is_empty() {
            return Err(format!("record '{}': mediaUrl must not be empty", self.id));
        }
        Ok(())
    }
}
