//! Display forms of record fields, as printed on a podcast card

use serde::Serialize;

use super::types::Record;

/// Formats minutes as `"45m"` or `"1h 5m"`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Formats a view count as `"1.2M"`, `"890.0K"` or the plain number.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

/// A record plus its display strings, for command output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub duration_display: String,
    pub views_display: String,
}

impl<'a> RecordView<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self {
            record,
            duration_display: format_duration(record.duration_minutes),
            views_display: format_views(record.views),
        }
    }
}
