//! Built-in sample catalog
//!
//! The eight launch entries, in publication order (most recent first).

use super::catalog::Catalog;
use super::errors::CatalogResult;
use super::types::{Language, Record, Topic};

const SAMPLE_MEDIA_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Returns the sample records in catalog order.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(
            "1",
            "The Future of AI and Machine Learning",
            "Tech Innovators",
            Topic::Technology,
            Language::English,
            45,
        )
        .with_subtitles(true)
        .with_views(1_200_000)
        .with_description(
            "Exploring the latest developments in artificial intelligence and machine \
             learning technologies that are shaping our future.",
        ),
        Record::new(
            "2",
            "Mindfulness and Mental Health",
            "Wellness Guide",
            Topic::HealthWellness,
            Language::English,
            30,
        )
        .with_subtitles(true)
        .with_views(850_000)
        .with_description(
            "Learn practical mindfulness techniques to improve your mental health and \
             overall well-being in daily life.",
        ),
        Record::new(
            "3",
            "Startup Success Stories",
            "Business Leaders",
            Topic::Business,
            Language::English,
            60,
        )
        .with_subtitles(false)
        .with_views(650_000)
        .with_description(
            "Inspiring stories from successful entrepreneurs who built their companies \
             from scratch to billion-dollar valuations.",
        ),
        Record::new(
            "4",
            "La Ciencia del Espacio",
            "Explorador Cósmico",
            Topic::Science,
            Language::Spanish,
            40,
        )
        .with_subtitles(true)
        .with_views(420_000)
        .with_description(
            "Un fascinante viaje a través del cosmos, explorando los misterios del \
             universo y los últimos descubrimientos espaciales.",
        ),
        Record::new(
            "5",
            "Modern Education Revolution",
            "EduTech Pioneers",
            Topic::Education,
            Language::English,
            35,
        )
        .with_subtitles(true)
        .with_views(980_000)
        .with_description(
            "How technology is transforming education and creating new opportunities \
             for learners worldwide.",
        ),
        Record::new(
            "6",
            "Comedy Hour: Life Stories",
            "Laugh Masters",
            Topic::Entertainment,
            Language::English,
            50,
        )
        .with_subtitles(false)
        .with_views(1_500_000)
        .with_description(
            "Hilarious personal stories and observations about modern life that will \
             leave you in stitches.",
        ),
        Record::new(
            "7",
            "Sports Analytics Deep Dive",
            "Stats Guru",
            Topic::Sports,
            Language::English,
            45,
        )
        .with_subtitles(true)
        .with_views(720_000)
        .with_description(
            "Advanced analytics and statistics that are revolutionizing how we \
             understand and enjoy sports.",
        ),
        Record::new(
            "8",
            "Actualités Tech Françaises",
            "Tech France",
            Topic::NewsPolitics,
            Language::French,
            25,
        )
        .with_subtitles(true)
        .with_views(340_000)
        .with_description(
            "Les dernières nouvelles technologiques en France et leur impact sur la \
             société française.",
        ),
    ]
    .into_iter()
    .map(|r| r.with_media_url(SAMPLE_MEDIA_URL))
    .collect()
}

/// Returns the sample catalog, validated like any loaded catalog.
pub fn sample_catalog() -> CatalogResult<Catalog> {
    Catalog::from_records(sample_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogErrorCode;

    #[test]
    fn test_sample_catalog_is_complete() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 8);

        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_sample_validation_failure_is_reported() {
        let mut records = sample_records();
        records.push(records[0].clone());

        let err = Catalog::from_records(records).unwrap_err();
        assert_eq!(err.code(), CatalogErrorCode::DuplicateId);
    }

    #[test]
    fn test_sample_durations() {
        let catalog = sample_catalog().unwrap();
        let min = catalog.iter().map(|r| r.duration_minutes).min();
        let max = catalog.iter().map(|r| r.duration_minutes).max();
        assert_eq!(min, Some(25));
        assert_eq!(max, Some(60));
    }
}
