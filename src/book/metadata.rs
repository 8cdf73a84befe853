use crate::config::Config;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use uuid::Uuid;

/// Descriptive data about the book, fixed for the duration of one build.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct BookMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    #[builder(default = "\"en\".to_string()")]
    pub language: String,
    /// Fresh for every build, never reused.
    #[builder(default = "Uuid::new_v4()")]
    pub unique_id: Uuid,
    #[builder(default = "Utc::now()")]
    pub modified: DateTime<Utc>,
}

impl BookMetadataBuilder {
    fn validate(&self) -> Result<(), String> {
        let empty: Vec<&str> = [
            ("title", &self.title),
            ("author", &self.author),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| matches!(value, Some(v) if v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(format!("book metadata has empty {}", empty.join(", ")))
        }
    }
}

impl BookMetadata {
    pub fn for_config(config: &Config) -> Result<BookMetadata> {
        BookMetadataBuilder::default()
            .title(config.book_title.as_str())
            .author(config.book_author.as_str())
            .description(config.book_description.as_str())
            .language(config.language.as_str())
            .build()
            .with_context(|| "Failed to assemble book metadata")
    }

    /// The package's unique identifier, as a URN.
    pub fn identifier(&self) -> String {
        format!("urn:uuid:{}", self.unique_id)
    }

    /// The `dcterms:modified` value, second precision in UTC.
    pub fn modified_timestamp(&self) -> String {
        self.modified.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}
