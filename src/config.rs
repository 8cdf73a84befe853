//! Build configuration.
//!
//! Settings are gathered from `chapbook.toml` and then overridden by command
//! line flags (which themselves fall back to environment variables). The
//! merged `Settings` are validated once into a `Config` that is passed
//! explicitly to the rest of the build.

use crate::cli::RenderArgs;
use crate::error::BuildError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw, possibly incomplete settings as they appear in `chapbook.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file. A missing file yields empty settings.
    pub fn load(path: &Path) -> Result<Settings> {
        if !path.exists() {
            log::debug!("no config file at {}, using flags only", path.display());
            return Ok(Settings::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to load {} contents", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))
    }

    /// Apply command line (and environment) values on top of these settings.
    pub fn overlay(self, args: &RenderArgs) -> Settings {
        Settings {
            source_url: args.source_url.clone().or(self.source_url),
            output_file_name: args.output_file_name.clone().or(self.output_file_name),
            book_title: args.book_title.clone().or(self.book_title),
            book_author: args.book_author.clone().or(self.book_author),
            book_description: args.book_description.clone().or(self.book_description),
            language: args.language.clone().or(self.language),
            results_dir: args.results_dir.clone().or(self.results_dir),
            cover_dir: args.cover_dir.clone().or(self.cover_dir),
            dry_run: if args.dry_run {
                Some(true)
            } else {
                self.dry_run
            },
        }
    }

    /// Check that every required value is present, reporting all the missing
    /// ones together.
    pub fn validate(self) -> Result<Config, BuildError> {
        let mut missing = Vec::new();
        let source_url = required(self.source_url, "sourceUrl", &mut missing);
        let output_file_name = required(self.output_file_name, "outputFileName", &mut missing);
        let book_title = required(self.book_title, "bookTitle", &mut missing);
        let book_author = required(self.book_author, "bookAuthor", &mut missing);
        let book_description = required(self.book_description, "bookDescription", &mut missing);

        match (
            source_url,
            output_file_name,
            book_title,
            book_author,
            book_description,
        ) {
            (
                Some(source_url),
                Some(output_file_name),
                Some(book_title),
                Some(book_author),
                Some(book_description),
            ) => Ok(Config {
                output_stem: slug(&output_file_name).ok_or_else(|| {
                    BuildError::InvalidConfiguration {
                        name: "outputFileName",
                        reason: format!("`{output_file_name}` does not name a file"),
                    }
                })?,
                source_url,
                output_file_name,
                book_title,
                book_author,
                book_description,
                language: self
                    .language
                    .filter(|l| !l.trim().is_empty())
                    .unwrap_or_else(|| "en".to_string()),
                results_dir: self.results_dir.unwrap_or_else(|| PathBuf::from("results")),
                cover_dir: self.cover_dir.unwrap_or_else(|| PathBuf::from(".")),
                dry_run: self.dry_run.unwrap_or(false),
            }),
            _ => Err(BuildError::ConfigurationMissing(missing)),
        }
    }
}

fn required(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => {
            missing.push(name);
            None
        }
    }
}

/// Validated configuration for a single build.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    pub output_file_name: String,
    pub book_title: String,
    pub book_author: String,
    pub book_description: String,
    pub language: String,
    pub results_dir: PathBuf,
    pub cover_dir: PathBuf,
    pub dry_run: bool,
    /// File name of the EPUB without its extension, see [`slug`]
    pub output_stem: String,
}

impl Config {
    /// Where the finished EPUB goes. Always directly inside `results_dir`.
    pub fn output_path(&self) -> PathBuf {
        self.results_dir.join(format!("{}.epub", self.output_stem))
    }
}

/// Turn a configured output name into a single path component.
///
/// Any `.epub` suffix is dropped, then runs of whitespace and path
/// separators collapse into single hyphens. Names that end up empty or
/// starting with `.` (hidden files, `..`) are rejected.
pub fn slug(name: &str) -> Option<String> {
    let name = name.trim();
    let name = match name.len().checked_sub(5) {
        Some(i) if name.is_char_boundary(i) && name[i..].eq_ignore_ascii_case(".epub") => {
            &name[..i]
        }
        _ => name,
    };
    let slug = name
        .split(|c: char| c.is_whitespace() || c.is_control() || c == '/' || c == '\\')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    match slug.chars().next() {
        Some('.') | None => None,
        Some(_) => Some(slug),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn complete() -> Settings {
        Settings {
            source_url: Some("https://example.com/chapters.json".to_string()),
            output_file_name: Some("My Book".to_string()),
            book_title: Some("T".to_string()),
            book_author: Some("A".to_string()),
            book_description: Some("D".to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn complete_settings_validate_with_defaults() {
        let config = complete().validate().expect("settings are complete");
        assert_eq!(config.language, "en");
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert_eq!(config.cover_dir, PathBuf::from("."));
        assert!(!config.dry_run);
        assert_eq!(config.output_path(), PathBuf::from("results/My-Book.epub"));
    }

    #[test]
    fn missing_author_is_named() {
        let settings = Settings {
            book_author: None,
            ..complete()
        };
        match settings.validate() {
            Err(BuildError::ConfigurationMissing(names)) => assert_eq!(names, vec!["bookAuthor"]),
            other => panic!("expected missing configuration, got {other:?}"),
        }
    }

    #[test]
    fn every_missing_field_is_reported_at_once() {
        let settings = Settings {
            source_url: Some("   ".to_string()),
            ..Settings::default()
        };
        match settings.validate() {
            Err(BuildError::ConfigurationMissing(names)) => assert_eq!(
                names,
                vec![
                    "sourceUrl",
                    "outputFileName",
                    "bookTitle",
                    "bookAuthor",
                    "bookDescription"
                ]
            ),
            other => panic!("expected missing configuration, got {other:?}"),
        }
    }

    #[test]
    fn flags_override_file_values() {
        let args = RenderArgs {
            book_title: Some("From Flags".to_string()),
            dry_run: true,
            ..RenderArgs::default()
        };
        let merged = complete().overlay(&args);
        assert_eq!(merged.book_title.as_deref(), Some("From Flags"));
        assert_eq!(merged.book_author.as_deref(), Some("A"));
        assert_eq!(merged.dry_run, Some(true));
    }

    #[test]
    fn settings_parse_from_camel_case_toml() {
        let settings: Settings = toml::from_str(
            r#"
sourceUrl = "chapters.json"
outputFileName = "out"
bookTitle = "T"
bookAuthor = "A"
bookDescription = "D"
resultsDir = "build"
dryRun = true
"#,
        )
        .expect("can parse settings");
        let config = settings.validate().expect("settings are complete");
        assert_eq!(config.output_path(), PathBuf::from("build/out.epub"));
        assert!(config.dry_run);
    }

    #[test]
    fn missing_config_file_is_empty_settings() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let settings = Settings::load(&dir.path().join("chapbook.toml")).expect("can load");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn slug_replaces_whitespace() {
        assert_eq!(slug("  The  Long\tRoad ").as_deref(), Some("The-Long-Road"));
        assert_eq!(slug("already.epub").as_deref(), Some("already"));
        assert_eq!(slug("Book One.EPUB").as_deref(), Some("Book-One"));
        assert_eq!(slug("plain").as_deref(), Some("plain"));
        assert_eq!(slug("v1.2 final").as_deref(), Some("v1.2-final"));
    }

    #[test]
    fn slug_never_leaves_the_results_dir() {
        assert_eq!(slug("nested/dir/book").as_deref(), Some("nested-dir-book"));
        assert_eq!(slug(r"win\path / book").as_deref(), Some("win-path-book"));
        assert_eq!(slug("../../escaped"), None);
        assert_eq!(slug(".epub"), None);
        assert_eq!(slug(".hidden"), None);
        assert_eq!(slug(" / "), None);
    }

    #[test]
    fn unusable_output_names_are_rejected() {
        for name in ["../../escaped", ".epub", "///"] {
            let settings = Settings {
                output_file_name: Some(name.to_string()),
                ..complete()
            };
            match settings.validate() {
                Err(BuildError::InvalidConfiguration { name, .. }) => {
                    assert_eq!(name, "outputFileName")
                }
                other => panic!("expected invalid configuration, got {other:?}"),
            }
        }

        let settings = Settings {
            output_file_name: Some("nested/dir/book".to_string()),
            ..complete()
        };
        let config = settings.validate().expect("name slugs to one component");
        assert_eq!(config.output_path(), PathBuf::from("results/nested-dir-book.epub"));
    }
}
