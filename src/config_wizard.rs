//! Interactive configuration wizard for creating `chapbook.toml`.
//!
//! Prompts for the chapter list location and the book metadata, then writes
//! the answers in the same camelCase layout `render` reads back.

use crate::config::Settings;
use anyhow::{anyhow, Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "chapbook.toml";

/// Run the interactive configuration wizard.
pub fn run() -> Result<()> {
    let theme = ColorfulTheme::default();
    let path = Path::new(CONFIG_FILE);

    if path.exists()
        && !Confirm::with_theme(&theme)
            .with_prompt(format!("{CONFIG_FILE} already exists, overwrite it?"))
            .default(false)
            .interact()?
    {
        return Err(anyhow!("Refusing to overwrite {CONFIG_FILE}"));
    }

    let source_url: String = Input::with_theme(&theme)
        .with_prompt("Chapter list URL or path")
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain chapter list location")?;
    let book_title: String = Input::with_theme(&theme)
        .with_prompt("Book title")
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain title")?;
    let book_author: String = Input::with_theme(&theme)
        .with_prompt("Author")
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain author")?;
    let book_description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(false)
        .interact_text()
        .with_context(|| "Failed to obtain description")?;
    let output_file_name: String = Input::with_theme(&theme)
        .with_prompt("Output file name")
        .default(book_title.clone())
        .interact_text()
        .with_context(|| "Failed to obtain output file name")?;
    let language: String = Input::with_theme(&theme)
        .with_prompt("Language (BCP 47)")
        .default("en".to_string())
        .interact_text()
        .with_context(|| "Failed to obtain language")?;
    let results_dir: String = Input::with_theme(&theme)
        .with_prompt("Results directory")
        .default("results".to_string())
        .interact_text()
        .with_context(|| "Failed to obtain results directory")?;

    let settings = Settings {
        source_url: Some(source_url),
        output_file_name: Some(output_file_name),
        book_title: Some(book_title),
        book_author: Some(book_author),
        book_description: Some(book_description),
        language: Some(language),
        results_dir: Some(PathBuf::from(results_dir)),
        cover_dir: None,
        dry_run: None,
    };
    write_settings(path, &settings)?;

    println!("Configuration written to {CONFIG_FILE}");
    Ok(())
}

fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    let contents =
        toml::to_string_pretty(settings).with_context(|| "Failed to serialize configuration")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn written_settings_load_back() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        let settings = Settings {
            source_url: Some("https://example.com/chapters.json".to_string()),
            output_file_name: Some("My Book".to_string()),
            book_title: Some("My Book".to_string()),
            book_author: Some("Someone".to_string()),
            book_description: Some("A book.".to_string()),
            language: Some("en".to_string()),
            results_dir: Some(PathBuf::from("results")),
            cover_dir: None,
            dry_run: None,
        };

        write_settings(&path, &settings).expect("can write settings");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("sourceUrl = "));
        assert!(!contents.contains("dryRun"));
        assert_eq!(Settings::load(&path).expect("can load settings"), settings);
    }
}
