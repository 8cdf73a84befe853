use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates a chapbook.toml config file
    Config,
    /// Fetches the chapter list and packages it as an EPUB
    Render(RenderArgs),
}

/// Every setting here overrides the matching key in the config file.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Path to the config file
    #[arg(long, default_value = "chapbook.toml")]
    pub config: PathBuf,

    /// URL (or local path) of the chapter list JSON
    #[arg(long, env = "SOURCE_URL")]
    pub source_url: Option<String>,

    /// Name of the produced book; whitespace becomes hyphens
    #[arg(long, env = "OUTPUT_FILE_NAME")]
    pub output_file_name: Option<String>,

    #[arg(long, env = "BOOK_TITLE")]
    pub book_title: Option<String>,

    #[arg(long, env = "BOOK_AUTHOR")]
    pub book_author: Option<String>,

    #[arg(long, env = "BOOK_DESCRIPTION")]
    pub book_description: Option<String>,

    /// BCP 47 language code of the book
    #[arg(long, env = "BOOK_LANGUAGE")]
    pub language: Option<String>,

    /// Directory the EPUB is written into
    #[arg(long, env = "RESULTS_DIR")]
    pub results_dir: Option<PathBuf>,

    /// Directory searched for cover.jpg, cover.jpeg or cover.png
    #[arg(long, env = "COVER_DIR")]
    pub cover_dir: Option<PathBuf>,

    /// Validate and render without writing the EPUB
    #[arg(long, env = "DRY_RUN")]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
