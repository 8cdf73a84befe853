use anyhow::{Context, Result};
use book::{BookMetadata, CoverAsset};
use cli::{Cli, RenderArgs};
use config::Settings;
use indicatif::{ProgressBar, ProgressStyle};
use sinks::EPUB;
use std::process::ExitCode;

mod book;
mod cli;
mod config;
mod config_wizard;
mod error;
mod sinks;
mod source;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Config => config_wizard::run(),
        cli::Commands::Render(args) => render(args),
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let config = Settings::load(&args.config)?.overlay(args).validate()?;
    log::debug!("resolved configuration: {config:?}");

    println!("Fetching chapters...");
    let chapters = source::provider_for(&config.source_url).fetch()?;
    println!("  {} chapters", chapters.len());

    let metadata = BookMetadata::for_config(&config)?;
    let cover = CoverAsset::detect(&config.cover_dir);
    let epub = EPUB::from_config(&config);

    let progress = ProgressBar::new(chapters.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("can parse progress style")
            .progress_chars("#>-"),
    );

    let stats = epub
        .render(&metadata, &chapters, cover.as_ref(), &progress)
        .with_context(|| "Failed to render EPUB")?;

    println!();
    match stats.archive_bytes {
        Some(bytes) => {
            println!("  EPUB:      {}", epub.outfile.display());
            println!("  Size:      {bytes} bytes");
        }
        None => println!(
            "  Dry run, would write: {}",
            console::style(epub.outfile.display()).bold()
        ),
    }
    println!("  Documents: {}", stats.document_count);
    if let Some(cover) = &cover {
        println!("  Cover:     {}", cover.path.display());
    }

    Ok(())
}
