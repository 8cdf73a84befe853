//! EPUB rendering orchestration.
//!
//! Turns the chapter list into per-chapter records, renders every document
//! from those records, registers them with the package builder in reading
//! order, and finally zips the result. Chapter file names are decided once,
//! in `ChapterRecord`, and every other document reads them from there.

mod chapter;
mod cover;
mod nav;
mod ncx;

pub use chapter::ChapterRecord;

use super::archive;
use super::config::{RenderStats, EPUB};
use super::package::{
    ManifestItem, Package, PackageBuilder, CSS_MEDIA_TYPE, NCX_MEDIA_TYPE, XHTML_MEDIA_TYPE,
};
use super::styles::{self, STYLESHEET_HREF};
use crate::book::{BookMetadata, CoverAsset};
use crate::source::ChapterInput;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use uuid::Uuid;

const STYLESHEET_ID: &str = "css";
const COVER_IMAGE_ID: &str = "cover-image";
const COVER_PAGE_ID: &str = "cover";
const NAV_ID: &str = "nav";
const NCX_ID: &str = "ncx";

impl EPUB {
    /// Render the chapters to an EPUB file.
    ///
    /// Returns statistics about the generated EPUB. On a dry run the package
    /// is fully assembled but never serialized or written.
    pub fn render(
        &self,
        metadata: &BookMetadata,
        chapters: &[ChapterInput],
        cover: Option<&CoverAsset>,
        progress: &ProgressBar,
    ) -> Result<RenderStats> {
        progress.set_message("Rendering chapters...");
        let records = ChapterRecord::from_inputs(chapters);
        progress.inc(records.len() as u64);

        let package = assemble(metadata, &records, cover)?;
        let document_count = package
            .members
            .iter()
            .filter(|m| m.item.media_type == XHTML_MEDIA_TYPE)
            .count();

        if self.dry_run {
            progress.finish_with_message("Dry run, nothing written");
            return Ok(RenderStats {
                document_count,
                archive_bytes: None,
            });
        }

        progress.set_message("Writing EPUB...");
        let bytes = archive::serialize(&package)?;

        if let Some(dir) = self.outfile.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        std::fs::write(&self.outfile, &bytes)
            .with_context(|| format!("Failed to write EPUB file: {}", self.outfile.display()))?;
        log::info!("wrote {} bytes to {}", bytes.len(), self.outfile.display());

        progress.finish_with_message("EPUB generated");

        Ok(RenderStats {
            document_count,
            archive_bytes: Some(bytes.len()),
        })
    }
}

/// Build the complete package for a book: stylesheet, optional cover, the
/// chapters in order, and both tables of contents.
pub fn assemble(
    metadata: &BookMetadata,
    chapters: &[ChapterRecord],
    cover: Option<&CoverAsset>,
) -> Result<Package> {
    let mut builder = PackageBuilder::new(metadata);

    builder.add(
        ManifestItem::new(STYLESHEET_ID, STYLESHEET_HREF, CSS_MEDIA_TYPE),
        styles::stylesheet(),
    )?;

    if let Some(cover) = cover {
        builder
            .add(
                ManifestItem::new(COVER_IMAGE_ID, &cover.file_name, cover.media_type)
                    .with_properties("cover-image"),
                cover.read()?,
            )?
            .set_cover_image(COVER_IMAGE_ID)?;
        builder
            .add(
                ManifestItem::new(COVER_PAGE_ID, cover::COVER_PAGE_HREF, XHTML_MEDIA_TYPE),
                cover::render(cover, metadata),
            )?
            .add_to_spine(COVER_PAGE_ID, true)?
            .add_guide_reference("cover", "Cover", cover::COVER_PAGE_HREF)?;
    }

    for chapter in chapters {
        builder
            .add(
                ManifestItem::new(&chapter.id, &chapter.file_name, XHTML_MEDIA_TYPE),
                chapter.render(&metadata.language),
            )
            .with_context(|| format!("Failed to add chapter {}", chapter.ordinal))?
            .add_to_spine(&chapter.id, true)?;
    }

    builder.add(
        ManifestItem::new(NAV_ID, nav::NAV_HREF, XHTML_MEDIA_TYPE).with_properties("nav"),
        nav::render(chapters, &metadata.language),
    )?;
    builder
        .add(
            ManifestItem::new(NCX_ID, ncx::NCX_HREF, NCX_MEDIA_TYPE),
            ncx::render(chapters, metadata, &Uuid::new_v4()),
        )?
        .set_toc(NCX_ID)?;

    Ok(builder.finish())
}
