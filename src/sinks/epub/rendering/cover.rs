//! Cover page rendering for EPUB.
//!
//! Only produced when a cover image was found. The page is a single image
//! with its styling inlined.

use crate::book::{BookMetadata, CoverAsset};
use crate::sinks::epub::markup::Markup;
use crate::sinks::epub::styles;
use crate::sinks::epub::xhtml::XhtmlDocument;

pub const COVER_PAGE_HREF: &str = "cover.xhtml";

/// Render the cover page as XHTML.
pub fn render(cover: &CoverAsset, metadata: &BookMetadata) -> String {
    let mut m = Markup::new();
    m.open("div", &[("class", "cover")])
        .empty(
            "img",
            &[("src", cover.file_name.as_str()), ("alt", metadata.title.as_str())],
        )
        .close();

    XhtmlDocument::new(&metadata.title, &metadata.language)
        .inline_style(styles::cover_style())
        .render(&m.finish())
}
