//! Legacy NCX table of contents, kept for EPUB 2 reading systems.
//!
//! The NCX carries its own identifier, generated per build and unrelated to
//! the package's unique identifier.

use super::chapter::ChapterRecord;
use crate::book::BookMetadata;
use crate::sinks::epub::markup::Markup;
use uuid::Uuid;

pub const NCX_HREF: &str = "toc.ncx";
const NCX_NAMESPACE: &str = "http://www.daisy.org/z3986/2005/ncx/";

/// Render the NCX for the given chapters.
pub fn render(chapters: &[ChapterRecord], metadata: &BookMetadata, uid: &Uuid) -> String {
    let uid = format!("urn:uuid:{uid}");

    let mut m = Markup::new();
    m.open(
        "ncx",
        &[
            ("xmlns", NCX_NAMESPACE),
            ("version", "2005-1"),
            ("xml:lang", metadata.language.as_str()),
        ],
    )
    .newline();

    m.open("head", &[]).newline();
    for (name, content) in [
        ("dtb:uid", uid.as_str()),
        ("dtb:depth", "1"),
        ("dtb:totalPageCount", "0"),
        ("dtb:maxPageNumber", "0"),
    ] {
        m.empty("meta", &[("name", name), ("content", content)])
            .newline();
    }
    m.close().newline();

    m.open("docTitle", &[])
        .element("text", &[], &metadata.title)
        .close()
        .newline();
    m.open("docAuthor", &[])
        .element("text", &[], &metadata.author)
        .close()
        .newline();

    m.open("navMap", &[]).newline();
    for chapter in chapters {
        let id = format!("navpoint-{}", chapter.ordinal);
        let play_order = chapter.ordinal.to_string();
        m.open("navPoint", &[("id", id.as_str()), ("playOrder", play_order.as_str())])
            .newline();
        m.open("navLabel", &[])
            .element("text", &[], &chapter.title)
            .close()
            .newline();
        m.empty("content", &[("src", chapter.file_name.as_str())]).newline();
        m.close().newline();
    }
    m.close().newline();
    m.close().newline();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
        m.finish()
    )
}
