//! EPUB 3 navigation document.
//!
//! A `nav` of type `toc` with one list item per chapter, in spine order,
//! linking to the file recorded for that chapter.

use super::chapter::ChapterRecord;
use crate::sinks::epub::markup::Markup;
use crate::sinks::epub::styles::STYLESHEET_HREF;
use crate::sinks::epub::xhtml::XhtmlDocument;

pub const NAV_HREF: &str = "nav.xhtml";
const NAV_HEADING: &str = "Table of Contents";

/// Render the navigation document for the given chapters.
pub fn render(chapters: &[ChapterRecord], language: &str) -> String {
    let mut m = Markup::new();
    m.open("nav", &[("epub:type", "toc"), ("id", "toc")]).newline();
    m.element("h1", &[], NAV_HEADING).newline();
    m.open("ol", &[]).newline();
    for chapter in chapters {
        m.open("li", &[])
            .element("a", &[("href", chapter.file_name.as_str())], &chapter.title)
            .close()
            .newline();
    }
    m.close().newline();
    m.close();

    XhtmlDocument::new(NAV_HEADING, language)
        .with_ops_namespace()
        .linked_stylesheet(STYLESHEET_HREF)
        .render(&m.finish())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::source::ChapterInput;

    #[test]
    fn lists_chapters_in_order() {
        let chapters = ChapterRecord::from_inputs(&[
            ChapterInput::new("Ch1", "a"),
            ChapterInput::new("Ch2", "b"),
        ]);
        let nav = render(&chapters, "en");

        assert!(nav.contains(r#"<nav epub:type="toc" id="toc">"#));
        let first = nav
            .find(r#"<li><a href="chapter-0001.xhtml">Ch1</a></li>"#)
            .expect("lists Ch1");
        let second = nav
            .find(r#"<li><a href="chapter-0002.xhtml">Ch2</a></li>"#)
            .expect("lists Ch2");
        assert!(first < second);
    }

    #[test]
    fn titles_are_escaped() {
        let chapters = ChapterRecord::from_inputs(&[ChapterInput::new("Q&A", "a")]);
        assert!(render(&chapters, "en").contains(">Q&amp;A</a>"));
    }
}
