//! Chapter rendering.
//!
//! Each input chapter becomes one XHTML file named after its position in the
//! list. The record built here is the only place file names are decided; the
//! navigation documents and the package manifest all read them back from it.

use crate::sinks::epub::markup::{Fragment, Markup};
use crate::sinks::epub::styles::STYLESHEET_HREF;
use crate::sinks::epub::text::split_paragraphs;
use crate::sinks::epub::xhtml::XhtmlDocument;
use crate::source::ChapterInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    /// 1-based position in the input list
    pub ordinal: usize,
    /// Manifest id, `c<ordinal>`
    pub id: String,
    pub file_name: String,
    pub title: String,
    pub body: Fragment,
}

impl ChapterRecord {
    pub fn from_input(ordinal: usize, input: &ChapterInput) -> ChapterRecord {
        let title = input.title.trim().to_string();

        let mut m = Markup::new();
        m.element("h1", &[], &title).newline();
        for paragraph in split_paragraphs(&input.content) {
            m.open("p", &[]);
            for (i, line) in paragraph.lines().enumerate() {
                if i > 0 {
                    m.empty("br", &[]);
                }
                m.text(line.trim());
            }
            m.close().newline();
        }

        ChapterRecord {
            ordinal,
            id: format!("c{ordinal}"),
            file_name: format!("chapter-{ordinal:04}.xhtml"),
            title,
            body: m.finish(),
        }
    }

    /// Build records for a whole chapter list, numbering from 1.
    pub fn from_inputs(inputs: &[ChapterInput]) -> Vec<ChapterRecord> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| ChapterRecord::from_input(i + 1, input))
            .collect()
    }

    /// The complete XHTML document for this chapter.
    pub fn render(&self, language: &str) -> String {
        XhtmlDocument::new(&self.title, language)
            .linked_stylesheet(STYLESHEET_HREF)
            .render(&self.body)
    }
}
