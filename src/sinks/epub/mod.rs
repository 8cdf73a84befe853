//! EPUB generation for chapter lists.
//!
//! This module converts an ordered list of chapters into an EPUB 3 book with:
//! - One XHTML document per chapter, sharing a single stylesheet
//! - An optional cover image and cover page
//! - A navigation document and a legacy NCX table of contents
//! - An OPF package document whose manifest matches the archive exactly
//!
//! All markup is produced through the `markup` builder so that every piece
//! of chapter text is escaped on the way in.

mod archive;
mod config;
mod markup;
mod package;
mod rendering;
mod styles;
mod text;
mod xhtml;

pub use config::EPUB;
