//! EPUB output settings.

use crate::config::Config;
use std::path::PathBuf;

/// EPUB output configuration.
#[derive(Debug, Clone)]
#[allow(clippy::upper_case_acronyms)]
pub struct EPUB {
    /// Output EPUB file path
    pub outfile: PathBuf,
    /// Render everything but skip serializing and writing the archive
    pub dry_run: bool,
}

impl EPUB {
    pub fn from_config(config: &Config) -> EPUB {
        EPUB {
            outfile: config.output_path(),
            dry_run: config.dry_run,
        }
    }
}

/// Statistics from rendering an EPUB, used for user feedback.
pub struct RenderStats {
    /// Number of XHTML documents in the book, navigation included
    pub document_count: usize,
    /// Size of the written archive; `None` on a dry run
    pub archive_bytes: Option<usize>,
}
