use crate::error::BuildError;
use crate::source::{parse_chapters, ChapterInput, ChapterProvider};
use std::path::PathBuf;

/// A chapter list stored on disk, addressed by path or `file://` URL.
#[derive(Debug)]
pub struct LocalChapterList {
    pub path: PathBuf,
}

impl LocalChapterList {
    pub fn from_url(url: &str) -> LocalChapterList {
        let path = url.strip_prefix("file://").unwrap_or(url);
        LocalChapterList {
            path: PathBuf::from(path),
        }
    }
}

impl ChapterProvider for LocalChapterList {
    fn fetch(&self) -> Result<Vec<ChapterInput>, BuildError> {
        log::info!("reading chapter list from {}", self.path.display());
        let source = self.path.display().to_string();
        let body = std::fs::read_to_string(&self.path).map_err(|e| BuildError::fetch(&source, e))?;
        parse_chapters(&source, &body)
    }
}
