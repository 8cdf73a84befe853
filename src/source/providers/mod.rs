mod http;
pub use http::*;

mod local_file;
pub use local_file::*;

use super::ChapterInput;
use crate::error::BuildError;

/// Somewhere an ordered chapter list can be retrieved from.
pub trait ChapterProvider {
    fn fetch(&self) -> Result<Vec<ChapterInput>, BuildError>;
}

/// Pick a provider for the configured source: `http(s)://` URLs are fetched
/// over the network, anything else is read from the local filesystem.
pub fn provider_for(source_url: &str) -> Box<dyn ChapterProvider> {
    let lower = source_url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpChapterList::new(source_url))
    } else {
        Box::new(LocalChapterList::from_url(source_url))
    }
}
