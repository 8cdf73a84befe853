use crate::error::BuildError;
use crate::source::{parse_chapters, ChapterInput, ChapterProvider};

/// A chapter list served over HTTP(S).
#[derive(Debug)]
pub struct HttpChapterList {
    pub url: String,
}

impl HttpChapterList {
    pub fn new<S: ToString>(url: S) -> HttpChapterList {
        HttpChapterList {
            url: url.to_string(),
        }
    }
}

impl ChapterProvider for HttpChapterList {
    fn fetch(&self) -> Result<Vec<ChapterInput>, BuildError> {
        log::info!("fetching chapter list from {}", self.url);
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BuildError::fetch(&self.url, e))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| BuildError::fetch(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BuildError::fetch(
                &self.url,
                format!("server responded with HTTP status {status}"),
            ));
        }

        let body = response
            .text()
            .map_err(|e| BuildError::fetch(&self.url, format!("failed to read body: {e}")))?;
        log::debug!("received {} bytes from {}", body.len(), self.url);

        parse_chapters(&self.url, &body)
    }
}
