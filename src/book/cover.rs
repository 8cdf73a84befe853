use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Candidate cover files, in order of preference.
const COVER_CANDIDATES: &[(&str, &str)] = &[
    ("cover.jpg", "image/jpeg"),
    ("cover.jpeg", "image/jpeg"),
    ("cover.png", "image/png"),
];

/// A cover image found next to the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverAsset {
    /// Name of the image inside the package
    pub file_name: String,
    pub media_type: &'static str,
    pub path: PathBuf,
}

impl CoverAsset {
    /// Look for a cover image in `dir`. The first candidate present wins; no
    /// cover at all is perfectly fine.
    pub fn detect(dir: &Path) -> Option<CoverAsset> {
        let cover = COVER_CANDIDATES.iter().find_map(|(name, media_type)| {
            let path = dir.join(name);
            path.is_file().then(|| CoverAsset {
                file_name: name.to_string(),
                media_type: *media_type,
                path,
            })
        });
        match &cover {
            Some(c) => log::info!("using cover image {}", c.path.display()),
            None => log::debug!("no cover image in {}", dir.display()),
        }
        cover
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path)
            .with_context(|| format!("Failed to read cover image: {}", self.path.display()))
    }
}
