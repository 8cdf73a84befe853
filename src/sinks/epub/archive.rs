//! ZIP container serialization.
//!
//! Member order is fixed: `mimetype` (stored, never compressed), then the
//! container descriptor, then the package document, then every content file
//! in the order it was registered. Everything after `mimetype` is deflated.

use super::package::{Package, OPF_PATH};
use anyhow::{Context, Result};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const MIMETYPE_PATH: &str = "mimetype";
pub const EPUB_MEDIA_TYPE: &str = "application/epub+zip";
pub const CONTAINER_PATH: &str = "META-INF/container.xml";

/// Serialize a finished package into an in-memory EPUB archive.
pub fn serialize(package: &Package) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(MIMETYPE_PATH, stored)
        .with_context(|| "Failed to start mimetype entry")?;
    zip.write_all(EPUB_MEDIA_TYPE.as_bytes())
        .with_context(|| "Failed to write mimetype entry")?;

    write_member(&mut zip, CONTAINER_PATH, container_xml().as_bytes(), deflated)?;
    write_member(&mut zip, OPF_PATH, package.opf.as_bytes(), deflated)?;
    for member in &package.members {
        write_member(&mut zip, &member.archive_path(), &member.data, deflated)?;
    }

    let cursor = zip
        .finish()
        .with_context(|| "Failed to finalize EPUB archive")?;
    Ok(cursor.into_inner())
}

fn write_member(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    path: &str,
    data: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(path, options)
        .with_context(|| format!("Failed to start archive entry {path}"))?;
    zip.write_all(data)
        .with_context(|| format!("Failed to write archive entry {path}"))?;
    Ok(())
}

/// `META-INF/container.xml`, naming the one package document.
fn container_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="{OPF_PATH}" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#
    )
}
