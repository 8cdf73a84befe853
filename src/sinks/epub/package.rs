//! The OPF package: manifest, spine and guide, plus the bytes behind them.
//!
//! Content files are registered together with their manifest entry, so the
//! set of archive members and the set of manifest items cannot drift apart.
//! Spine, guide, cover and toc references are checked against the manifest
//! as they are added.

use super::markup::Markup;
use crate::book::BookMetadata;
use anyhow::{bail, Result};

/// Directory inside the archive that holds the package and its content.
pub const CONTENT_DIR: &str = "OEBPS";
pub const OPF_PATH: &str = "OEBPS/content.opf";

pub const XHTML_MEDIA_TYPE: &str = "application/xhtml+xml";
pub const CSS_MEDIA_TYPE: &str = "text/css";
pub const NCX_MEDIA_TYPE: &str = "application/x-dtbncx+xml";

const OPF_NAMESPACE: &str = "http://www.idpf.org/2007/opf";
const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
const IDENTIFIER_ID: &str = "book-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestItem {
    pub id: String,
    /// Relative to the package document
    pub href: String,
    pub media_type: String,
    pub properties: Option<&'static str>,
}

impl ManifestItem {
    pub fn new<I: ToString, H: ToString, M: ToString>(id: I, href: H, media_type: M) -> Self {
        ManifestItem {
            id: id.to_string(),
            href: href.to_string(),
            media_type: media_type.to_string(),
            properties: None,
        }
    }

    pub fn with_properties(mut self, properties: &'static str) -> Self {
        self.properties = Some(properties);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpineItem {
    pub idref: String,
    pub linear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideReference {
    pub kind: &'static str,
    pub title: &'static str,
    pub href: String,
}

/// A content file and its manifest entry.
#[derive(Debug, Clone)]
pub struct Member {
    pub item: ManifestItem,
    pub data: Vec<u8>,
}

impl Member {
    /// Full path of the member inside the archive.
    pub fn archive_path(&self) -> String {
        format!("{}/{}", CONTENT_DIR, self.item.href)
    }
}

/// A finished package, ready to be zipped.
#[derive(Debug)]
pub struct Package {
    pub opf: String,
    pub members: Vec<Member>,
}

pub struct PackageBuilder<'a> {
    metadata: &'a BookMetadata,
    members: Vec<Member>,
    spine: Vec<SpineItem>,
    guide: Vec<GuideReference>,
    cover_image: Option<String>,
    toc: Option<String>,
}

impl<'a> PackageBuilder<'a> {
    pub fn new(metadata: &'a BookMetadata) -> PackageBuilder<'a> {
        PackageBuilder {
            metadata,
            members: Vec::new(),
            spine: Vec::new(),
            guide: Vec::new(),
            cover_image: None,
            toc: None,
        }
    }

    /// Register a content file. Ids and hrefs must be unique.
    pub fn add<D: Into<Vec<u8>>>(&mut self, item: ManifestItem, data: D) -> Result<&mut Self> {
        if let Some(existing) = self
            .members
            .iter()
            .find(|m| m.item.id == item.id || m.item.href == item.href)
        {
            bail!(
                "manifest item `{}` ({}) clashes with `{}` ({})",
                item.id,
                item.href,
                existing.item.id,
                existing.item.href
            );
        }
        log::debug!("adding {} as `{}`", item.href, item.id);
        self.members.push(Member {
            item,
            data: data.into(),
        });
        Ok(self)
    }

    /// Append a manifest item to the reading order.
    pub fn add_to_spine(&mut self, idref: &str, linear: bool) -> Result<&mut Self> {
        self.require(idref)?;
        if self.spine.iter().any(|s| s.idref == idref) {
            bail!("`{idref}` is already in the spine");
        }
        self.spine.push(SpineItem {
            idref: idref.to_string(),
            linear,
        });
        Ok(self)
    }

    pub fn add_guide_reference(
        &mut self,
        kind: &'static str,
        title: &'static str,
        href: &str,
    ) -> Result<&mut Self> {
        if !self.members.iter().any(|m| m.item.href == href) {
            bail!("guide reference to `{href}` which isn't in the manifest");
        }
        self.guide.push(GuideReference {
            kind,
            title,
            href: href.to_string(),
        });
        Ok(self)
    }

    /// Mark a manifest item as the cover image for EPUB 2 readers.
    pub fn set_cover_image(&mut self, id: &str) -> Result<&mut Self> {
        self.require(id)?;
        self.cover_image = Some(id.to_string());
        Ok(self)
    }

    /// Point the spine at the legacy NCX table of contents.
    pub fn set_toc(&mut self, id: &str) -> Result<&mut Self> {
        self.require(id)?;
        self.toc = Some(id.to_string());
        Ok(self)
    }

    #[cfg(test)]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[cfg(test)]
    pub fn spine(&self) -> &[SpineItem] {
        &self.spine
    }

    /// Render `content.opf`.
    pub fn package_document(&self) -> String {
        let metadata = self.metadata;
        let identifier = metadata.identifier();
        let modified = metadata.modified_timestamp();
        let generator = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

        let mut m = Markup::new();
        m.open(
            "package",
            &[
                ("xmlns", OPF_NAMESPACE),
                ("version", "3.0"),
                ("unique-identifier", IDENTIFIER_ID),
                ("xml:lang", metadata.language.as_str()),
            ],
        )
        .newline();

        m.open("metadata", &[("xmlns:dc", DC_NAMESPACE)]).newline();
        m.element("dc:identifier", &[("id", IDENTIFIER_ID)], &identifier)
            .newline();
        m.element("dc:title", &[], &metadata.title).newline();
        m.element("dc:creator", &[("id", "creator")], &metadata.author)
            .newline();
        m.element("dc:language", &[], &metadata.language).newline();
        m.element("dc:description", &[], &metadata.description)
            .newline();
        m.element("meta", &[("property", "dcterms:modified")], &modified)
            .newline();
        if let Some(cover) = &self.cover_image {
            m.empty("meta", &[("name", "cover"), ("content", cover.as_str())])
                .newline();
        }
        m.empty("meta", &[("name", "generator"), ("content", generator)])
            .newline();
        m.close().newline();

        m.open("manifest", &[]).newline();
        for member in &self.members {
            let item = &member.item;
            let mut attrs = vec![
                ("id", item.id.as_str()),
                ("href", item.href.as_str()),
                ("media-type", item.media_type.as_str()),
            ];
            if let Some(properties) = item.properties {
                attrs.push(("properties", properties));
            }
            m.empty("item", &attrs).newline();
        }
        m.close().newline();

        match &self.toc {
            Some(toc) => m.open("spine", &[("toc", toc.as_str())]),
            None => m.open("spine", &[]),
        };
        m.newline();
        for item in &self.spine {
            if item.linear {
                m.empty("itemref", &[("idref", item.idref.as_str())]);
            } else {
                m.empty(
                    "itemref",
                    &[("idref", item.idref.as_str()), ("linear", "no")],
                );
            }
            m.newline();
        }
        m.close().newline();

        if !self.guide.is_empty() {
            m.open("guide", &[]).newline();
            for reference in &self.guide {
                m.empty(
                    "reference",
                    &[
                        ("type", reference.kind),
                        ("title", reference.title),
                        ("href", reference.href.as_str()),
                    ],
                )
                .newline();
            }
            m.close().newline();
        }
        m.close().newline();

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
            m.finish()
        )
    }

    pub fn finish(self) -> Package {
        Package {
            opf: self.package_document(),
            members: self.members,
        }
    }

    fn require(&self, id: &str) -> Result<()> {
        if self.members.iter().any(|m| m.item.id == id) {
            Ok(())
        } else {
            bail!("`{id}` isn't in the manifest")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::book::BookMetadataBuilder;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn metadata() -> BookMetadata {
        BookMetadataBuilder::default()
            .title("Tom & Jerry")
            .author("A")
            .description("D")
            .language("en-GB")
            .unique_id(Uuid::nil())
            .modified(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn writes_metadata() {
        let metadata = metadata();
        let opf = PackageBuilder::new(&metadata).package_document();

        assert!(opf.contains(r#"unique-identifier="book-id""#));
        assert!(opf.contains(
            r#"<dc:identifier id="book-id">urn:uuid:00000000-0000-0000-0000-000000000000</dc:identifier>"#
        ));
        assert!(opf.contains("<dc:title>Tom &amp; Jerry</dc:title>"));
        assert!(opf.contains(r#"<dc:creator id="creator">A</dc:creator>"#));
        assert!(opf.contains("<dc:language>en-GB</dc:language>"));
        assert!(opf.contains("<dc:description>D</dc:description>"));
        assert!(opf.contains(r#"<meta property="dcterms:modified">2024-01-02T03:04:05Z</meta>"#));
        assert!(!opf.contains(r#"name="cover""#));
        assert!(!opf.contains("<guide>"));
    }

    #[test]
    fn metadata_precedes_manifest_precedes_spine() {
        let metadata = metadata();
        let opf = PackageBuilder::new(&metadata).package_document();
        let metadata_at = opf.find("<metadata").unwrap();
        let manifest_at = opf.find("<manifest>").unwrap();
        let spine_at = opf.find("<spine").unwrap();
        assert!(metadata_at < manifest_at && manifest_at < spine_at);
    }

    #[test]
    fn writes_manifest_spine_and_guide() {
        let metadata = metadata();
        let mut builder = PackageBuilder::new(&metadata);
        builder
            .add(ManifestItem::new("cover-image", "cover.jpg", "image/jpeg").with_properties("cover-image"), b"jpg".to_vec())
            .unwrap()
            .add(ManifestItem::new("cover", "cover.xhtml", XHTML_MEDIA_TYPE), "<html/>")
            .unwrap()
            .add(ManifestItem::new("ncx", "toc.ncx", NCX_MEDIA_TYPE), "<ncx/>")
            .unwrap();
        builder
            .set_cover_image("cover-image")
            .unwrap()
            .set_toc("ncx")
            .unwrap()
            .add_to_spine("cover", false)
            .unwrap()
            .add_guide_reference("cover", "Cover", "cover.xhtml")
            .unwrap();

        let opf = builder.package_document();
        assert!(opf.contains(
            r#"<item id="cover-image" href="cover.jpg" media-type="image/jpeg" properties="cover-image"/>"#
        ));
        assert!(opf.contains(r#"<meta name="cover" content="cover-image"/>"#));
        assert!(opf.contains(r#"<spine toc="ncx">"#));
        assert!(opf.contains(r#"<itemref idref="cover" linear="no"/>"#));
        assert!(opf.contains(r#"<reference type="cover" title="Cover" href="cover.xhtml"/>"#));
    }

    #[test]
    fn rejects_duplicate_ids_and_hrefs() {
        let metadata = metadata();
        let mut builder = PackageBuilder::new(&metadata);
        builder
            .add(ManifestItem::new("c1", "a.xhtml", XHTML_MEDIA_TYPE), "")
            .unwrap();
        assert!(builder
            .add(ManifestItem::new("c1", "b.xhtml", XHTML_MEDIA_TYPE), "")
            .is_err());
        assert!(builder
            .add(ManifestItem::new("c2", "a.xhtml", XHTML_MEDIA_TYPE), "")
            .is_err());
        assert_eq!(builder.members().len(), 1);
    }

    #[test]
    fn references_must_resolve() {
        let metadata = metadata();
        let mut builder = PackageBuilder::new(&metadata);
        assert!(builder.add_to_spine("c1", true).is_err());
        assert!(builder.set_toc("ncx").is_err());
        assert!(builder.set_cover_image("cover-image").is_err());
        assert!(builder.add_guide_reference("cover", "Cover", "cover.xhtml").is_err());

        builder
            .add(ManifestItem::new("c1", "a.xhtml", XHTML_MEDIA_TYPE), "")
            .unwrap();
        builder.add_to_spine("c1", true).unwrap();
        assert!(builder.add_to_spine("c1", true).is_err());
        assert_eq!(builder.spine().len(), 1);
    }

    #[test]
    fn members_live_under_the_content_dir() {
        let member = Member {
            item: ManifestItem::new("css", "stylesheet.css", CSS_MEDIA_TYPE),
            data: Vec::new(),
        };
        assert_eq!(member.archive_path(), "OEBPS/stylesheet.css");
    }
}
