//! XHTML content documents.
//!
//! Every page in the book is wrapped by [`XhtmlDocument::render`]: an XML
//! declaration, the HTML5 doctype, and an `html` root in the XHTML namespace
//! whose `body` is the caller's fragment, untouched.

use super::markup::{Fragment, Markup};

pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const OPS_NAMESPACE: &str = "http://www.idpf.org/2007/ops";

#[derive(Debug, Clone, Copy)]
enum Style<'a> {
    None,
    Linked(&'a str),
    Inline(&'a str),
}

#[derive(Debug, Clone)]
pub struct XhtmlDocument<'a> {
    title: &'a str,
    language: &'a str,
    style: Style<'a>,
    ops_namespace: bool,
}

impl<'a> XhtmlDocument<'a> {
    pub fn new(title: &'a str, language: &'a str) -> XhtmlDocument<'a> {
        XhtmlDocument {
            title,
            language,
            style: Style::None,
            ops_namespace: false,
        }
    }

    /// Link a stylesheet that lives elsewhere in the package.
    pub fn linked_stylesheet(mut self, href: &'a str) -> Self {
        self.style = Style::Linked(href);
        self
    }

    /// Embed style rules in the `head`, for pages that must stand alone.
    pub fn inline_style(mut self, css: &'a str) -> Self {
        self.style = Style::Inline(css);
        self
    }

    /// Declare the `epub:` prefix, needed for `epub:type` attributes.
    pub fn with_ops_namespace(mut self) -> Self {
        self.ops_namespace = true;
        self
    }

    pub fn render(&self, body: &Fragment) -> String {
        let mut root: Vec<(&str, &str)> = vec![("xmlns", XHTML_NAMESPACE)];
        if self.ops_namespace {
            root.push(("xmlns:epub", OPS_NAMESPACE));
        }
        root.push(("xml:lang", self.language));
        root.push(("lang", self.language));

        let mut m = Markup::new();
        m.open("html", &root).newline();
        m.open("head", &[]).newline();
        m.empty("meta", &[("charset", "UTF-8")]).newline();
        m.element("title", &[], self.title).newline();
        match self.style {
            Style::None => {}
            Style::Linked(href) => {
                m.empty(
                    "link",
                    &[("rel", "stylesheet"), ("type", "text/css"), ("href", href)],
                )
                .newline();
            }
            Style::Inline(css) => {
                m.element("style", &[("type", "text/css")], css).newline();
            }
        }
        m.close().newline();
        m.open("body", &[]).newline();
        m.fragment(body).newline();
        m.close().newline();
        m.close().newline();

        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n{}",
            m.finish()
        )
    }
}
