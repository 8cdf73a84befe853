//! CSS for the book.
//!
//! Chapters and the table of contents share `stylesheet.css`. The cover page
//! carries its own rules inline so it renders on its own, before any shared
//! resource is resolved.

/// Package path of the shared stylesheet.
pub const STYLESHEET_HREF: &str = "stylesheet.css";

/// The shared stylesheet.
pub fn stylesheet() -> &'static str {
    r#"/* Base styles */
body {
    font-family: serif;
    line-height: 1.5;
    margin: 1em;
}

h1 {
    font-size: 1.6em;
    text-align: center;
    margin: 1em 0 1.5em;
}

p {
    text-indent: 1.5em;
    margin: 0 0 0.6em;
    text-align: justify;
}

/* Table of contents */
nav ol {
    list-style-type: none;
    padding-left: 0;
}

nav li {
    margin: 0.3em 0;
}

nav a {
    text-decoration: none;
}
"#
}

/// Rules for the standalone cover page.
pub fn cover_style() -> &'static str {
    "body { margin: 0; padding: 0; text-align: center; } \
     div.cover { height: 100%; } \
     img { max-width: 100%; max-height: 100%; }"
}
