//! Plain text handling: XML escaping and paragraph splitting.

/// Escape the five XML-reserved characters with their named entities.
///
/// Input is always treated as raw text, so an `&amp;` already present in it
/// is escaped again to `&amp;amp;`. Characters XML 1.0 does not allow in a
/// document at all (C0 controls other than tab, line feed and carriage
/// return, plus U+FFFE and U+FFFF) are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            c if !is_xml_char(c) => {}
            c => escaped.push(c),
        }
    }
    escaped
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{fffd}' | '\u{10000}'..='\u{10ffff}')
}

/// Split raw chapter content into trimmed paragraphs.
///
/// Literal `\n` escape sequences and CRLF pairs become line breaks first; any
/// run of two or more line breaks then separates paragraphs. Blank
/// paragraphs are kept so that `k` separators always yield `k + 1` entries.
pub fn split_paragraphs(content: &str) -> Vec<String> {
    let normalized = content.replace("\\n", "\n").replace("\r\n", "\n");

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut breaks = 0usize;

    for c in normalized.chars() {
        if c == '\n' {
            breaks += 1;
            continue;
        }
        match breaks {
            0 => {}
            1 => current.push('\n'),
            _ => paragraphs.push(std::mem::take(&mut current)),
        }
        breaks = 0;
        current.push(c);
    }
    match breaks {
        0 | 1 => {}
        _ => paragraphs.push(std::mem::take(&mut current)),
    }
    paragraphs.push(current);

    paragraphs
        .into_iter()
        .map(|p| p.trim().to_string())
        .collect()
}
