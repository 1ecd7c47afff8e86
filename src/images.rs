use crate::document::ImageRef;

const TAG_OPEN: &str = "<img";

/// Rewrite `<img src="URL" alt="ALT" ...>` elements as `![ALT](URL)`.
///
/// Only the exact shape is recognized: `src` first, `alt` second, both
/// double-quoted, `src` non-empty. Anything after `alt` up to the closing `>`
/// is dropped. Other spellings are left untouched.
pub fn normalize_images(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    let mut rewritten = 0;

    while let Some(start) = rest.find(TAG_OPEN) {
        match parse_img(&rest[start..]) {
            Some((image, len)) => {
                out.push_str(&rest[..start]);
                out.push_str(&image.to_string());
                rest = &rest[start + len..];
                rewritten += 1;
            }
            None => {
                out.push_str(&rest[..start + TAG_OPEN.len()]);
                rest = &rest[start + TAG_OPEN.len()..];
            }
        }
    }

    out.push_str(rest);
    tracing::debug!(rewritten, "image tags normalized");
    out
}

/// Parse an image element at the start of `tag`, returning it and the
/// number of bytes it spans.
fn parse_img(tag: &str) -> Option<(ImageRef<'_>, usize)> {
    let mut cursor = Cursor { text: tag, pos: 0 };
    cursor.expect(TAG_OPEN)?;
    cursor.whitespace()?;
    cursor.expect("src=\"")?;
    let src = cursor.quoted()?;
    if src.is_empty() {
        return None;
    }
    cursor.whitespace()?;
    cursor.expect("alt=\"")?;
    let alt = cursor.quoted()?;
    let close = cursor.rest().find('>')?;

    Some((ImageRef { src, alt }, cursor.pos + close + 1))
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn expect(&mut self, literal: &str) -> Option<()> {
        self.rest().starts_with(literal).then(|| self.pos += literal.len())
    }

    /// One or more whitespace characters.
    fn whitespace(&mut self) -> Option<()> {
        let rest = self.rest();
        let len = rest.len() - rest.trim_start().len();
        (len > 0).then(|| self.pos += len)
    }

    /// Text up to the next `"`, consuming the quote.
    fn quoted(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest.find('"')?;
        self.pos += end + 1;
        Some(&rest[..end])
    }
}
