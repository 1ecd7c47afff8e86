use std::fmt;

use serde_yaml::Mapping;

/// A source document split into its header block and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// Parsed header fields, in source order. `None` when the input has no
    /// complete `---` delimited header.
    pub header: Option<Mapping>,
    pub body: &'a str,
}

/// How a single body line looks to the list restructurer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet,
    Ordered,
    Other,
}

/// One classified physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub kind: LineKind,
    /// Raw count of leading whitespace characters (tabs count as one).
    pub indent: usize,
    /// Text after the list marker, or the whole line for `Other`.
    pub text: &'a str,
}

impl<'a> ListLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let stripped = line.trim_start();
        let indent = line[..line.len() - stripped.len()].chars().count();

        if let Some(text) = stripped.strip_prefix("- ") {
            return Self {
                kind: LineKind::Bullet,
                indent,
                text,
            };
        }

        let digits = stripped
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(stripped.len());
        if digits > 0
            && let Some(text) = stripped[digits..].strip_prefix(". ")
        {
            return Self {
                kind: LineKind::Ordered,
                indent,
                text,
            };
        }

        Self {
            kind: LineKind::Other,
            indent,
            text: line,
        }
    }

    /// The container this line belongs in, if it is a list item.
    pub fn container(&self) -> Option<Container> {
        match self.kind {
            LineKind::Bullet => Some(Container::Unordered),
            LineKind::Ordered => Some(Container::Ordered),
            LineKind::Other => None,
        }
    }
}

/// List container markup in the target dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Unordered,
    Ordered,
}

impl Container {
    pub fn open_tag(self) -> &'static str {
        match self {
            Container::Unordered => "<ul>",
            Container::Ordered => "<ol>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Container::Unordered => "</ul>",
            Container::Ordered => "</ol>",
        }
    }
}

/// A fenced code region found in the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan<'a> {
    /// Language token after the opening fence; empty when absent.
    pub language: &'a str,
    pub body: &'a str,
}

/// An image parsed from an HTML `<img>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub src: &'a str,
    pub alt: &'a str,
}

impl fmt::Display for ImageRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "![{}]({})", self.alt, self.src)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathKind {
    Inline,
    Block,
}

/// A LaTeX math span. Reported only, never rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathSpan {
    pub kind: MathKind,
    /// Byte offsets into the body, delimiters included.
    pub start: usize,
    pub end: usize,
    /// 1-based line of the opening delimiter.
    pub line: usize,
    /// The expression between the delimiters, trimmed.
    pub expression: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_bullets() {
        let line = ListLine::classify("  - item");
        assert_eq!(line.kind, LineKind::Bullet);
        assert_eq!(line.indent, 2);
        assert_eq!(line.text, "item");
    }

    #[test]
    fn classifies_ordered() {
        let line = ListLine::classify("12. twelfth");
        assert_eq!(line.kind, LineKind::Ordered);
        assert_eq!(line.indent, 0);
        assert_eq!(line.text, "twelfth");
    }

    #[test]
    fn marker_needs_trailing_space() {
        assert_eq!(ListLine::classify("-item").kind, LineKind::Other);
        assert_eq!(ListLine::classify("1.item").kind, LineKind::Other);
        assert_eq!(ListLine::classify(". item").kind, LineKind::Other);
        assert_eq!(ListLine::classify("---").kind, LineKind::Other);
    }

    #[test]
    fn tabs_count_as_single_columns() {
        let line = ListLine::classify("\t\t- deep");
        assert_eq!(line.kind, LineKind::Bullet);
        assert_eq!(line.indent, 2);
    }

    #[test]
    fn other_keeps_whole_line() {
        let line = ListLine::classify("   plain text");
        assert_eq!(line.kind, LineKind::Other);
        assert_eq!(line.text, "   plain text");
        assert_eq!(line.container(), None);
    }

    #[test]
    fn image_renders_as_bracket_link() {
        let image = ImageRef {
            src: "a.png",
            alt: "cap",
        };
        assert_eq!(image.to_string(), "![cap](a.png)");
    }
}
