const MARKER: &str = "~~";

/// Rewrite `~~text~~` spans as `<s>text</s>`.
///
/// Spans are matched left to right, shortest first, and never cross a line
/// break. A marker without a partner on the same line is left alone.
pub fn convert_strikethrough(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(MARKER) {
        let inner = &rest[open + MARKER.len()..];
        match closing_marker(inner) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str("<s>");
                out.push_str(&inner[..close]);
                out.push_str("</s>");
                rest = &inner[close + MARKER.len()..];
            }
            None => {
                // Retry from the next character
                out.push_str(&rest[..open + 1]);
                rest = &rest[open + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Offset of the marker closing a span whose content starts at `inner`.
fn closing_marker(inner: &str) -> Option<usize> {
    let first = inner.chars().next().filter(|&c| c != '\n')?;
    let line_end = inner.find('\n').unwrap_or(inner.len());
    let from = first.len_utf8();
    inner[from..line_end].find(MARKER).map(|i| i + from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn simple_span() {
        assert_eq!(convert_strikethrough("~~gone~~"), "<s>gone</s>");
    }

    #[test]
    fn multiple_spans_are_non_greedy() {
        assert_eq!(
            convert_strikethrough("a ~~b~~ c ~~d~~ e"),
            "a <s>b</s> c <s>d</s> e"
        );
    }

    #[test]
    fn unpaired_marker_is_untouched() {
        assert_eq!(convert_strikethrough("~~dangling"), "~~dangling");
        assert_eq!(
            convert_strikethrough("~~a~~ and ~~b"),
            "<s>a</s> and ~~b"
        );
    }

    #[test]
    fn does_not_cross_lines() {
        assert_eq!(convert_strikethrough("~~a\nb~~"), "~~a\nb~~");
        assert_eq!(
            convert_strikethrough("~~a\n~~b~~"),
            "~~a\n<s>b</s>"
        );
    }

    #[test]
    fn empty_span_is_not_a_match() {
        assert_eq!(convert_strikethrough("~~~~"), "~~~~");
    }

    #[test]
    fn tilde_runs_take_the_shortest_span() {
        assert_eq!(convert_strikethrough("~~~x~~"), "<s>~x</s>");
    }

    #[test]
    fn multibyte_content() {
        assert_eq!(convert_strikethrough("~~取り消し~~です"), "<s>取り消し</s>です");
    }

    proptest! {
        #[test]
        fn wraps_span_exactly_once(
            before in "[^~\n]{0,12}",
            inner in "[^~\n]{1,24}",
            after in "[^~\n]{0,12}",
        ) {
            let out = convert_strikethrough(&format!("{before}~~{inner}~~{after}"));
            let wrapped = format!("<s>{inner}</s>");
            prop_assert_eq!(out.matches(wrapped.as_str()).count(), 1);
            prop_assert_eq!(out, format!("{before}{wrapped}{after}"));
        }
    }
}
