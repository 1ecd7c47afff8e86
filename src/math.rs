use crate::document::{MathKind, MathSpan};

/// True if `text` holds an inline `$...$` span (no `$` inside) or a block
/// `$$...$$` span, which may cover several lines.
pub fn contains_math(text: &str) -> bool {
    has_inline(text) || has_block(text)
}

fn has_inline(text: &str) -> bool {
    let mut dollars = text.match_indices('$').map(|(i, _)| i);
    let Some(mut prev) = dollars.next() else {
        return false;
    };
    for i in dollars {
        if i > prev + 1 {
            return true;
        }
        prev = i;
    }
    false
}

fn has_block(text: &str) -> bool {
    text.find("$$")
        .is_some_and(|start| text[start + 2..].contains("$$"))
}

/// List the math spans in `text`, in source order.
///
/// Block spans are `$$ ... $$` and may cross lines. Inline spans are
/// delimited by single `$` characters on one line and are skipped when they
/// overlap a block span.
pub fn find_math_spans(text: &str) -> Vec<MathSpan> {
    let mut spans = block_spans(text);
    let inline = inline_spans(text)
        .into_iter()
        .filter(|span| !spans.iter().any(|block| overlaps(block, span)))
        .collect::<Vec<_>>();
    spans.extend(inline);
    spans.sort_by_key(|span| span.start);
    spans
}

fn block_spans(text: &str) -> Vec<MathSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find("$$") {
        let start = pos + offset;
        let Some(len) = text[start + 2..].find("$$") else {
            break;
        };
        let end = start + 2 + len + 2;
        spans.push(span(text, MathKind::Block, start, end, 2));
        pos = end;
    }
    spans
}

fn inline_spans(text: &str) -> Vec<MathSpan> {
    let bytes = text.as_bytes();
    let lone = |k: usize| {
        bytes[k] == b'$' && (k == 0 || bytes[k - 1] != b'$') && bytes.get(k + 1) != Some(&b'$')
    };

    let mut spans = Vec::new();
    let mut k = 0;
    while k < bytes.len() {
        if !lone(k) {
            k += 1;
            continue;
        }
        let close = (k + 1..bytes.len())
            .take_while(|&m| bytes[m] != b'\n')
            .find(|&m| lone(m));
        match close {
            Some(m) => {
                spans.push(span(text, MathKind::Inline, k, m + 1, 1));
                k = m + 1;
            }
            None => k += 1,
        }
    }
    spans
}

fn span(text: &str, kind: MathKind, start: usize, end: usize, delimiter: usize) -> MathSpan {
    MathSpan {
        kind,
        start,
        end,
        line: text[..start].matches('\n').count() + 1,
        expression: text[start + delimiter..end - delimiter].trim().to_string(),
    }
}

fn overlaps(block: &MathSpan, inline: &MathSpan) -> bool {
    (block.start <= inline.start && inline.start < block.end)
        || (block.start < inline.end && inline.end <= block.end)
}
