use crate::document::CodeSpan;

const FENCE: &str = "```";

/// Replace fenced code blocks with their body indented by `indent`.
///
/// The opening fence must start a line and may carry a language word, which
/// is dropped. The block ends at the first fence after it. Blocks without a
/// closing fence stay as they are.
pub fn reformat_code_blocks(body: &str, indent: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut copied = 0;
    let mut pos = 0;
    let mut blocks = 0;

    while pos < body.len() {
        if let Some((span, end)) = fence_at(body, pos) {
            tracing::trace!(language = span.language, "reformat code block");
            out.push_str(&body[copied..pos]);
            push_indented(&mut out, span.body, indent);
            blocks += 1;
            copied = end;
            pos = if is_line_start(body, end) {
                end
            } else {
                next_line_start(body, end)
            };
        } else {
            pos = next_line_start(body, pos);
        }
    }

    out.push_str(&body[copied..]);
    tracing::debug!(blocks, "code blocks reformatted");
    out
}

/// Parse a fenced block opening at `pos`, returning it and the offset just
/// past its closing fence.
fn fence_at(body: &str, pos: usize) -> Option<(CodeSpan<'_>, usize)> {
    let after_fence = body[pos..].strip_prefix(FENCE)?;
    let lang_len = after_fence
        .find(|c: char| !is_word(c))
        .unwrap_or(after_fence.len());
    let language = &after_fence[..lang_len];
    after_fence[lang_len..].strip_prefix('\n')?;

    let body_start = pos + FENCE.len() + lang_len + 1;
    let body_len = body[body_start..].find(FENCE)?;
    let span = CodeSpan {
        language,
        body: &body[body_start..body_start + body_len],
    };
    Some((span, body_start + body_len + FENCE.len()))
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_line_start(body: &str, pos: usize) -> bool {
    pos == 0 || body.as_bytes()[pos - 1] == b'\n'
}

fn next_line_start(body: &str, pos: usize) -> usize {
    body[pos..]
        .find('\n')
        .map_or(body.len(), |i| pos + i + 1)
}

fn push_indented(out: &mut String, code: &str, indent: &str) {
    for (i, line) in code.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(line);
    }
}
