use serde_yaml::{Mapping, Value};

use crate::document::Document;
use crate::error::{Error, Result};

pub const DELIMITER: &str = "---\n";

/// Split a source document into header and body.
///
/// The header is only recognized when the input starts with a `---` line and
/// a second `---` line follows somewhere later. Without the closing line the
/// whole input is body.
pub fn split(source: &str) -> Result<Document<'_>> {
    let Some((header_text, body)) = split_delimited(source) else {
        tracing::debug!("no header block");
        return Ok(Document {
            header: None,
            body: source,
        });
    };

    let header = parse(header_text)?;
    tracing::debug!(fields = header.len(), "header block parsed");
    Ok(Document {
        header: Some(header),
        body,
    })
}

fn split_delimited(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix(DELIMITER)?;

    // Closing delimiter must be a line of its own
    let end = if rest.starts_with(DELIMITER) {
        0
    } else {
        rest.find("\n---\n")? + 1
    };

    Some((&rest[..end], &rest[end + DELIMITER.len()..]))
}

fn parse(text: &str) -> Result<Mapping> {
    match serde_yaml::from_str::<Value>(text).map_err(Error::HeaderParse)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(Error::HeaderNotMapping),
    }
}

/// Replace every sequence-valued field with its elements joined by `separator`.
///
/// Field order and all non-sequence values are left as they are. A sequence
/// holding a nested sequence or mapping is not joined.
pub fn normalize_header(header: &mut Mapping, separator: &str) {
    for (key, value) in header.iter_mut() {
        let Value::Sequence(items) = value else {
            continue;
        };
        let Some(parts) = items.iter().map(scalar_text).collect::<Option<Vec<_>>>() else {
            tracing::debug!(field = ?key, "sequence has nested values, left as is");
            continue;
        };
        tracing::debug!(field = ?key, "joined sequence field");
        *value = Value::String(parts.join(separator));
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Serialize a header map in block style. An empty map serializes to "".
pub fn serialize_header(header: &Mapping) -> Result<String> {
    if header.is_empty() {
        return Ok(String::new());
    }
    serde_yaml::to_string(header).map_err(Error::HeaderSerialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn splits_header_and_body() {
        let doc = split("---\ntitle: Hello\n---\nBody\n").unwrap();
        assert_eq!(doc.body, "Body\n");
        let header = doc.header.unwrap();
        assert_eq!(header.get("title").and_then(Value::as_str), Some("Hello"));
    }

    #[test]
    fn missing_closing_delimiter_is_all_body() {
        let source = "---\ntitle: Hello\nBody\n";
        let doc = split(source).unwrap();
        assert!(doc.header.is_none());
        assert_eq!(doc.body, source);
    }

    #[test]
    fn no_opening_delimiter_is_all_body() {
        let source = "# Title\n---\nmore\n---\n";
        let doc = split(source).unwrap();
        assert!(doc.header.is_none());
        assert_eq!(doc.body, source);
    }

    #[test]
    fn closing_delimiter_must_be_its_own_line() {
        let doc = split("---\ntitle: a---\nauthor: b\n---\nBody").unwrap();
        let header = doc.header.unwrap();
        assert_eq!(header.get("title").and_then(Value::as_str), Some("a---"));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn empty_header_is_empty_map() {
        let doc = split("---\n---\nBody").unwrap();
        assert_eq!(doc.header, Some(Mapping::new()));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn unparseable_header_is_an_error() {
        let err = split("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(matches!(err, Error::HeaderParse(_)));
    }

    #[test]
    fn non_mapping_header_is_an_error() {
        let err = split("---\n- a\n- b\n---\nBody").unwrap_err();
        assert!(matches!(err, Error::HeaderNotMapping));
    }

    #[test]
    fn joins_sequences_and_keeps_order() {
        let mut header = mapping("title: Post\ntags: [a, b, c]\ndraft: false\n");
        normalize_header(&mut header, ", ");
        assert_eq!(
            serialize_header(&header).unwrap(),
            "title: Post\ntags: a, b, c\ndraft: false\n"
        );
    }

    #[test]
    fn joins_every_sequence_field() {
        let mut header = mapping("categories:\n  - x\n  - y\ntags: [1, 2]\n");
        normalize_header(&mut header, ", ");
        assert_eq!(
            header.get("categories").and_then(Value::as_str),
            Some("x, y")
        );
        assert_eq!(header.get("tags").and_then(Value::as_str), Some("1, 2"));
    }

    #[test]
    fn nested_sequence_is_left_unjoined() {
        let mut header = mapping("tags: [[a, b], {k: v}, 3]\ntitle: Post\n");
        let before = header.clone();
        normalize_header(&mut header, ", ");
        assert_eq!(header, before);
        assert!(header.get("tags").is_some_and(Value::is_sequence));
    }

    #[test]
    fn custom_separator() {
        let mut header = mapping("tags: [a, b]\n");
        normalize_header(&mut header, " / ");
        assert_eq!(header.get("tags").and_then(Value::as_str), Some("a / b"));
    }

    #[test]
    fn does_not_add_fields() {
        let mut header = mapping("title: Only\n");
        normalize_header(&mut header, ", ");
        assert_eq!(header.len(), 1);
        assert!(header.get("tags").is_none());
    }

    #[test]
    fn empty_map_serializes_to_nothing() {
        assert_eq!(serialize_header(&Mapping::new()).unwrap(), "");
    }

    #[test]
    fn preserves_non_ascii() {
        let header = mapping("title: 日本語のタイトル\n");
        assert_eq!(
            serialize_header(&header).unwrap(),
            "title: 日本語のタイトル\n"
        );
    }
}
