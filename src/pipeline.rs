use std::borrow::Cow;
use std::fmt;

use crate::code::reformat_code_blocks;
use crate::config::Config;
use crate::document::MathSpan;
use crate::error::Result;
use crate::header::{self, normalize_header, serialize_header};
use crate::images::normalize_images;
use crate::inline::convert_strikethrough;
use crate::lists::restructure_lists;
use crate::math::{contains_math, find_math_spans};

/// A non-fatal advisory attached to a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The body contains LaTeX math, which was left unconverted.
    UnsupportedMath { spans: Vec<MathSpan> },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedMath { .. } => write!(
                f,
                "LaTeX math detected. Hatena Blog cannot render it, so math \
                 was left unconverted; adjust it by hand."
            ),
        }
    }
}

/// The converted document and the advisories raised while converting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub document: String,
    pub warnings: Vec<Warning>,
}

/// Convert a whole document: header first, then the body.
///
/// `\r\n` line endings are read as `\n`, and the output uses `\n`.
pub fn convert(source: &str, config: &Config) -> Result<Conversion> {
    let source = normalize_newlines(source);
    let document = header::split(&source)?;
    let (body, warnings) = convert_body(document.body, config);

    let document = match document.header {
        Some(mut fields) => {
            normalize_header(&mut fields, &config.header.join_separator);
            let serialized = serialize_header(&fields)?;
            format!(
                "{delim}{serialized}{delim}{body}",
                delim = header::DELIMITER
            )
        }
        None => body,
    };

    Ok(Conversion { document, warnings })
}

/// Run math detection and the body transforms, in their fixed order.
pub fn convert_body(body: &str, config: &Config) -> (String, Vec<Warning>) {
    let body = normalize_newlines(body);
    let mut warnings = Vec::new();
    if contains_math(&body) {
        let spans = find_math_spans(&body);
        tracing::info!(spans = spans.len(), "LaTeX math left unconverted");
        warnings.push(Warning::UnsupportedMath { spans });
    }

    let transforms = &config.transforms;
    let mut body = body.into_owned();
    if transforms.strikethrough {
        body = convert_strikethrough(&body);
    }
    if transforms.lists {
        body = restructure_lists(&body);
    }
    if transforms.code_blocks {
        body = reformat_code_blocks(&body, &config.code_indent());
    }
    if transforms.images {
        body = normalize_images(&body);
    }

    (body, warnings)
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
