mod code;
mod config;
mod document;
mod error;
mod header;
mod images;
mod inline;
mod lists;
mod math;
mod pipeline;

pub use code::reformat_code_blocks;
pub use config::{CodeConfig, Config, HeaderConfig, TransformsConfig};
pub use document::{
    CodeSpan, Container, Document, ImageRef, LineKind, ListLine, MathKind, MathSpan,
};
pub use error::{Error, Result};
pub use header::{normalize_header, serialize_header};
pub use images::normalize_images;
pub use inline::convert_strikethrough;
pub use lists::restructure_lists;
pub use math::{contains_math, find_math_spans};
pub use pipeline::{Conversion, Warning};

/// Split a document into its parsed header and body.
pub fn parse(source: &str) -> Result<Document<'_>> {
    header::split(source)
}

/// Convert an Astro-flavored Markdown document using the default config.
pub fn convert(source: &str) -> Result<Conversion> {
    convert_with_config(source, &Config::compiled_default())
}

/// Convert an Astro-flavored Markdown document with a custom config.
pub fn convert_with_config(source: &str, config: &Config) -> Result<Conversion> {
    pipeline::convert(source, config)
}

/// Convert a document body only. Never fails; math yields a warning.
pub fn convert_body(body: &str, config: &Config) -> Conversion {
    let (document, warnings) = pipeline::convert_body(body, config);
    Conversion { document, warnings }
}
