use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A labeled half-open character range `[start, end)` over some text.
///
/// Offsets count Unicode scalar values, not bytes. They are not validated on
/// construction: negative or past-the-end values are clamped when the span is
/// resolved against its text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub text: String,
}

impl TextSpan {
    #[must_use]
    pub fn new(start: i64, end: i64, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            text: text.into(),
        }
    }
}

/// A maximal run of text that is either highlighted or plain.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Segment {
    pub content: String,
    pub highlighted: bool,
}

impl Segment {
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            highlighted: false,
        }
    }

    #[must_use]
    pub fn highlighted(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            highlighted: true,
        }
    }
}
