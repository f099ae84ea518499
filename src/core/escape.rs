//! XML escaping for text content and attribute values.
//!
//! Attribute values are always written between double quotes.

use std::borrow::Cow;

use quick_xml::escape::{escape, partial_escape};

/// Escapes `&`, `<` and `>`; every other character is left as is.
///
/// Must be applied exactly once per value.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    partial_escape(text)
}

/// Escapes `&`, `<`, `>`, `"` and `'` so the value cannot leave its quotes.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value)
}
