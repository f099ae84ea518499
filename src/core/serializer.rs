use std::borrow::Cow;

use log::trace;
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event, attributes::Attribute},
    name::QName,
};

use crate::error::FeedError;

use super::{
    escape::{escape_attribute, escape_text},
    node::{Node, Nodes},
    writer::{MarkupWriter, MarkupWriterResult},
};

/// Writes a [`Nodes`] tree to a [`MarkupWriter`].
///
/// Each element is encoded as quick-xml events, followed by a newline, and
/// handed to the sink as soon as it is complete. Absent nodes write nothing.
///
/// # Examples
///
/// ```
/// use feed_batch_rs::core::node::{Node, Nodes};
/// use feed_batch_rs::core::serializer::TreeSerializer;
/// use feed_batch_rs::writer::StringMarkupWriter;
///
/// let nodes = Nodes::new()
///     .node("title", Node::text("Fish & Chips"))
///     .node("brand", Node::Scalar(None))
///     .node("link", Node::attributes([("href", Some("https://x.test/?a=1&b=2"))]));
///
/// let mut writer = StringMarkupWriter::new();
/// TreeSerializer::new(&mut writer).serialize(&nodes).unwrap();
///
/// assert_eq!(
///     writer.as_str(),
///     "<title>Fish &amp; Chips</title>\n<link href=\"https://x.test/?a=1&amp;b=2\"/>\n"
/// );
/// ```
pub struct TreeSerializer<'a, W: MarkupWriter + ?Sized> {
    sink: &'a mut W,
    buffer: Writer<Vec<u8>>,
}

impl<'a, W: MarkupWriter + ?Sized> TreeSerializer<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self {
            sink,
            buffer: Writer::new(Vec::new()),
        }
    }

    /// Serializes every pair of `nodes`, in order.
    pub fn serialize(&mut self, nodes: &Nodes) -> MarkupWriterResult {
        let mut pending = Vec::new();
        self.serialize_nodes(nodes, &mut pending)
    }

    /// `pending` holds the start tags of composites entered but not written
    /// yet. They reach the sink right before the first leaf that writes
    /// something, so every node is visited once.
    fn serialize_nodes<'n>(
        &mut self,
        nodes: &'n Nodes,
        pending: &mut Vec<&'n str>,
    ) -> MarkupWriterResult {
        for (name, node) in nodes.iter() {
            match node {
                Node::Composite(children) => {
                    pending.push(name);
                    let depth = pending.len();
                    self.serialize_nodes(children, pending)?;
                    if pending.len() == depth {
                        pending.pop();
                        trace!("Skipping absent node <{}>", name);
                    } else {
                        self.write_end_tag(name)?;
                    }
                }
                leaf if leaf.is_absent() => trace!("Skipping absent node <{}>", name),
                leaf => {
                    for open in pending.drain(..) {
                        self.write_start_tag(open, &[])?;
                    }
                    self.write_leaf(name, leaf)?;
                }
            }
        }
        Ok(())
    }

    fn write_leaf(&mut self, name: &str, node: &Node) -> MarkupWriterResult {
        match node {
            Node::Scalar(Some(value)) => self.write_text_element(BytesStart::new(name), value)?,
            Node::Attributed {
                attributes,
                content,
            } => {
                let mut start = BytesStart::new(name);
                for (key, value) in attributes {
                    // empty values count as unset
                    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                        start.push_attribute(attribute(key, value));
                    }
                }
                match content {
                    Some(text) => self.write_text_element(start, text)?,
                    None => self.emit(Event::Empty(start))?,
                }
            }
            Node::Scalar(None) | Node::Composite(_) => return Ok(()),
        }
        self.end_line()
    }

    fn write_text_element(&mut self, start: BytesStart<'_>, text: &str) -> MarkupWriterResult {
        let end = start.to_end().into_owned();
        self.emit(Event::Start(start))?;
        self.emit(Event::Text(BytesText::from_escaped(escape_text(text))))?;
        self.emit(Event::End(end))
    }

    /// Writes `<?xml version="1.0" encoding="utf-8"?>` followed by a newline.
    pub fn write_declaration(&mut self) -> MarkupWriterResult {
        self.emit(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        self.end_line()
    }

    /// Writes `<name attr="value" ...>` followed by a newline.
    ///
    /// Attribute values are escaped; the name is written verbatim.
    pub fn write_start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> MarkupWriterResult {
        let mut start = BytesStart::new(name);
        for (key, value) in attributes {
            start.push_attribute(attribute(key, value));
        }
        self.emit(Event::Start(start))?;
        self.end_line()
    }

    /// Writes `</name>` followed by a newline.
    pub fn write_end_tag(&mut self, name: &str) -> MarkupWriterResult {
        self.emit(Event::End(BytesEnd::new(name)))?;
        self.end_line()
    }

    fn emit(&mut self, event: Event<'_>) -> MarkupWriterResult {
        self.buffer
            .write_event(event)
            .map_err(|e| FeedError::Writer(format!("Failed to encode feed element: {}", e)))
    }

    /// Terminates the buffered element and hands it to the sink as one chunk.
    fn end_line(&mut self) -> MarkupWriterResult {
        let buffer = self.buffer.get_mut();
        buffer.push(b'\n');
        let result = match std::str::from_utf8(buffer) {
            Ok(chunk) => self.sink.write(chunk),
            Err(e) => Err(FeedError::Writer(format!(
                "Invalid UTF-8 in feed element: {}",
                e
            ))),
        };
        buffer.clear();
        result
    }
}

fn attribute<'v>(key: &'v str, value: &'v str) -> Attribute<'v> {
    let value = match escape_attribute(value) {
        Cow::Borrowed(escaped) => Cow::Borrowed(escaped.as_bytes()),
        Cow::Owned(escaped) => Cow::Owned(escaped.into_bytes()),
    };
    Attribute {
        key: QName(key.as_bytes()),
        value,
    }
}
