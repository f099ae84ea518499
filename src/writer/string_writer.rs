use crate::core::writer::{MarkupWriter, MarkupWriterResult};

/// A sink collecting markup in memory.
///
/// It also records whether it was opened and closed, which makes it handy to
/// check the sink lifecycle of a generation.
#[derive(Debug, Default)]
pub struct StringMarkupWriter {
    buffer: String,
    opened: bool,
    closed: bool,
}

impl StringMarkupWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl MarkupWriter for StringMarkupWriter {
    fn open(&mut self) -> MarkupWriterResult {
        self.opened = true;
        Ok(())
    }

    fn write(&mut self, chunk: &str) -> MarkupWriterResult {
        self.buffer.push_str(chunk);
        Ok(())
    }

    fn close(&mut self) -> MarkupWriterResult {
        self.closed = true;
        Ok(())
    }
}
