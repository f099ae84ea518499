use crate::error::FeedError;

/// Result type for sink operations.
pub type MarkupWriterResult = Result<(), FeedError>;

/// Destination of generated markup.
///
/// A generation calls `open` once, then `write` for every chunk in document
/// order, then `close` exactly once, also when the generation fails after the
/// sink was opened. A sink must not be shared by concurrent generations.
pub trait MarkupWriter {
    /// Prepares the underlying resource.
    fn open(&mut self) -> MarkupWriterResult {
        Ok(())
    }

    /// Appends a chunk of markup. Chunks are written in the order received.
    fn write(&mut self, chunk: &str) -> MarkupWriterResult;

    /// Flushes and releases the underlying resource.
    fn close(&mut self) -> MarkupWriterResult {
        Ok(())
    }
}

impl<T: MarkupWriter + ?Sized> MarkupWriter for &mut T {
    fn open(&mut self) -> MarkupWriterResult {
        (**self).open()
    }

    fn write(&mut self, chunk: &str) -> MarkupWriterResult {
        (**self).write(chunk)
    }

    fn close(&mut self) -> MarkupWriterResult {
        (**self).close()
    }
}

impl<T: MarkupWriter + ?Sized> MarkupWriter for Box<T> {
    fn open(&mut self) -> MarkupWriterResult {
        (**self).open()
    }

    fn write(&mut self, chunk: &str) -> MarkupWriterResult {
        (**self).write(chunk)
    }

    fn close(&mut self) -> MarkupWriterResult {
        (**self).close()
    }
}
