use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;

use crate::{
    core::writer::{MarkupWriter, MarkupWriterResult},
    error::FeedError,
};

/// A sink that writes markup to any [`Write`] implementation, through a buffer.
///
/// # Examples
///
/// ```
/// use feed_batch_rs::core::writer::MarkupWriter;
/// use feed_batch_rs::writer::IoMarkupWriterBuilder;
///
/// let mut writer = IoMarkupWriterBuilder::new().from_writer(Vec::new());
///
/// writer.open().unwrap();
/// writer.write("<feed>\n").unwrap();
/// writer.write("</feed>\n").unwrap();
/// writer.close().unwrap();
///
/// let bytes = writer.into_inner().unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "<feed>\n</feed>\n");
/// ```
///
/// Using a file as output:
///
/// ```no_run
/// use feed_batch_rs::writer::IoMarkupWriterBuilder;
///
/// let writer = IoMarkupWriterBuilder::new()
///     .capacity(64 * 1024)
///     .from_path("products.xml")
///     .unwrap();
/// ```
pub struct IoMarkupWriter<W: Write = File> {
    stream: BufWriter<W>,
    written: usize,
}

impl<W: Write> IoMarkupWriter<W> {
    /// Number of bytes handed to the buffer so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        self.stream.get_ref()
    }

    /// Flushes the buffer and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, FeedError> {
        self.stream
            .into_inner()
            .map_err(|e| FeedError::Writer(format!("Failed to flush feed output: {}", e)))
    }
}

impl<W: Write> MarkupWriter for IoMarkupWriter<W> {
    fn write(&mut self, chunk: &str) -> MarkupWriterResult {
        self.stream
            .write_all(chunk.as_bytes())
            .map_err(|e| FeedError::Writer(format!("Failed to write feed chunk: {}", e)))?;
        self.written += chunk.len();
        Ok(())
    }

    fn close(&mut self) -> MarkupWriterResult {
        debug!("Flushing {} bytes of feed output", self.written);
        self.stream
            .flush()
            .map_err(|e| FeedError::Writer(format!("Failed to flush feed output: {}", e)))
    }
}

/// Builder for [`IoMarkupWriter`].
#[derive(Default)]
pub struct IoMarkupWriterBuilder {
    capacity: Option<usize>,
}

impl IoMarkupWriterBuilder {
    pub fn new() -> Self {
        Self { capacity: None }
    }

    /// Sets the size of the write buffer. Defaults to the `BufWriter` default.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Creates (or truncates) the file at `path` and writes into it.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<IoMarkupWriter<File>, FeedError> {
        let file = File::create(path)
            .map_err(|e| FeedError::Writer(format!("Failed to create feed file: {}", e)))?;
        Ok(self.from_writer(file))
    }

    /// Writes into an existing writer: an in-memory buffer, a socket, stdout...
    pub fn from_writer<W: Write>(self, wtr: W) -> IoMarkupWriter<W> {
        let stream = match self.capacity {
            Some(capacity) => BufWriter::with_capacity(capacity, wtr),
            None => BufWriter::new(wtr),
        };

        IoMarkupWriter { stream, written: 0 }
    }
}
