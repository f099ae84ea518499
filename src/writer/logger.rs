use log::info;

use crate::core::writer::{MarkupWriter, MarkupWriterResult};

/// A sink logging every chunk at `info` level, useful for debugging purposes.
#[derive(Default)]
pub struct LoggerWriter {}

impl MarkupWriter for LoggerWriter {
    fn open(&mut self) -> MarkupWriterResult {
        info!("Feed output opened");
        Ok(())
    }

    fn write(&mut self, chunk: &str) -> MarkupWriterResult {
        info!("Chunk:{}", chunk.trim_end());
        Ok(())
    }

    fn close(&mut self) -> MarkupWriterResult {
        info!("Feed output closed");
        Ok(())
    }
}
