//! Mock version of a feed sink;
use mockall::mock;

use feed_batch_rs::core::writer::{MarkupWriter, MarkupWriterResult};

mock! {
    pub Sink {}
    impl MarkupWriter for Sink {
        fn open(&mut self) -> MarkupWriterResult;
        fn write(&mut self, chunk: &str) -> MarkupWriterResult;
        fn close(&mut self) -> MarkupWriterResult;
    }
}
