//! Ready-made sinks for generated feeds.
//!
//! - [`IoMarkupWriter`] writes to a file or any `std::io::Write`
//! - [`StringMarkupWriter`] keeps the markup in memory
//! - `LoggerWriter` (feature `logger`) logs every chunk

pub mod io_writer;
pub mod string_writer;

#[cfg(feature = "logger")]
#[cfg_attr(docsrs, doc(cfg(feature = "logger")))]
/// This module provides a logger sink, useful for debugging purposes.
pub mod logger;

pub use io_writer::{IoMarkupWriter, IoMarkupWriterBuilder};
pub use string_writer::StringMarkupWriter;

#[cfg(feature = "logger")]
#[cfg_attr(docsrs, doc(cfg(feature = "logger")))]
pub use logger::LoggerWriter;
