#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Feed-Batch for Rust

 Streaming generator for product-catalog feeds. Give it a feed header and a
 collection of items, it writes a well-formed XML document to a sink, one
 entry at a time, without building the document in memory.

 ## Core Concepts

- **Node:** the unit of the markup tree. A node is a scalar, an element with
  attributes, or a composite of named child nodes. A `None` value makes a node
  absent: it writes nothing, not even an empty tag.
- **TreeSerializer:** walks an ordered sequence of `(name, Node)` pairs and
  writes escaped markup to a `MarkupWriter`.
- **MarkupWriter:** the sink. It is opened once, receives chunks in order and
  is closed once, also when the generation fails.
- **Feed:** a feed schema. It validates its header, lays out the envelope and
  maps each item to nodes. The crate ships the Google Merchant feed.
- **FeedGenerator:** validates the header, opens the sink, then validates and
  writes items one by one.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| logger        | Enables a logger `MarkupWriter`, useful for debugging purposes |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use chrono::{TimeZone, Utc};
# use feed_batch_rs::{
#     core::{feed::FeedItem, generator::FeedGenerator},
#     error::FeedError,
#     feeds::google_merchant::{GoogleMerchantFeedBuilder, GoogleMerchantItemBuilder},
#     writer::IoMarkupWriterBuilder,
# };
fn main() -> Result<(), FeedError> {
    let feed = GoogleMerchantFeedBuilder::new()
        .title("Shop")
        .website_url("https://x.test")
        .updated(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .author("A")
        .build();

    let items: Vec<FeedItem> = vec![GoogleMerchantItemBuilder::new()
        .id("1")
        .title("T")
        .description("D")
        .url("https://x.test/1")
        .image_url("https://x.test/1.jpg")
        .availability("in stock")
        .price("10 USD")
        .shipping("0 USD")
        .build()
        .into()];

    let mut writer = IoMarkupWriterBuilder::new().from_writer(Vec::new());
    let summary = FeedGenerator::new(&feed).generate(&items, &mut writer)?;

    let xml = String::from_utf8(writer.into_inner()?).unwrap();
    assert_eq!(summary.entries, 1);
    assert!(xml.contains("<g:identifier_exists>no</g:identifier_exists>"));
    assert!(!xml.contains("<g:gtin>"));

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module for feed generation
pub mod core;

/// Error types for feed generation
pub mod error;

#[doc(inline)]
pub use error::*;

/// Feed schemas
pub mod feeds;

/// Set of sinks (for exemple: file writer, in-memory writer)
pub mod writer;
