#![allow(dead_code)]

pub mod mocks;

use chrono::{DateTime, TimeZone, Utc};
use feed_batch_rs::{
    core::feed::FeedItem,
    feeds::google_merchant::{GoogleMerchantFeedBuilder, GoogleMerchantItemBuilder},
};
use quick_xml::{Reader, events::Event};

pub use mocks::MockSink;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn updated() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Header from the reference example: every required field set.
pub fn feed() -> GoogleMerchantFeedBuilder {
    GoogleMerchantFeedBuilder::new()
        .title("Shop")
        .website_url("https://x.test")
        .updated(updated())
        .author("A")
}

/// Item with only the required fields set.
pub fn item(id: &str) -> GoogleMerchantItemBuilder {
    GoogleMerchantItemBuilder::new()
        .id(id)
        .title("T")
        .description("D")
        .url(format!("https://x.test/{}", id))
        .image_url(format!("https://x.test/{}.jpg", id))
        .availability("in stock")
        .price("10 USD")
        .shipping("0 USD")
}

pub fn items(ids: &[&str]) -> Vec<FeedItem> {
    ids.iter().map(|id| item(id).build().into()).collect()
}

/// Parses the whole document and returns the number of `<entry>` elements.
///
/// Panics when the markup is not well formed.
pub fn count_entries(xml: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut entries = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"entry" => entries += 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("Malformed feed at {}: {:?}", reader.buffer_position(), e),
        }
    }
    entries
}

/// Raw (escaped) text of the first `<tag>` element.
pub fn raw_text<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    let start = xml.find(&open)? + open.len();
    let end = start + xml[start..].find(&close)?;
    Some(&xml[start..end])
}
