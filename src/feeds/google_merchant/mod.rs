//! Google Merchant product feed.
//!
//! An Atom document whose entries carry product attributes in the
//! `http://base.google.com/ns/1.0` namespace, bound to the `g` prefix.
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <feed xmlns="http://www.w3.org/2005/Atom" xmlns:g="http://base.google.com/ns/1.0">
//! <title>Shop</title>
//! <link href="https://x.test" rel="alternate" type="text/html"/>
//! <updated>2024-01-01T00:00:00+00:00</updated>
//! <author>
//! <name>A</name>
//! </author>
//! <entry>
//! <g:id>1</g:id>
//! ...
//! </entry>
//! </feed>
//! ```

pub mod feed;
pub mod item;

pub use feed::{GoogleMerchantFeed, GoogleMerchantFeedBuilder};
pub use item::{GoogleMerchantItem, GoogleMerchantItemBuilder};
