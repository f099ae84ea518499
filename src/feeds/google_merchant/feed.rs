use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        feed::{Feed, FeedItem, FeedKind},
        node::{Node, Nodes},
    },
    error::FeedError,
};

use super::item::GoogleMerchantItem;

/// XML namespace of Atom feeds.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// XML namespace bound to the `g` prefix.
pub const GOOGLE_NAMESPACE: &str = "http://base.google.com/ns/1.0";

pub const CONTENT_TYPE: &str = "application/atom+xml";

/// Header of a Google Merchant product feed.
///
/// See <https://support.google.com/merchants/answer/160593>.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleMerchantFeed {
    title: Option<String>,
    website_url: Option<String>,
    updated: Option<DateTime<FixedOffset>>,
    author: Option<String>,
}

impl GoogleMerchantFeed {
    /// `updated` as written in the feed: RFC 3339, whole seconds, numeric offset.
    pub fn formatted_updated(&self) -> Option<String> {
        self.updated
            .map(|updated| updated.to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

fn missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn as_item<'i>(
    item: &'i FeedItem,
    expected: FeedKind,
) -> Result<&'i GoogleMerchantItem, FeedError> {
    match item {
        FeedItem::GoogleMerchant(item) => Ok(item),
        other => Err(FeedError::ItemType {
            index: 0,
            expected,
            found: other.kind(),
        }),
    }
}

impl Feed for GoogleMerchantFeed {
    fn kind(&self) -> FeedKind {
        FeedKind::GoogleMerchant
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    fn validate(&self) -> Result<(), FeedError> {
        if missing(&self.title) {
            return Err(FeedError::missing(
                "title",
                "GoogleMerchantFeedBuilder::title",
            ));
        }
        if missing(&self.website_url) {
            return Err(FeedError::missing(
                "website_url",
                "GoogleMerchantFeedBuilder::website_url",
            ));
        }
        if self.updated.is_none() {
            return Err(FeedError::missing(
                "updated",
                "GoogleMerchantFeedBuilder::updated",
            ));
        }
        if missing(&self.author) {
            return Err(FeedError::missing(
                "author",
                "GoogleMerchantFeedBuilder::author",
            ));
        }
        Ok(())
    }

    fn root_tag(&self) -> &str {
        "feed"
    }

    fn root_attributes(&self) -> Vec<(&str, &str)> {
        vec![("xmlns", ATOM_NAMESPACE), ("xmlns:g", GOOGLE_NAMESPACE)]
    }

    fn header(&self) -> Nodes {
        Nodes::new()
            .node("title", Node::optional(self.title.clone()))
            .node(
                "link",
                Node::attributes([
                    ("href", self.website_url.as_deref()),
                    ("rel", Some("alternate")),
                    ("type", Some("text/html")),
                ]),
            )
            .node("updated", Node::optional(self.formatted_updated()))
            .node(
                "author",
                Node::Composite(Nodes::new().node("name", Node::optional(self.author.clone()))),
            )
    }

    fn entry_tag(&self) -> &str {
        "entry"
    }

    fn validate_item(&self, item: &FeedItem) -> Result<(), FeedError> {
        as_item(item, self.kind())?.validate()
    }

    fn item_nodes(&self, item: &FeedItem) -> Result<Nodes, FeedError> {
        Ok(as_item(item, self.kind())?.to_nodes())
    }
}

/// Builder for [`GoogleMerchantFeed`].
///
/// Every field is required; missing ones are reported when the feed is
/// generated.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use feed_batch_rs::feeds::google_merchant::GoogleMerchantFeedBuilder;
///
/// let feed = GoogleMerchantFeedBuilder::new()
///     .title("Shop")
///     .website_url("https://x.test")
///     .updated(DateTime::parse_from_rfc3339("2024-01-01T10:30:00+02:00").unwrap())
///     .author("A")
///     .build();
///
/// assert_eq!(
///     feed.formatted_updated().as_deref(),
///     Some("2024-01-01T10:30:00+02:00")
/// );
/// ```
#[derive(Default)]
pub struct GoogleMerchantFeedBuilder {
    feed: GoogleMerchantFeed,
}

impl GoogleMerchantFeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.feed.title = Some(title.into());
        self
    }

    /// Shop home page, written as the `alternate` link of the feed.
    pub fn website_url(mut self, website_url: impl Into<String>) -> Self {
        self.feed.website_url = Some(website_url.into());
        self
    }

    /// Last update of the catalog. Any offset is kept as given.
    pub fn updated(mut self, updated: impl Into<DateTime<FixedOffset>>) -> Self {
        self.feed.updated = Some(updated.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.feed.author = Some(author.into());
        self
    }

    pub fn build(self) -> GoogleMerchantFeed {
        self.feed
    }
}
