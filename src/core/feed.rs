use std::fmt;

use crate::{error::FeedError, feeds::google_merchant::GoogleMerchantItem};

use super::node::Nodes;

/// Identifies which feed schema an item or a feed belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// Google Merchant product feed (Atom + `g:` namespace)
    GoogleMerchant,
    /// Feed kind implemented outside of this crate
    Custom(&'static str),
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::GoogleMerchant => write!(f, "google-merchant"),
            FeedKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// One record of the item collection, tagged with the feed kind it was built for.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedItem {
    GoogleMerchant(GoogleMerchantItem),
    /// Item of a custom feed kind, already mapped to its nodes.
    Custom { kind: &'static str, nodes: Nodes },
}

impl FeedItem {
    pub fn kind(&self) -> FeedKind {
        match self {
            FeedItem::GoogleMerchant(_) => FeedKind::GoogleMerchant,
            FeedItem::Custom { kind, .. } => FeedKind::Custom(*kind),
        }
    }
}

impl From<GoogleMerchantItem> for FeedItem {
    fn from(item: GoogleMerchantItem) -> Self {
        FeedItem::GoogleMerchant(item)
    }
}

/// A feed schema: how the header is validated and laid out, and how every
/// item maps to nodes.
///
/// The generic [`FeedGenerator`](super::generator::FeedGenerator) drives any
/// implementation through the same serializer.
pub trait Feed {
    /// Kind of items this feed accepts.
    fn kind(&self) -> FeedKind;

    /// MIME type of the generated document.
    fn content_type(&self) -> &'static str;

    /// Checks that every required header field is set.
    fn validate(&self) -> Result<(), FeedError>;

    /// Name of the root element.
    fn root_tag(&self) -> &str;

    /// Attributes of the root element (namespace declarations).
    fn root_attributes(&self) -> Vec<(&str, &str)> {
        Vec::new()
    }

    /// Header elements written right after the root start tag.
    fn header(&self) -> Nodes;

    /// Name of the element wrapping each item.
    fn entry_tag(&self) -> &str;

    /// Checks one item before it is written. Only called for items of the
    /// feed's own kind.
    fn validate_item(&self, item: &FeedItem) -> Result<(), FeedError>;

    /// Maps one item to the elements of its entry.
    fn item_nodes(&self, item: &FeedItem) -> Result<Nodes, FeedError>;
}
