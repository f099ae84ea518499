use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::error::FeedError;

use super::{
    feed::{Feed, FeedItem, FeedKind},
    serializer::TreeSerializer,
    writer::MarkupWriter,
};

/// Progress of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// Nothing checked nor written yet
    Idle,
    /// Header is valid; the sink has not been touched
    HeaderValidated,
    /// Sink is open and entries are being written
    Streaming,
    /// Closing envelope written and sink closed
    Done,
    /// Generation aborted
    Failed,
}

/// Outcome of a successful generation.
#[derive(Debug)]
pub struct FeedSummary {
    pub kind: FeedKind,
    /// MIME type of the written document
    pub content_type: &'static str,
    /// Number of `<entry>` elements written
    pub entries: usize,
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
}

/// Writes a feed and its items to a [`MarkupWriter`].
///
/// The header is validated before the sink is opened. Items are validated one
/// at a time, right before their entry is written, so an invalid item aborts
/// the generation after the previous entries have reached the sink. Use
/// [`FeedGenerator::validate_all`] first when the whole feed must be checked
/// before anything is written.
///
/// Once the sink has been opened it is closed exactly once, whatever the
/// outcome.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use feed_batch_rs::core::{feed::FeedItem, generator::FeedGenerator};
/// use feed_batch_rs::feeds::google_merchant::{GoogleMerchantFeedBuilder, GoogleMerchantItemBuilder};
/// use feed_batch_rs::writer::StringMarkupWriter;
///
/// let feed = GoogleMerchantFeedBuilder::new()
///     .title("Shop")
///     .website_url("https://x.test")
///     .updated(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
///     .author("A")
///     .build();
///
/// let items: Vec<FeedItem> = vec![GoogleMerchantItemBuilder::new()
///     .id("1")
///     .title("T")
///     .description("D")
///     .url("https://x.test/1")
///     .image_url("https://x.test/1.jpg")
///     .availability("in stock")
///     .price("10 USD")
///     .shipping("0 USD")
///     .build()
///     .into()];
///
/// let mut writer = StringMarkupWriter::new();
/// let summary = FeedGenerator::new(&feed).generate(&items, &mut writer).unwrap();
///
/// assert_eq!(summary.entries, 1);
/// assert_eq!(summary.content_type, "application/atom+xml");
/// assert!(writer.as_str().contains("<g:id>1</g:id>"));
/// ```
pub struct FeedGenerator<'a, F: Feed + ?Sized> {
    feed: &'a F,
}

impl<'a, F: Feed + ?Sized> FeedGenerator<'a, F> {
    pub fn new(feed: &'a F) -> Self {
        Self { feed }
    }

    /// Generates the whole document into `writer`.
    ///
    /// # Errors
    /// - [`FeedError::Validation`] when the header or an item misses a
    ///   required field
    /// - [`FeedError::ItemType`] when an item belongs to another feed kind
    /// - [`FeedError::Writer`] when the sink fails
    pub fn generate<'i, I, W>(&self, items: I, writer: &mut W) -> Result<FeedSummary, FeedError>
    where
        I: IntoIterator<Item = &'i FeedItem>,
        W: MarkupWriter + ?Sized,
    {
        let start = Instant::now();
        let kind = self.feed.kind();
        let mut state = GenerationState::Idle;

        info!("Start of feed generation: {}", kind);

        if let Err(err) = self.feed.validate() {
            error!("Invalid feed header: {}", err);
            Self::transition(&mut state, GenerationState::Failed);
            return Err(err);
        }
        Self::transition(&mut state, GenerationState::HeaderValidated);

        let result = self.stream(items, writer, &mut state);
        let close_result = writer.close();

        let entries = match (result, close_result) {
            (Ok(entries), Ok(())) => entries,
            (Ok(_), Err(err)) => {
                error!("Failed to close feed writer: {}", err);
                Self::transition(&mut state, GenerationState::Failed);
                return Err(err);
            }
            (Err(err), close_result) => {
                if let Err(close_err) = close_result {
                    error!("Failed to close feed writer: {}", close_err);
                }
                error!("Feed generation aborted: {}", err);
                Self::transition(&mut state, GenerationState::Failed);
                return Err(err);
            }
        };
        Self::transition(&mut state, GenerationState::Done);

        let end = Instant::now();
        info!(
            "End of feed generation: {}, entries: {}, duration: {:?}",
            kind,
            entries,
            end - start
        );

        Ok(FeedSummary {
            kind,
            content_type: self.feed.content_type(),
            entries,
            start,
            end,
            duration: end - start,
        })
    }

    /// Validates the header and every item without writing anything.
    pub fn validate_all<'i, I>(&self, items: I) -> Result<(), FeedError>
    where
        I: IntoIterator<Item = &'i FeedItem>,
    {
        self.feed.validate()?;
        for (index, item) in items.into_iter().enumerate() {
            self.check_item(index, item)?;
        }
        Ok(())
    }

    fn stream<'i, I, W>(
        &self,
        items: I,
        writer: &mut W,
        state: &mut GenerationState,
    ) -> Result<usize, FeedError>
    where
        I: IntoIterator<Item = &'i FeedItem>,
        W: MarkupWriter + ?Sized,
    {
        writer.open()?;
        Self::transition(state, GenerationState::Streaming);

        let mut serializer = TreeSerializer::new(writer);
        serializer.write_declaration()?;
        serializer.write_start_tag(self.feed.root_tag(), &self.feed.root_attributes())?;
        serializer.serialize(&self.feed.header())?;

        let mut entries = 0;
        for (index, item) in items.into_iter().enumerate() {
            self.check_item(index, item)?;
            let nodes = self
                .feed
                .item_nodes(item)
                .map_err(|err| err.at_index(index))?;

            debug!("Writing entry #{}", index);
            serializer.write_start_tag(self.feed.entry_tag(), &[])?;
            serializer.serialize(&nodes)?;
            serializer.write_end_tag(self.feed.entry_tag())?;
            entries += 1;
        }

        serializer.write_end_tag(self.feed.root_tag())?;
        Ok(entries)
    }

    fn check_item(&self, index: usize, item: &FeedItem) -> Result<(), FeedError> {
        let expected = self.feed.kind();
        let found = item.kind();
        if found != expected {
            return Err(FeedError::ItemType {
                index,
                expected,
                found,
            });
        }
        self.feed.validate_item(item)
    }

    fn transition(state: &mut GenerationState, next: GenerationState) {
        debug!("Feed generation: {:?} -> {:?}", state, next);
        *state = next;
    }
}
