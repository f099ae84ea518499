use std::env::temp_dir;

use chrono::Utc;
use feed_batch_rs::{
    core::{feed::FeedItem, generator::FeedGenerator},
    error::FeedError,
    feeds::google_merchant::{GoogleMerchantFeedBuilder, GoogleMerchantItemBuilder},
    writer::{IoMarkupWriterBuilder, LoggerWriter},
};

fn main() -> Result<(), FeedError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let feed = GoogleMerchantFeedBuilder::new()
        .title("Garden & Home")
        .website_url("https://shop.example")
        .updated(Utc::now())
        .author("Garden & Home s.r.o.")
        .build();

    let items: Vec<FeedItem> = vec![
        GoogleMerchantItemBuilder::new()
            .id("CHAIR-1")
            .title("Garden chair")
            .description("Foldable garden chair, <b>weatherproof</b>")
            .url("https://shop.example/chair")
            .image_url("https://shop.example/chair.jpg")
            .availability("in stock")
            .price("49.90 EUR")
            .shipping("4.90 EUR")
            .brand("Acme")
            .ean("8591234567890")
            .build()
            .into(),
        GoogleMerchantItemBuilder::new()
            .id("TABLE-1")
            .title("Garden table")
            .description("Teak table")
            .url("https://shop.example/table")
            .image_url("https://shop.example/table.jpg")
            .availability("preorder")
            .price("199 EUR")
            .price_sale("179 EUR")
            .shipping("0 EUR")
            .group_id("TABLES")
            .build()
            .into(),
    ];

    let generator = FeedGenerator::new(&feed);

    // Log the document first
    generator.generate(&items, &mut LoggerWriter::default())?;

    // Then write it to a file
    let path = temp_dir().join("google_merchant.xml");
    let mut writer = IoMarkupWriterBuilder::new().from_path(&path)?;
    let summary = generator.generate(&items, &mut writer)?;

    println!(
        "{} entries written to {} ({}) in {:?}",
        summary.entries,
        path.display(),
        summary.content_type,
        summary.duration
    );

    Ok(())
}
