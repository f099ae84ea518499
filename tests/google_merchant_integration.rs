mod common;

use std::fs;

use feed_batch_rs::{
    core::{feed::FeedItem, generator::FeedGenerator},
    error::FeedError,
    feeds::google_merchant::{
        GoogleMerchantFeed, GoogleMerchantFeedBuilder, GoogleMerchantItem,
        GoogleMerchantItemBuilder,
    },
    writer::{IoMarkupWriterBuilder, StringMarkupWriter},
};
use quick_xml::escape::unescape;
use tempfile::NamedTempFile;

use common::{count_entries, feed, init_logger, item, items, raw_text, updated};

fn generate(feed: &GoogleMerchantFeed, items: &[FeedItem]) -> String {
    let mut writer = StringMarkupWriter::new();
    FeedGenerator::new(feed)
        .generate(items, &mut writer)
        .unwrap();
    writer.into_string()
}

#[test]
fn reference_example_produces_expected_document() {
    init_logger();

    let xml = generate(&feed().build(), &items(&["1"]));

    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <feed xmlns=\"http://www.w3.org/2005/Atom\" xmlns:g=\"http://base.google.com/ns/1.0\">\n\
         <title>Shop</title>\n\
         <link href=\"https://x.test\" rel=\"alternate\" type=\"text/html\"/>\n\
         <updated>2024-01-01T00:00:00+00:00</updated>\n\
         <author>\n\
         <name>A</name>\n\
         </author>\n\
         <entry>\n\
         <g:id>1</g:id>\n\
         <g:title>T</g:title>\n\
         <g:description>D</g:description>\n\
         <g:link>https://x.test/1</g:link>\n\
         <g:image_link>https://x.test/1.jpg</g:image_link>\n\
         <g:availability>in stock</g:availability>\n\
         <g:price>10 USD</g:price>\n\
         <g:adult>no</g:adult>\n\
         <g:identifier_exists>no</g:identifier_exists>\n\
         <g:shipping>\n\
         <g:price>0 USD</g:price>\n\
         </g:shipping>\n\
         </entry>\n\
         </feed>\n"
    );
    assert!(!xml.contains("<g:gtin>"));
    assert_eq!(count_entries(&xml), 1);
}

#[test]
fn ean_replaces_identifier_exists_with_gtin() {
    let items: Vec<FeedItem> = vec![item("1").ean("8591234567890").build().into()];

    let xml = generate(&feed().build(), &items);

    assert!(xml.contains("<g:gtin>8591234567890</g:gtin>"));
    assert!(!xml.contains("g:identifier_exists"));
}

#[test]
fn full_item_is_written_in_table_order() {
    // setters deliberately called in reverse table order
    let items: Vec<FeedItem> = vec![
        GoogleMerchantItemBuilder::new()
            .price_sale("8 USD")
            .ean("123")
            .brand("Acme")
            .product_type("Home > Garden")
            .google_category("Furniture")
            .shipping_label("bulky")
            .group_id("G1")
            .size("L")
            .gender("unisex")
            .color("red")
            .adult(true)
            .condition("new")
            .shipping("5 USD")
            .price("10 USD")
            .availability("in stock")
            .image_url("https://x.test/1.jpg")
            .url("https://x.test/1")
            .description("D")
            .title("T")
            .id("1")
            .build()
            .into(),
    ];

    let xml = generate(&feed().build(), &items);

    let tags = [
        "<g:id>",
        "<g:title>",
        "<g:description>",
        "<g:link>",
        "<g:image_link>",
        "<g:availability>",
        "<g:price>10 USD",
        "<g:condition>",
        "<g:adult>yes",
        "<g:color>",
        "<g:gender>",
        "<g:size>",
        "<g:item_group_id>",
        "<g:shipping_label>",
        "<g:shipping>",
        "<g:google_product_category>",
        "<g:product_type>Home &gt; Garden",
        "<g:brand>",
        "<g:gtin>",
        "<g:sale_price>",
    ];
    let positions: Vec<usize> = tags
        .iter()
        .map(|tag| xml.find(tag).unwrap_or_else(|| panic!("{} not found", tag)))
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(count_entries(&xml), 1);
}

#[test]
fn entries_follow_input_order() {
    let xml = generate(&feed().build(), &items(&["3", "1", "2"]));

    let first = xml.find("<g:id>3</g:id>").unwrap();
    let second = xml.find("<g:id>1</g:id>").unwrap();
    let third = xml.find("<g:id>2</g:id>").unwrap();

    assert!(first < second);
    assert!(second < third);
    assert_eq!(count_entries(&xml), 3);
}

#[test]
fn generation_is_repeatable() {
    let feed = feed().build();
    let items = items(&["1", "2"]);

    let first = generate(&feed, &items);
    let second = generate(&feed, &items);

    assert_eq!(first, second);
}

#[test]
fn unset_optional_fields_are_omitted() {
    type Setter = fn(GoogleMerchantItemBuilder) -> GoogleMerchantItemBuilder;

    let optional: [(&str, Setter); 11] = [
        ("g:brand", |b| b.brand("Acme")),
        ("g:gtin", |b| b.ean("123")),
        ("g:sale_price", |b| b.price_sale("8 USD")),
        ("g:google_product_category", |b| b.google_category("Furniture")),
        ("g:product_type", |b| b.product_type("Garden")),
        ("g:item_group_id", |b| b.group_id("G1")),
        ("g:color", |b| b.color("red")),
        ("g:size", |b| b.size("L")),
        ("g:gender", |b| b.gender("male")),
        ("g:condition", |b| b.condition("new")),
        ("g:shipping_label", |b| b.shipping_label("bulky")),
    ];

    let without = generate(&feed().build(), &items(&["1"]));

    for (tag, set) in optional {
        assert!(
            !without.contains(&format!("<{}>", tag)),
            "{} written while unset",
            tag
        );

        let with_items: Vec<FeedItem> = vec![set(item("1")).build().into()];
        let with = generate(&feed().build(), &with_items);
        assert!(
            with.contains(&format!("<{}>", tag)),
            "{} missing while set",
            tag
        );
    }
}

#[test]
fn special_characters_survive_escaping() {
    let title = r#"Chair "Deluxe" <40% off> & more"#;
    let url = r#"https://x.test/?a=1&b="2""#;
    let feed = feed().title("Fish & Chips <Shop>").website_url(url).build();
    let items: Vec<FeedItem> = vec![
        item("1")
            .title(title)
            .description("5 < 6 && 7 > 6")
            .build()
            .into(),
    ];

    let xml = generate(&feed, &items);

    assert_eq!(count_entries(&xml), 1);

    let written = raw_text(&xml, "g:title").unwrap();
    assert!(!written.contains('<'));
    assert_eq!(unescape(written).unwrap(), title);

    let written = raw_text(&xml, "g:description").unwrap();
    assert_eq!(unescape(written).unwrap(), "5 < 6 && 7 > 6");

    let written = raw_text(&xml, "title").unwrap();
    assert_eq!(unescape(written).unwrap(), "Fish & Chips <Shop>");

    let start = xml.find("href=\"").unwrap() + "href=\"".len();
    let end = start + xml[start..].find('"').unwrap();
    assert_eq!(unescape(&xml[start..end]).unwrap(), url);
}

#[test]
fn missing_header_field_writes_nothing() {
    let cases = [
        (
            "title",
            GoogleMerchantFeedBuilder::new()
                .website_url("https://x.test")
                .updated(updated())
                .author("A")
                .build(),
        ),
        (
            "website_url",
            GoogleMerchantFeedBuilder::new()
                .title("Shop")
                .updated(updated())
                .author("A")
                .build(),
        ),
        (
            "updated",
            GoogleMerchantFeedBuilder::new()
                .title("Shop")
                .website_url("https://x.test")
                .author("A")
                .build(),
        ),
        (
            "author",
            GoogleMerchantFeedBuilder::new()
                .title("Shop")
                .website_url("https://x.test")
                .updated(updated())
                .build(),
        ),
    ];

    for (expected, header) in cases {
        let mut writer = StringMarkupWriter::new();

        let result = FeedGenerator::new(&header).generate(&items(&["1"]), &mut writer);

        match result {
            Err(FeedError::Validation { field, hint }) => {
                assert_eq!(field, expected);
                assert!(hint.contains(&format!("GoogleMerchantFeedBuilder::{}()", expected)));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert_eq!(writer.as_str(), "");
        assert!(!writer.is_opened());
        assert!(!writer.is_closed());
    }
}

#[test]
fn empty_header_field_is_missing() {
    let header = feed().author("").build();
    let mut writer = StringMarkupWriter::new();

    let result = FeedGenerator::new(&header).generate(&items(&["1"]), &mut writer);

    assert!(matches!(
        result,
        Err(FeedError::Validation { field: "author", .. })
    ));
    assert_eq!(writer.as_str(), "");
}

#[test]
fn late_invalid_item_keeps_previous_entries() {
    init_logger();

    let mut items = items(&["1", "2"]);
    items.push(GoogleMerchantItemBuilder::new().id("3").title("T").build().into());
    let mut writer = StringMarkupWriter::new();

    let result = FeedGenerator::new(&feed().build()).generate(&items, &mut writer);

    assert!(matches!(
        result,
        Err(FeedError::Validation {
            field: "description",
            ..
        })
    ));
    let xml = writer.as_str();
    assert_eq!(xml.matches("<entry>").count(), 2);
    assert_eq!(xml.matches("</entry>").count(), 2);
    assert!(xml.ends_with("</entry>\n"));
    assert!(!xml.contains("<g:id>3</g:id>"));
    assert!(!xml.contains("</feed>"));
    assert!(writer.is_closed());
}

#[test]
fn validate_all_rejects_before_writing() {
    let mut items = items(&["1"]);
    items.push(GoogleMerchantItemBuilder::new().id("2").build().into());

    let feed = feed().build();
    let generator = FeedGenerator::new(&feed);

    assert!(matches!(
        generator.validate_all(&items),
        Err(FeedError::Validation { field: "title", .. })
    ));
    assert!(generator.validate_all(&items[..1]).is_ok());
}

#[test]
fn write_feed_to_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let mut writer = IoMarkupWriterBuilder::new()
        .from_path(temp_file.path())
        .unwrap();

    let summary = FeedGenerator::new(&feed().build())
        .generate(&items(&["1", "2", "3"]), &mut writer)
        .unwrap();

    let content = fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(summary.entries, 3);
    assert_eq!(summary.content_type, "application/atom+xml");
    assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
    assert!(content.ends_with("</feed>\n"));
    assert_eq!(count_entries(&content), 3);
}

#[test]
fn items_loaded_from_json() {
    let json = r#"[
        {
            "id": "A-1",
            "title": "Lamp",
            "description": "Desk lamp",
            "url": "https://x.test/lamp",
            "image_url": "https://x.test/lamp.jpg",
            "availability": "in stock",
            "price": "20 USD",
            "shipping": "3 USD",
            "brand": "Lumen",
            "adult": false
        },
        {
            "id": "A-2",
            "title": "Bulb",
            "description": "LED bulb",
            "url": "https://x.test/bulb",
            "image_url": "https://x.test/bulb.jpg",
            "availability": "out of stock",
            "price": "5 USD",
            "shipping": "1 USD"
        }
    ]"#;

    let records: Vec<GoogleMerchantItem> = serde_json::from_str(json).unwrap();
    let items: Vec<FeedItem> = records.into_iter().map(FeedItem::from).collect();

    let xml = generate(&feed().build(), &items);

    assert_eq!(count_entries(&xml), 2);
    assert!(xml.contains("<g:brand>Lumen</g:brand>"));
    assert!(xml.contains("<g:availability>out of stock</g:availability>"));
}
