use serde::{Deserialize, Serialize};

use crate::{
    core::node::{Node, Nodes},
    error::FeedError,
};

/// One product of a Google Merchant feed.
///
/// Built with [`GoogleMerchantItemBuilder`]; required fields are only checked
/// when the item is about to be written (see [`GoogleMerchantItem::validate`]).
///
/// Fields map to the Google Merchant product data attributes
/// (<https://support.google.com/merchants/answer/7052112>).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleMerchantItem {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    image_url: Option<String>,
    availability: Option<String>,
    price: Option<String>,
    shipping: Option<String>,

    brand: Option<String>,
    ean: Option<String>,
    price_sale: Option<String>,
    google_category: Option<String>,
    product_type: Option<String>,
    group_id: Option<String>,
    color: Option<String>,
    size: Option<String>,
    gender: Option<String>,
    condition: Option<String>,
    #[serde(default)]
    adult: bool,
    shipping_label: Option<String>,
}

/// Empty strings count as unset.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn require(value: &Option<String>, field: &'static str, method: &str) -> Result<(), FeedError> {
    match present(value) {
        Some(_) => Ok(()),
        None => Err(FeedError::missing(field, method)),
    }
}

impl GoogleMerchantItem {
    pub fn id(&self) -> Option<&str> {
        present(&self.id)
    }

    pub fn ean(&self) -> Option<&str> {
        present(&self.ean)
    }

    pub fn is_adult(&self) -> bool {
        self.adult
    }

    /// Checks the required fields, in output order, and reports the first
    /// missing one.
    pub fn validate(&self) -> Result<(), FeedError> {
        require(&self.id, "id", "GoogleMerchantItemBuilder::id")?;
        require(&self.title, "title", "GoogleMerchantItemBuilder::title")?;
        require(
            &self.description,
            "description",
            "GoogleMerchantItemBuilder::description",
        )?;
        require(&self.url, "url", "GoogleMerchantItemBuilder::url")?;
        require(
            &self.image_url,
            "image_url",
            "GoogleMerchantItemBuilder::image_url",
        )?;
        require(
            &self.availability,
            "availability",
            "GoogleMerchantItemBuilder::availability",
        )?;
        require(&self.price, "price", "GoogleMerchantItemBuilder::price")?;
        require(
            &self.shipping,
            "shipping",
            "GoogleMerchantItemBuilder::shipping",
        )?;
        Ok(())
    }

    /// Maps the item to the `g:` elements of its `<entry>`.
    ///
    /// The order is fixed and does not depend on the order the builder
    /// methods were called in.
    pub fn to_nodes(&self) -> Nodes {
        let text = |value: &Option<String>| Node::optional(present(value));

        let identifier_exists = match self.ean() {
            Some(_) => None,
            None => Some("no"),
        };

        Nodes::with_capacity(21)
            .node("g:id", text(&self.id))
            .node("g:title", text(&self.title))
            .node("g:description", text(&self.description))
            .node("g:link", text(&self.url))
            .node("g:image_link", text(&self.image_url))
            // price & availability
            .node("g:availability", text(&self.availability))
            .node("g:price", text(&self.price))
            // features
            .node("g:condition", text(&self.condition))
            .node("g:adult", Node::text(if self.adult { "yes" } else { "no" }))
            .node("g:color", text(&self.color))
            .node("g:gender", text(&self.gender))
            .node("g:size", text(&self.size))
            .node("g:item_group_id", text(&self.group_id))
            .node("g:shipping_label", text(&self.shipping_label))
            // identifiers
            .node("g:identifier_exists", Node::optional(identifier_exists))
            .node(
                "g:shipping",
                Node::Composite(Nodes::new().node("g:price", text(&self.shipping))),
            )
            .node("g:google_product_category", text(&self.google_category))
            .node("g:product_type", text(&self.product_type))
            .node("g:brand", text(&self.brand))
            .node("g:gtin", text(&self.ean))
            .node("g:sale_price", text(&self.price_sale))
    }
}

/// Builder for [`GoogleMerchantItem`].
///
/// # Examples
///
/// ```
/// use feed_batch_rs::feeds::google_merchant::GoogleMerchantItemBuilder;
///
/// let item = GoogleMerchantItemBuilder::new()
///     .id("SKU-1")
///     .title("Garden chair")
///     .description("Foldable garden chair")
///     .url("https://shop.test/chair")
///     .image_url("https://shop.test/chair.jpg")
///     .availability("in stock")
///     .price("49.90 EUR")
///     .shipping("4.90 EUR")
///     .ean("8591234567890")
///     .build();
///
/// assert!(item.validate().is_ok());
/// assert_eq!(item.ean(), Some("8591234567890"));
/// ```
#[derive(Default)]
pub struct GoogleMerchantItemBuilder {
    item: GoogleMerchantItem,
}

macro_rules! item_setters {
    ($($(#[$doc:meta])* $field:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $field(mut self, $field: impl Into<String>) -> Self {
                self.item.$field = Some($field.into());
                self
            }
        )*
    };
}

impl GoogleMerchantItemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    item_setters!(
        /// Unique product identifier (`g:id`). Required.
        id,
        /// Required.
        title,
        /// Required.
        description,
        /// Product landing page (`g:link`). Required.
        url,
        /// Main image (`g:image_link`). Required.
        image_url,
        /// `in stock`, `out of stock`, `preorder` or `backorder`. Required.
        availability,
        /// Price with currency, e.g. `10 USD`. Required.
        price,
        /// Shipping cost with currency (`g:shipping/g:price`). Required.
        shipping,
        brand,
        /// EAN, written as `g:gtin`. Without it the entry declares
        /// `g:identifier_exists` as `no`.
        ean,
        /// Written as `g:sale_price`.
        price_sale,
        /// Written as `g:google_product_category`.
        google_category,
        product_type,
        /// Written as `g:item_group_id`.
        group_id,
        color,
        size,
        gender,
        condition,
        shipping_label,
    );

    /// Marks the product as adult content. Defaults to `false`.
    pub fn adult(mut self, adult: bool) -> Self {
        self.item.adult = adult;
        self
    }

    pub fn build(self) -> GoogleMerchantItem {
        self.item
    }
}
