//! Frontend Models
//!
//! Raw attribute records of the catalog's trigger elements and the typed
//! view-models the modals render.

use cart_store::LineItem;
use serde::Deserialize;

use crate::attrs::{format_price, parse_price};

/// Attributes carried by a product trigger element, as written in markup.
/// `images` is comma-separated; `features`, `sizes` and `gallery` are JSON
/// arrays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductAttrs {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub images: Option<String>,
    pub features: Option<String>,
    pub sizes: Option<String>,
    pub gallery: Option<String>,
}

impl ProductAttrs {
    /// Stable key for list rendering
    pub fn key(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_default()
    }

    /// Attributes of the quick-view trigger on the same card
    pub fn quick_view_attrs(&self) -> QuickViewAttrs {
        QuickViewAttrs {
            title: self.name.clone(),
            price: self.price.as_deref().map(|p| format_price(parse_price(p))),
            images: self.gallery.clone(),
        }
    }
}

/// Attributes carried by a quick-view trigger element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuickViewAttrs {
    pub title: Option<String>,
    pub price: Option<String>,
    /// JSON array of image URLs
    pub images: Option<String>,
}

/// Normalized product shown in the detail modal
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Never empty
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub sizes: Vec<String>,
}

/// One `<option>` of the size select
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOption {
    pub value: String,
    pub label: String,
}

impl ProductView {
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }

    /// Size options in order, or the single one-size option
    pub fn size_options(&self) -> Vec<SizeOption> {
        if self.sizes.is_empty() {
            return vec![SizeOption {
                value: String::new(),
                label: crate::config::ONE_SIZE_LABEL.to_string(),
            }];
        }
        self.sizes
            .iter()
            .map(|s| SizeOption { value: s.clone(), label: s.clone() })
            .collect()
    }

    /// Line item for this product with the chosen size and quantity
    pub fn line_item(&self, size: &str, quantity: u32, added_at: u64) -> LineItem {
        LineItem::new(&self.id, &self.name, self.price, size, quantity, added_at)
    }
}

/// Normalized quick-view carousel content
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub title: String,
    pub price: String,
    pub images: Vec<String>,
}

/// One carousel slide
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub src: String,
    pub alt: String,
}

impl CarouselView {
    pub fn slides(&self) -> Vec<Slide> {
        self.images
            .iter()
            .enumerate()
            .map(|(idx, src)| Slide {
                src: src.clone(),
                alt: format!("{} image {}", self.title, idx + 1),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{normalize_product, parse_quantity};
    use cart_store::MemoryStorage;

    fn slim_fit_tee() -> ProductAttrs {
        ProductAttrs {
            name: Some("Slim Fit Tee".to_string()),
            price: Some("12.5".to_string()),
            sizes: Some(r#"["M"]"#.to_string()),
            gallery: Some(r#"["front.jpg"]"#.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_line_item_uses_normalized_product() {
        let (product, _) = normalize_product(&slim_fit_tee());
        let size = product.size_options()[0].value.clone();
        let item = product.line_item(&size, parse_quantity("2"), 1_000);

        assert_eq!(item.product_id, "slim-fit-tee");
        assert_eq!(item.display_name, "Slim Fit Tee");
        assert_eq!(item.unit_price, 12.5);
        assert_eq!(item.size, "M");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.added_at, 1_000);
    }

    #[test]
    fn test_derived_id_is_the_merge_key() {
        let storage = MemoryStorage::default();
        let (product, _) = normalize_product(&slim_fit_tee());
        cart_store::add_to_cart(&storage, product.line_item("M", 2, 1_000)).unwrap();

        let (reopened, _) = normalize_product(&slim_fit_tee());
        let total = cart_store::add_to_cart(&storage, reopened.line_item("M", 3, 2_000)).unwrap();

        let items = cart_store::load(&storage);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, "slim-fit-tee");
        assert_eq!(items[0].quantity, 5);
        assert_eq!(total, 5);
    }

    #[test]
    fn test_quick_view_attrs_format_price() {
        let quick = slim_fit_tee().quick_view_attrs();
        assert_eq!(quick.title.as_deref(), Some("Slim Fit Tee"));
        assert_eq!(quick.price.as_deref(), Some("$12.50"));
        assert_eq!(quick.images.as_deref(), Some(r#"["front.jpg"]"#));

        let no_price = ProductAttrs::default().quick_view_attrs();
        assert_eq!(no_price.price, None);
    }
}
