//! Attribute Parsing
//!
//! Turns raw trigger attributes into view-models. Every JSON-valued
//! attribute goes through `Parsed`, so an empty list can be told apart as
//! absent or malformed.

use serde::de::DeserializeOwned;

use crate::config::{DEFAULT_PRODUCT_NAME, PLACEHOLDER_IMAGE};
use crate::models::{CarouselView, ProductAttrs, ProductView, QuickViewAttrs};

/// Outcome of parsing one attribute
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// Attribute missing or empty
    Absent,
    /// Attribute present but unparsable
    Malformed(String),
    Present(T),
}

impl<T: Default> Parsed<T> {
    pub fn or_default(self) -> T {
        match self {
            Parsed::Present(value) => value,
            Parsed::Absent | Parsed::Malformed(_) => T::default(),
        }
    }
}

impl<T> Parsed<T> {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Parsed::Malformed(_))
    }

    /// Record a malformed value under `field`
    fn note(&self, field: &'static str, issues: &mut Vec<AttrIssue>) {
        if let Parsed::Malformed(error) = self {
            issues.push(AttrIssue { field, error: error.clone() });
        }
    }
}

/// A malformed attribute that was replaced by its default
#[derive(Debug, Clone, PartialEq)]
pub struct AttrIssue {
    pub field: &'static str,
    pub error: String,
}

/// Parse a JSON-valued attribute
pub fn parse_json_attr<T: DeserializeOwned>(raw: Option<&str>) -> Parsed<T> {
    match raw {
        None => Parsed::Absent,
        Some(s) if s.trim().is_empty() => Parsed::Absent,
        Some(s) => match serde_json::from_str(s) {
            Ok(value) => Parsed::Present(value),
            Err(e) => Parsed::Malformed(e.to_string()),
        },
    }
}

/// Split a comma-separated image list, dropping blank entries
pub fn split_images(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Lenient price parse: the longest numeric prefix, or 0
pub fn parse_price(raw: &str) -> f64 {
    let s = raw.trim_start();
    let candidate: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..end]
    };
    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Lenient quantity parse: leading integer, 1 when missing or below 1,
/// capped at the cart maximum
pub fn parse_quantity(raw: &str) -> u32 {
    let s = raw.trim_start();
    let digits_start = usize::from(s.starts_with('+'));
    let digits: &str = {
        let rest = &s[digits_start..];
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    match digits.parse::<u64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => cart_store::clamp_quantity(n.min(u64::from(u32::MAX)) as u32),
    }
}

/// Lower-case the name and replace each whitespace run with `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Normalize product attributes into the modal view-model
pub fn normalize_product(attrs: &ProductAttrs) -> (ProductView, Vec<AttrIssue>) {
    let mut issues = Vec::new();

    let name = non_empty(&attrs.name).unwrap_or(DEFAULT_PRODUCT_NAME).to_string();
    let price = parse_price(non_empty(&attrs.price).unwrap_or("0"));
    let description = attrs.description.clone().unwrap_or_default();
    let id = non_empty(&attrs.id)
        .map(String::from)
        .unwrap_or_else(|| slugify(&name));

    let mut images = split_images(attrs.images.as_deref().unwrap_or(""));
    if images.is_empty() {
        images.push(PLACEHOLDER_IMAGE.to_string());
    }

    let features: Parsed<Vec<String>> = parse_json_attr(attrs.features.as_deref());
    features.note("features", &mut issues);
    let sizes: Parsed<Vec<String>> = parse_json_attr(attrs.sizes.as_deref());
    sizes.note("sizes", &mut issues);

    let view = ProductView {
        id,
        name,
        price,
        description,
        images,
        features: features.or_default(),
        sizes: sizes.or_default(),
    };
    (view, issues)
}

/// Normalize quick-view attributes into the carousel view-model
pub fn normalize_quick_view(attrs: &QuickViewAttrs) -> (CarouselView, Vec<AttrIssue>) {
    let mut issues = Vec::new();
    let images: Parsed<Vec<String>> = parse_json_attr(attrs.images.as_deref());
    images.note("images", &mut issues);

    let view = CarouselView {
        title: attrs.title.clone().unwrap_or_default(),
        price: attrs.price.clone().unwrap_or_default(),
        images: images.or_default(),
    };
    (view, issues)
}
