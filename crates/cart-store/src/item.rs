//! Cart line item

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One product + size entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "id")]
    pub product_id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "price", default, deserialize_with = "lenient_price")]
    pub unit_price: f64,
    /// Empty for one-size products
    #[serde(default, deserialize_with = "null_as_empty")]
    pub size: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: u32,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "timestamp", default, deserialize_with = "lenient_count")]
    pub added_at: u64,
}

impl LineItem {
    pub fn new(
        product_id: impl Into<String>,
        display_name: impl Into<String>,
        unit_price: f64,
        size: impl Into<String>,
        quantity: u32,
        added_at: u64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            display_name: display_name.into(),
            unit_price,
            size: size.into(),
            quantity,
            added_at,
        }
    }

    /// Whether both items share the (product, size) key
    pub fn same_line(&self, other: &LineItem) -> bool {
        self.product_id == other.product_id && self.size == other.size
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Finite number as f64; null, NaN leftovers and non-numbers read as 0
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|p| p.is_finite()).unwrap_or(0.0))
}

/// Non-negative integer; fractions truncate, negatives and non-numbers
/// read as 0, oversized values saturate
fn lenient_count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + Bounded,
{
    let value = Value::deserialize(deserializer)?;
    let n = match value.as_u64() {
        Some(n) => n,
        None => value
            .as_f64()
            .filter(|f| f.is_finite() && *f > 0.0)
            .map(|f| f as u64)
            .unwrap_or(0),
    };
    Ok(T::try_from(n).unwrap_or(T::MAX))
}

trait Bounded {
    const MAX: Self;
}

impl Bounded for u32 {
    const MAX: Self = u32::MAX;
}

impl Bounded for u64 {
    const MAX: Self = u64::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_field_names() {
        let item = LineItem::new("tee-1", "Classic Tee", 19.5, "M", 2, 1000);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "tee-1");
        assert_eq!(json["name"], "Classic Tee");
        assert_eq!(json["price"], 19.5);
        assert_eq!(json["size"], "M");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["timestamp"], 1000);
    }

    #[test]
    fn test_lenient_fields() {
        let item: LineItem =
            serde_json::from_str(r#"{"id":"cap","name":"Cap","price":9,"size":null}"#).unwrap();
        assert_eq!(item.size, "");
        assert_eq!(item.quantity, 0);
        assert_eq!(item.added_at, 0);
    }

    #[test]
    fn test_bad_numbers_read_as_zero() {
        let item: LineItem = serde_json::from_str(
            r#"{"id":"cap","name":"Cap","price":null,"size":"","quantity":-2,"timestamp":"now"}"#,
        )
        .unwrap();
        assert_eq!(item.unit_price, 0.0);
        assert_eq!(item.quantity, 0);
        assert_eq!(item.added_at, 0);
    }

    #[test]
    fn test_fractional_and_oversized_quantities() {
        let fractional: LineItem =
            serde_json::from_str(r#"{"id":"a","name":"A","price":"9","quantity":2.7}"#).unwrap();
        assert_eq!(fractional.quantity, 2);
        assert_eq!(fractional.unit_price, 0.0);

        let oversized: LineItem =
            serde_json::from_str(r#"{"id":"a","name":"A","price":1,"quantity":1e12}"#).unwrap();
        assert_eq!(oversized.quantity, u32::MAX);
    }

    #[test]
    fn test_same_line() {
        let m = LineItem::new("tee-1", "Tee", 1.0, "M", 1, 0);
        let l = LineItem::new("tee-1", "Tee", 1.0, "L", 1, 0);
        let other = LineItem::new("tee-2", "Tee", 1.0, "M", 1, 0);
        assert!(m.same_line(&m.clone()));
        assert!(!m.same_line(&l));
        assert!(!m.same_line(&other));
    }
}
