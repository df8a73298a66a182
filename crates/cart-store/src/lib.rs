//! Cart Store
//!
//! Shopping cart line items persisted under a single browser storage key.
//! The stored value is a JSON array; anything that fails to parse reads as
//! an empty cart.

mod item;
mod storage;

pub use item::LineItem;
pub use storage::{CartStorage, LocalStorage, MemoryStorage};

use std::fmt;

/// Storage key holding the serialized cart
pub const CART_KEY: &str = "clothify_cart";

/// Upper bound for the quantity of a single line item
pub const MAX_QUANTITY: u32 = 99;

/// Cart persistence errors
#[derive(Debug, Clone, PartialEq)]
pub enum CartError {
    /// Stored value exists but is not a valid cart
    Malformed(String),
    /// Backend refused the write (quota, storage disabled, no window)
    Storage(String),
}

impl fmt::Display for CartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartError::Malformed(msg) => write!(f, "malformed cart data: {}", msg),
            CartError::Storage(msg) => write!(f, "cart storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for CartError {}

// ========================
// Storage Accessor
// ========================

/// Read the stored cart, reporting a value that does not parse
pub fn try_load(storage: &impl CartStorage) -> Result<Vec<LineItem>, CartError> {
    match storage.read(CART_KEY) {
        None => Ok(Vec::new()),
        Some(raw) if raw.is_empty() => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(|e| CartError::Malformed(e.to_string())),
    }
}

/// Read the stored cart; absent or malformed data is an empty cart
pub fn load(storage: &impl CartStorage) -> Vec<LineItem> {
    try_load(storage).unwrap_or_default()
}

/// Overwrite the stored cart
pub fn save(storage: &impl CartStorage, items: &[LineItem]) -> Result<(), CartError> {
    let raw = serde_json::to_string(items).map_err(|e| CartError::Storage(e.to_string()))?;
    storage.write(CART_KEY, &raw)
}

// ========================
// Cart Mutator
// ========================

/// Clamp a requested quantity to 1..=MAX_QUANTITY
pub fn clamp_quantity(quantity: u32) -> u32 {
    quantity.clamp(1, MAX_QUANTITY)
}

/// Merge an item into the list: same product and size adds up (capped),
/// anything else is appended
pub fn merge_line_item(items: &mut Vec<LineItem>, incoming: LineItem) {
    match items.iter_mut().find(|item| item.same_line(&incoming)) {
        Some(existing) => {
            existing.quantity = existing.quantity.saturating_add(incoming.quantity).min(MAX_QUANTITY);
        }
        None => items.push(incoming),
    }
}

/// Sum of quantities over all line items, saturating at `u32::MAX`
pub fn total_quantity(items: &[LineItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
}

/// Total quantity currently stored
pub fn cart_count(storage: &impl CartStorage) -> u32 {
    total_quantity(&load(storage))
}

/// Add an item to the stored cart. Returns the new total quantity.
pub fn add_to_cart(storage: &impl CartStorage, item: LineItem) -> Result<u32, CartError> {
    let mut items = load(storage);
    merge_line_item(&mut items, item);
    save(storage, &items)?;
    Ok(total_quantity(&items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee(size: &str, quantity: u32) -> LineItem {
        LineItem::new("tee-1", "Classic Tee", 19.99, size, quantity, 1_700_000_000_000)
    }

    #[test]
    fn test_add_same_line_caps_quantity() {
        let storage = MemoryStorage::default();
        add_to_cart(&storage, tee("M", 5)).unwrap();
        let total = add_to_cart(&storage, tee("M", 97)).unwrap();

        let items = load(&storage);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 99);
        assert_eq!(total, 99);
    }

    #[test]
    fn test_add_different_size_is_separate_line() {
        let storage = MemoryStorage::default();
        add_to_cart(&storage, tee("M", 1)).unwrap();
        add_to_cart(&storage, tee("L", 1)).unwrap();

        let items = load(&storage);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].size, "M");
        assert_eq!(items[1].size, "L");
    }

    #[test]
    fn test_count_tracks_sum_of_additions() {
        let storage = MemoryStorage::default();
        let adds = [("tee-1", "M", 2), ("tee-1", "L", 3), ("cap-2", "", 1), ("tee-1", "M", 4)];
        let mut last_total = 0;
        for (id, size, qty) in adds {
            last_total = add_to_cart(&storage, LineItem::new(id, "Item", 10.0, size, qty, 0)).unwrap();
        }

        assert_eq!(last_total, 10);
        assert_eq!(cart_count(&storage), 10);
        assert_eq!(load(&storage).len(), 3);
    }

    #[test]
    fn test_merge_keeps_first_entry_fields() {
        let mut items = vec![tee("S", 1)];
        let mut later = tee("S", 2);
        later.added_at = 42;
        merge_line_item(&mut items, later);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(items[0].added_at, 1_700_000_000_000);
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let storage = MemoryStorage::default();
        storage.write(CART_KEY, "[{\"id\":\"tee-1\",\"qua").unwrap();

        assert!(load(&storage).is_empty());
        assert!(matches!(try_load(&storage), Err(CartError::Malformed(_))));
        assert_eq!(cart_count(&storage), 0);
    }

    #[test]
    fn test_malformed_storage_is_replaced_on_add() {
        let storage = MemoryStorage::default();
        storage.write(CART_KEY, "not json").unwrap();

        let total = add_to_cart(&storage, tee("M", 2)).unwrap();
        assert_eq!(total, 2);
        assert_eq!(load(&storage), vec![tee("M", 2)]);
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let storage = MemoryStorage::default();
        assert_eq!(try_load(&storage), Ok(Vec::new()));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let storage = MemoryStorage::read_only();
        let result = add_to_cart(&storage, tee("M", 1));
        assert!(matches!(result, Err(CartError::Storage(_))));
    }

    #[test]
    fn test_huge_stored_quantity_merges_to_cap() {
        let storage = MemoryStorage::default();
        storage
            .write(
                CART_KEY,
                r#"[{"id":"tee-1","name":"Classic Tee","price":19.99,"size":"M","quantity":4294967295,"timestamp":0}]"#,
            )
            .unwrap();

        let total = add_to_cart(&storage, tee("M", 1)).unwrap();
        let items = load(&storage);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 99);
        assert_eq!(total, 99);
    }

    #[test]
    fn test_huge_stored_quantities_count_saturates() {
        let storage = MemoryStorage::default();
        storage
            .write(
                CART_KEY,
                r#"[{"id":"a","name":"A","price":1,"size":"","quantity":4294967295},
                    {"id":"b","name":"B","price":1,"size":"","quantity":1}]"#,
            )
            .unwrap();

        assert_eq!(cart_count(&storage), u32::MAX);
    }

    #[test]
    fn test_bad_numbers_keep_other_items() {
        let storage = MemoryStorage::default();
        storage
            .write(
                CART_KEY,
                r#"[{"id":"cap","name":"Cap","price":null,"size":"","quantity":-2},
                    {"id":"tee-1","name":"Classic Tee","price":19.99,"size":"S","quantity":3}]"#,
            )
            .unwrap();

        assert_eq!(load(&storage).len(), 2);
        assert_eq!(cart_count(&storage), 3);

        add_to_cart(&storage, tee("M", 1)).unwrap();
        let items = load(&storage);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].quantity, 3);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(7), 7);
        assert_eq!(clamp_quantity(250), 99);
    }
}
