//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CarouselView, ProductAttrs, ProductView};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Attribute records of the listed products
    pub products: Vec<ProductAttrs>,
    /// Product shown in the detail modal
    pub open_product: Option<ProductView>,
    /// Content of the quick-view carousel
    pub quick_view: Option<CarouselView>,
}

impl AppState {
    pub fn new(products: Vec<ProductAttrs>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the detail modal for a product, replacing any open one
pub fn store_open_product(store: &AppStore, product: ProductView) {
    *store.open_product().write() = Some(product);
}

pub fn store_close_product(store: &AppStore) {
    *store.open_product().write() = None;
}

/// Open the quick-view carousel, replacing any open one
pub fn store_open_quick_view(store: &AppStore, quick_view: CarouselView) {
    *store.quick_view().write() = Some(quick_view);
}

pub fn store_close_quick_view(store: &AppStore) {
    *store.quick_view().write() = None;
}
