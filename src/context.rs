//! Shop Context
//!
//! Badge count and toast signals provided via Leptos Context API, plus the
//! add-to-cart action that ties storage, badge and toast together.

use cart_store::{CartError, LineItem, LocalStorage};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::{ADDED_TO_CART_MESSAGE, TOAST_DELAY_MS};
use crate::toast::ToastState;

/// Shop-wide signals provided via context
#[derive(Clone, Copy)]
pub struct ShopContext {
    /// Total quantity shown in the cart badge - read
    pub cart_count: ReadSignal<u32>,
    /// Total quantity shown in the cart badge - write
    set_cart_count: WriteSignal<u32>,
    /// Toast message and visibility - read
    pub toast: ReadSignal<ToastState>,
    /// Toast message and visibility - write
    set_toast: WriteSignal<ToastState>,
}

impl ShopContext {
    pub fn new(
        cart_count: (ReadSignal<u32>, WriteSignal<u32>),
        toast: (ReadSignal<ToastState>, WriteSignal<ToastState>),
    ) -> Self {
        Self {
            cart_count: cart_count.0,
            set_cart_count: cart_count.1,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Recompute the badge from storage
    pub fn refresh_badge(&self) {
        let storage = LocalStorage::new();
        warn_if_malformed(&storage);
        self.set_cart_count.set(cart_store::cart_count(&storage));
    }

    /// Persist an item, then refresh the badge and confirm with a toast
    pub fn add_to_cart(&self, item: LineItem) {
        let storage = LocalStorage::new();
        warn_if_malformed(&storage);
        web_sys::console::log_1(
            &format!("[CART] Adding {} x{} (size '{}')", item.product_id, item.quantity, item.size).into(),
        );
        match cart_store::add_to_cart(&storage, item) {
            Ok(total) => {
                self.set_cart_count.set(total);
                self.show_toast(ADDED_TO_CART_MESSAGE);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[CART] Failed to save cart: {}", e).into());
            }
        }
    }

    /// Show a message in the toast; a newer message replaces it
    pub fn show_toast(&self, message: &str) {
        let mut generation = 0;
        self.set_toast.update(|toast| generation = toast.show(message));

        let set_toast = self.set_toast;
        Timeout::new(TOAST_DELAY_MS, move || {
            set_toast.update(|toast| {
                toast.dismiss(generation);
            });
        })
        .forget();
    }
}

/// Get the shop context
pub fn use_shop() -> ShopContext {
    expect_context::<ShopContext>()
}

fn warn_if_malformed(storage: &LocalStorage) {
    if let Err(CartError::Malformed(e)) = cart_store::try_load(storage) {
        web_sys::console::warn_1(&format!("[CART] Ignoring stored cart: {}", e).into());
    }
}
