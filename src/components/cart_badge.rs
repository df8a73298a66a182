//! Cart Badge Component

use leptos::prelude::*;

use crate::context::use_shop;

/// Navbar cart link with the total quantity
#[component]
pub fn CartBadge() -> impl IntoView {
    let shop = use_shop();

    view! {
        <span class="nav-link position-relative">
            "Cart"
            <span id="cart-count" class="badge rounded-pill bg-danger ms-1">
                {move || shop.cart_count.get()}
            </span>
        </span>
    }
}
