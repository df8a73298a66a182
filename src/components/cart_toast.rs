//! Cart Toast Component
//!
//! Fixed-position toast driven by `ShopContext::toast`.

use leptos::prelude::*;

use crate::context::use_shop;

#[component]
pub fn CartToast() -> impl IntoView {
    let shop = use_shop();
    let visible = move || shop.toast.with(|t| t.visible);

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            <div
                id="cartToast"
                class=move || if visible() { "toast show" } else { "toast" }
                role="status"
            >
                <div class="toast-body">{move || shop.toast.with(|t| t.message.clone())}</div>
            </div>
        </div>
    }
}
