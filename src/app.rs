//! Clothify Storefront App
//!
//! Catalog page: navbar with cart badge, product grid, detail modal,
//! quick-view carousel and the cart toast.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{CartBadge, CartToast, ProductCard, ProductModal, QuickViewModal, ScrollLink};
use crate::context::ShopContext;
use crate::scroll;
use crate::store::{AppState, AppStateStoreFields};
use crate::toast::ToastState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (cart_count, set_cart_count) = signal(0u32);
    let (toast, set_toast) = signal(ToastState::default());
    let shop = ShopContext::new((cart_count, set_cart_count), (toast, set_toast));

    let products = catalog::load_catalog().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] Failed to load catalog: {}", e).into());
        Vec::new()
    });
    web_sys::console::log_1(&format!("[APP] Loaded {} products", products.len()).into());
    let store = Store::new(AppState::new(products));

    // Provide context to all children
    provide_context(shop);
    provide_context(store);

    // Page load: badge from storage, then honour a URL hash
    Effect::new(move |_| {
        shop.refresh_badge();
        scroll::scroll_to_location_hash_later();
    });

    view! {
        <nav class="navbar navbar-expand navbar-light bg-light sticky-top">
            <div class="container">
                <ScrollLink href="#top" class="navbar-brand fw-bold">"Clothify"</ScrollLink>
                <div class="navbar-nav ms-auto align-items-center">
                    <ScrollLink href="#shop" class="nav-link">"Shop"</ScrollLink>
                    <ScrollLink href="#about" class="nav-link">"About"</ScrollLink>
                    <CartBadge />
                </div>
            </div>
        </nav>

        <header id="top" class="py-5 bg-dark text-white text-center">
            <h1 class="display-5">"Clothify"</h1>
            <p class="lead">"Everyday basics, made to last."</p>
            <ScrollLink href="#shop" class="btn btn-light">"Shop now"</ScrollLink>
        </header>

        <main id="shop" class="container py-5">
            <h2 class="mb-4">"Shop"</h2>
            <div class="row row-cols-1 row-cols-sm-2 row-cols-lg-4 g-4">
                <For
                    each=move || store.products().get()
                    key=|attrs| attrs.key()
                    children=move |attrs| view! { <ProductCard attrs=attrs /> }
                />
            </div>
        </main>

        <footer id="about" class="py-4 bg-light text-center">
            <p class="mb-0">"Clothify: simple clothes, shipped with care."</p>
        </footer>

        <ProductModal />
        <QuickViewModal />
        <CartToast />
    }
}
