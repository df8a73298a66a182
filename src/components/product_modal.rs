//! Product Modal Component
//!
//! Detail view with gallery, size and quantity pickers and an add-to-cart
//! action. Picker and gallery state live in the body component, so each
//! opening starts fresh.

use leptos::prelude::*;

use crate::attrs::parse_quantity;
use crate::context::use_shop;
use crate::gallery::Gallery;
use crate::models::ProductView;
use crate::store::{store_close_product, use_app_store, AppStateStoreFields};

fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

/// Modal shell; renders the body while a product is open
#[component]
pub fn ProductModal() -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.open_product().with(|p| p.is_some());

    view! {
        <div
            class=move || if is_open() { "modal fade show d-block" } else { "modal fade" }
            id="universalProductModal"
            tabindex="-1"
            aria-labelledby="universalProductModalLabel"
        >
            <div class="modal-dialog modal-lg modal-dialog-centered">
                <div class="modal-content">
                    {move || store.open_product().get().map(|product| view! {
                        <ProductModalBody product=product />
                    })}
                </div>
            </div>
        </div>
        <Show when=is_open>
            <div class="modal-backdrop fade show" on:click=move |_| store_close_product(&store)></div>
        </Show>
    }
}

#[component]
fn ProductModalBody(product: ProductView) -> impl IntoView {
    let shop = use_shop();
    let store = use_app_store();

    let size_options = product.size_options();
    let first_size = size_options.first().map(|o| o.value.clone()).unwrap_or_default();
    let (size, set_size) = signal(first_size);
    let (qty, set_qty) = signal("1".to_string());
    let gallery = RwSignal::new(Gallery::new(product.images.clone()));

    let name = product.name.clone();
    let price = product.formatted_price();
    let description = product.description.clone();
    let features = product.features.clone();
    let images = product.images.clone();

    let on_add = move |_| {
        let quantity = parse_quantity(&qty.get_untracked());
        let item = product.line_item(&size.get_untracked(), quantity, now_millis());
        shop.add_to_cart(item);
    };

    view! {
        <div class="modal-header">
            <h5 class="modal-title" id="universalProductModalLabel">{name.clone()}</h5>
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| store_close_product(&store)
            ></button>
        </div>
        <div class="modal-body">
            <div class="row g-4">
                <div class="col-md-6">
                    <img
                        id="modal-main-image"
                        class="img-fluid rounded"
                        src=move || gallery.with(|g| g.current().to_string())
                        alt=name.clone()
                    />
                    <div id="modal-thumbs" class="d-flex gap-2 mt-2">
                        {images.into_iter().enumerate().map(|(idx, src)| {
                            let alt = format!("{} thumb {}", name, idx + 1);
                            view! {
                                <img
                                    src=src
                                    alt=alt
                                    class=move || if gallery.with(|g| g.is_active(idx)) { "rounded active" } else { "rounded" }
                                    style="cursor: pointer;"
                                    on:click=move |_| gallery.update(|g| { g.select(idx); })
                                />
                            }
                        }).collect_view()}
                    </div>
                </div>
                <div class="col-md-6">
                    <p id="modal-price" class="fs-4 fw-bold">{price}</p>
                    <p id="modal-description">{description}</p>

                    <label for="modal-size" class="form-label">"Size"</label>
                    <select
                        id="modal-size"
                        class="form-select mb-3"
                        on:change=move |ev| set_size.set(event_target_value(&ev))
                    >
                        {size_options.into_iter().map(|opt| {
                            let value = opt.value.clone();
                            view! {
                                <option value=opt.value selected=move || size.get() == value>
                                    {opt.label}
                                </option>
                            }
                        }).collect_view()}
                    </select>

                    <label for="modal-qty" class="form-label">"Quantity"</label>
                    <input
                        id="modal-qty"
                        type="number"
                        min="1"
                        max="99"
                        class="form-control mb-3"
                        prop:value=qty
                        on:input=move |ev| set_qty.set(event_target_value(&ev))
                    />

                    <ul id="modal-features">
                        {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                    </ul>

                    <button id="modal-add-to-cart" class="btn btn-dark w-100" on:click=on_add>
                        "Add to cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
