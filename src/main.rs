//! Clothify Storefront Entry Point

mod app;
mod attrs;
mod catalog;
mod components;
mod config;
mod context;
mod gallery;
mod models;
mod scroll;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
