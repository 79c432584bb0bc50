//! Leptos Trolley Cart Widget

use leptos::prelude::*;
use trolley::cart::Cart;

mod actions;
mod cart_form;
mod cart_lines;
mod summary;

/// Widget shell: entry form, cart lines and total.
#[component]
fn App() -> impl IntoView {
    let cart = RwSignal::new(Cart::default());

    view! {
        <main class="cart-widget">
            <h1>"Shopping Cart"</h1>
            <cart_form::AddProductForm cart=cart />
            <cart_lines::CartLines cart=cart />
            <summary::CartTotal cart=cart />
        </main>
    }
}

/// Mount the widget
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
