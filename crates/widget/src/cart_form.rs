use leptos::prelude::*;
use trolley::cart::Cart;

use crate::actions::{alert, submit_product};

/// Product name and price entry.
#[component]
pub(crate) fn AddProductForm(cart: RwSignal<Cart>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    view! {
        <div class="add-product">
            <input
                id="product-name"
                type="text"
                placeholder="Product name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                id="product-price"
                type="number"
                step="0.01"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| price.set(event_target_value(&ev))
            />
            <button
                id="add-product"
                type="button"
                on:click=move |_| {
                    if let Some(message) = submit_product(cart, name, price) {
                        alert(&message);
                    }
                }
            >
                "Add Product"
            </button>
        </div>
    }
}
