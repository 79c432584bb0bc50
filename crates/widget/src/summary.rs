use leptos::prelude::*;
use trolley::cart::Cart;

/// Running cart total.
#[component]
pub(crate) fn CartTotal(cart: RwSignal<Cart>) -> impl IntoView {
    view! {
        <p class="cart-total-row">
            <span>"Total: "</span>
            <span id="total-price">{move || cart.with(Cart::formatted_total)}</span>
        </p>
    }
}
