use leptos::prelude::*;
use trolley::{cart::Cart, view::LineView};

use crate::actions::{change_quantity, remove_line};

pub(crate) fn format_heading(item_count: usize) -> String {
    format!("Cart ({item_count})")
}

#[component]
fn CartLine(line: LineView, cart: RwSignal<Cart>) -> impl IntoView {
    let key = line.key;
    let remove_label = format!("Remove {} ({}) from cart", line.name, line.unit_price);
    let quantity_label = format!("Quantity of {}", line.name);

    view! {
        <li class="cart-item">
            <span class="cart-item-name">{line.name}</span>
            <span class="cart-item-price">{line.unit_price}</span>
            <input
                type="number"
                min="1"
                class="qty-input"
                aria-label=quantity_label
                prop:value=line.quantity.to_string()
                on:change=move |ev| {
                    change_quantity(cart, key, &event_target_value(&ev));
                }
            />
            <button
                type="button"
                aria-label=remove_label
                on:click=move |_| {
                    remove_line(cart, key);
                }
            >
                "Remove"
            </button>
        </li>
    }
}

/// Cart lines in insertion order.
#[component]
pub(crate) fn CartLines(cart: RwSignal<Cart>) -> impl IntoView {
    view! {
        <section class="cart-lines">
            <h2>{move || format_heading(cart.with(Cart::len))}</h2>
            {move || {
                let snapshot = cart.with(Cart::view);

                if snapshot.is_empty() {
                    view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
                } else {
                    view! {
                        <ul id="cart">
                            {snapshot
                                .lines
                                .into_iter()
                                .map(|line| view! { <CartLine line=line cart=cart /> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
