//! Event handlers shared by the widget components.
//!
//! Each handler runs one cart command to completion against the cart signal.

use leptos::prelude::*;
use trolley::prelude::*;

pub(crate) fn dispatch(
    cart: RwSignal<Cart>,
    command: Command,
) -> Option<Result<Applied, CartError>> {
    cart.try_update(|cart| cart.apply(command))
}

/// Add the product currently typed into the form.
///
/// Clears both inputs on success. Returns the alert text when the input is rejected.
pub(crate) fn submit_product(
    cart: RwSignal<Cart>,
    name: RwSignal<String>,
    price: RwSignal<String>,
) -> Option<String> {
    let command = Command::Add {
        name: name.get_untracked(),
        price: price.get_untracked(),
    };

    match dispatch(cart, command)? {
        Ok(applied) => {
            if applied.clears_inputs() {
                name.set(String::new());
                price.set(String::new());
            }

            None
        }
        Err(error) => Some(error.to_string()),
    }
}

/// Apply the text of a quantity control, returning the stored quantity.
pub(crate) fn change_quantity(cart: RwSignal<Cart>, key: LineItemKey, text: &str) -> Option<u32> {
    let command = Command::SetQuantity {
        key,
        quantity: parse_quantity(text),
    };

    match dispatch(cart, command)? {
        Ok(Applied::QuantitySet { quantity, .. }) => Some(quantity),
        Ok(_) => None,
        Err(error) => {
            leptos::logging::warn!("quantity change ignored: {error}");
            None
        }
    }
}

/// Remove a line, returning whether anything was removed.
pub(crate) fn remove_line(cart: RwSignal<Cart>, key: LineItemKey) -> bool {
    match dispatch(cart, Command::Remove(key)) {
        Some(Ok(_)) => true,
        Some(Err(error)) => {
            leptos::logging::warn!("remove ignored: {error}");
            false
        }
        None => false,
    }
}

/// Show a blocking browser alert.
pub(crate) fn alert(message: &str) {
    if let Err(error) = window().alert_with_message(message) {
        leptos::logging::error!("failed to show alert: {error:?}");
    }
}
