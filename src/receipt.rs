//! Receipt
//!
//! Plain-text rendering of a cart for terminal hosts.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::view::CartView;

const TOTAL_LABEL: &str = "\x1b[1mTotal:\x1b[0m";

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Printable summary of a cart.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    view: &'a CartView,
}

impl<'a> Receipt<'a> {
    /// Create a receipt for the given view.
    #[must_use]
    pub fn new(view: &'a CartView) -> Self {
        Self { view }
    }

    /// Write the line table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.view.is_empty() {
            writeln!(out, "Your cart is empty.")?;
        } else {
            let table = self.table();

            writeln!(out, "{table}")?;
        }

        writeln!(out, "{TOTAL_LABEL} {}", self.view.total)?;

        Ok(())
    }

    fn table(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Unit Price", "Qty", "Line Total"]);

        for line in &self.view.lines {
            builder.push_record([
                line.position.to_string(),
                line.name.clone(),
                line.unit_price.clone(),
                line.quantity.to_string(),
                line.line_total.clone(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        table.to_string()
    }
}
