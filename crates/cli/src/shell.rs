//! Line-oriented cart shell.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::debug;
use trolley::prelude::*;

/// Errors that stop the shell.
#[derive(Debug, Error)]
pub(crate) enum ShellError {
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Writing the receipt failed.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Add a product: add <price> <name...>
    Add {
        /// Unit price
        #[arg(allow_hyphen_values = true)]
        price: String,

        /// Product name
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Remove the line at a position
    #[command(alias = "rm")]
    Remove {
        /// Line number as shown by `list`
        line: usize,
    },

    /// Set the quantity of the line at a position
    #[command(alias = "quantity")]
    Qty {
        /// Line number as shown by `list`
        line: usize,

        /// New quantity; values below 1 become 1
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Show the cart
    List,

    /// Show the cart total
    Total,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the session cart and translates shell lines into cart commands.
#[derive(Debug)]
pub(crate) struct Shell {
    cart: Cart,
}

impl Shell {
    pub(crate) fn new(cart: Cart) -> Self {
        Self { cart }
    }

    pub(crate) fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Process lines until input ends or `quit` is read.
    ///
    /// Results go to `out`; rejected input is reported on `alerts`.
    pub(crate) fn run(
        &mut self,
        input: impl BufRead,
        mut out: impl Write,
        mut alerts: impl Write,
    ) -> Result<(), ShellError> {
        for line in input.lines() {
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            if tokens.is_empty() {
                continue;
            }

            let flow = match ShellLine::try_parse_from(tokens) {
                Ok(parsed) => self.execute(parsed.command, &mut out, &mut alerts)?,
                Err(parse_error) if parse_error.use_stderr() => {
                    write!(alerts, "{}", parse_error.render())?;
                    Flow::Continue
                }
                Err(parse_error) => {
                    write!(out, "{}", parse_error.render())?;
                    Flow::Continue
                }
            };

            out.flush()?;

            if flow == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    fn execute(
        &mut self,
        command: ShellCommand,
        out: &mut impl Write,
        alerts: &mut impl Write,
    ) -> Result<Flow, ShellError> {
        let cart_command = match command {
            ShellCommand::Add { price, name } => Command::Add {
                name: name.join(" "),
                price,
            },
            ShellCommand::Remove { line } => {
                let Some(key) = self.key_for_line(line) else {
                    writeln!(alerts, "alert: There is no line {line}.")?;
                    return Ok(Flow::Continue);
                };

                Command::Remove(key)
            }
            ShellCommand::Qty { line, quantity } => {
                let Some(key) = self.key_for_line(line) else {
                    writeln!(alerts, "alert: There is no line {line}.")?;
                    return Ok(Flow::Continue);
                };

                Command::SetQuantity {
                    key,
                    quantity: parse_quantity(&quantity),
                }
            }
            ShellCommand::List => {
                Receipt::new(&self.cart.view()).write_to(&mut *out)?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Total => {
                writeln!(out, "Total: {}", self.cart.formatted_total())?;
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        };

        match self.cart.apply(cart_command) {
            Ok(applied) => {
                debug!(
                    applied = ?applied,
                    items = self.cart.len(),
                    total = %self.cart.total(),
                    "cart command applied"
                );

                writeln!(out, "{}", self.describe(&applied))?;
                writeln!(out, "Total: {}", self.cart.formatted_total())?;
            }
            Err(cart_error) => writeln!(alerts, "alert: {cart_error}")?,
        }

        Ok(Flow::Continue)
    }

    fn key_for_line(&self, line: usize) -> Option<LineItemKey> {
        line.checked_sub(1)
            .and_then(|position| self.cart.key_at(position))
    }

    fn describe(&self, applied: &Applied) -> String {
        match applied {
            Applied::Added(key) => self.cart.get(*key).map_or_else(
                |_err| "Added item to cart.".to_string(),
                |item| {
                    format!(
                        "Added {} at {} to cart.",
                        item.name(),
                        format_money(item.unit_price(), self.cart.currency())
                    )
                },
            ),
            Applied::Removed(item) => format!("Removed {} from cart.", item.name()),
            Applied::QuantitySet { key, quantity } => self.cart.get(*key).map_or_else(
                |_err| format!("Quantity set to {quantity}."),
                |item| format!("Quantity of {} set to {quantity}.", item.name()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    struct Transcript {
        out: String,
        alerts: String,
        shell: Shell,
    }

    fn run_script(script: &str) -> TestResult<Transcript> {
        let mut shell = Shell::new(Cart::default());
        let mut out = Vec::new();
        let mut alerts = Vec::new();

        shell.run(script.as_bytes(), &mut out, &mut alerts)?;

        Ok(Transcript {
            out: String::from_utf8(out)?,
            alerts: String::from_utf8(alerts)?,
            shell,
        })
    }

    #[test]
    fn walkthrough_prints_running_totals() -> TestResult {
        let transcript = run_script(
            "add 1.50 Apple\n\
             add 2.00 Bread\n\
             remove 1\n\
             add 3.25 Milk\n\
             qty 2 3\n",
        )?;

        let totals: Vec<&str> = transcript
            .out
            .lines()
            .filter(|line| line.starts_with("Total: "))
            .collect();

        assert_eq!(
            totals,
            vec![
                "Total: 1.50",
                "Total: 3.50",
                "Total: 2.00",
                "Total: 5.25",
                "Total: 11.75"
            ]
        );
        assert!(transcript.alerts.is_empty(), "{}", transcript.alerts);
        assert_eq!(transcript.shell.cart().len(), 2);

        Ok(())
    }

    #[test]
    fn multi_word_names_are_joined() -> TestResult {
        let transcript = run_script("add 0.99 Granny   Smith apple\n")?;

        assert!(
            transcript
                .out
                .contains("Added Granny Smith apple at $0.99 to cart."),
            "{}",
            transcript.out
        );

        Ok(())
    }

    #[test]
    fn validation_failures_are_alerts() -> TestResult {
        let transcript = run_script("add 1.50\nadd 0 Bread\nadd -2 Bread\nadd abc Bread\n")?;

        let alerts: Vec<&str> = transcript.alerts.lines().collect();

        assert_eq!(
            alerts,
            vec![
                "alert: Please enter a product name.",
                "alert: Please enter a valid price greater than 0.",
                "alert: Please enter a valid price greater than 0.",
                "alert: Please enter a valid price greater than 0.",
            ]
        );
        assert!(transcript.shell.cart().is_empty());
        assert!(transcript.out.is_empty(), "{}", transcript.out);

        Ok(())
    }

    #[test]
    fn quantity_is_clamped() -> TestResult {
        let transcript = run_script("add 2 Tea\nqty 1 -4\n")?;

        assert!(
            transcript.out.contains("Quantity of Tea set to 1."),
            "{}",
            transcript.out
        );
        assert_eq!(transcript.shell.cart().formatted_total(), "2.00");

        Ok(())
    }

    #[test]
    fn unknown_lines_are_alerts() -> TestResult {
        let transcript = run_script("add 2 Tea\nremove 5\nqty 0 2\n")?;

        let alerts: Vec<&str> = transcript.alerts.lines().collect();

        assert_eq!(
            alerts,
            vec!["alert: There is no line 5.", "alert: There is no line 0."]
        );
        assert_eq!(transcript.shell.cart().len(), 1);

        Ok(())
    }

    #[test]
    fn unknown_commands_do_not_stop_the_shell() -> TestResult {
        let transcript = run_script("frobnicate\nadd 2 Tea\n")?;

        assert!(!transcript.alerts.is_empty());
        assert_eq!(transcript.shell.cart().len(), 1);

        Ok(())
    }

    #[test]
    fn quit_stops_reading() -> TestResult {
        let transcript = run_script("add 2 Tea\nquit\nadd 3 Coffee\n")?;

        assert_eq!(transcript.shell.cart().len(), 1);

        Ok(())
    }

    #[test]
    fn list_and_total_do_not_mutate() -> TestResult {
        let transcript = run_script("add 1.50 Apple\nlist\ntotal\n")?;

        assert!(transcript.out.contains("Apple"), "{}", transcript.out);
        assert!(transcript.out.ends_with("Total: 1.50\n"), "{}", transcript.out);
        assert_eq!(transcript.shell.cart().len(), 1);

        Ok(())
    }
}
