//! # Checkout Session
//!
//! The interactive loop at the rental counter.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  tool code ──► rental days ──► discount ──► checkout date               │
//! │      ▲  (each prompt repeats until the answer validates)  │             │
//! │      │                                                     ▼             │
//! │      │                                   CheckoutRequest::new           │
//! │      │                                                     │             │
//! │      │                                   pricing::price ──► agreement   │
//! │      │                                                     │             │
//! │      └──────── "y" ◄── Checkout again? (y/n) ◄─────────────┘             │
//! │                 "n" / end of input ──► done                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The session is generic over its reader and writer so tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};

use rental_core::{catalog, pricing, validation, CheckoutRequest, RentalAgreement};
use tracing::{debug, info, warn};

use crate::config::OutputFormat;
use crate::error::CliResult;

/// One clerk at one terminal.
pub struct Session<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Session {
            input,
            output,
            format,
        }
    }

    /// Runs checkouts until the clerk answers "n" or input ends.
    ///
    /// Returns the number of agreements printed.
    pub fn run(&mut self) -> CliResult<usize> {
        let mut completed = 0;

        loop {
            let Some(request) = self.read_checkout()? else {
                break;
            };

            let agreement = pricing::price(&request);
            self.print_agreement(&agreement)?;
            completed += 1;

            info!(
                tool_code = agreement.tool.code(),
                final_cents = agreement.final_charge.cents(),
                "rental agreement issued"
            );

            if !self.checkout_again()?.unwrap_or(false) {
                break;
            }
        }

        Ok(completed)
    }

    /// Collects one valid checkout request. `None` when input ran out.
    pub fn read_checkout(&mut self) -> CliResult<Option<CheckoutRequest>> {
        loop {
            let Some(tool) = self.prompt_until(
                "Please provide the tool code",
                &invalid_tool_hint(),
                validation::parse_tool_code,
            )?
            else {
                return Ok(None);
            };

            let Some(days) = self.prompt_until(
                "Please provide the number of rental days",
                "Please provide a number greater than 0",
                validation::parse_rental_days,
            )?
            else {
                return Ok(None);
            };

            let Some(discount) = self.prompt_until(
                "Please provide the discount",
                "Please provide a number between 0-100",
                validation::parse_discount_percent,
            )?
            else {
                return Ok(None);
            };

            let Some(checkout_date) = self.prompt_until(
                "Please provide the checkout date (Format: MM/DD/YY)",
                "Please provide a valid date (Format: MM/DD/YY)",
                validation::parse_checkout_date,
            )?
            else {
                return Ok(None);
            };

            match CheckoutRequest::new(
                tool,
                i64::from(days),
                i64::from(discount.value()),
                Some(checkout_date),
            ) {
                Ok(request) => return Ok(Some(request)),
                Err(err) => {
                    // Fields can pass one by one yet fail together, e.g. a
                    // due date past the end of the calendar
                    warn!(error = %err, "checkout rejected");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Asks whether to start another checkout. `None` when input ran out.
    pub fn checkout_again(&mut self) -> CliResult<Option<bool>> {
        self.prompt_until(
            "Checkout again? (y/n)",
            "Please provide a valid answer",
            |answer| validation::parse_checkout_again(answer).ok_or(()),
        )
    }

    fn print_agreement(&mut self, agreement: &RentalAgreement) -> CliResult<()> {
        match self.format {
            OutputFormat::Text => write!(self.output, "{agreement}")?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.output, agreement)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Prompts, then re-prompts with `retry` until `parse` accepts a line.
    fn prompt_until<T, E>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> CliResult<Option<T>> {
        writeln!(self.output, "{prompt}")?;

        loop {
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!(prompt, "input closed");
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    debug!(prompt, input = %line, "rejected input");
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }

    /// Reads one line. Bytes that are not UTF-8 are replaced so the line
    /// still reaches the parser and gets a retry hint.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn invalid_tool_hint() -> String {
    let codes: Vec<String> = catalog::all()
        .map(|tool| tool.code().to_string())
        .collect();
    format!("Please provide a valid tool code ({})", codes.join(", "))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn run(input: &str, format: OutputFormat) -> (usize, String) {
        let mut output = Vec::new();
        let completed = Session::new(Cursor::new(input.to_string()), &mut output, format)
            .run()
            .unwrap();
        (completed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_single_checkout() {
        let (completed, output) = run("LADW\n3\n10\n07/02/20\nn\n", OutputFormat::Text);

        assert_eq!(completed, 1);
        assert!(output.contains("Please provide the tool code\n"));
        assert!(output.contains("Tool code: LADW\n"));
        assert!(output.contains("Charge days: 2\n"));
        assert!(output.contains("Final charge: $3.58\n"));
        assert!(output.ends_with("Checkout again? (y/n)\n"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let input = "JAKW\njakd\n0\nsix\n6\n101\n0\n9/3/15\n09/03/15\nmaybe\nN\n";
        let (completed, output) = run(input, OutputFormat::Text);

        assert_eq!(completed, 1);
        assert!(output.contains("Please provide a valid tool code (LADW, CHNS, JAKR, JAKD)\n"));
        assert_eq!(output.matches("Please provide a number greater than 0\n").count(), 2);
        assert!(output.contains("Please provide a number between 0-100\n"));
        assert!(output.contains("Please provide a valid date (Format: MM/DD/YY)\n"));
        assert!(output.contains("Please provide a valid answer\n"));
        assert!(output.contains("Tool brand: Dewalt\n"));
        assert!(output.contains("Final charge: $8.97\n"));
    }

    #[test]
    fn test_checkout_again_loops() {
        let input = "LADW\n3\n10\n07/02/20\ny\nCHNS\n5\n25\n07/02/15\nn\n";
        let (completed, output) = run(input, OutputFormat::Text);

        assert_eq!(completed, 2);
        assert!(output.contains("Final charge: $3.58\n"));
        assert!(output.contains("Final charge: $3.35\n"));
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (completed, output) = run("", OutputFormat::Text);
        assert_eq!(completed, 0);
        assert_eq!(output, "Please provide the tool code\n");

        let (completed, _) = run("JAKR\n9\n", OutputFormat::Text);
        assert_eq!(completed, 0);

        // Agreement printed, then input closes at the y/n prompt
        let (completed, _) = run("JAKR\n9\n0\n07/02/15\n", OutputFormat::Text);
        assert_eq!(completed, 1);
    }

    #[test]
    fn test_windows_line_endings() {
        let (completed, output) = run("JAKR\r\n9\r\n0\r\n07/02/15\r\nn\r\n", OutputFormat::Text);
        assert_eq!(completed, 1);
        assert!(output.contains("Final charge: $14.95\n"));
    }

    #[test]
    fn test_non_utf8_line_reprompts() {
        let mut output = Vec::new();
        let input: &[u8] = b"\xffLADW\nLADW\n3\n\xfe\n10\n07/02/20\nn\n";
        let completed = Session::new(input, &mut output, OutputFormat::Text)
            .run()
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(completed, 1);
        assert!(output.contains("Please provide a valid tool code (LADW, CHNS, JAKR, JAKD)\n"));
        assert!(output.contains("Please provide a number between 0-100\n"));
        assert!(output.contains("Final charge: $3.58\n"));
    }

    #[test]
    fn test_json_output() {
        let (_, output) = run("JAKR\n4\n50\n07/02/20\nn\n", OutputFormat::Json);

        let start = output.find('{').unwrap();
        let end = output.rfind('}').unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[start..=end]).unwrap();

        assert_eq!(json["tool"]["code"], "JAKR");
        assert_eq!(json["charge_days"], 1);
        assert_eq!(json["daily_rental_charge"], "2.99");
        assert_eq!(json["pre_discount_charge"], "2.99");
        assert_eq!(json["discount_amount"], "1.50");
        assert_eq!(json["final_charge"], "1.49");
    }

    #[test]
    fn test_read_checkout_returns_request() {
        let mut output = Vec::new();
        let mut session = Session::new(
            Cursor::new("chns\n100\n10\n05/25/05\n"),
            &mut output,
            OutputFormat::Text,
        );

        let request = session.read_checkout().unwrap().unwrap();
        assert_eq!(request.tool().code(), "CHNS");
        assert_eq!(request.rental_day_count(), 100);
        assert_eq!(request.discount_percent().value(), 10);
        assert_eq!(
            request.checkout_date(),
            NaiveDate::from_ymd_opt(2005, 5, 25).unwrap()
        );
    }
}
