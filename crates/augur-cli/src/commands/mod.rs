pub mod blueprint;
pub mod cast;
pub mod daily;
pub mod deck;
pub mod numbers;
pub mod seed;
pub mod show;
pub mod spread;
pub mod spreads;

use augur_draw::DrawnItem;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use serde::Serialize;

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Colored text and tables.
    Styled,
    /// One uncolored line per entry.
    Plain,
    /// Pretty JSON.
    Json,
}

impl Output {
    /// Pick the output from the `--json` and `--plain` flags.
    pub fn from_flags(json: bool, plain: bool) -> Self {
        if json {
            Self::Json
        } else if plain {
            Self::Plain
        } else {
            Self::Styled
        }
    }
}

/// Parse `YYYY-MM-DD`, defaulting to today's local date.
fn parse_date(date: Option<&str>) -> Result<NaiveDate, String> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| format!("invalid date \"{s}\" (expected YYYY-MM-DD): {e}")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Colored one-line label for a drawn item.
fn styled_label(drawn: &DrawnItem) -> String {
    if drawn.is_reversed() {
        drawn.label().red().to_string()
    } else {
        drawn.label().bold().to_string()
    }
}

/// Print a drawn item with its keywords and the meaning that applies.
fn print_drawn(drawn: &DrawnItem) {
    println!("  {}", styled_label(drawn));
    let keywords = drawn.item.keywords();
    if !keywords.is_empty() {
        println!("  {}", keywords.join(", ").dimmed());
    }
    println!("  {}", drawn.meaning());
}
