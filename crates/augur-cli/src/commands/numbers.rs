use augur_numerology::{CosmicNumber, universal_day, universal_month, universal_year};
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
struct UniversalNumbers {
    date: String,
    day: CosmicNumber,
    month: CosmicNumber,
    year: CosmicNumber,
}

pub fn run(date: Option<&str>, json: bool) -> Result<(), String> {
    let date = super::parse_date(date)?;
    let numbers = UniversalNumbers {
        date: date.to_string(),
        day: universal_day(date),
        month: universal_month(date),
        year: universal_year(date),
    };

    if json {
        return super::print_json(&numbers);
    }

    println!("  {} {}", "Universal numbers".bold(), format!("({date})").dimmed());
    println!();
    for (label, n) in [
        ("Day", &numbers.day),
        ("Month", &numbers.month),
        ("Year", &numbers.year),
    ] {
        println!("  {label:<6} {}  {}", n.number, n.theme.bold());
        println!("         {}", n.description.dimmed());
    }
    Ok(())
}
