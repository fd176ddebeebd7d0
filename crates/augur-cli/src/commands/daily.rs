use augur_draw::{daily_card, derive_seed};
use colored::Colorize;

pub fn run(identity: &str, date: Option<&str>, json: bool) -> Result<(), String> {
    let date = super::parse_date(date)?;
    let drawn = daily_card(identity, date).ok_or_else(|| "the tarot deck is empty".to_string())?;

    if json {
        return super::print_json(&drawn);
    }

    println!(
        "  {} {}",
        "Daily card".bold(),
        format!("({date}, seed={})", derive_seed(identity, date)).dimmed()
    );
    println!();
    super::print_drawn(&drawn);
    if let Some(card) = drawn.item.as_tarot() {
        println!();
        println!("  {} {}", "Micro quest:".italic(), card.micro_quest);
    }
    Ok(())
}
