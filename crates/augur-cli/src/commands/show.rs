use augur_core::DivinationItem;
use augur_core::deck;
use colored::Colorize;

pub fn run(id: &str) -> Result<(), String> {
    let item = deck::find(id).map_err(|e| format!("{e}"))?;

    println!("  {} [{}]", item.to_string().bold(), item.deck().to_string().dimmed());
    println!();
    println!("  keywords:  {}", item.keywords().join(", "));

    match item {
        DivinationItem::Tarot(card) => {
            println!("  arcana:    {}", card.arcana);
            println!("  element:   {}", card.element);
            println!();
            println!("  {}  {}", "Upright".bold(), card.meaning);
            println!("  {} {}", "Reversed".bold(), card.reversed_meaning);
            println!();
            println!("  {} {}", "Micro quest:".italic(), card.micro_quest);
        }
        DivinationItem::Rune(rune) => {
            let reversible = if rune.reversible { "yes" } else { "no" };
            println!("  symbol:    {}", rune.symbol);
            println!("  merkstave: {reversible}");
            println!();
            println!("  {}", rune.meaning);
        }
        DivinationItem::Angel(card) => {
            println!();
            println!("  {}", card.meaning);
        }
    }
    Ok(())
}
