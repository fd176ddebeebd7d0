use augur_core::DeckKind;
use augur_core::deck;
use augur_draw::{Dealer, seed_from_clock};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(deck_name: &str, seed: Option<i32>, json: bool) -> Result<(), String> {
    let kind: DeckKind = deck_name.parse().map_err(|e| format!("{e}"))?;
    let seed = seed.unwrap_or_else(seed_from_clock);
    let prepared = Dealer::default().prepare_deck(&deck::items(kind), seed);

    if json {
        return super::print_json(&prepared);
    }

    println!(
        "  {} {}",
        "Prepared deck".bold(),
        format!("({kind}, {} items, seed={seed})", prepared.len()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Item", "Orientation"]);
    for (i, drawn) in prepared.iter().enumerate() {
        let orientation = drawn
            .orientation
            .map_or_else(|| "—".to_string(), |o| o.to_string());
        table.add_row(vec![
            (i + 1).to_string(),
            drawn.item.to_string(),
            orientation,
        ]);
    }
    println!("{table}");
    Ok(())
}
