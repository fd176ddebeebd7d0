use augur_core::SpreadKind;
use comfy_table::{ContentArrangement, Table};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spread", "Name", "Deck", "Items", "Positions"]);

    for spread in SpreadKind::all() {
        let positions = if spread.positions().is_empty() {
            "—".to_string()
        } else {
            spread.positions().join(", ")
        };
        table.add_row(vec![
            spread.to_string(),
            spread.name().to_string(),
            spread.deck().to_string(),
            spread.card_count().to_string(),
            positions,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} spreads", SpreadKind::all().len());
    Ok(())
}
