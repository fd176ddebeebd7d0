use augur_core::{DeckKind, SpreadKind, deck};
use augur_draw::{Dealer, derive_seed, seed_from_clock, summarize_spread};
use colored::Colorize;
use tracing::debug;

use super::Output;

/// Where the seed of a spread comes from.
pub struct Seeding<'a> {
    /// Explicit seed; wins over the identity.
    pub seed: Option<i32>,
    /// Identity to derive the seed from.
    pub identity: Option<&'a str>,
    /// Date for the identity; today if absent.
    pub date: Option<&'a str>,
}

pub fn run(
    spread: &str,
    seeding: Seeding<'_>,
    deck_name: Option<&str>,
    output: Output,
) -> Result<(), String> {
    let spread: SpreadKind = spread.parse().map_err(|e| format!("{e}"))?;
    let kind = match deck_name {
        Some(name) => name.parse::<DeckKind>().map_err(|e| format!("{e}"))?,
        None => spread.deck(),
    };
    let seed = match (seeding.seed, seeding.identity) {
        (Some(seed), _) => seed,
        (None, Some(identity)) => derive_seed(identity, super::parse_date(seeding.date)?),
        (None, None) => seed_from_clock(),
    };
    debug!(%spread, deck = %kind, seed, "dealing spread");

    let drawn = if kind == DeckKind::Runes {
        // Rune casts replay from the seed's bit pattern.
        super::cast::throw(spread.card_count(), Some(u64::from(seed as u32)))
    } else {
        Dealer::default().deal(&deck::items(kind), spread.card_count(), seed)
    };

    match output {
        Output::Json => {
            return super::print_json(&serde_json::json!({
                "spread": spread,
                "deck": kind,
                "seed": seed,
                "items": drawn,
            }));
        }
        Output::Plain => {
            println!("{} ({kind}, seed={seed})", spread.name());
            println!("{}", summarize_spread(spread, &drawn));
            return Ok(());
        }
        Output::Styled => {}
    }

    println!(
        "  {} {}",
        spread.name().bold(),
        format!("({kind}, seed={seed})").dimmed()
    );
    println!();

    if kind == DeckKind::Runes {
        super::cast::print_cast(Some(spread), &drawn);
        return Ok(());
    }

    for (i, item) in drawn.iter().enumerate() {
        let position = spread
            .position(i)
            .map_or_else(|| format!("#{}", i + 1), str::to_string);
        println!("  {}", position.underline());
        super::print_drawn(item);
        println!();
    }
    Ok(())
}
