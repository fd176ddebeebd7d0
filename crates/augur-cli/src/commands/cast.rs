use augur_core::deck::{self, ELDER_FUTHARK};
use augur_core::{DeckKind, SpreadKind};
use augur_draw::{CastSummary, DrawnItem, RuneCaster};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(count: usize, seed: Option<u64>, json: bool) -> Result<(), String> {
    let available = deck::len(DeckKind::Runes);
    if count == 0 || count > available {
        return Err(format!("rune count must be between 1 and {available}, got {count}"));
    }

    let cast = throw(count, seed);
    if json {
        return super::print_json(&serde_json::json!({
            "summary": CastSummary::of(&cast),
            "runes": cast,
        }));
    }

    let header = match seed {
        Some(seed) => format!("({count} runes, seed={seed})"),
        None => format!("({count} runes)"),
    };
    println!("  {} {}", "Rune cast".bold(), header.dimmed());
    println!();
    print_cast(None, &cast);
    Ok(())
}

/// Cast with a replayable RNG when a seed is given, fresh randomness otherwise.
pub(super) fn throw(count: usize, seed: Option<u64>) -> Vec<DrawnItem> {
    let caster = RuneCaster::default();
    match seed {
        Some(seed) => caster.cast(ELDER_FUTHARK, count, &mut StdRng::seed_from_u64(seed)),
        None => caster.cast(ELDER_FUTHARK, count, &mut rand::rng()),
    }
}

/// Table of cast runes followed by a one-line summary.
pub(super) fn print_cast(spread: Option<SpreadKind>, cast: &[DrawnItem]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if spread.is_some() {
        table.set_header(vec!["Position", "Rune", "Zone", "Cluster", "Meaning"]);
    } else {
        table.set_header(vec!["Rune", "Zone", "Cluster", "Meaning"]);
    }

    for (i, drawn) in cast.iter().enumerate() {
        let (zone, cluster) = drawn.placement.as_ref().map_or_else(
            || ("—".to_string(), "—".to_string()),
            |p| {
                (
                    p.proximity.to_string(),
                    p.cluster.map_or_else(|| "—".to_string(), |c| c.to_string()),
                )
            },
        );
        let mut row = Vec::new();
        if let Some(spread) = spread {
            row.push(spread.position(i).unwrap_or("—").to_string());
        }
        row.extend([drawn.label(), zone, cluster, drawn.meaning().to_string()]);
        table.add_row(row);
    }

    println!("{table}");
    println!();

    let s = CastSummary::of(cast);
    println!(
        "  {} cluster{}, {} isolated · inner {}, middle {}, outer {} · {} merkstave",
        s.clusters,
        if s.clusters == 1 { "" } else { "s" },
        s.isolated,
        s.inner,
        s.middle,
        s.outer,
        s.merkstave,
    );
}
