//! CLI frontend for the Augur divination and numerology engines.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "augur",
    about = "Augur — seeded tarot, rune casting, and numerology",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seed derived from an identity and a date
    Seed {
        /// Identity string (user id, name, ...)
        identity: String,

        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Draw the daily tarot card for an identity
    Daily {
        /// Identity string (user id, name, ...)
        identity: String,

        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Deal a spread (tarot, angel cards, or a rune cast)
    Spread {
        /// Spread name (see `augur spreads`)
        spread: String,

        /// Explicit seed
        #[arg(short, long, conflicts_with = "identity", allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Derive the seed from an identity and --date instead
        #[arg(short, long)]
        identity: Option<String>,

        /// Date for --identity as YYYY-MM-DD (default: today)
        #[arg(short, long, requires = "identity")]
        date: Option<String>,

        /// Lay the spread with another deck (tarot, runes, angel-cards)
        #[arg(long)]
        deck: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print one uncolored line per position
        #[arg(long, conflicts_with = "json")]
        plain: bool,
    },

    /// Shuffle and orient a whole deck
    Deck {
        /// Deck: tarot, runes, or angel-cards
        deck: String,

        /// Seed (default: current time)
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Cast runes onto the cloth and report clusters and zones
    Cast {
        /// Number of runes to cast
        #[arg(short, long, default_value = "9")]
        count: usize,

        /// Seed to replay a cast (default: fresh randomness)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compute a Cosmic Blueprint
    Blueprint {
        /// Full birth name
        #[arg(short, long)]
        name: String,

        /// Name currently in use
        #[arg(long, default_value = "")]
        current_name: String,

        /// Mother's maiden name
        #[arg(long, default_value = "")]
        maiden_name: String,

        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        birth_date: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Print one uncolored line per number and cycle
        #[arg(long, conflicts_with = "json")]
        plain: bool,
    },

    /// Show the universal day, month, and year numbers
    Numbers {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List available spreads
    Spreads,

    /// Show one tarot card, rune, or angel card by id
    Show {
        /// Item id, e.g. the-fool, ansuz, angel-abundance
        id: String,
    },
}

/// Log to stderr so stdout stays parseable. `RUST_LOG` overrides the default.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed { identity, date } => commands::seed::run(&identity, date.as_deref()),
        Commands::Daily {
            identity,
            date,
            json,
        } => commands::daily::run(&identity, date.as_deref(), json),
        Commands::Spread {
            spread,
            seed,
            identity,
            date,
            deck,
            json,
            plain,
        } => commands::spread::run(
            &spread,
            commands::spread::Seeding {
                seed,
                identity: identity.as_deref(),
                date: date.as_deref(),
            },
            deck.as_deref(),
            commands::Output::from_flags(json, plain),
        ),
        Commands::Deck { deck, seed, json } => commands::deck::run(&deck, seed, json),
        Commands::Cast { count, seed, json } => commands::cast::run(count, seed, json),
        Commands::Blueprint {
            name,
            current_name,
            maiden_name,
            birth_date,
            json,
            plain,
        } => commands::blueprint::run(
            &name,
            &current_name,
            &maiden_name,
            &birth_date,
            commands::Output::from_flags(json, plain),
        ),
        Commands::Numbers { date, json } => commands::numbers::run(date.as_deref(), json),
        Commands::Spreads => commands::spreads::run(),
        Commands::Show { id } => commands::show::run(&id),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
