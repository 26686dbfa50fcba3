//! Fantasy Ranking - Demonstration Binary
//!
//! Loads a built-in sample season, then prints the driver ranking, a search
//! and the league leaderboard.

use std::rc::Rc;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::{info, Level};

use fantasy_ranking::types::money::format_millions;
use fantasy_ranking::{
    CompetitorRecord, Leaderboard, ParticipantRecord, RankingConfig, Roster, TeamRef,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fantasy league rankings demo", long_about = None)]
struct Args {
    /// Rows to show in ranking views
    #[arg(short, long, default_value_t = fantasy_ranking::config::DEFAULT_TOP_N)]
    top: usize,

    /// Name or code prefix to search for
    #[arg(short, long, default_value = "l")]
    search: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// (code, name, group, points, price in millions as tenths)
const SAMPLE_DRIVERS: &[(&str, &str, &str, i64, i64)] = &[
    ("VER", "Max Verstappen", "Red Bull", 400, 300),
    ("HAM", "Lewis Hamilton", "Ferrari", 380, 250),
    ("LEC", "Charles Leclerc", "Ferrari", 380, 220),
    ("NOR", "Lando Norris", "McLaren", 350, 240),
    ("PIA", "Oscar Piastri", "McLaren", 310, 215),
    ("RUS", "George Russell", "Mercedes", 240, 190),
    ("ALO", "Fernando Alonso", "Aston Martin", 70, 95),
    ("LAW", "Liam Lawson", "Racing Bulls", 30, 65),
];

/// (username, points, budget, group, members)
const SAMPLE_PLAYERS: &[(&str, i64, i64, &str, [&str; 2])] = &[
    ("alice", 50, 100, "Ferrari", ["HAM", "LEC"]),
    ("bob", 80, 100, "McLaren", ["NOR", "PIA"]),
    ("carol", 80, 100, "Red Bull", ["VER", "LAW"]),
    ("dave", 35, 100, "Mercedes", ["RUS", "ALO"]),
];

fn main() {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = RankingConfig::default()
        .with_top_n(args.top)
        .with_leaderboard_capacity(SAMPLE_PLAYERS.len());

    println!("===========================================");
    println!("  Fantasy Ranking - Season Demo");
    println!("===========================================");
    println!();

    // Load drivers
    let mut roster = Roster::with_capacity(config.roster_capacity);
    for &(code, name, group, points, tenths) in SAMPLE_DRIVERS {
        let record = CompetitorRecord::new(code, name, group, points, Decimal::new(tenths, 1));
        if let Err(err) = roster.push(record) {
            eprintln!("  ERROR: {err}");
        }
    }
    info!(drivers = roster.len(), "roster loaded");

    // Ranking tree
    let tree = roster.ranking_tree();
    println!("Top {} drivers (AVL tree, height {}):", config.top_n, tree.height());
    for (i, d) in tree.top_n(config.top_n).iter().enumerate() {
        println!(
            "  {:>2}. {:<4} {:<18} {:<14} {:>4} pts  {:>6}",
            i + 1,
            d.code,
            d.name,
            d.group,
            d.score,
            format_millions(d.price)
        );
    }
    println!("  Ranking digest: {}", tree.digest_hex());
    println!();

    // Cheapest drivers
    println!("Cheapest drivers:");
    for d in roster.sorted_by_price().iter().take(config.top_n) {
        println!("  {:<4} {:>6}", d.code, format_millions(d.price));
    }
    println!();

    // Search
    let trie = roster.search_index();
    println!("Search '{}':", args.search);
    let mut matches = trie.suggestions(&roster, &args.search);
    matches.sort();
    matches.dedup();
    if matches.is_empty() {
        println!("  No drivers found");
    }
    for suggestion in matches {
        println!("  {suggestion}");
    }
    println!();

    // Leaderboard
    let players: Vec<Rc<ParticipantRecord>> = SAMPLE_PLAYERS
        .iter()
        .map(|&(username, points, budget, group, members)| {
            let team = TeamRef::new(group, members.iter().map(|m| m.to_string()).collect());
            Rc::new(ParticipantRecord::with_score(username, points, Decimal::from(budget), team))
        })
        .collect();

    let mut board = Leaderboard::with_capacity(config.leaderboard_capacity);
    for player in &players {
        if let Err(err) = board.add_participant(player) {
            eprintln!("  ERROR: {err}");
        }
    }

    println!("Leaderboard (average {} pts):", board.average_points());
    for entry in board.top_n(config.top_n) {
        println!(
            "  {:>2}. {:<10} {:>4} pts  {:>6}",
            entry.rank,
            entry.username,
            entry.score,
            format_millions(entry.budget)
        );
    }
    println!();

    println!("CSV export:");
    if let Err(err) = board.export_csv(std::io::stdout().lock()) {
        eprintln!("  ERROR: {err}");
    }
}
