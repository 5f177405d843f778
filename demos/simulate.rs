//! Simulates a batch of shoes, searches the codes, and replays them against
//! both betting strategies.
//!
//! Usage: `cargo run --example simulate -- [query] [capital] [bet]`

use std::time::{SystemTime, UNIX_EPOCH};

use bacrs::{
    BettingOptions, DEFAULT_BATCH_SIZE, History, HistoryStore, ShoeOptions, Simulator, Strategy,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let query = args.next().unwrap_or_else(|| "1111".into());
    let capital = args.next().unwrap_or_else(|| "1000".into());
    let bet = args.next().unwrap_or_else(|| "10".into());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut simulator = Simulator::new(ShoeOptions::default(), seed);

    let session = simulator.run_shoe();
    println!("Sample shoe ({} rounds):", session.rounds.len());
    for (i, round) in session.rounds.iter().take(5).enumerate() {
        let cards = |hand: &bacrs::Hand| {
            hand.cards()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        println!(
            "  {}: player {} ({}) vs banker {} ({}) -> {:?}",
            i + 1,
            cards(round.player()),
            round.player().total(),
            cards(round.banker()),
            round.banker().total(),
            round.outcome()
        );
    }
    println!("  code: {}", session.code());

    let mut history = History::default();
    let codes = simulator.simulate_batch(DEFAULT_BATCH_SIZE, None);
    if let Err(err) = history.append_simulated(&codes) {
        match err {}
    }

    let corpus = history.search_corpus();
    match simulator.search(&corpus, &query) {
        Ok(result) => {
            println!("\nFound {} matches for {query}", result.total_matches);
            for entry in result.windows.iter().take(10) {
                println!("  {}  {}", entry.window, entry.count);
            }
        }
        Err(err) => println!("Search error: {err}"),
    }

    for strategy in [Strategy::FlatBet, Strategy::Martingale] {
        let options = match BettingOptions::parse(&capital, &bet, strategy) {
            Ok(options) => options,
            Err(err) => {
                println!("Betting error: {err}");
                return;
            }
        };

        let report = simulator.evaluate(&options, &history.betting_corpus());
        println!("\n{strategy:?}: {} codes", report.total());
        println!("  profit: {}", report.profit);
        println!("  loss, not broke: {}", report.loss_not_broke);
        println!("  broke: {}", report.broke);
        if let Some(best) = &report.best {
            println!("  best: {} from {}", best.profit, best.code);
        }
        println!("  bucket: {}", report.bucket().label());
    }
}
