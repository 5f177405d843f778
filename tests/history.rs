//! History corpus and store integration tests.

use bacrs::{BettingOptions, History, HistoryStore, Strategy, search};

fn history() -> History {
    History::new(
        vec!["3121".into(), "212".into(), "3121".into()],
        vec!["55".into(), "abc".into(), "  ".into(), "212".into(), "55".into()],
    )
}

#[test]
fn search_corpus_drops_duplicates() {
    assert_eq!(history().search_corpus(), ["3121", "212"]);
}

#[test]
fn manual_corpus_keeps_digit_records() {
    assert_eq!(history().manual_corpus(), ["55", "212"]);
}

#[test]
fn betting_corpus_merges_both_lists() {
    assert_eq!(history().betting_corpus(), ["3121", "212", "55"]);
}

#[test]
fn large_history_dedupes_in_first_seen_order() {
    let simulation = (0..20_000).map(|i| (i % 500).to_string()).collect();
    let manual = (0..1_000).map(|i| (i % 600).to_string()).collect();
    let history = History::new(simulation, manual);

    let expected: Vec<String> = (0..500).map(|i| i.to_string()).collect();
    assert_eq!(history.search_corpus(), expected);
    assert_eq!(history.manual_corpus().len(), 600);

    let corpus = history.betting_corpus();
    assert_eq!(corpus.len(), 600);
    assert_eq!(corpus[499], "499");
    assert_eq!(corpus[500], "500");
}

#[test]
fn empty_history_is_valid_input() {
    let history = History::default();
    let corpus = history.betting_corpus();

    let result = search(&corpus, "1").unwrap();
    assert_eq!(result.total_matches, 0);

    let options = BettingOptions::new(100, 10, Strategy::FlatBet).unwrap();
    let report = bacrs::betting::evaluate_with(&options, &corpus, || true);
    assert_eq!(report.total(), 0);
}

#[test]
fn memory_store_appends() {
    let mut store = History::default();

    let codes = [String::from("12"), String::from(" "), String::from("31")];
    store.append_simulated(&codes).unwrap();
    store.append_manual(" 445 ").unwrap();
    store.append_manual("445").unwrap();
    store.append_manual("").unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.simulation, ["12", "31"]);
    assert_eq!(loaded.manual, ["445"]);
}

#[cfg(feature = "serde")]
#[test]
fn persisted_shape_round_trips() {
    let json = r#"{"BaccaratHistory":["3121","55"],"ManualHistory":["12"]}"#;
    let history: History = serde_json::from_str(json).unwrap();

    assert_eq!(history.simulation, ["3121", "55"]);
    assert_eq!(history.manual, ["12"]);
    assert_eq!(serde_json::to_string(&history).unwrap(), json);

    let empty: History = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, History::default());
}
