//! Shoe, round, runner, and streak integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use bacrs::round::banker_draws;
use bacrs::streak::encode;
use bacrs::{
    Card, DECK_SIZE, DealError, Outcome, Round, Shoe, ShoeOptions, Simulator, Suit, run_shoe,
    simulate_batch,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use Outcome::{BankerWin, PlayerWin, Tie};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn deal(draws: &[Card]) -> (Round, Shoe) {
    let mut shoe = Shoe::from_cards(draws.to_vec());
    let round = Round::deal(&mut shoe).unwrap();
    (round, shoe)
}

#[test]
fn card_points_and_display() {
    assert_eq!(card(Suit::Spades, 1).point(), 1);
    assert_eq!(card(Suit::Hearts, 7).point(), 7);
    assert_eq!(card(Suit::Diamonds, 10).point(), 0);
    assert_eq!(card(Suit::Clubs, 13).point(), 0);

    assert_eq!(card(Suit::Spades, 1).to_string(), "♠A");
    assert_eq!(card(Suit::Hearts, 10).to_string(), "♥10");
    assert_eq!(card(Suit::Clubs, 13).to_string(), "♣K");
}

#[test]
fn fresh_shoe_has_eight_full_decks() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let shoe = Shoe::new(8, &mut rng);

    assert_eq!(shoe.len(), 8 * DECK_SIZE);
    assert_eq!(shoe.len(), 416);
    assert_eq!(shoe.remaining(), 416);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    for &c in shoe.cards() {
        *counts.entry(c).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 8));
}

#[test]
fn shuffle_depends_on_rng() {
    let a = Shoe::new(8, &mut ChaCha8Rng::seed_from_u64(1));
    let b = Shoe::new(8, &mut ChaCha8Rng::seed_from_u64(1));
    let c = Shoe::new(8, &mut ChaCha8Rng::seed_from_u64(2));

    assert_eq!(a, b);
    assert_ne!(a.cards(), c.cards());
}

#[test]
fn draw_advances_cursor() {
    let mut shoe = Shoe::from_cards(vec![card(Suit::Hearts, 2), card(Suit::Clubs, 3)]);

    assert_eq!(shoe.draw(), Some(card(Suit::Hearts, 2)));
    assert_eq!(shoe.drawn(), 1);
    assert_eq!(shoe.remaining(), 1);
    assert_eq!(shoe.draw(), Some(card(Suit::Clubs, 3)));
    assert_eq!(shoe.draw(), None);
    assert_eq!(shoe.len(), 2);
}

#[test]
fn burn_discards_point_value() {
    let mut draws = vec![card(Suit::Hearts, 5)];
    draws.extend(std::iter::repeat_n(card(Suit::Clubs, 2), 20));
    let mut shoe = Shoe::from_cards(draws);

    let burn = shoe.burn().unwrap();
    assert_eq!(burn.count(), 5);
    assert_eq!(burn.discarded.len(), 5);
    assert_eq!(burn.total(), 6);
    assert_eq!(shoe.remaining(), 15);
}

#[test]
fn burn_zero_point_card_discards_ten() {
    for rank in [10, 11, 12, 13] {
        let mut draws = vec![card(Suit::Spades, rank)];
        draws.extend(std::iter::repeat_n(card(Suit::Clubs, 2), 20));
        let mut shoe = Shoe::from_cards(draws);

        let burn = shoe.burn().unwrap();
        assert_eq!(burn.count(), 10);
        assert_eq!(burn.discarded.len(), 10);
        assert_eq!(shoe.remaining(), 10);
    }
}

#[test]
fn burn_stops_at_end_of_short_shoe() {
    let mut shoe = Shoe::from_cards(vec![
        card(Suit::Spades, 9),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3),
        card(Suit::Clubs, 4),
    ]);

    let burn = shoe.burn().unwrap();
    assert_eq!(burn.count(), 9);
    assert_eq!(burn.discarded.len(), 3);
    assert_eq!(shoe.remaining(), 0);

    assert!(Shoe::from_cards(Vec::new()).burn().is_none());
}

#[test]
fn both_naturals_tie_without_drawing() {
    let (round, shoe) = deal(&[
        card(Suit::Spades, 5),   // player
        card(Suit::Hearts, 3),   // player
        card(Suit::Diamonds, 6), // banker
        card(Suit::Clubs, 2),    // banker
        card(Suit::Clubs, 9),    // untouched
    ]);

    assert_eq!(round.player().total(), 8);
    assert_eq!(round.banker().total(), 8);
    assert!(round.player().is_natural());
    assert_eq!(round.outcome(), Tie);
    assert_eq!(round.cards_used(), 4);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn player_natural_stops_banker() {
    let (round, _) = deal(&[
        card(Suit::Spades, 4),
        card(Suit::Hearts, 5),
        card(Suit::Diamonds, 1),
        card(Suit::Clubs, 1),
        card(Suit::Clubs, 5),
    ]);

    assert_eq!(round.outcome(), PlayerWin);
    assert_eq!(round.banker().total(), 2);
    assert_eq!(round.cards_used(), 4);
}

#[test]
fn banker_natural_stops_player() {
    let (round, _) = deal(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 1),
        card(Suit::Diamonds, 9),
        card(Suit::Clubs, 10),
        card(Suit::Clubs, 5),
    ]);

    assert_eq!(round.outcome(), BankerWin);
    assert_eq!(round.player().third_card(), None);
    assert_eq!(round.cards_used(), 4);
}

#[test]
fn banker_three_stands_on_player_eight() {
    let (round, shoe) = deal(&[
        card(Suit::Spades, 2),    // player
        card(Suit::Hearts, 3),    // player
        card(Suit::Diamonds, 10), // banker
        card(Suit::Clubs, 3),     // banker
        card(Suit::Hearts, 8),    // player third
        card(Suit::Clubs, 5),     // untouched
    ]);

    assert_eq!(round.player().third_card(), Some(card(Suit::Hearts, 8)));
    assert_eq!(round.player().total(), 3);
    assert_eq!(round.banker().third_card(), None);
    assert_eq!(round.outcome(), Tie);
    assert_eq!(round.cards_used(), 5);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn banker_three_draws_on_player_nine() {
    let (round, _) = deal(&[
        card(Suit::Spades, 2),
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 13),
        card(Suit::Clubs, 3),
        card(Suit::Hearts, 9), // player third
        card(Suit::Clubs, 5),  // banker third
    ]);

    assert_eq!(round.player().total(), 4);
    assert_eq!(round.banker().third_card(), Some(card(Suit::Clubs, 5)));
    assert_eq!(round.banker().total(), 8);
    assert_eq!(round.outcome(), BankerWin);
    assert_eq!(round.cards_used(), 6);
}

#[test]
fn banker_six_draws_only_on_player_six_or_seven() {
    let (round, _) = deal(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 6), // player third
        card(Suit::Clubs, 2),  // banker third
    ]);
    assert_eq!(round.player().total(), 9);
    assert_eq!(round.banker().total(), 8);
    assert_eq!(round.outcome(), PlayerWin);
    assert_eq!(round.cards_used(), 6);

    let (round, _) = deal(&[
        card(Suit::Spades, 1),
        card(Suit::Hearts, 2),
        card(Suit::Diamonds, 10),
        card(Suit::Clubs, 6),
        card(Suit::Hearts, 5), // player third
        card(Suit::Clubs, 2),  // untouched
    ]);
    assert_eq!(round.player().total(), 8);
    assert_eq!(round.banker().total(), 6);
    assert_eq!(round.outcome(), PlayerWin);
    assert_eq!(round.cards_used(), 5);
}

#[test]
fn banker_draws_on_five_or_less_when_player_stands() {
    let (round, _) = deal(&[
        card(Suit::Spades, 3),
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 2),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 3), // banker third
    ]);

    assert_eq!(round.player().len(), 2);
    assert_eq!(round.banker().third_card(), Some(card(Suit::Clubs, 3)));
    assert_eq!(round.banker().total(), 7);
    assert_eq!(round.outcome(), BankerWin);
}

#[test]
fn banker_six_stands_when_player_stands() {
    let (round, _) = deal(&[
        card(Suit::Spades, 4),
        card(Suit::Hearts, 3),
        card(Suit::Diamonds, 4),
        card(Suit::Clubs, 2),
        card(Suit::Clubs, 1),
    ]);

    assert_eq!(round.player().total(), 7);
    assert_eq!(round.banker().total(), 6);
    assert_eq!(round.outcome(), PlayerWin);
    assert_eq!(round.cards_used(), 4);
}

#[test]
fn banker_draw_table() {
    for third in 0..=9 {
        for total in 0..=2 {
            assert!(banker_draws(total, third));
        }
        assert_eq!(banker_draws(3, third), third != 8);
        assert_eq!(banker_draws(4, third), (2..=7).contains(&third));
        assert_eq!(banker_draws(5, third), (4..=7).contains(&third));
        assert_eq!(banker_draws(6, third), third == 6 || third == 7);
        for total in 7..=9 {
            assert!(!banker_draws(total, third));
        }
    }
}

#[test]
fn deal_needs_four_cards() {
    let mut shoe = Shoe::from_cards(vec![
        card(Suit::Spades, 1),
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
    ]);

    assert_eq!(Round::deal(&mut shoe).unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(shoe.remaining(), 3);
}

#[test]
fn third_card_skipped_when_shoe_runs_dry() {
    let (round, shoe) = deal(&[card(Suit::Spades, 10); 5]);

    assert_eq!(round.player().len(), 3);
    assert_eq!(round.banker().len(), 2);
    assert_eq!(round.outcome(), Tie);
    assert_eq!(shoe.remaining(), 0);
}

#[test]
fn runner_may_overshoot_the_cut_limit() {
    let shoe = Shoe::from_cards(vec![card(Suit::Hearts, 13); 20]);
    let options = ShoeOptions::default().with_burn(false).with_cut_reserve(0, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let session = run_shoe(shoe, &options, &mut rng);

    assert_eq!(session.cut_index, 20);
    assert!(session.burn.is_none());
    assert_eq!(session.rounds.len(), 3);
    assert_eq!(session.cards_played(), 18);
    assert_eq!(session.code(), "");
}

#[test]
fn runner_stops_when_shoe_is_exhausted() {
    let shoe = Shoe::from_cards(vec![card(Suit::Hearts, 13); 20]);
    let options = ShoeOptions::default().with_cut_reserve(0, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let session = run_shoe(shoe, &options, &mut rng);

    let burn = session.burn.as_ref().unwrap();
    assert_eq!(burn.total(), 11);
    assert_eq!(session.rounds.len(), 1);
    assert_eq!(session.cards_played(), 6);
}

#[test]
fn full_shoe_respects_cut_card() {
    let mut simulator = Simulator::new(ShoeOptions::default(), 7);

    for _ in 0..20 {
        let session = simulator.run_shoe();

        assert!((90..=110).contains(&session.reserve));
        assert_eq!(session.cut_index, 416 - session.reserve);

        let burn = session.burn.as_ref().unwrap();
        assert_eq!(burn.discarded.len(), burn.count());

        let played = session.cards_played();
        assert!(played >= session.cut_index - 4);
        assert!(played < session.cut_index + 2);
        assert!(session.rounds.iter().all(|r| (4..=6).contains(&r.cards_used())));
        assert_eq!(session.code(), encode(session.outcomes()));
    }
}

#[test]
fn reversed_reserve_fields_are_swapped() {
    let mut simulator = Simulator::new(ShoeOptions::default(), 3);
    simulator.options.cut_reserve_min = 110;
    simulator.options.cut_reserve_max = 90;

    for _ in 0..10 {
        let session = simulator.run_shoe();
        assert!((90..=110).contains(&session.reserve));
        assert_eq!(session.cut_index, 416 - session.reserve);
    }
}

#[test]
fn ties_never_start_or_break_runs() {
    assert_eq!(encode([PlayerWin, PlayerWin, Tie, PlayerWin, BankerWin]), "31");
    assert_eq!(encode([BankerWin, Tie, Tie, BankerWin, PlayerWin, PlayerWin, BankerWin]), "221");
    assert_eq!(encode([Tie, PlayerWin, Tie]), "1");
}

#[test]
fn empty_or_all_ties_encode_empty() {
    assert_eq!(encode(Vec::<Outcome>::new()), "");
    assert_eq!(encode([Tie, Tie, Tie]), "");
}

#[test]
fn long_runs_saturate_at_nine() {
    assert_eq!(encode(vec![BankerWin; 9]), "9");
    assert_eq!(encode(vec![BankerWin; 15]), "9");

    let mut outcomes = vec![PlayerWin; 12];
    outcomes.push(BankerWin);
    assert_eq!(encode(outcomes), "91");
}

#[test]
fn batch_codes_are_digit_runs() {
    let options = ShoeOptions::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let codes = simulate_batch(25, &options, &mut rng, None);

    assert_eq!(codes.len(), 25);
    for code in &codes {
        assert!(!code.is_empty());
        assert!(code.chars().all(|c| ('1'..='9').contains(&c)));
    }
}

#[test]
fn batch_is_deterministic_per_seed() {
    let mut a = Simulator::new(ShoeOptions::default(), 99);
    let mut b = Simulator::new(ShoeOptions::default(), 99);

    assert_eq!(a.simulate_batch(10, None), b.simulate_batch(10, None));
}

#[test]
fn cancelled_batch_returns_early() {
    let cancel = AtomicBool::new(true);
    let mut simulator = Simulator::new(ShoeOptions::default(), 1);

    assert!(simulator.simulate_batch(500, Some(&cancel)).is_empty());

    let running = AtomicBool::new(false);
    assert_eq!(simulator.simulate_batch(3, Some(&running)).len(), 3);
}

/// Raises the cancel flag on the first draw from the generator.
struct CancelOnFirstDraw<'a> {
    inner: ChaCha8Rng,
    cancel: &'a AtomicBool,
}

impl CancelOnFirstDraw<'_> {
    fn trip(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl RngCore for CancelOnFirstDraw<'_> {
    fn next_u32(&mut self) -> u32 {
        self.trip();
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.trip();
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.trip();
        self.inner.fill_bytes(dst);
    }
}

#[test]
fn cancel_during_batch_finishes_current_shoe() {
    let cancel = AtomicBool::new(false);
    let mut rng = CancelOnFirstDraw {
        inner: ChaCha8Rng::seed_from_u64(5),
        cancel: &cancel,
    };

    let codes = simulate_batch(50, &ShoeOptions::default(), &mut rng, Some(&cancel));

    assert_eq!(codes.len(), 1);
    assert!(!codes[0].is_empty());
}
