use poker_showdown::cards::{Card, Rank, Suit};
use poker_showdown::deck::Deck;
use poker_showdown::evaluator::{classify, Category};
use poker_showdown::hand::Hand;
use poker_showdown::showdown::resolve;
use proptest::prelude::*;
use std::cmp::Ordering;

fn all_cards() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
}

/// Five distinct cards in arbitrary order.
fn any_hand() -> impl Strategy<Value = Hand> {
    prop::sample::subsequence(all_cards(), 5)
        .prop_shuffle()
        .prop_map(|cards| Hand::from_slice(&cards).expect("distinct cards"))
}

fn straight_cards(top: u8) -> Hand {
    let values: Vec<u8> = if top == 5 { vec![14, 2, 3, 4, 5] } else { (top - 4..=top).collect() };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let cards: Vec<Card> = values
        .iter()
        .zip(suits)
        .map(|(&v, s)| Card::new(Rank::from_value(v).expect("rank value"), s))
        .collect();
    Hand::from_slice(&cards).expect("valid straight")
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().filter_map(Rank::from_value).collect())
}

fn suited(ranks: &[Rank], suit: Suit) -> Hand {
    let cards: Vec<Card> = ranks.iter().map(|&r| Card::new(r, suit)).collect();
    Hand::from_slice(&cards).expect("distinct ranks")
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    a.iter().zip(b).map(|(x, y)| x.cmp(y)).find(|o| o.is_ne()).unwrap_or(Ordering::Equal)
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric_and_transitive(a in any_hand(), b in any_hand(), c in any_hand()) {
        let ca = classify(&a).unwrap();
        let cb = classify(&b).unwrap();
        let cc = classify(&c).unwrap();

        prop_assert_eq!(ca.cmp(&cb), cb.cmp(&ca).reverse());
        if ca >= cb && cb >= cc { prop_assert!(ca >= cc); }
        if ca == cb { prop_assert_eq!(ca.tiebreak(), cb.tiebreak()); }
    }

    #[test]
    fn classification_is_idempotent_and_order_free(hand in any_hand()) {
        let first = classify(&hand).unwrap();
        prop_assert_eq!(&first, &classify(&hand).unwrap());

        let mut reversed = *hand.cards();
        reversed.reverse();
        let reversed = Hand::try_new(reversed).unwrap();
        prop_assert_eq!(&first, &classify(&reversed).unwrap());
    }

    #[test]
    fn kicker_slots_are_descending(hand in any_hand()) {
        for slot in classify(&hand).unwrap().tiebreak() {
            prop_assert!(slot.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let hi = classify(&straight_cards(top_hi)).unwrap();
        let lo = classify(&straight_cards(top_lo)).unwrap();
        prop_assert_eq!(hi.category(), Category::Straight);
        prop_assert_eq!(lo.category(), Category::Straight);
        prop_assert!(hi > lo);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let ea = classify(&suited(&a, Suit::Hearts)).unwrap();
        let eb = classify(&suited(&b, Suit::Spades)).unwrap();
        prop_assert_eq!(ea.category(), Category::Flush);
        prop_assert_eq!(eb.category(), Category::Flush);

        let mut a_desc = a.clone();
        a_desc.sort_by(|x, y| y.cmp(x));
        let mut b_desc = b.clone();
        b_desc.sort_by(|x, y| y.cmp(x));
        prop_assert_eq!(ea.cmp(&eb), compare_rank_lists(&a_desc, &b_desc));
    }

    #[test]
    fn resolver_winners_do_not_depend_on_seating(seed in any::<u64>(), n in 1usize..=10) {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        let hands = deck.deal_hands(n).unwrap();
        let players: Vec<(String, Hand)> =
            hands.into_iter().enumerate().map(|(i, h)| (format!("p{i}"), h)).collect();
        let mut reversed = players.clone();
        reversed.reverse();

        let forward = resolve(&players).unwrap();
        let backward = resolve(&reversed).unwrap();
        let mut fw: Vec<&str> = forward.winner_names();
        let mut bw: Vec<&str> = backward.winner_names();
        fw.sort_unstable();
        bw.sort_unstable();
        prop_assert_eq!(fw, bw);
        prop_assert_eq!(&forward.best, &backward.best);

        // Every winner holds the best hand, nobody beats it.
        for c in &forward.contenders {
            prop_assert!(c.classification <= forward.best);
            prop_assert_eq!(forward.winners.contains(&c.seat), c.classification == forward.best);
        }
    }
}
