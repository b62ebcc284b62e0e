//! Category-aware comparison of classified hands.
//!
//! Categories are compared first. Inside a shared category the attributes
//! are compared in [`Classification::tiebreak`] order, kicker lists
//! lexicographically, highest first. Nothing here sorts: kicker lists arrive
//! already ordered high to low.

use super::Classification;
use crate::cards::Rank;
use core::cmp::Ordering;

/// Compare two classifications. `Greater` means `a` wins, `Equal` is a true tie.
pub fn compare(a: &Classification, b: &Classification) -> Ordering {
    use Classification::*;

    a.category().cmp(&b.category()).then_with(|| match (a, b) {
        (RoyalFlush, RoyalFlush) => Ordering::Equal,
        (StraightFlush { high: x }, StraightFlush { high: y })
        | (Straight { high: x }, Straight { high: y }) => x.cmp(y),
        (FourOfAKind { quad: q1, kicker: k1 }, FourOfAKind { quad: q2, kicker: k2 }) => {
            (q1, k1).cmp(&(q2, k2))
        }
        (FullHouse { trips: t1, pair: p1 }, FullHouse { trips: t2, pair: p2 }) => {
            (t1, p1).cmp(&(t2, p2))
        }
        (Flush { ranks: r1 }, Flush { ranks: r2 })
        | (HighCard { ranks: r1 }, HighCard { ranks: r2 }) => r1.cmp(r2),
        (ThreeOfAKind { trips: t1, kickers: k1 }, ThreeOfAKind { trips: t2, kickers: k2 }) => {
            (t1, k1).cmp(&(t2, k2))
        }
        (
            TwoPair { high: h1, low: l1, kicker: k1 },
            TwoPair { high: h2, low: l2, kicker: k2 },
        ) => (h1, l1, k1).cmp(&(h2, l2, k2)),
        (OnePair { pair: p1, kickers: k1 }, OnePair { pair: p2, kickers: k2 }) => {
            (p1, k1).cmp(&(p2, k2))
        }
        _ => compare_slots(&a.tiebreak(), &b.tiebreak()),
    })
}

/// Compare tie-break slot lists of two hands in the same category.
///
/// Slots compare position by position and ranks inside a slot highest first.
/// When one list is a prefix of the other, the longer list is greater.
pub fn compare_slots(a: &[Vec<Rank>], b: &[Vec<Rank>]) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::Kickers;
    use Rank::*;

    #[test]
    fn category_decides_before_attributes() {
        let pair =
            Classification::OnePair { pair: Ace, kickers: Kickers::new(vec![King, Queen, Jack]) };
        let two_pair = Classification::TwoPair { high: Three, low: Two, kicker: Four };
        assert_eq!(compare(&two_pair, &pair), Ordering::Greater);
        assert_eq!(compare(&pair, &two_pair), Ordering::Less);
    }

    #[test]
    fn two_pair_compares_high_pair_against_the_other_hand() {
        let kings = Classification::TwoPair { high: King, low: Four, kicker: Two };
        let queens = Classification::TwoPair { high: Queen, low: Jack, kicker: Ace };
        assert_eq!(compare(&kings, &queens), Ordering::Greater);
        assert_eq!(compare(&queens, &kings), Ordering::Less);
    }

    #[test]
    fn two_pair_falls_through_to_low_pair_then_kicker() {
        let fours = Classification::TwoPair { high: King, low: Four, kicker: Ace };
        let nines = Classification::TwoPair { high: King, low: Nine, kicker: Two };
        assert_eq!(compare(&nines, &fours), Ordering::Greater);

        let ace_kicker = Classification::TwoPair { high: King, low: Nine, kicker: Ace };
        assert_eq!(compare(&ace_kicker, &nines), Ordering::Greater);
        assert_eq!(compare(&ace_kicker, &ace_kicker.clone()), Ordering::Equal);
    }

    #[test]
    fn kicker_lists_compare_earliest_first() {
        let a =
            Classification::OnePair { pair: Ten, kickers: Kickers::new(vec![Ace, Four, Three]) };
        let b =
            Classification::OnePair { pair: Ten, kickers: Kickers::new(vec![King, Queen, Jack]) };
        assert_eq!(compare(&a, &b), Ordering::Greater);

        let c = Classification::OnePair { pair: Ten, kickers: Kickers::new(vec![Ace, Four, Two]) };
        assert_eq!(compare(&a, &c), Ordering::Greater);
    }

    #[test]
    fn quads_compare_rank_then_kicker() {
        let a = Classification::FourOfAKind { quad: Nine, kicker: Two };
        let b = Classification::FourOfAKind { quad: Eight, kicker: Ace };
        let c = Classification::FourOfAKind { quad: Nine, kicker: Three };
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&c, &a), Ordering::Greater);
    }

    #[test]
    fn single_ranks_and_lists_are_handled_alike() {
        assert_eq!(compare_slots(&[vec![Five]], &[vec![Six]]), Ordering::Less);
        assert_eq!(
            compare_slots(&[vec![Five], vec![Ace, Two]], &[vec![Five], vec![Ace, Two]]),
            Ordering::Equal
        );
    }

    #[test]
    fn royal_flushes_always_tie() {
        let royal = Classification::RoyalFlush;
        assert_eq!(compare(&royal, &royal.clone()), Ordering::Equal);
        let steel = Classification::StraightFlush { high: King };
        assert_eq!(compare(&Classification::RoyalFlush, &steel), Ordering::Greater);
    }

    #[test]
    fn full_houses_compare_trips_then_pair() {
        let eights_deuces = Classification::FullHouse { trips: Eight, pair: Two };
        let sevens_aces = Classification::FullHouse { trips: Seven, pair: Ace };
        let eights_treys = Classification::FullHouse { trips: Eight, pair: Three };
        assert_eq!(compare(&eights_deuces, &sevens_aces), Ordering::Greater);
        assert_eq!(compare(&eights_treys, &eights_deuces), Ordering::Greater);
    }

    #[test]
    fn straight_flushes_compare_high_card() {
        let king_high = Classification::StraightFlush { high: King };
        let steel_wheel = Classification::StraightFlush { high: Five };
        assert_eq!(compare(&king_high, &steel_wheel), Ordering::Greater);
        assert_eq!(compare(&steel_wheel, &steel_wheel.clone()), Ordering::Equal);
    }

    #[test]
    fn ordering_agrees_with_equality_on_short_kicker_lists() {
        let full =
            Classification::Flush { ranks: Kickers::new(vec![Ace, King, Queen, Jack, Nine]) };
        let short = Classification::Flush { ranks: Kickers::new(vec![Ace, King]) };
        assert_ne!(full, short);
        assert_eq!(compare(&full, &short), Ordering::Greater);

        let empty = Classification::HighCard { ranks: Kickers::new(Vec::new()) };
        let real =
            Classification::HighCard { ranks: Kickers::new(vec![Ace, Nine, Seven, Four, Two]) };
        assert_eq!(compare(&empty, &real), Ordering::Less);

        let set: std::collections::BTreeSet<_> = [full.clone(), short, full].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn slot_lists_order_by_length_after_common_prefix() {
        assert_eq!(compare_slots(&[vec![Ace, King]], &[vec![Ace]]), Ordering::Greater);
        assert_eq!(compare_slots(&[vec![Ace]], &[vec![Ace], vec![Two]]), Ordering::Less);
    }
}
