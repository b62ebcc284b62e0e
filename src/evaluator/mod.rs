pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;
pub mod tiebreak;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category, numbered 1 (best) to 10 (worst).
///
/// `Ord` follows hand strength, so `RoyalFlush` is the greatest value even
/// though its [`number`](Category::number) is the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    RoyalFlush = 1,
    StraightFlush = 2,
    FourOfAKind = 3,
    FullHouse = 4,
    Flush = 5,
    Straight = 6,
    ThreeOfAKind = 7,
    TwoPair = 8,
    OnePair = 9,
    HighCard = 10,
}

impl Category {
    /// All categories, strongest first.
    pub const ALL: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    /// Category number; lower beats higher.
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::RoyalFlush => "Royal Flush",
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighCard => "High Card",
        }
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        other.number().cmp(&self.number())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranks sorted high to low. Orders lexicographically, highest rank first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn new(mut ranks: Vec<Rank>) -> Self {
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self(ranks)
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.0
    }

    /// Highest rank, if any.
    pub fn first(&self) -> Option<Rank> {
        self.0.first().copied()
    }
}

/// A classified hand: its category plus the ranks that break ties inside it.
///
/// Ordering is hand strength (greater wins). Two classifications compare
/// equal only when they are a true tie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Classification {
    RoyalFlush,
    StraightFlush { high: Rank },
    FourOfAKind { quad: Rank, kicker: Rank },
    FullHouse { trips: Rank, pair: Rank },
    Flush { ranks: Kickers },
    Straight { high: Rank },
    ThreeOfAKind { trips: Rank, kickers: Kickers },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    OnePair { pair: Rank, kickers: Kickers },
    HighCard { ranks: Kickers },
}

impl Classification {
    pub fn category(&self) -> Category {
        match self {
            Classification::RoyalFlush => Category::RoyalFlush,
            Classification::StraightFlush { .. } => Category::StraightFlush,
            Classification::FourOfAKind { .. } => Category::FourOfAKind,
            Classification::FullHouse { .. } => Category::FullHouse,
            Classification::Flush { .. } => Category::Flush,
            Classification::Straight { .. } => Category::Straight,
            Classification::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            Classification::TwoPair { .. } => Category::TwoPair,
            Classification::OnePair { .. } => Category::OnePair,
            Classification::HighCard { .. } => Category::HighCard,
        }
    }

    /// Tie-break attributes in comparison order. Every slot is a list of
    /// ranks, single ranks included, with kicker lists high to low.
    pub fn tiebreak(&self) -> Vec<Vec<Rank>> {
        match self {
            Classification::RoyalFlush => vec![vec![Rank::Ace]],
            Classification::StraightFlush { high } | Classification::Straight { high } => {
                vec![vec![*high]]
            }
            Classification::FourOfAKind { quad, kicker } => vec![vec![*quad], vec![*kicker]],
            Classification::FullHouse { trips, pair } => vec![vec![*trips], vec![*pair]],
            Classification::Flush { ranks } | Classification::HighCard { ranks } => {
                vec![ranks.as_slice().to_vec()]
            }
            Classification::ThreeOfAKind { trips, kickers } => {
                vec![vec![*trips], kickers.as_slice().to_vec()]
            }
            Classification::TwoPair { high, low, kicker } => {
                vec![vec![*high], vec![*low], vec![*kicker]]
            }
            Classification::OnePair { pair, kickers } => {
                vec![vec![*pair], kickers.as_slice().to_vec()]
            }
        }
    }
}

impl Ord for Classification {
    fn cmp(&self, other: &Self) -> Ordering {
        tiebreak::compare(self, other)
    }
}

impl PartialOrd for Classification {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::RoyalFlush => write!(f, "Royal Flush"),
            Classification::StraightFlush { high } => {
                write!(f, "Straight Flush, {} high", high.name())
            }
            Classification::FourOfAKind { quad, kicker } => {
                write!(f, "Four of a Kind, {} with a {} kicker", quad.plural(), kicker.name())
            }
            Classification::FullHouse { trips, pair } => {
                write!(f, "Full House, {} full of {}", trips.plural(), pair.plural())
            }
            Classification::Flush { ranks } => match ranks.first() {
                Some(high) => write!(f, "Flush, {} high", high.name()),
                None => write!(f, "Flush"),
            },
            Classification::Straight { high } => write!(f, "Straight, {} high", high.name()),
            Classification::ThreeOfAKind { trips, .. } => {
                write!(f, "Three of a Kind, {}", trips.plural())
            }
            Classification::TwoPair { high, low, .. } => {
                write!(f, "Two Pair, {} and {}", high.plural(), low.plural())
            }
            Classification::OnePair { pair, .. } => write!(f, "Pair of {}", pair.plural()),
            Classification::HighCard { ranks } => match ranks.first() {
                Some(high) => write!(f, "High Card, {}", high.name()),
                None => write!(f, "High Card"),
            },
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("no category matched hand {0}")]
    Unclassified(Hand),
}

/// Classify a five-card hand into its category and tie-break attributes.
///
/// ```
/// use poker_showdown::evaluator::{classify, Category};
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "Ad 2c 3h 4s 5d".parse().unwrap();
/// let c = classify(&hand).unwrap();
/// assert_eq!(c.category(), Category::Straight);
/// assert_eq!(c.to_string(), "Straight, Five high");
/// ```
pub fn classify(hand: &Hand) -> Result<Classification, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(hand.cards());

    // Detectors are mutually exclusive; priority order only saves work.
    let classification = DETECTORS
        .iter()
        .find_map(|detector| {
            let found = detector.detect(&analysis)?;
            debug_assert_eq!(found.category(), detector.category());
            Some(found)
        })
        .ok_or(EvalError::Unclassified(*hand))?;
    log::trace!("classified {hand} as {classification}");
    Ok(classification)
}

/// Validate raw cards as a hand, then classify it.
///
/// ```
/// use poker_showdown::cards::parse_cards;
/// use poker_showdown::evaluator::{classify_cards, EvalError};
///
/// let four = parse_cards("As Ks Qs Js").unwrap();
/// assert!(matches!(classify_cards(&four), Err(EvalError::InvalidHand(_))));
/// ```
pub fn classify_cards(cards: &[Card]) -> Result<Classification, EvalError> {
    let hand = Hand::from_slice(cards)?;
    classify(&hand)
}

/// Compare two hands. `Greater` means `a` wins.
///
/// ```
/// use poker_showdown::evaluator::compare_hands;
/// use poker_showdown::hand::Hand;
///
/// let full_house: Hand = "3s 3h 3d 7c 7s".parse().unwrap();
/// let flush: Hand = "2c 5c 9c Jc Kc".parse().unwrap();
/// assert!(compare_hands(&full_house, &flush).unwrap().is_gt());
/// ```
pub fn compare_hands(a: &Hand, b: &Hand) -> Result<Ordering, EvalError> {
    let ca = classify(a)?;
    let cb = classify(b)?;
    Ok(ca.cmp(&cb))
}
