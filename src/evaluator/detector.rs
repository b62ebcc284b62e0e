use super::hand_analysis::HandAnalysis;
use super::{Category, Classification, Kickers};
use crate::cards::Rank;

/// Strategy pattern: each detector recognises exactly one category and builds
/// its classification.
///
/// Every predicate is exclusive on its own, so at most one detector matches a
/// valid hand whatever order they are tried in.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification>;
}

// ============================================================================
// Detector Implementations (strongest first)
// ============================================================================

pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let high = analysis.straight_high()?;
        (analysis.is_flush() && high == Rank::Ace).then_some(Classification::RoyalFlush)
    }
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let high = analysis.straight_high()?;
        (analysis.is_flush() && high != Rank::Ace)
            .then_some(Classification::StraightFlush { high })
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = *analysis.rank_groups.kickers().first()?;
        Some(Classification::FourOfAKind { quad, kicker })
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let trips = analysis.rank_groups.trips()?;
        let pair = *analysis.rank_groups.pairs().first()?;
        Some(Classification::FullHouse { trips, pair })
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let plain = analysis.is_flush()
            && !analysis.straight_info.is_straight()
            && analysis.rank_groups.all_distinct();
        plain.then(|| Classification::Flush { ranks: Kickers::new(analysis.ranks.to_vec()) })
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let high = analysis.straight_high()?;
        (!analysis.is_flush()).then_some(Classification::Straight { high })
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let trips = analysis.rank_groups.trips()?;
        if !analysis.rank_groups.pairs().is_empty() {
            return None;
        }
        let kickers = Kickers::new(analysis.rank_groups.kickers());
        Some(Classification::ThreeOfAKind { trips, kickers })
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        match analysis.rank_groups.pairs().as_slice() {
            &[high, low] => {
                let kicker = *analysis.rank_groups.kickers().first()?;
                Some(Classification::TwoPair { high, low, kicker })
            }
            _ => None,
        }
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        if analysis.rank_groups.trips().is_some() {
            return None;
        }
        match analysis.rank_groups.pairs().as_slice() {
            &[pair] => {
                let kickers = Kickers::new(analysis.rank_groups.kickers());
                Some(Classification::OnePair { pair, kickers })
            }
            _ => None,
        }
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Classification> {
        let nothing = analysis.rank_groups.all_distinct()
            && !analysis.is_flush()
            && !analysis.straight_info.is_straight();
        nothing.then(|| Classification::HighCard { ranks: Kickers::new(analysis.ranks.to_vec()) })
    }
}

// ============================================================================
// Static detector list (strongest first)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
