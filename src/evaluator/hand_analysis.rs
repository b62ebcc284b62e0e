use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed properties of a 5-card hand, built once and shared by all
/// category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Ranks high to low.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(Card::rank);
        ranks.sort_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }

    pub fn is_flush(&self) -> bool {
        self.suit_info.is_flush()
    }

    pub fn straight_high(&self) -> Option<Rank> {
        self.straight_info.high
    }
}
