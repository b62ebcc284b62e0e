use crate::cards::Rank;

/// Rank-frequency histogram of a hand, grouped as (rank, count) and sorted by
/// count descending, then rank descending.
///
/// Example: QQQ95 groups as [(Queen, 3), (Nine, 1), (Five, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&r| {
                let count = counts[r.value() as usize];
                (count > 0).then_some((r, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, high to low.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Unpaired ranks, high to low.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    /// True when every rank appears once.
    pub fn all_distinct(&self) -> bool {
        self.groups.iter().all(|(_, count)| *count == 1)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
