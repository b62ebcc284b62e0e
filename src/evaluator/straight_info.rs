use crate::cards::Rank;

/// Whether five ranks form a straight, and its high card.
///
/// Ace plays high (T-J-Q-K-A) or low in the wheel (A-2-3-4-5, Five high).
/// Straights never wrap around the Ace (Q-K-A-2-3 is not a straight).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub high: Option<Rank>,
}

impl StraightInfo {
    /// Input may be in any order.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut desc = *ranks;
        desc.sort_by(|a, b| b.cmp(a));

        if desc.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
            return StraightInfo { high: Some(desc[0]) };
        }

        if desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            return StraightInfo { high: Some(Rank::Five) };
        }

        StraightInfo { high: None }
    }

    pub fn is_straight(&self) -> bool {
        self.high.is_some()
    }
}
