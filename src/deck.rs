use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HandError, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("not enough cards: need {needed}, {left} left")]
    Exhausted { needed: usize, left: usize },
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A standard 52-card deck. Cards are drawn from the top (end of the list).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `n` five-card hands, one full hand at a time.
    ///
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(7);
    /// let hands = deck.deal_hands(4).unwrap();
    /// assert_eq!(hands.len(), 4);
    /// assert_eq!(deck.len(), 32);
    /// ```
    pub fn deal_hands(&mut self, n: usize) -> Result<Vec<Hand>, DeckError> {
        let needed = n.saturating_mul(HAND_SIZE);
        if needed > self.cards.len() {
            return Err(DeckError::Exhausted { needed, left: self.cards.len() });
        }
        let dealt = self.cards.split_off(self.cards.len() - needed);
        let hands =
            dealt.rchunks(HAND_SIZE).map(Hand::from_slice).collect::<Result<Vec<Hand>, _>>()?;
        Ok(hands)
    }
}
