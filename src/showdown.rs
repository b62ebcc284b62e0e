use crate::cards::Card;
use crate::evaluator::{classify, Category, Classification, EvalError};
use crate::hand::Hand;
use core::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("hand evaluation failed for {player}: {source}")]
    Evaluation {
        player: String,
        #[source]
        source: EvalError,
    },
}

/// One player's hand and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Contender {
    /// Position in the input sequence.
    pub seat: usize,
    pub name: String,
    pub hand: Hand,
    pub classification: Classification,
}

/// Outcome of a showdown: every contender plus the seats holding the best hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Showdown {
    pub contenders: Vec<Contender>,
    /// Seats of the co-winners, in input order. Never empty.
    pub winners: Vec<usize>,
    /// The winning classification, shared by every co-winner.
    pub best: Classification,
}

impl Showdown {
    pub fn winners(&self) -> impl Iterator<Item = &Contender> + '_ {
        self.winners.iter().filter_map(|&seat| self.contenders.get(seat))
    }

    pub fn winner_names(&self) -> Vec<&str> {
        self.winners().map(|c| c.name.as_str()).collect()
    }

    pub fn category(&self) -> Category {
        self.best.category()
    }

    /// True when two or more players tie for the best hand.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Classify every player's hand and find the co-winners.
///
/// Players are visited in input order. A strictly better hand resets the
/// winner set; an exact tie (same category and every tie-break rank) joins it.
///
/// ```
/// use poker_showdown::evaluator::Category;
/// use poker_showdown::hand::Hand;
/// use poker_showdown::showdown::resolve;
///
/// let players: Vec<(&str, Hand)> = vec![
///     ("ana", "As Ah Kd Qc Jh".parse().unwrap()),
///     ("ben", "Ad Ac Kh Qs Jd".parse().unwrap()),
///     ("cy", "9s 7h 5d 3c 2h".parse().unwrap()),
/// ];
/// let showdown = resolve(&players).unwrap();
/// assert_eq!(showdown.winner_names(), vec!["ana", "ben"]);
/// assert_eq!(showdown.category(), Category::OnePair);
/// ```
pub fn resolve<N: AsRef<str>>(players: &[(N, Hand)]) -> Result<Showdown, ResolveError> {
    if players.is_empty() {
        return Err(ResolveError::InvalidInput("no players to resolve".to_string()));
    }

    let mut contenders: Vec<Contender> = Vec::with_capacity(players.len());
    let mut best: Option<Classification> = None;
    let mut winners: Vec<usize> = Vec::new();

    for (seat, (name, hand)) in players.iter().enumerate() {
        let name = name.as_ref();
        let classification = classify(hand).map_err(|source| ResolveError::Evaluation {
            player: name.to_string(),
            source,
        })?;

        match best.as_ref().map(|b| classification.cmp(b)) {
            None | Some(Ordering::Greater) => {
                log::trace!("{name} leads with {classification}");
                best = Some(classification.clone());
                winners.clear();
                winners.push(seat);
            }
            Some(Ordering::Equal) => {
                log::trace!("{name} ties the lead with {classification}");
                winners.push(seat);
            }
            Some(Ordering::Less) => {}
        }

        contenders.push(Contender { seat, name: name.to_string(), hand: *hand, classification });
    }

    let best = best.ok_or_else(|| ResolveError::InvalidInput("no hand classified".to_string()))?;
    log::debug!(
        "showdown between {} players won by seat(s) {:?} with {}",
        contenders.len(),
        winners,
        best
    );
    Ok(Showdown { contenders, winners, best })
}

/// Validate raw cards for each player, then [`resolve`].
pub fn resolve_cards<N, C>(players: &[(N, C)]) -> Result<Showdown, ResolveError>
where
    N: AsRef<str>,
    C: AsRef<[Card]>,
{
    let hands = players
        .iter()
        .map(|(name, cards)| {
            Hand::from_slice(cards.as_ref())
                .map(|hand| (name.as_ref(), hand))
                .map_err(|e| ResolveError::Evaluation {
                    player: name.as_ref().to_string(),
                    source: EvalError::InvalidHand(e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    resolve(&hands)
}
