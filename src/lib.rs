//! poker-showdown: five-card poker hand ranking
//!
//! - Classifies any five distinct cards into one of ten categories, from
//!   royal flush (1) down to high card (10), with typed tie-break attributes
//! - Orders classified hands exactly as official hand rankings do, kickers
//!   included; the wheel (A-2-3-4-5) is a Five-high straight
//! - Resolves a showdown between any number of players, returning every
//!   co-winner on an exact tie
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: who wins?
//! ```
//! use poker_showdown::evaluator::Category;
//! use poker_showdown::hand::Hand;
//! use poker_showdown::showdown::resolve;
//!
//! let players: Vec<(&str, Hand)> = vec![
//!     ("alice", "3s 3h 3d 7c 7s".parse().unwrap()),
//!     ("bob", "2c 5c 9c Jc Kc".parse().unwrap()),
//! ];
//! let showdown = resolve(&players).unwrap();
//! assert_eq!(showdown.winner_names(), vec!["alice"]);
//! assert_eq!(showdown.category(), Category::FullHouse);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin showdown -- "alice=3s 3h 3d 7c 7s" "bob=2c 5c 9c Jc Kc"
//! cargo run --bin showdown -- --deal 4 --seed 7
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
