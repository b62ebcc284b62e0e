use clap::Parser;
use poker_showdown::deck::Deck;
use poker_showdown::hand::Hand;
use poker_showdown::showdown::{resolve, Showdown};
use std::process::ExitCode;

/// Resolve a poker showdown between five-card hands.
#[derive(Parser, Debug)]
#[command(version = poker_showdown::VERSION, about, long_about = None)]
struct Args {
    /// Players as NAME=CARDS, e.g. "alice=As Ks Qs Js Ts"
    #[arg(value_parser = parse_player, required_unless_present = "deal")]
    players: Vec<(String, Hand)>,

    /// Deal this many random hands instead of reading players
    #[arg(short, long, conflicts_with = "players")]
    deal: Option<usize>,

    /// Seed for the dealing shuffle; random when absent
    #[arg(short, long, requires = "deal")]
    seed: Option<u64>,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_player(s: &str) -> Result<(String, Hand), String> {
    let (name, cards) =
        s.split_once('=').ok_or_else(|| format!("expected NAME=CARDS, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing player name in '{s}'"));
    }
    let hand = cards.parse::<Hand>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), hand))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn deal(n: usize, seed: Option<u64>) -> Result<Vec<(String, Hand)>, String> {
    let mut deck = Deck::standard();
    match seed {
        Some(seed) => deck.shuffle_seeded(seed),
        None => deck.shuffle_with(&mut rand::rng()),
    }
    let hands = deck.deal_hands(n).map_err(|e| e.to_string())?;
    log::debug!("dealt {n} hands, {} cards left", deck.len());
    Ok(hands.into_iter().enumerate().map(|(i, h)| (format!("player{}", i + 1), h)).collect())
}

fn print_showdown(showdown: &Showdown) {
    let width = showdown.contenders.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for c in &showdown.contenders {
        let mark = if showdown.winners.contains(&c.seat) { '*' } else { ' ' };
        println!("{mark} {:<width$}  {}  {}", c.name, c.hand, c.classification);
    }
    let names = showdown.winner_names().join(", ");
    if showdown.is_split() {
        println!("split between {names} with {}", showdown.best);
    } else {
        println!("{names} wins with {}", showdown.best);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let players = match args.deal {
        Some(n) => match deal(n, args.seed) {
            Ok(players) => players,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => args.players,
    };

    match resolve(&players) {
        Ok(showdown) => {
            print_showdown(&showdown);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
