//! Play Othello against the search engine in the terminal.

use anyhow::{bail, Context, Result};
use async_std::task;
use clap::Parser;
use log::info;
use pincer_othello::{Game, GameStatus, Location, Outcome, Player};
use pincer_search::{Difficulty, MinimaxOpponent, Opponent, SearchConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pincer", about = "Play Othello against a minimax engine")]
struct Args {
    /// Engine strength: easy, medium, hard (or 1, 2, 3).
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Search depth in plies; overrides the difficulty.
    #[arg(long)]
    depth: Option<u8>,

    /// TOML file with `difficulty` and/or `depth`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// The side you play. Black moves first.
    #[arg(long, default_value = "black")]
    color: Player,
}

fn load_config(args: &Args) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SearchConfig::from_toml_str(&text)?
        }
        None => SearchConfig::default(),
    };

    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
        config.depth = None;
    }
    if let Some(depth) = args.depth {
        config.depth = Some(depth);
    }
    Ok(config)
}

/// Read moves until the player enters a legal one. Accepts "C4" or "2 3".
fn read_move(game: &Game, input: &mut impl BufRead) -> Result<Location> {
    loop {
        print!("Your move {}: ", game.get_moves());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }

        let parsed = line.trim().parse::<Location>().ok().or_else(|| {
            let mut parts = line.split_whitespace().map(str::parse::<usize>);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(Ok(x)), Some(Ok(y)), None) => Location::from_coords(x, y),
                _ => None,
            }
        });

        match parsed {
            Some(loc) if game.board.is_valid_move(loc, game.turn) => return Ok(loc),
            Some(loc) => println!("{} is not a legal move.", loc),
            None => println!("Cannot parse move."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;
    info!("engine plays {} at depth {}", !args.color, config.depth());

    let mut engine = MinimaxOpponent::new(!args.color, config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = Game::new();

    while !game.is_finished() {
        println!("\n{}\n", game);

        let mv = if game.turn == args.color {
            read_move(&game, &mut input)?
        } else {
            match task::block_on(engine.choose_move(&game)) {
                Some(mv) => {
                    println!("{} plays {}", engine.player(), mv);
                    mv
                }
                None => bail!("engine found no move in a live position"),
            }
        };

        let mover = game.turn;
        game = game.apply_move(mv)?;
        if game.turn == mover && !game.is_finished() {
            println!("{} has no legal move and passes.", !mover);
        }
    }

    println!("\n{}\n", game);
    match game.status() {
        GameStatus::Completed(Outcome::Winner(player)) if player == args.color => {
            println!("You win!")
        }
        GameStatus::Completed(Outcome::Winner(_)) => println!("The engine wins."),
        _ => println!("Draw."),
    }
    Ok(())
}
