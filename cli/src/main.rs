// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voxclaim CLI - headless terminal frontend
//!
//! Drives the game core over stdin and renders its event stream as
//! text. Primarily used for manual play and integration smoke-testing
//! without a 3D frontend.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use flexi_logger::{FileSpec, Logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use voxclaim_core::{BlockingStrategy, GameEvent, GameSession, Side, DEFAULT_MOVE_DELAY};

mod render;

fn init_logging() -> Result<()> {
    let mut log_dir = PathBuf::from(".");
    log_dir.push("logs");
    std::fs::create_dir_all(&log_dir)?;

    Logger::try_with_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename("voxclaim-cli")
                .suffix("log"),
        )
        .start()?;

    Ok(())
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "voxclaim-cli", about = "Voxclaim game command-line interface", version)]
struct Args {
    /// Pause before the computer answers, in milliseconds
    #[clap(long)]
    delay_ms: Option<u64>,

    /// Seed for the opponent's random fallback, for reproducible games
    #[clap(long)]
    seed: Option<u64>,

    /// Enable debug logging on the console
    #[clap(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let strategy = match args.seed {
        Some(seed) => BlockingStrategy::seeded(seed),
        None => BlockingStrategy::new(),
    };
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_MOVE_DELAY);

    let mut session = GameSession::with_strategy(Box::new(strategy), delay);

    // print the event stream as it arrives
    let mut events = session.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            print_event(&event);
        }
    });

    println!("voxclaim - claim cells, build clusters of 3+");
    println!("Commands: start, claim <x> <y> <z>, cell <index>, board, state, reset, quit");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        match handle_command(line.trim(), &mut session).await {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}

/// Execute one command line; returns true when the loop should exit
async fn handle_command(line: &str, session: &mut GameSession) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("start") => {
            // restarting mid-game is allowed: clear first, then begin
            session.reset().await;
            session.start().await?;
        }
        Some("claim") => {
            let coords: Vec<u8> = parts
                .map(str::parse)
                .collect::<Result<_, _>>()
                .map_err(|_| anyhow!("usage: claim <x> <y> <z>"))?;
            let &[x, y, z] = coords.as_slice() else {
                return Err(anyhow!("usage: claim <x> <y> <z>"));
            };
            let coord = voxclaim_core::Coord::new(x, y, z);
            if !coord.is_valid() {
                return Err(anyhow!("coordinates must be 0-2 on each axis"));
            }
            session.submit_player_move(coord.index()).await?;
        }
        Some("cell") => {
            let index: u8 = parts
                .next()
                .and_then(|raw| raw.parse().ok())
                .ok_or_else(|| anyhow!("usage: cell <0-26>"))?;
            session.submit_player_move(index).await?;
        }
        Some("board") => {
            let game = session.snapshot().await;
            print!("{}", render::render_grid(game.grid()));
            println!("{}", render::render_scores(&game));
        }
        Some("state") => {
            let game = session.snapshot().await;
            println!("{}", serde_json::to_string_pretty(&game)?);
        }
        Some("reset") => {
            session.reset().await;
            println!("Game reset.");
        }
        Some("quit") | Some("exit") => return Ok(true),
        Some(other) => println!("Unknown command: {}", other),
        None => {}
    }
    Ok(false)
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::CellClaimed { cell, side } => {
            let coord = voxclaim_core::Coord::from_index(*cell);
            let who = match side {
                Side::Player => "You",
                Side::Computer => "Computer",
            };
            println!(
                "{} claimed cell {} ({},{},{})",
                who, cell, coord.x, coord.y, coord.z
            );
        }
        GameEvent::ScoreChanged { side, score } => match side {
            Side::Player => println!("Your Score: {}", score),
            Side::Computer => println!("Computer Score: {}", score),
        },
        GameEvent::ComboCells { cells } => {
            println!("Scoring cluster cells: {:?}", cells);
        }
        GameEvent::TurnChanged { side } => match side {
            Side::Player => println!("Your turn!"),
            Side::Computer => println!("Computer's turn..."),
        },
        GameEvent::GameOver {
            winner,
            player_score,
            computer_score,
        } => {
            let verdict = match winner {
                Some(Side::Player) => "You win!",
                Some(Side::Computer) => "Computer wins!",
                None => "It's a tie!",
            };
            println!(
                "Game Over! {} ({} - {})",
                verdict, player_score, computer_score
            );
        }
    }
}
