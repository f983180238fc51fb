// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::anyhow;
use rookery::{executor, BoardState};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Plays a sequence of coordinate moves from the initial setup and prints the resulting board and move log.
#[derive(Debug, StructOpt)]
struct Options {
    /// Print each applied move as a JSON record instead of the board and log.
    #[structopt(long)]
    json: bool,

    /// Draw pieces with Unicode chess symbols.
    #[structopt(long)]
    glyphs: bool,

    /// Moves in coordinate form, for example `e2e4 e7e5 g1f3`.
    #[structopt(name = "MOVES")]
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::WARN)
        .with_env_filter(EnvFilter::from_env("ROOKERY_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let ops = Options::from_args();
    let mut board = BoardState::initial_setup();
    let mut applied = Vec::new();
    for text in &ops.moves {
        let (origin, dest) = executor::parse_coordinate_move(text)
            .ok_or_else(|| anyhow!("not a coordinate move: {}", text))?;
        let (next, mov) = board.apply(origin, dest)?;
        board = next;
        applied.push(mov);
    }

    if ops.json {
        for mov in applied {
            println!("{}", serde_json::to_string(&mov)?);
        }
        return Ok(());
    }

    if ops.glyphs {
        print!("{:#}", board);
    } else {
        print!("{}", board);
    }

    println!("{} to move", board.side_to_move());
    for (i, notation) in board.history().iter().enumerate() {
        println!("{:>3}. {}", i + 1, notation);
    }

    Ok(())
}
