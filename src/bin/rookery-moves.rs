// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rookery::{core::Square, movegen, BoardState};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Lists pseudo-legal moves for a position.
#[derive(Debug, StructOpt)]
struct Options {
    /// FEN representation of the position to analyze. Defaults to the initial setup.
    #[structopt(long)]
    fen: Option<String>,

    /// Print results as JSON.
    #[structopt(long)]
    json: bool,

    /// Only list destinations for the piece on this square (for example `e2`).
    #[structopt(name = "SQUARE")]
    square: Option<Square>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::WARN)
        .with_env_filter(EnvFilter::from_env("ROOKERY_LOG"))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let ops = Options::from_args();
    let board = match ops.fen {
        Some(fen) => BoardState::from_fen(fen)?,
        None => BoardState::initial_setup(),
    };

    let mut moves = Vec::new();
    match ops.square {
        Some(origin) => {
            for dest in movegen::legal_destinations(&board, origin) {
                moves.push((origin, dest));
            }
        }
        None => movegen::generate_moves(&board, &mut moves),
    }

    if ops.json {
        println!("{}", serde_json::to_string(&moves)?);
    } else {
        for (origin, dest) in moves {
            println!("{}{}", origin, dest);
        }
    }

    Ok(())
}
