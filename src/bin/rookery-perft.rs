// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rookery::{movegen, BoardState};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Counts the pseudo-legal move tree of a position. Moves that leave a king capturable are counted too.
#[derive(Debug, StructOpt)]
struct Options {
    /// The depth to search to.
    #[structopt(short, long)]
    depth: u32,

    /// FEN representation of the position to count from. Defaults to the initial setup.
    #[structopt(long)]
    fen: Option<String>,

    /// Print the count below each root move as well as the total.
    #[structopt(long)]
    divide: bool,
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

    if !ops.divide || ops.depth == 0 {
        println!("{}", movegen::perft(&board, ops.depth));
        return Ok(());
    }

    let mut moves = Vec::new();
    movegen::generate_moves(&board, &mut moves);
    let mut total = 0;
    for (origin, dest) in moves {
        let (next, mov) = board.apply(origin, dest)?;
        let count = movegen::perft(&next, ops.depth - 1);
        println!("{}{}: {} ({})", origin, dest, count, mov);
        total += count;
    }

    println!("{}", total);
    Ok(())
}
