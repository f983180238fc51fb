// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `rookery` is a small two-player board game engine for the standard 8x8 chess setup.
//!
//! The engine owns three things: a [`BoardState`] holding the grid, the side to move and the move log; a move
//! generator that computes pseudo-legal destinations for a single piece; and an executor that applies a chosen move,
//! producing a fresh `BoardState`. Moves are pseudo-legal only: nothing here knows about check, castling or en
//! passant. Rendering and input handling belong to whatever program drives the engine.

pub mod board;
pub mod core;
pub mod error;
pub mod executor;
pub mod movegen;

pub use board::{BoardState, FenParseError};
pub use error::{EngineError, IllegalMoveReason};
