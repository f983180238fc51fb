// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

use crate::core::Square;

/// Errors produced by the engine's core operations. Both kinds indicate a bug in the caller; the engine never
/// retries and never partially applies a move before reporting one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("square out of bounds: ({row}, {col})")]
    OutOfBounds { row: u8, col: u8 },
    #[error("illegal move {origin}-{destination}: {reason}")]
    IllegalMove {
        origin: Square,
        destination: Square,
        reason: IllegalMoveReason,
    },
}

/// Why a requested move was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("no piece on origin square")]
    EmptyOrigin,
    #[error("piece does not belong to the side to move")]
    NotSideToMove,
    #[error("destination is not reachable")]
    Unreachable,
}
