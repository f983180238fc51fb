// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Applying moves to a board.
//!
//! [`apply`] checks the requested move against the current board before touching anything, then builds the
//! successor state on a copy. A rejected move leaves the caller's board exactly as it was.

use crate::{
    board::BoardState,
    core::*,
    error::{EngineError, IllegalMoveReason},
    movegen,
};

/// Applies the move `origin`-`destination` to `board` and returns the resulting board along with a record of the
/// move.
///
/// The piece on `origin` must belong to the side to move and `destination` must be one of its
/// [`movegen::legal_destinations`]; otherwise this fails with [`EngineError::IllegalMove`]. A pawn arriving on its
/// far row becomes a queen. Whether the move leaves the mover's own king capturable is not considered.
pub fn apply(
    board: &BoardState,
    origin: Square,
    destination: Square,
) -> Result<(BoardState, Move), EngineError> {
    let illegal = |reason| {
        tracing::debug!(%origin, %destination, %reason, "rejected move");
        EngineError::IllegalMove {
            origin,
            destination,
            reason,
        }
    };

    let moving_piece = board
        .piece_at(origin)
        .ok_or_else(|| illegal(IllegalMoveReason::EmptyOrigin))?;
    if moving_piece.color != board.side_to_move() {
        return Err(illegal(IllegalMoveReason::NotSideToMove));
    }

    if !movegen::legal_destinations(board, origin).contains(destination) {
        return Err(illegal(IllegalMoveReason::Unreachable));
    }

    let captured = board.piece_at(destination);
    let promotion = if moving_piece.kind == PieceKind::Pawn
        && destination.row() == moving_piece.color.promotion_row()
    {
        Some(PieceKind::Queen)
    } else {
        None
    };

    let arriving_piece = match promotion {
        Some(kind) => Piece::new(kind, moving_piece.color),
        None => moving_piece,
    };

    let mov = Move::new(origin, destination, moving_piece, captured, promotion);
    let notation = mov.notation();
    tracing::debug!(
        side = %board.side_to_move(),
        notation = %notation,
        "applying move"
    );

    let mut next = board.clone();
    next.relocate(origin, destination, arriving_piece);
    next.end_turn(notation);
    Ok((next, mov))
}

/// Parses a move in coordinate form, such as `e2e4`, into its origin and destination squares. Returns `None` if
/// the text is not two concatenated square names.
pub fn parse_coordinate_move(text: &str) -> Option<(Square, Square)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }

    let origin = text[0..2].parse().ok()?;
    let destination = text[2..4].parse().ok()?;
    Some((origin, destination))
}
