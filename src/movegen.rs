// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pseudo-legal move generation. Destinations follow each piece's movement pattern and never land on a piece of
//! the mover's own color, but nothing here considers whether the mover's king is left capturable.

use crate::board::BoardState;
use crate::core::*;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Returns every square the piece on `square` can move to, ignoring whose turn it is. An empty square yields an
/// empty set.
pub fn legal_destinations(board: &BoardState, square: Square) -> SquareSet {
    let piece = match board.piece_at(square) {
        Some(piece) => piece,
        None => return SquareSet::empty(),
    };

    let destinations = match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, square, piece.color),
        PieceKind::Knight => step_destinations(board, square, piece.color, &KNIGHT_OFFSETS),
        PieceKind::Bishop => slide_destinations(board, square, piece.color, &DIAGONALS),
        PieceKind::Rook => slide_destinations(board, square, piece.color, &ORTHOGONALS),
        PieceKind::Queen => {
            slide_destinations(board, square, piece.color, &DIAGONALS)
                | slide_destinations(board, square, piece.color, &ORTHOGONALS)
        }
        PieceKind::King => step_destinations(board, square, piece.color, &KING_OFFSETS),
    };

    tracing::trace!(
        square = %square,
        piece = %piece,
        count = destinations.len(),
        "generated destinations"
    );
    destinations
}

pub fn pawn_destinations(board: &BoardState, square: Square, us: Color) -> SquareSet {
    let mut moves = SquareSet::empty();
    let up = us.forward();

    // Pushes never capture, and a double push needs both squares clear.
    if let Some(single) = square.offset(up, 0) {
        if board.is_empty(single) {
            moves.insert(single);
            if square.row() == us.pawn_start_row() {
                if let Some(double) = single.offset(up, 0) {
                    if board.is_empty(double) {
                        moves.insert(double);
                    }
                }
            }
        }
    }

    // Diagonals are capture-only. There is no en-passant.
    for dc in [-1, 1] {
        if let Some(target) = square.offset(up, dc) {
            if board.is_occupied_by(target, us.toggle()) {
                moves.insert(target);
            }
        }
    }

    moves
}

/// Destinations for pieces that jump to a fixed set of offsets: knights and kings.
fn step_destinations(
    board: &BoardState,
    square: Square,
    us: Color,
    offsets: &[(i8, i8)],
) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| square.offset(dr, dc))
        .filter(|&target| !board.is_occupied_by(target, us))
        .collect()
}

/// Casts a ray from `square` in each direction. A ray runs until it leaves the board or meets a piece; an enemy
/// piece's square is included as a capture, a friendly piece's square is not, and nothing past either is reachable.
fn slide_destinations(
    board: &BoardState,
    square: Square,
    us: Color,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut moves = SquareSet::empty();
    for &(dr, dc) in directions {
        let mut cursor = square;
        while let Some(next) = cursor.offset(dr, dc) {
            match board.piece_at(next) {
                None => moves.insert(next),
                Some(blocker) => {
                    if blocker.color != us {
                        moves.insert(next);
                    }
                    break;
                }
            }

            cursor = next;
        }
    }

    moves
}

/// Pushes every pseudo-legal (origin, destination) pair for the side to move onto `moves`.
pub fn generate_moves(board: &BoardState, moves: &mut Vec<(Square, Square)>) {
    for origin in board.pieces(board.side_to_move()) {
        for destination in legal_destinations(board, origin) {
            moves.push((origin, destination));
        }
    }
}

/// Counts the leaf nodes of the pseudo-legal move tree to the given depth. Since nothing is filtered for check,
/// counts from the initial setup diverge from standard perft tables from depth 4 onward.
pub fn perft(board: &BoardState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = Vec::new();
    generate_moves(board, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for (origin, destination) in moves {
        let (next, _) = board
            .apply(origin, destination)
            .expect("generated move rejected by apply");
        nodes += perft(&next, depth - 1);
    }

    nodes
}
