// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Piece, PieceKind, Square};

/// A move that has been applied to a board. Moves are produced by the executor and are not persisted; the board
/// only keeps each move's notation.
///
/// ## Notation
/// A move is written as `<piece><x><origin>-<destination>`:
///
///  * the piece letter (`N`, `B`, `R`, `Q`, `K`) is omitted for pawns,
///  * `x` is present only when the move captured something,
///  * squares are written as file letter and rank digit.
///
/// So a pawn capturing from e4 to d5 is `xe4-d5` and a knight leaving g1 is `Ng1-f3`. The letter is always the
/// letter of the piece that moved, even if it promoted on arrival.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    origin: Square,
    destination: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(
        origin: Square,
        destination: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<PieceKind>,
    ) -> Move {
        Move {
            origin,
            destination,
            piece,
            captured,
            promotion,
        }
    }

    /// Returns the square the piece moved from.
    pub fn origin(self) -> Square {
        self.origin
    }

    /// Returns the square the piece moved to.
    pub fn destination(self) -> Square {
        self.destination
    }

    /// Returns the piece that moved, as it stood on the origin square.
    pub fn piece(self) -> Piece {
        self.piece
    }

    /// Returns the piece that stood on the destination square, if any.
    pub fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// If the moving pawn promoted, returns the kind it promoted to.
    pub fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    pub fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Returns the move-log representation of this move.
    pub fn notation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.piece.kind != PieceKind::Pawn {
            write!(f, "{}", self.piece.kind.letter())?;
        }

        if self.is_capture() {
            write!(f, "x")?;
        }

        write!(f, "{}-{}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::*;

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color)
    }

    #[test]
    fn pawn_push_has_no_letter() {
        let mov = Move::new(E2, E4, piece(PieceKind::Pawn, Color::Light), None, None);
        assert_eq!("e2-e4", mov.notation());
    }

    #[test]
    fn piece_letter_is_uppercase_for_both_sides() {
        let mov = Move::new(G8, F6, piece(PieceKind::Knight, Color::Dark), None, None);
        assert_eq!("Ng8-f6", mov.notation());
    }

    #[test]
    fn capture_marker() {
        let mov = Move::new(
            D1,
            D8,
            piece(PieceKind::Queen, Color::Light),
            Some(piece(PieceKind::Queen, Color::Dark)),
            None,
        );
        assert_eq!("Qxd1-d8", mov.notation());
        assert!(mov.is_capture());
    }

    #[test]
    fn promotion_keeps_pawn_notation() {
        let mov = Move::new(
            B7,
            A8,
            piece(PieceKind::Pawn, Color::Light),
            Some(piece(PieceKind::Rook, Color::Dark)),
            Some(PieceKind::Queen),
        );
        assert_eq!("xb7-a8", mov.notation());
        assert!(mov.is_promotion());
    }
}
