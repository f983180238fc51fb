// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    convert::TryFrom,
    fmt::{self, Write},
};

use thiserror::Error;

use crate::{
    core::{self, *},
    error::EngineError,
    executor,
};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The complete state of a game in progress: which piece stands on each square, whose turn it is, and the
/// notation of every move applied since the game began.
///
/// A `BoardState` is a plain value owned by the caller. The only way to advance it is [`executor::apply`] (or the
/// [`BoardState::apply`] shorthand), which leaves the original untouched and hands back a successor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    /// The 64 squares in row-major order, a8 first.
    grid: [Option<Piece>; 64],
    /// Color whose turn it is to move.
    side_to_move: Color,
    /// Notation of each applied move, oldest first.
    history: Vec<String>,
}

impl BoardState {
    pub(crate) fn empty() -> BoardState {
        BoardState {
            grid: [None; 64],
            side_to_move: Color::Light,
            history: Vec::new(),
        }
    }

    /// Returns a board in the standard starting arrangement with Light to move and an empty history.
    pub fn initial_setup() -> BoardState {
        let mut board = BoardState::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.grid[col] = Some(Piece::new(kind, Color::Dark));
            board.grid[8 + col] = Some(Piece::new(PieceKind::Pawn, Color::Dark));
            board.grid[48 + col] = Some(Piece::new(PieceKind::Pawn, Color::Light));
            board.grid[56 + col] = Some(Piece::new(kind, Color::Light));
        }

        board
    }

    /// Throws away the current game and starts over from the initial setup.
    pub fn reset(&mut self) {
        *self = BoardState::initial_setup();
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        matches!(self.piece_at(square), Some(piece) if piece.color == color)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The notation of every move applied so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns the set of squares occupied by pieces of the given color.
    pub fn pieces(&self, color: Color) -> SquareSet {
        core::squares()
            .filter(|&sq| self.is_occupied_by(sq, color))
            .collect()
    }

    /// Applies a move to this board, returning the successor state. See [`executor::apply`].
    pub fn apply(
        &self,
        origin: Square,
        destination: Square,
    ) -> Result<(BoardState, Move), EngineError> {
        executor::apply(self, origin, destination)
    }
}

//
// State transitions. These are only reachable through the executor, which validates the move first.
//

impl BoardState {
    /// Moves `piece` onto `destination`, replacing whatever stood there, and empties `origin`.
    pub(crate) fn relocate(&mut self, origin: Square, destination: Square, piece: Piece) {
        self.grid[origin.index()] = None;
        self.grid[destination.index()] = Some(piece);
    }

    /// Records a completed move and passes the turn to the other side.
    pub(crate) fn end_turn(&mut self, notation: String) {
        self.history.push(notation);
        self.side_to_move = self.side_to_move.toggle();
    }
}

//
// FEN parsing and generation.
//
// Only the piece placement and side-to-move fields are meaningful here. Castling rights, en-passant targets and
// move clocks describe rules this engine does not implement, so those fields are accepted and ignored.
//

/// Possible errors that can arise when parsing a FEN string into a `BoardState`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum FenParseError {
    #[error("empty FEN string")]
    Empty,
    #[error("expected 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("invalid digit: {0}")]
    InvalidDigit(char),
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("rank {0} does not sum to 8")]
    RankDoesNotSumToEight(char),
    #[error("invalid side to move: {0}")]
    InvalidSideToMove(String),
}

impl BoardState {
    /// Constructs a board from a FEN representation. The side to move defaults to Light when the field is absent.
    /// The history of the returned board is empty.
    pub fn from_fen(fen: impl AsRef<str>) -> Result<BoardState, FenParseError> {
        let mut fields = fen.as_ref().split_whitespace();
        let placement = fields.next().ok_or(FenParseError::Empty)?;
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenParseError::WrongRankCount(rows.len()));
        }

        let mut board = BoardState::empty();
        for (row, text) in rows.iter().enumerate() {
            let rank = (b'8' - row as u8) as char;
            let mut col = 0usize;
            for c in text.chars() {
                if col >= 8 {
                    return Err(FenParseError::RankDoesNotSumToEight(rank));
                }

                match c {
                    '1'..='8' => col += c as usize - '0' as usize,
                    '0' | '9' => return Err(FenParseError::InvalidDigit(c)),
                    _ => {
                        let piece =
                            Piece::try_from(c).map_err(|_| FenParseError::UnknownPiece(c))?;
                        board.grid[row * 8 + col] = Some(piece);
                        col += 1;
                    }
                }
            }

            if col != 8 {
                return Err(FenParseError::RankDoesNotSumToEight(rank));
            }
        }

        board.side_to_move = match fields.next() {
            None | Some("w") => Color::Light,
            Some("b") => Color::Dark,
            Some(other) => return Err(FenParseError::InvalidSideToMove(other.to_owned())),
        };

        Ok(board)
    }

    /// Renders the placement and side to move of this board as FEN.
    pub fn as_fen(&self) -> String {
        let mut buf = String::new();
        for row in 0..8 {
            let mut empty_squares = 0;
            for col in 0..8 {
                match self.grid[row * 8 + col] {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(&mut buf, "{}", empty_squares).unwrap();
                            empty_squares = 0;
                        }
                        write!(&mut buf, "{}", piece).unwrap();
                    }
                    None => empty_squares += 1,
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if row != 7 {
                buf.push('/');
            }
        }

        buf.push(' ');
        match self.side_to_move {
            Color::Light => buf.push('w'),
            Color::Dark => buf.push('b'),
        }
        buf
    }
}

/// Draws the board with rank 8 at the top. The alternate form (`{:#}`) uses Unicode chess symbols instead of FEN
/// letters.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for sq in core::squares() {
            match self.piece_at(sq) {
                Some(piece) if f.alternate() => write!(f, " {} ", piece.glyph())?,
                Some(piece) => write!(f, " {} ", piece)?,
                None => write!(f, " . ")?,
            }

            if sq.col() == 7 {
                writeln!(f, "| {}", sq.rank_char())?;
            }
        }

        writeln!(f, "{}", "---".repeat(8))?;
        for col in b'a'..=b'h' {
            write!(f, " {} ", col as char)?;
        }

        writeln!(f)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::initial_setup()
    }
}

#[cfg(test)]
mod tests {
    mod setup {
        use crate::{board::BoardState, core::*};

        #[test]
        fn starting_position() {
            let board = BoardState::initial_setup();
            let back_rank = [
                PieceKind::Rook,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Queen,
                PieceKind::King,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Rook,
            ];

            for (col, &kind) in back_rank.iter().enumerate() {
                let col = col as u8;
                let dark = board.piece_at(Square::new(0, col).unwrap()).unwrap();
                assert_eq!(Piece::new(kind, Color::Dark), dark);
                let light = board.piece_at(Square::new(7, col).unwrap()).unwrap();
                assert_eq!(Piece::new(kind, Color::Light), light);
                assert_eq!(
                    Some(Piece::new(PieceKind::Pawn, Color::Dark)),
                    board.piece_at(Square::new(1, col).unwrap())
                );
                assert_eq!(
                    Some(Piece::new(PieceKind::Pawn, Color::Light)),
                    board.piece_at(Square::new(6, col).unwrap())
                );
            }

            for row in 2..6 {
                for col in 0..8 {
                    assert!(board.is_empty(Square::new(row, col).unwrap()));
                }
            }

            assert_eq!(Color::Light, board.side_to_move());
            assert!(board.history().is_empty());
        }

        #[test]
        fn king_and_queen_files() {
            let board = BoardState::initial_setup();
            assert_eq!(PieceKind::Queen, board.piece_at(D1).unwrap().kind);
            assert_eq!(PieceKind::King, board.piece_at(E1).unwrap().kind);
            assert_eq!(PieceKind::Queen, board.piece_at(D8).unwrap().kind);
            assert_eq!(PieceKind::King, board.piece_at(E8).unwrap().kind);
        }

        #[test]
        fn occupancy() {
            let board = BoardState::initial_setup();
            assert!(board.is_occupied_by(A1, Color::Light));
            assert!(!board.is_occupied_by(A1, Color::Dark));
            assert!(!board.is_occupied_by(E4, Color::Light));
            assert!(!board.is_occupied_by(E4, Color::Dark));
            assert_eq!(16, board.pieces(Color::Light).len());
            assert_eq!(16, board.pieces(Color::Dark).len());
        }

        #[test]
        fn reset_discards_game() {
            let board = BoardState::initial_setup();
            let (mut board, _) = board.apply(E2, E4).unwrap();
            assert_eq!(1, board.history().len());
            board.reset();
            assert_eq!(BoardState::initial_setup(), board);
        }

        #[test]
        fn display() {
            let board = BoardState::initial_setup();
            let text = board.to_string();
            let first = text.lines().next().unwrap();
            assert_eq!(" r  n  b  q  k  b  n  r | 8", first);
            let glyphs = format!("{:#}", board);
            assert!(glyphs.lines().last().unwrap().contains('a'));
            assert!(glyphs.lines().next().unwrap().contains('♜'));
        }
    }

    mod fen {
        use crate::{
            board::{BoardState, FenParseError},
            core::*,
        };

        #[test]
        fn start_position_roundtrip() {
            let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";
            let board = BoardState::from_fen(fen).unwrap();
            assert_eq!(BoardState::initial_setup(), board);
            assert_eq!(fen, board.as_fen());
        }

        #[test]
        fn trailing_fields_ignored() {
            let board =
                BoardState::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
                    .unwrap();
            assert_eq!(Color::Dark, board.side_to_move());
        }

        #[test]
        fn placement_only() {
            let board = BoardState::from_fen("r7/8/8/8/8/8/8/7K").unwrap();
            assert_eq!(Color::Light, board.side_to_move());
            assert_eq!(
                Some(Piece::new(PieceKind::Rook, Color::Dark)),
                board.piece_at(A8)
            );
            assert_eq!(
                Some(Piece::new(PieceKind::King, Color::Light)),
                board.piece_at(H1)
            );
        }

        #[test]
        fn empty() {
            assert_eq!(Err(FenParseError::Empty), BoardState::from_fen("  "));
        }

        #[test]
        fn wrong_rank_count() {
            assert_eq!(
                Err(FenParseError::WrongRankCount(7)),
                BoardState::from_fen("8/8/8/8/8/8/8 w")
            );
        }

        #[test]
        fn unknown_piece() {
            assert_eq!(
                Err(FenParseError::UnknownPiece('z')),
                BoardState::from_fen("z7/8/8/8/8/8/8/8 w")
            );
        }

        #[test]
        fn invalid_digit() {
            assert_eq!(
                Err(FenParseError::InvalidDigit('9')),
                BoardState::from_fen("9/8/8/8/8/8/8/8 w")
            );
        }

        #[test]
        fn not_sum_to_8() {
            assert_eq!(
                Err(FenParseError::RankDoesNotSumToEight('7')),
                BoardState::from_fen("8/pppp/8/8/8/8/8/8 w")
            );
            assert_eq!(
                Err(FenParseError::RankDoesNotSumToEight('8')),
                BoardState::from_fen("7pp/8/8/8/8/8/8/8 w")
            );
        }

        #[test]
        fn bad_side_to_move() {
            assert_eq!(
                Err(FenParseError::InvalidSideToMove("x".to_owned())),
                BoardState::from_fen("8/8/8/8/8/8/8/8 x")
            );
        }
    }
}
