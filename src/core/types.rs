// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::EngineError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("expected two characters, got {0}")]
    InvalidLength(usize),
    #[error("invalid file: {0}")]
    InvalidFile(char),
    #[error("invalid rank: {0}")]
    InvalidRank(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A square on the board, addressed by row and column.
///
/// Row 0 is the top of the board as conventionally drawn (rank 8) and row 7 is the bottom (rank 1); column 0 is file
/// a. A `Square` can only be built from in-bounds coordinates, so holding one is proof that it lies on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(pub(in crate::core) u8);

impl Square {
    /// Creates the square at the given row and column, failing if either lies outside `[0, 7]`.
    pub fn new(row: u8, col: u8) -> Result<Square, EngineError> {
        if row >= 8 || col >= 8 {
            return Err(EngineError::OutOfBounds { row, col });
        }

        Ok(Square(row * 8 + col))
    }

    pub const fn row(self) -> u8 {
        self.0 >> 3
    }

    pub const fn col(self) -> u8 {
        self.0 & 7
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the square `dr` rows and `dc` columns away from this one, or `None` if that falls off the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }

        Some(Square((row * 8 + col) as u8))
    }

    /// The file letter of this square, `a` through `h`.
    pub fn file_char(self) -> char {
        (b'a' + self.col()) as char
    }

    /// The rank digit of this square. Row 0 is rank `8`.
    pub fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = EngineError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col)
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(SquareParseError::InvalidLength(chars.len()));
        }

        let col = match chars[0] {
            c @ 'a'..='h' => c as u8 - b'a',
            c => return Err(SquareParseError::InvalidFile(c)),
        };
        let row = match chars[1] {
            c @ '1'..='8' => b'8' - c as u8,
            c => return Err(SquareParseError::InvalidRank(c)),
        };

        Ok(Square(row * 8 + col))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

pub const A8: Square = Square(0);
pub const B8: Square = Square(1);
pub const C8: Square = Square(2);
pub const D8: Square = Square(3);
pub const E8: Square = Square(4);
pub const F8: Square = Square(5);
pub const G8: Square = Square(6);
pub const H8: Square = Square(7);
pub const A7: Square = Square(8);
pub const B7: Square = Square(9);
pub const C7: Square = Square(10);
pub const D7: Square = Square(11);
pub const E7: Square = Square(12);
pub const F7: Square = Square(13);
pub const G7: Square = Square(14);
pub const H7: Square = Square(15);
pub const A6: Square = Square(16);
pub const B6: Square = Square(17);
pub const C6: Square = Square(18);
pub const D6: Square = Square(19);
pub const E6: Square = Square(20);
pub const F6: Square = Square(21);
pub const G6: Square = Square(22);
pub const H6: Square = Square(23);
pub const A5: Square = Square(24);
pub const B5: Square = Square(25);
pub const C5: Square = Square(26);
pub const D5: Square = Square(27);
pub const E5: Square = Square(28);
pub const F5: Square = Square(29);
pub const G5: Square = Square(30);
pub const H5: Square = Square(31);
pub const A4: Square = Square(32);
pub const B4: Square = Square(33);
pub const C4: Square = Square(34);
pub const D4: Square = Square(35);
pub const E4: Square = Square(36);
pub const F4: Square = Square(37);
pub const G4: Square = Square(38);
pub const H4: Square = Square(39);
pub const A3: Square = Square(40);
pub const B3: Square = Square(41);
pub const C3: Square = Square(42);
pub const D3: Square = Square(43);
pub const E3: Square = Square(44);
pub const F3: Square = Square(45);
pub const G3: Square = Square(46);
pub const H3: Square = Square(47);
pub const A2: Square = Square(48);
pub const B2: Square = Square(49);
pub const C2: Square = Square(50);
pub const D2: Square = Square(51);
pub const E2: Square = Square(52);
pub const F2: Square = Square(53);
pub const G2: Square = Square(54);
pub const H2: Square = Square(55);
pub const A1: Square = Square(56);
pub const B1: Square = Square(57);
pub const C1: Square = Square(58);
pub const D1: Square = Square(59);
pub const E1: Square = Square(60);
pub const F1: Square = Square(61);
pub const G1: Square = Square(62);
pub const H1: Square = Square(63);

/// The two sides. Light moves first and starts on rows 6 and 7; Dark starts on rows 0 and 1.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display(fmt = "white")]
    Light,
    #[display(fmt = "black")]
    Dark,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta a pawn of this color advances by.
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// The row this color's pawns start on and may double-step from.
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// The row on which this color's pawns promote.
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The uppercase letter for this kind, as used in FEN and move notation.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter().to_ascii_lowercase())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// The Unicode chess symbol for this piece.
    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::Light, PieceKind::King) => '♔',
            (Color::Light, PieceKind::Queen) => '♕',
            (Color::Light, PieceKind::Rook) => '♖',
            (Color::Light, PieceKind::Bishop) => '♗',
            (Color::Light, PieceKind::Knight) => '♘',
            (Color::Light, PieceKind::Pawn) => '♙',
            (Color::Dark, PieceKind::King) => '♚',
            (Color::Dark, PieceKind::Queen) => '♛',
            (Color::Dark, PieceKind::Rook) => '♜',
            (Color::Dark, PieceKind::Bishop) => '♝',
            (Color::Dark, PieceKind::Knight) => '♞',
            (Color::Dark, PieceKind::Pawn) => '♟',
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        let color = if value.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };

        Ok(Piece { kind, color })
    }
}

/// FEN letter: uppercase for Light, lowercase for Dark.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.color {
            Color::Light => self.kind.letter(),
            Color::Dark => self.kind.letter().to_ascii_lowercase(),
        };

        write!(f, "{}", c)
    }
}

/// Iterates every square in row-major order, starting at a8.
pub struct AllSquares(u8);

impl Iterator for AllSquares {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 >= 64 {
            None
        } else {
            let next = self.0;
            self.0 += 1;
            Some(Square(next))
        }
    }
}

pub fn squares() -> AllSquares {
    AllSquares(0)
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use super::*;
    use crate::error::EngineError;

    #[test]
    fn out_of_bounds_square() {
        assert_eq!(
            Err(EngineError::OutOfBounds { row: 8, col: 0 }),
            Square::new(8, 0)
        );
        assert_eq!(
            Err(EngineError::OutOfBounds { row: 3, col: 12 }),
            Square::try_from((3u8, 12u8))
        );
    }

    #[test]
    fn row_zero_is_rank_eight() {
        let sq = Square::new(0, 0).unwrap();
        assert_eq!(A8, sq);
        assert_eq!("a8", sq.to_string());
        assert_eq!("h1", Square::new(7, 7).unwrap().to_string());
        assert_eq!(E2, "e2".parse::<Square>().unwrap());
        assert_eq!(6, E2.row());
        assert_eq!(4, E2.col());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Err(SquareParseError::InvalidLength(3)),
            "e10".parse::<Square>()
        );
        assert_eq!(Err(SquareParseError::InvalidFile('j')), "j4".parse::<Square>());
        assert_eq!(Err(SquareParseError::InvalidRank('9')), "a9".parse::<Square>());
    }

    #[test]
    fn offset_stops_at_edge() {
        assert_eq!(None, A8.offset(-1, 0));
        assert_eq!(None, H1.offset(0, 1));
        assert_eq!(Some(B7), A8.offset(1, 1));
    }

    #[test]
    fn piece_letters() {
        let piece = Piece::try_from('n').unwrap();
        assert_eq!(Piece::new(PieceKind::Knight, Color::Dark), piece);
        assert_eq!("n", piece.to_string());
        assert_eq!("Q", Piece::new(PieceKind::Queen, Color::Light).to_string());
        assert!(Piece::try_from('x').is_err());
    }

    #[test]
    fn color_names() {
        assert_eq!("white", Color::Light.to_string());
        assert_eq!("black", Color::Dark.to_string());
        assert_eq!(Color::Dark, Color::Light.toggle());
    }

    #[test]
    fn square_serializes_as_name() {
        assert_eq!("\"e4\"", serde_json::to_string(&E4).unwrap());
        let sq: Square = serde_json::from_str("\"c6\"").unwrap();
        assert_eq!(C6, sq);
    }
}
