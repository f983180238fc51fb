// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::{self, Square};
use std::fmt;
use std::iter::FromIterator;
use std::ops;

/// A set of squares on the board. The implementation of SquareSet is designed to mirror
/// [`std::collections::HashSet`], but stores one bit per square. Bit `n` corresponds to the square with
/// index `n`, so iteration yields squares in row-major order starting from a8.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Creates a new, empty SquareSet.
    pub const fn empty() -> SquareSet {
        SquareSet(0)
    }

    /// Tests whether or not the given square is contained within this SquareSet.
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.0) != 0
    }

    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.0;
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn or(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }
}

impl ops::BitOr for SquareSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIterator;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIterator(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::empty();
        for sq in iter {
            set.insert(sq);
        }

        set
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in core::squares() {
            if self.contains(sq) {
                write!(f, " 1 ")?;
            } else {
                write!(f, " . ")?;
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

/// An iterator over squares stored in a [`SquareSet`].
pub struct SquareSetIterator(u64);

impl Iterator for SquareSetIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let next = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(Square(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SquareSet;
    use crate::core::*;

    #[test]
    fn test_set_insert() {
        let mut set = SquareSet::empty();
        assert!(set.is_empty());
        assert!(!set.contains(A1));
        set.insert(A1);
        assert!(set.contains(A1));
        set.insert(A1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn count() {
        let mut set = SquareSet::empty();
        set.insert(A3);
        set.insert(A4);
        set.insert(A5);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn iter_is_row_major() {
        let set: SquareSet = vec![A3, A5, H8, A4].into_iter().collect();
        let squares: Vec<_> = set.into_iter().collect();
        assert_eq!(squares, vec![H8, A5, A4, A3]);
    }

    #[test]
    fn union() {
        let left: SquareSet = vec![B2, C3].into_iter().collect();
        let right: SquareSet = vec![C3, D4].into_iter().collect();
        let both = left | right;
        assert_eq!(3, both.len());
        assert!(both.contains(B2) && both.contains(C3) && both.contains(D4));
    }
}
