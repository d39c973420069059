// This file is part of the chesscore library.
// Copyright (C) 2026 The chesscore developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, str::FromStr};

/// Checks whether `(row, col)` addresses a square of the 8×8 board.
///
/// # Examples
///
/// ```
/// use chesscore::in_bounds;
///
/// assert!(in_bounds(0, 0));
/// assert!(in_bounds(7, 7));
/// assert!(!in_bounds(-1, 3));
/// assert!(!in_bounds(3, 8));
/// ```
#[inline]
pub const fn in_bounds(row: i32, col: i32) -> bool {
    0 <= row && row < 8 && 0 <= col && col < 8
}

/// A square of the board, addressed by `row` and `col`.
///
/// Row 0 is Black's back rank and row 7 is White's back rank, so White pawns
/// advance toward decreasing rows. Columns run from the a-file (0) to the
/// h-file (7). A `Square` can only be constructed in bounds.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..8`.
    #[track_caller]
    pub const fn new(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "square out of bounds");
        Square { row, col }
    }

    /// Creates a square if `(row, col)` is in bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chesscore::Square;
    ///
    /// assert_eq!(Square::from_coords(6, 4), Some(Square::new(6, 4)));
    /// assert_eq!(Square::from_coords(8, 4), None);
    /// ```
    #[inline]
    pub const fn from_coords(row: i32, col: i32) -> Option<Square> {
        if in_bounds(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Steps by `(drow, dcol)`, or `None` when that leaves the board.
    #[inline]
    pub const fn offset(self, drow: i32, dcol: i32) -> Option<Square> {
        Square::from_coords(self.row as i32 + drow, self.col as i32 + dcol)
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Chebyshev distance, i.e. the number of king steps between squares.
    pub fn distance(self, other: Square) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Whether a square with this parity is shaded in the usual checkerboard
    /// pattern. `a8` (row 0, col 0) is a light square.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64u8).map(|i| Square { row: i / 8, col: i % 8 })
    }

    /// The file letter, `'a'` to `'h'`.
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    /// The rank digit as seen from White, `'1'` (row 7) to `'8'` (row 0).
    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self, self.row, self.col)
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Parses an algebraic name like `e2`.
    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        match *s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Ok(Square::new(b'8' - rank, file - b'a'))
            }
            _ => Err(ParseSquareError),
        }
    }
}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Square> {
        Ok(Square::new(u.int_in_range(0..=7)?, u.int_in_range(0..=7)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        for row in -3..12 {
            for col in -3..12 {
                let expected = (0..=7).contains(&row) && (0..=7).contains(&col);
                assert_eq!(in_bounds(row, col), expected, "({row}, {col})");
                assert_eq!(Square::from_coords(row, col).is_some(), expected);
            }
        }
        assert!(!in_bounds(i32::MIN, 0));
        assert!(!in_bounds(0, i32::MAX));
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(0, 7);
        assert_eq!(sq.offset(1, -1), Some(Square::new(1, 6)));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.offset(0, 1), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!("h1".parse::<Square>(), Ok(Square::new(7, 7)));
        assert_eq!("e9".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("e".parse::<Square>(), Err(ParseSquareError));
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Square::new(6, 3).distance(Square::new(5, 6)), 3);
        assert_eq!(Square::new(4, 4).distance(Square::new(4, 4)), 0);
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Square::new(0, 0));
        assert_eq!(all[9], Square::new(1, 1));
        assert!(all.windows(2).all(|w| w[0].index() + 1 == w[1].index()));
    }
}
