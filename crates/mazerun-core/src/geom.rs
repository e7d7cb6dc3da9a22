//! Geometry primitives: [`Cell`], [`Facing`] and [`Range`].
//!
//! Coordinates are (row, column) with row 0 at the top and column 0 on the
//! left, matching the order in which maze text is read.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow downwards, columns grow to the right.
///
/// Ordering is row-major, so sets of cells iterate top to bottom, left to
/// right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The neighbouring cell one step towards `facing`.
    #[inline]
    pub const fn step(self, facing: Facing) -> Self {
        let d = facing.offset();
        self.shift(d.row, d.col)
    }

    /// Whether the cell is inside the half-open range.
    #[inline]
    pub fn in_range(self, r: &Range) -> bool {
        r.contains(self)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Facing
// ---------------------------------------------------------------------------

/// One of the four cardinal orientations.
///
/// Only quarter turns are defined; a reversal is two turns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facing {
    North,
    #[default]
    East,
    South,
    West,
}

impl Facing {
    /// All orientations in clockwise order starting at North.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Unit step for this orientation, as a (row, col) delta.
    #[inline]
    pub const fn offset(self) -> Cell {
        match self {
            Facing::North => Cell::new(-1, 0),
            Facing::East => Cell::new(0, 1),
            Facing::South => Cell::new(1, 0),
            Facing::West => Cell::new(0, -1),
        }
    }

    /// Quarter turn counter-clockwise.
    #[inline]
    pub const fn left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::East => Facing::North,
            Facing::South => Facing::East,
            Facing::West => Facing::South,
        }
    }

    /// Quarter turn clockwise.
    #[inline]
    pub const fn right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// The opposite orientation.
    #[inline]
    pub const fn reverse(self) -> Self {
        self.left().left()
    }

    /// Dense index in `0..4`, clockwise from North.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index). Wraps modulo 4.
    #[inline]
    pub const fn from_index(i: usize) -> Self {
        Self::ALL[i % 4]
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Cell,
    pub max: Cell,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Cell::new(row0.min(row1), col0.min(col1)),
            max: Cell::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// A range anchored at the origin with the given extents.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows.max(0), cols.max(0))
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= self.min.row && c.row < self.max.row && c.col >= self.min.col && c.col < self.max.col
    }

    /// Row-major flat index of `c`, or `None` if outside the range.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let row = (c.row - self.min.row) as usize;
        let col = (c.col - self.min.col) as usize;
        Some(row * self.width() as usize + col)
    }

    /// Inverse of [`index`](Self::index). The caller guarantees
    /// `idx < self.len()`.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let w = self.width().max(1) as usize;
        Cell::new(
            (idx / w) as i32 + self.min.row,
            (idx % w) as i32 + self.min.col,
        )
    }

    /// Row-major iterator over every cell in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Cell;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Cell,
}

impl Iterator for RangeIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}
