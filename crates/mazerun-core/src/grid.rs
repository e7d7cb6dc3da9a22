//! The [`Grid`] type, an immutable 2D map of [`Terrain`].
//!
//! A grid is built once, from text or from a function, and never changes
//! afterwards. It owns its storage outright, so a `&Grid` can be shared
//! freely between threads running independent searches.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Cell, Range};
use crate::terrain::Terrain;

/// An immutable rectangular maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Terrain>,
    bounds: Range,
}

impl Grid {
    /// Build a grid of the given size, asking `f` for the terrain of every
    /// cell in row-major order.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Cell) -> Terrain) -> Self {
        let bounds = Range::with_size(rows, cols);
        let cells = bounds.iter().map(&mut f).collect();
        Self { cells, bounds }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Terrain at `c`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, c: Cell) -> Option<Terrain> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Terrain at `c`.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the grid; use
    /// [`get`](Self::get) when a miss is expected.
    pub fn terrain_at(&self, c: Cell) -> Result<Terrain, GridError> {
        self.get(c).ok_or(GridError::OutOfBounds {
            cell: c,
            bounds: self.bounds,
        })
    }

    /// Whether `c` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.get(c).is_some_and(Terrain::is_passable)
    }

    /// Whether `c` is a goal cell.
    #[inline]
    pub fn is_goal(&self, c: Cell) -> bool {
        self.get(c) == Some(Terrain::Goal)
    }

    /// Locate the single start cell.
    pub fn find_start(&self) -> Result<Cell, GridError> {
        let mut starts = self.find(Terrain::Start);
        let Some(first) = starts.next() else {
            return Err(GridError::MissingStart);
        };
        let extra = starts.count();
        if extra > 0 {
            return Err(GridError::MultipleStarts { count: extra + 1 });
        }
        Ok(first)
    }

    /// All goal cells, row-major.
    pub fn goals(&self) -> impl Iterator<Item = Cell> + '_ {
        self.find(Terrain::Goal)
    }

    /// All cells holding `terrain`, row-major.
    pub fn find(&self, terrain: Terrain) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter_map(move |(c, t)| (t == terrain).then_some(c))
    }

    /// Row-major iterator over `(Cell, Terrain)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse maze text over the alphabet `#`, `.`, `S`, `E`.
    ///
    /// Whitespace around the whole block is trimmed and a trailing `\r` on
    /// each line is ignored; every line must have the same width.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(s.len());
        let mut width = None;
        let mut rows = 0;

        for (row, line) in s.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let terrain = Terrain::from_rune(ch).ok_or(GridError::InvalidChar {
                    ch,
                    cell: Cell::new(row as i32, col as i32),
                })?;
                cells.push(terrain);
                found += 1;
            }
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        line: row + 1,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = width.unwrap_or(0);
        Ok(Self {
            cells,
            bounds: Range::with_size(rows as i32, cols as i32),
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, t) in self.iter() {
            if c.col == self.bounds.min.col && c.row != self.bounds.min.row {
                writeln!(f)?;
            }
            write!(f, "{}", t.rune())?;
        }
        Ok(())
    }
}
