use std::fmt;

use ndarray::Array2;

use crate::error::MapError;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Obstacle,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Open),
            'X' => Some(Cell::Obstacle),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Obstacle => 'X',
        }
    }
}

// Action
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Movement {
    North,
    South,
    East,
    West,
}

impl Movement {
    pub fn delta(self) -> Pos {
        match self {
            Movement::North => Pos::new(-1, 0),
            Movement::South => Pos::new(1, 0),
            Movement::East => Pos::new(0, 1),
            Movement::West => Pos::new(0, -1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Movement::North => "North",
            Movement::South => "South",
            Movement::East => "East",
            Movement::West => "West",
        }
    }

    /// Every candidate move, always in the order North, South, East, West.
    pub fn all() -> [Movement; 4] {
        [Movement::North, Movement::South, Movement::East, Movement::West]
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn translate(self, delta: Pos) -> Pos {
        Pos::new(
            self.row.wrapping_add(delta.row),
            self.col.wrapping_add(delta.col),
        )
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Static obstacle map. Built once and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    cells: Array2<Cell>,
}

impl GridMap {
    /// Builds a map from row-major cells.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, MapError> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MapError::TooLarge { rows, cols })?;
        let found = cells.len();
        if found != expected {
            return Err(MapError::DimensionMismatch {
                rows,
                cols,
                expected,
                found,
            });
        }
        let cells = Array2::from_shape_vec((rows, cols), cells)
            .map_err(|_| MapError::TooLarge { rows, cols })?;
        Ok(Self { cells })
    }

    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Open),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.dim().0
    }

    pub fn cols(&self) -> usize {
        self.cells.dim().1
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows()
            && (pos.col as usize) < self.cols()
    }

    /// Callers must check [`GridMap::in_bounds`] first, or use
    /// [`GridMap::is_traversable`] which does both.
    pub fn is_obstacle(&self, pos: Pos) -> bool {
        debug_assert!(self.in_bounds(pos), "is_obstacle called out of bounds at {}", pos);
        self.cell(pos) == Some(Cell::Obstacle)
    }

    pub fn is_traversable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && !self.is_obstacle(pos)
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[[pos.row as usize, pos.col as usize]])
        } else {
            None
        }
    }

    pub fn traversable_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Open).count()
    }

    pub fn positions(&self) -> EnvIter {
        EnvIter::new(self.rows(), self.cols())
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                write!(f, "{}", self.cells[[row, col]].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major walk over every coordinate of a map.
pub struct EnvIter {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl EnvIter {
    fn new(rows: usize, cols: usize) -> EnvIter {
        EnvIter {
            row: 0,
            col: 0,
            rows,
            cols,
        }
    }
}

impl Iterator for EnvIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.cols == 0 || self.row >= self.rows {
            return None;
        }
        let pos = Pos::new(self.row as i32, self.col as i32);
        self.col += 1;
        if self.col == self.cols {
            self.col = 0;
            self.row += 1;
        }
        Some(pos)
    }
}
