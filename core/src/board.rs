use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Up to nine positions, kept inline.
pub type Positions = SmallVec<[Position; 9]>;

/// 3×3 grid of cells.
///
/// Boards are values: [`Board::place`] returns a new board and leaves the
/// original untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let size = (BOARD_SIZE, BOARD_SIZE);
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a board from a grid indexed by `[x, y]`.
    ///
    /// Rejects grids that are not 3×3 and grids whose piece counts could not
    /// come from Blue and Red alternating with Blue first.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let expected = usize::from(BOARD_SIZE);
        if cells.dim() != (expected, expected) {
            return Err(GameError::InvalidBoardShape);
        }

        let board = Self { cells };
        match board.count_of(Cell::Blue).checked_sub(board.count_of(Cell::Red)) {
            Some(0 | 1) => Ok(board),
            _ => Err(GameError::InvalidPieceCounts),
        }
    }

    /// Builds a board from rows of cells, `rows[y][x]`.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Result<Self> {
        let size = usize::from(BOARD_SIZE);
        let cells = Array2::from_shape_fn((size, size), |(x, y)| rows[y][x]);
        Self::from_cells(cells)
    }

    pub fn validate_coords(&self, coords: Position) -> Result<Position> {
        if in_range(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn cell(&self, coords: Position) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn is_empty_at(&self, coords: Position) -> Result<bool> {
        Ok(self.cell(coords)?.is_empty())
    }

    /// Returns a copy of this board with `color` written into an empty cell.
    pub fn place(&self, coords: Position, color: Cell) -> Result<Self> {
        let coords = self.validate_coords(coords)?;
        if !self[coords].is_empty() {
            return Err(GameError::OccupiedCell);
        }

        let mut cells = self.cells.clone();
        cells[coords.to_nd_index()] = color;
        log::trace!("place {:?} at {:?}", color, coords);
        Ok(Self { cells })
    }

    pub fn count_of(&self, color: Cell) -> CellCount {
        iter_positions().filter(|&pos| self[pos] == color).count() as CellCount
    }

    pub fn empty_count(&self) -> CellCount {
        self.count_of(Cell::Empty)
    }

    pub fn is_blank(&self) -> bool {
        self.empty_count() == TOTAL_CELLS
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Positions {
        iter_positions().filter(|&pos| self[pos].is_empty()).collect()
    }

    /// The first cell holding `color` in row-major order.
    pub fn reference_cell(&self, color: Cell) -> Option<Position> {
        iter_positions().find(|&pos| self[pos] == color)
    }

    pub fn count_in_line(&self, line: Line, color: Cell) -> CellCount {
        line.positions().filter(|&pos| self[pos] == color).count() as CellCount
    }

    pub fn line_contains(&self, line: Line, color: Cell) -> bool {
        line.positions().any(|pos| self[pos] == color)
    }

    pub fn is_line_full_of(&self, line: Line, color: Cell) -> bool {
        line.positions().all(|pos| self[pos] == color)
    }

    /// Cells in row-major order, the whole grid as rows of `[x]`.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let mut rows = [[Cell::Empty; 3]; 3];
        for (x, y) in iter_positions() {
            rows[usize::from(y)][usize::from(x)] = self[(x, y)];
        }
        rows
    }

    /// Folds the grid into words for the choice adapter.
    pub(crate) fn words(&self) -> impl Iterator<Item = u64> + '_ {
        iter_positions().map(|pos| self[pos].to_word())
    }
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, coords: Position) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Parses a board from three row strings using `B`, `R` and `.`.
#[cfg(test)]
pub(crate) fn parse_board(rows: [&str; 3]) -> Board {
    let mut grid = [[Cell::Empty; 3]; 3];
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            grid[y][x] = match ch {
                'B' => Cell::Blue,
                'R' => Cell::Red,
                '.' => Cell::Empty,
                other => panic!("unexpected board char {other:?}"),
            };
        }
    }
    Board::from_rows(grid).unwrap()
}
