/// Single coordinate axis, valid values are `0..BOARD_SIZE`.
pub type Coord = u8;

/// Count type used for piece and empty-cell counts.
pub type CellCount = u8;

/// Board coordinates `(x, y)`, `x` picks the column and `y` the row.
pub type Position = (Coord, Coord);

/// Width and height of the board.
pub const BOARD_SIZE: Coord = 3;

/// Total number of cells on the board.
pub const TOTAL_CELLS: CellCount = BOARD_SIZE * BOARD_SIZE;

pub const CENTER: Position = (1, 1);

pub const CORNERS: [Position; 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_range((x, y): Position) -> bool {
    x < BOARD_SIZE && y < BOARD_SIZE
}

/// Every position in row-major order, rows (`y`) outer and columns (`x`) inner.
pub fn iter_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| (x, y)))
}

/// One of the eight winning triples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line(pub [Position; 3]);

impl Line {
    pub const fn row(y: Coord) -> Self {
        Self([(0, y), (1, y), (2, y)])
    }

    pub const fn column(x: Coord) -> Self {
        Self([(x, 0), (x, 1), (x, 2)])
    }

    pub const MAIN_DIAGONAL: Self = Self([(0, 0), (1, 1), (2, 2)]);

    pub const ANTI_DIAGONAL: Self = Self([(2, 0), (1, 1), (0, 2)]);

    pub fn positions(self) -> impl Iterator<Item = Position> {
        self.0.into_iter()
    }

    /// Lines through `pos` in priority order: row, column, then whichever
    /// diagonals contain it (both for the center).
    pub fn through((x, y): Position) -> impl Iterator<Item = Line> {
        let main = (x == y).then_some(Self::MAIN_DIAGONAL);
        let anti = (usize::from(x) + usize::from(y) == 2).then_some(Self::ANTI_DIAGONAL);
        [Some(Self::row(y)), Some(Self::column(x)), main, anti]
            .into_iter()
            .flatten()
    }
}

pub const LINES: [Line; 8] = [
    Line::row(0),
    Line::row(1),
    Line::row(2),
    Line::column(0),
    Line::column(1),
    Line::column(2),
    Line::MAIN_DIAGONAL,
    Line::ANTI_DIAGONAL,
];
