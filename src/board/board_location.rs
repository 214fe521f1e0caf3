use crate::chess_errors::ChessErrors;

/// A square on the board. Row 1 is White's back rank, row 8 is Black's;
/// column 1 is the a-file, column 8 the h-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    pub row: i8,
    pub column: i8,
}

impl BoardLocation {
    /// Builds a location, rejecting coordinates outside 1..=8.
    pub fn new(row: i8, column: i8) -> Result<Self, ChessErrors> {
        if !Self::in_bounds(row, column) {
            return Err(ChessErrors::OutOfBounds { row, column });
        }
        Ok(BoardLocation { row, column })
    }

    #[inline]
    pub const fn in_bounds(row: i8, column: i8) -> bool {
        row >= 1 && row <= 8 && column >= 1 && column <= 8
    }

    /// Moves this location by a row and column offset.
    ///
    /// Returns `OutOfBounds` when the target square leaves the board, which
    /// move generation treats as the end of a ray.
    pub fn offset_by(&self, d_row: i8, d_column: i8) -> Result<Self, ChessErrors> {
        BoardLocation::new(self.row + d_row, self.column + d_column)
    }
}
