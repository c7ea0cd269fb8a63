use super::player::Player;

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Empty,
    One,
    Two,
}

impl Slot {
    pub fn is_empty(self) -> bool {
        self == Slot::Empty
    }

    /// The player occupying this slot, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Slot::Empty => None,
            Slot::One => Some(Player::One),
            Slot::Two => Some(Player::Two),
        }
    }
}

/// Grid of slots stored column by column.
/// Within a column, index 0 is the top and `rows - 1` is the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: Vec<Vec<Slot>>,
    rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {columns}x{rows}: both must be at least 1")]
    InvalidDimensions { columns: usize, rows: usize },
}

impl Board {
    /// Create an empty board of `columns` x `rows`
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        if columns == 0 || rows == 0 {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        Ok(Board {
            columns: vec![vec![Slot::Empty; rows]; columns],
            rows,
        })
    }

    /// Empty board of the same size
    pub fn cleared(&self) -> Board {
        Board {
            columns: vec![vec![Slot::Empty; self.rows]; self.columns()],
            rows: self.rows,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the slot at a specific position
    /// Row 0 is the top, row `rows - 1` is the bottom
    pub fn get(&self, column: usize, row: usize) -> Slot {
        self.columns[column][row]
    }

    /// Signed lookup used by line scans; off-board positions yield `None`
    pub(crate) fn slot_at(&self, column: isize, row: isize) -> Option<Slot> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        self.columns.get(column)?.get(row).copied()
    }

    /// A column is full once its top slot is occupied.
    /// Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        match self.columns.get(column) {
            Some(slots) => !slots[0].is_empty(),
            None => true,
        }
    }

    /// Check if every slot on the board is occupied
    pub fn is_full(&self) -> bool {
        self.columns
            .iter()
            .all(|slots| slots.iter().all(|slot| !slot.is_empty()))
    }

    /// Row a piece dropped into `column` would come to rest on
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        let slots = self.columns.get(column)?;
        match slots.iter().position(|slot| !slot.is_empty()) {
            None => Some(self.rows - 1),
            Some(0) => None,
            Some(occupied) => Some(occupied - 1),
        }
    }

    /// Drop a piece for `player` into `column`.
    ///
    /// Returns the updated board together with the landing row. `self` is
    /// left untouched, so the previous position stays available to callers.
    pub fn apply_move(&self, column: usize, player: Player) -> Result<(Board, usize), MoveError> {
        if column >= self.columns() {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns(),
            });
        }

        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull { column })?;

        let mut next = self.clone();
        next.columns[column][row] = player.to_slot();
        Ok((next, row))
    }

    /// Build a board from a top-to-bottom picture, one string per row.
    /// `.` is empty, `1` and `2` are the players' pieces.
    #[cfg(test)]
    pub(crate) fn from_rows(picture: &[&str]) -> Board {
        let rows = picture.len();
        let columns = picture[0].len();
        let mut board = Board::new(columns, rows).unwrap();
        for (row, line) in picture.iter().enumerate() {
            assert_eq!(line.len(), columns, "ragged picture row {row}");
            for (column, ch) in line.chars().enumerate() {
                board.columns[column][row] = match ch {
                    '.' => Slot::Empty,
                    '1' => Slot::One,
                    '2' => Slot::Two,
                    other => panic!("unexpected slot character {other:?}"),
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            columns: vec![vec![Slot::Empty; ROWS]; COLUMNS],
            rows: ROWS,
        }
    }
}
