use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digit::Digit;

pub const BOARD_SIZE: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: u8,
    pub col: u8,
}

impl CellPos {
    pub fn new(row: u8, col: u8) -> Result<Self, CellPosError> {
        if row >= BOARD_SIZE {
            return Err(CellPosError::RowOutOfRange(i64::from(row)));
        }
        if col >= BOARD_SIZE {
            return Err(CellPosError::ColOutOfRange(i64::from(col)));
        }
        Ok(Self { row, col })
    }

    /// Parses the `data-row` / `data-col` pair of a board cell.
    pub fn parse(row: &str, col: &str) -> Result<Self, CellPosError> {
        let row = parse_axis(row, CellPosError::RowOutOfRange)?;
        let col = parse_axis(col, CellPosError::ColOutOfRange)?;
        Self::new(row, col)
    }
}

fn parse_axis(raw: &str, out_of_range: fn(i64) -> CellPosError) -> Result<u8, CellPosError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CellPosError::NotANumber(trimmed.to_string()))?;
    u8::try_from(value).map_err(|_| out_of_range(value))
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellPosError {
    NotANumber(String),
    RowOutOfRange(i64),
    ColOutOfRange(i64),
}

impl fmt::Display for CellPosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellPosError::NotANumber(raw) => write!(f, "cell coordinate '{raw}' is not a number"),
            CellPosError::RowOutOfRange(row) => {
                write!(f, "row {row} outside 0..{BOARD_SIZE}")
            }
            CellPosError::ColOutOfRange(col) => {
                write!(f, "column {col} outside 0..{BOARD_SIZE}")
            }
        }
    }
}

impl std::error::Error for CellPosError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Editable,
    Filled(Digit),
}

impl CellState {
    pub fn is_editable(self) -> bool {
        matches!(self, CellState::Editable)
    }
}

/// The editable cells of the page. Cells the server rendered as givens
/// never enter the map and are never clickable.
#[derive(Debug, Clone, Default)]
pub struct BoardCells {
    cells: BTreeMap<CellPos, CellState>,
}

impl BoardCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_editable<I: IntoIterator<Item = CellPos>>(positions: I) -> Self {
        let mut board = Self::new();
        for pos in positions {
            board.register_editable(pos);
        }
        board
    }

    /// Registers a cell as editable. A cell that is already filled stays filled.
    pub fn register_editable(&mut self, pos: CellPos) {
        self.cells.entry(pos).or_insert(CellState::Editable);
    }

    pub fn state(&self, pos: CellPos) -> Option<CellState> {
        self.cells.get(&pos).copied()
    }

    pub fn is_editable(&self, pos: CellPos) -> bool {
        self.state(pos).map(CellState::is_editable).unwrap_or(false)
    }

    /// Marks the cell filled. Returns false when the cell is unknown or
    /// already filled; a filled cell never changes again.
    pub fn fill(&mut self, pos: CellPos, digit: Digit) -> bool {
        match self.cells.get_mut(&pos) {
            Some(state) if state.is_editable() => {
                *state = CellState::Filled(digit);
                true
            }
            _ => false,
        }
    }
}
