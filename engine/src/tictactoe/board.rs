use std::fmt;

use super::error::{EngineError, EngineResult};
use super::types::{Cell, Position};

/// Square grid of cells stored row-major. Knows nothing about turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn from_cells(size: usize, cells: Vec<Cell>) -> EngineResult<Self> {
        let expected = size * size;
        if cells.len() != expected {
            return Err(EngineError::InvalidBoardLength {
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.size && position.y < self.size
    }

    pub fn occupant(&self, position: Position) -> EngineResult<Cell> {
        let index = self.index_of(position)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, position: Position, cell: Cell) -> EngineResult<()> {
        let index = self.index_of(position)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Empty cells in index order, recomputed from the grid on every call.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| Position::from_index(index, self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.empty_positions().is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    // Positions handed in here come from the board itself, so they are always in range.
    pub(crate) fn cell_at(&self, position: Position) -> Cell {
        self.cells[position.to_index(self.size)]
    }

    pub(crate) fn write(&mut self, position: Position, cell: Cell) {
        let index = position.to_index(self.size);
        self.cells[index] = cell;
    }

    fn index_of(&self, position: Position) -> EngineResult<usize> {
        if !self.contains(position) {
            return Err(EngineError::OutOfRange {
                position,
                size: self.size,
            });
        }
        Ok(position.to_index(self.size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
