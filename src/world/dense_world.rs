use std::fmt;

use itertools::Itertools;
use log::trace;

use crate::{pos, Cell, LifeError, LifeResult, Pos, World};

/// fixed-size universe, anything outside of it is dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseWorld {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl DenseWorld {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::inactive(); width * height],
        }
    }

    /// flat index of `pos`, if it lies on the grid.
    fn get_index(&self, Pos { row, col }: Pos) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.width)?;
        Some(row * self.width + col)
    }

    fn checked_index(&self, pos: Pos) -> LifeResult<usize> {
        self.get_index(pos).ok_or(LifeError::OutOfRange {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    pub fn scorch(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::inactive());
    }

    pub fn neighbor_count(&self, pos: Pos) -> usize {
        pos.neighbors().filter(|&p| self.get(p).is_active()).count()
    }

    fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |row| (0..width).map(move |col| pos!(row, col)))
    }

    /// cells whose state differs in the next generation, read from the current one only.
    fn pending_changes(&self) -> Vec<(usize, Cell)> {
        self.positions()
            .zip(&self.cells)
            .enumerate()
            .filter_map(|(index, (p, &current))| {
                let fate = current.next(self.neighbor_count(p));
                (fate != current).then(|| (index, fate))
            })
            .collect()
    }
}

impl World for DenseWorld {
    fn get(&self, pos: Pos) -> Cell {
        match self.get_index(pos) {
            Some(index) => self.cells[index],
            None => Cell::inactive(),
        }
    }

    fn actives(&self) -> Vec<Pos> {
        self.positions().filter(|&p| self.get(p).is_active()).collect()
    }

    fn let_there_be_life(&mut self, seed: &[Pos]) -> LifeResult<()> {
        let indices: Vec<usize> = seed
            .iter()
            .map(|&p| self.checked_index(p))
            .collect::<LifeResult<_>>()?;

        self.scorch();
        for index in indices {
            self.cells[index] = Cell::active();
        }
        Ok(())
    }

    fn evolve(&mut self) {
        let changes = self.pending_changes();
        trace!("dense evolution flips {} cells", changes.len());
        for (index, fate) in changes {
            self.cells[index] = fate;
        }
    }

    fn render(&self) -> LifeResult<String> {
        Ok(self.to_string())
    }
}

impl fmt::Display for DenseWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            writeln!(f, "{}", row.iter().map(Cell::as_bit).join(" "))?;
        }
        Ok(())
    }
}
