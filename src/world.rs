use thiserror::Error;

use crate::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    active: bool,
}

impl Cell {
    pub fn active() -> Self {
        Self { active: true }
    }

    pub fn inactive() -> Self {
        Self { active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn as_bit(&self) -> u8 {
        self.active as u8
    }

    /// fate of this cell in the next generation, given its count of living neighbors.
    pub fn next(self, neighbor_count: usize) -> Self {
        match (self.is_active(), neighbor_count) {
            (true, 2 | 3) => Cell::active(),  // stay
            (false, 3) => Cell::active(),     // becomes alive
            _ => Cell::inactive(),            // dies or stays dead
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::inactive()
    }
}

pub type LifeResult<T> = Result<T, LifeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("the universe holds no living cell, there is nothing to draw")]
    EmptyUniverse,
    #[error("cell ({}, {}) lies outside of the {width}x{height} grid", .pos.row, .pos.col)]
    OutOfRange { pos: Pos, width: usize, height: usize },
}

pub trait World {
    fn get(&self, pos: Pos) -> Cell;

    /// living cells, in row-major order.
    fn actives(&self) -> Vec<Pos>;

    /// kills every cell, then brings the `seed` cells to life.
    fn let_there_be_life(&mut self, seed: &[Pos]) -> LifeResult<()>;

    fn evolve(&mut self);

    fn render(&self) -> LifeResult<String>;
}

pub use dense_world::DenseWorld;
pub use sparse_world::SparseWorld;
mod dense_world;
mod sparse_world;
