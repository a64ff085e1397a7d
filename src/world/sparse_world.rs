use std::collections::HashSet;

use itertools::Itertools;
use log::warn;
use metrohash::MetroBuildHasher;

use crate::{pos, Cell, LifeError, LifeResult, Pos, World};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseWorld {
    living: HashSet<Pos, MetroBuildHasher>,
}

impl SparseWorld {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_cell_alive(&self, pos: &Pos) -> bool {
        self.living.contains(pos)
    }

    pub fn neighbor_count(&self, pos: Pos) -> usize {
        pos.neighbors().filter(|p| self.is_cell_alive(p)).count()
    }

    /// cells that may be alive in the next generation: every living cell and its neighbors.
    fn possible_change_pos(&self) -> HashSet<Pos, MetroBuildHasher> {
        self.living
            .iter()
            .flat_map(|&p| std::iter::once(p).chain(p.neighbors()))
            .collect()
    }

    fn get_cell(&self, pos: Pos) -> Cell {
        if self.is_cell_alive(&pos) {
            Cell::active()
        } else {
            Cell::inactive()
        }
    }

    /// next generation, leaving this one untouched.
    pub fn evolved(&self) -> Self {
        self.possible_change_pos()
            .into_iter()
            .filter(|&p| self.get_cell(p).next(self.neighbor_count(p)).is_active())
            .collect()
    }

    /// smallest rectangle holding every living cell, as `(top_left, bottom_right)`.
    pub fn bounding_box(&self) -> Option<(Pos, Pos)> {
        let (min_row, max_row) = self.living.iter().map(|p| p.row).minmax().into_option()?;
        let (min_col, max_col) = self.living.iter().map(|p| p.col).minmax().into_option()?;
        Some((pos!(min_row, min_col), pos!(max_row, max_col)))
    }
}

impl FromIterator<Pos> for SparseWorld {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        Self {
            living: iter.into_iter().collect(),
        }
    }
}

impl World for SparseWorld {
    fn get(&self, pos: Pos) -> Cell {
        self.get_cell(pos)
    }

    fn actives(&self) -> Vec<Pos> {
        self.living.iter().copied().sorted().collect()
    }

    fn let_there_be_life(&mut self, seed: &[Pos]) -> LifeResult<()> {
        self.living = seed.iter().copied().collect();
        Ok(())
    }

    fn evolve(&mut self) {
        *self = self.evolved();
    }

    fn render(&self) -> LifeResult<String> {
        let (top_left, bottom_right) = self.bounding_box().ok_or_else(|| {
            warn!("attempted to draw an empty sparse universe");
            LifeError::EmptyUniverse
        })?;

        let mut result = String::new();
        for row in top_left.row..=bottom_right.row {
            for col in top_left.col..=bottom_right.col {
                let char = if self.is_cell_alive(&pos!(row, col)) { '*' } else { ' ' };
                result.push(char);
            }
            result.push('\n');
        }
        Ok(result)
    }
}
