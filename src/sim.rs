use log::debug;

use crate::{LifeResult, Pos, World};

#[derive(Debug)]
pub struct Sim<W>
where
    W: World,
{
    world: W,
    generation: u64,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn new(mut world: W, seed: &[Pos]) -> LifeResult<Self> {
        world.let_there_be_life(seed)?;
        Ok(Self {
            world,
            generation: 0,
        })
    }

    pub fn step(&mut self) {
        self.world.evolve();
        self.generation += 1;
        debug!(
            "generation {} holds {} living cells",
            self.generation,
            self.population()
        );
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.world.actives().len()
    }

    pub fn render(&self) -> LifeResult<String> {
        self.world.render()
    }

    pub fn world(&self) -> &W {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, DenseWorld, SparseWorld};
    use proptest::prelude::*;

    const GLIDER: [Pos; 5] = [
        pos!(1, 2),
        pos!(2, 3),
        pos!(3, 1),
        pos!(3, 2),
        pos!(3, 3),
    ];

    #[test]
    fn counts_generations() {
        let mut sim = Sim::new(SparseWorld::new(), &GLIDER).unwrap();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population(), 5);
        sim.step();
        sim.step();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.population(), 5);
    }

    #[test]
    fn glider_travels_diagonally() {
        let mut sim = Sim::new(SparseWorld::new(), &GLIDER).unwrap();
        for _ in 0..4 {
            sim.step();
        }
        let moved: Vec<Pos> = GLIDER.iter().map(|&p| p + pos!(1, 1)).collect();
        assert_eq!(sim.world().actives(), moved);
    }

    #[test]
    fn rejects_seed_outside_dense_grid() {
        assert!(Sim::new(DenseWorld::new(3, 3), &GLIDER).is_err());
    }

    proptest! {
        #[test]
        fn both_worlds_agree_away_from_the_edges(
            cells in prop::collection::hash_set((3i32..9, 3i32..9), 0..24)
        ) {
            let seed: Vec<Pos> = cells.into_iter().map(|(row, col)| pos!(row, col)).collect();
            let mut sparse = Sim::new(SparseWorld::new(), &seed).unwrap();
            let mut dense = Sim::new(DenseWorld::new(12, 12), &seed).unwrap();
            prop_assert_eq!(sparse.world().actives(), dense.world().actives());

            sparse.step();
            dense.step();
            prop_assert_eq!(sparse.world().actives(), dense.world().actives());
        }
    }
}
