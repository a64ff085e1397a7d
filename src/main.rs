use std::{
    env::args,
    fs,
    io::{stdin, stdout},
    process::exit,
};

use anyhow::{bail, Context};
use log::{info, Level};

pub use utils::Pos;
mod utils;

pub use world::{Cell, DenseWorld, LifeError, LifeResult, SparseWorld, World};
pub mod world;

pub use sim::Sim;
mod sim;

pub use view::console_loop;
mod view;

const DENSE_WIDTH: usize = 10;
const DENSE_HEIGHT: usize = 10;

const DEFAULT_SEED: [Pos; 5] = [
    pos!(1, 2),
    pos!(2, 3),
    pos!(3, 1),
    pos!(3, 2),
    pos!(3, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Model {
    Sparse,
    Dense,
}

impl Model {
    fn parse(arg: Option<&str>) -> anyhow::Result<Self> {
        match arg {
            None | Some("sparse") => Ok(Model::Sparse),
            Some("dense") => Ok(Model::Dense),
            Some(other) => bail!("unknown model {other:?}, expected \"sparse\" or \"dense\""),
        }
    }
}

/// reads a plain-text pattern, where `#` or `*` marks a living cell.
fn deserialize(str: &str) -> Vec<Pos> {
    let mut result = vec![];
    for (row, line) in str.lines().enumerate() {
        for (col, c) in line.chars().enumerate() {
            if matches!(c, '#' | '*') {
                result.push(pos!(row as i32, col as i32));
            }
        }
    }
    result
}

fn run<W>(world: W, seed: &[Pos]) -> anyhow::Result<()>
where
    W: World,
{
    let mut sim = Sim::new(world, seed)?;
    console_loop(&mut sim, stdin().lock(), stdout().lock())?;
    info!(
        "stopped after {} generations, {} cells left: {:?}",
        sim.generation(),
        sim.population(),
        sim.world().actives()
    );
    Ok(())
}

fn start() -> anyhow::Result<()> {
    let args: Vec<String> = args().skip(1).collect();
    let model = Model::parse(args.first().map(String::as_str))?;
    let seed = match args.get(1) {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("could not read pattern file {path:?}"))?;
            deserialize(&content)
        }
        None => DEFAULT_SEED.to_vec(),
    };

    info!(
        "starting lifecell v{} with the {:?} model and {} living cells",
        env!("CARGO_PKG_VERSION"),
        model,
        seed.len()
    );
    match model {
        Model::Sparse => run(SparseWorld::new(), &seed),
        Model::Dense => run(DenseWorld::new(DENSE_WIDTH, DENSE_HEIGHT), &seed),
    }
}

pub fn main() {
    if let Err(err) = simple_logger::init_with_level(Level::Warn) {
        eprintln!("[warning] could not set up logging: {err}");
    }

    if let Err(err) = start() {
        eprintln!("[error] {err:#}");
        exit(1);
    }
}
