use clap::ValueEnum;
use rand::prelude::*;
use rand::rngs::StdRng;
use std::ops::Range;

/// Strategy deciding the order lines of a sweep are handed out in.
/// Lines are independent, so every order yields the same field.
pub trait LineOrder: Send + Sync + std::fmt::Debug {
    fn order(&self, lines: Range<usize>) -> Vec<usize>;
}

/// Increasing line index.
#[derive(Copy, Clone, Debug, Default)]
pub struct Forward;

impl LineOrder for Forward {
    fn order(&self, lines: Range<usize>) -> Vec<usize> {
        lines.collect()
    }
}

/// Decreasing line index.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reverse;

impl LineOrder for Reverse {
    fn order(&self, lines: Range<usize>) -> Vec<usize> {
        lines.rev().collect()
    }
}

/// Seeded random permutation, identical for identical seeds.
#[derive(Copy, Clone, Debug, Default)]
pub struct Shuffled {
    pub seed: u64,
}

impl LineOrder for Shuffled {
    fn order(&self, lines: Range<usize>) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut result: Vec<usize> = lines.collect();
        result.shuffle(&mut rng);
        result
    }
}

/// Command line / parameter selection of a `LineOrder`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Traversal {
    #[default]
    Forward,
    Reverse,
    Shuffled,
}

impl Traversal {
    pub fn strategy(&self, seed: u64) -> Box<dyn LineOrder> {
        match self {
            Traversal::Forward => Box::new(Forward),
            Traversal::Reverse => Box::new(Reverse),
            Traversal::Shuffled => Box::new(Shuffled { seed }),
        }
    }
}
