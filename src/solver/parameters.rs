use crate::dataset::Dataset;
use crate::error::*;
use crate::solver::*;
use crate::util::*;

/// Solver generation is configurable.
/// These are all the parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    /// Grid is `n x n`.
    pub n: usize,

    /// Number of ADI steps, zero leaves the field untouched.
    pub tsteps: usize,

    /// How many threads are available for sweeps.
    /// One runs every line on the calling thread.
    pub threads: usize,

    /// Minimum number of lines per parallel task.
    pub lines_per_task: usize,

    /// Some multithreaded operations on buffers are chunked with this size
    pub chunk_size: usize,

    /// Storage of the caller's field `U`.
    pub u_layout: Layout,

    /// Storage of the intermediate field `V`.
    pub v_layout: Layout,

    /// Line order within a sweep.
    pub traversal: Traversal,

    /// Seed for shuffled traversal.
    pub seed: u64,

    /// Pivots at or below this magnitude are singular.
    pub pivot_epsilon: f64,
}

impl std::default::Default for SolverParameters {
    fn default() -> Self {
        SolverParameters::from_dataset(Dataset::default())
    }
}

impl SolverParameters {
    pub fn from_dataset(dataset: Dataset) -> Self {
        SolverParameters {
            n: dataset.n(),
            tsteps: dataset.tsteps(),
            threads: 1,
            lines_per_task: 8,
            chunk_size: 1000,
            u_layout: Layout::RowMajor,
            // Column sweeps write V, keep its columns contiguous
            v_layout: Layout::ColumnMajor,
            traversal: Traversal::Forward,
            seed: 0,
            pivot_epsilon: f64::EPSILON,
        }
    }

    pub fn aabb(&self) -> AABB<2> {
        AABB::square(self.n)
    }

    /// Reject anything a run cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.n < 3 {
            return Err(AdiError::configuration(format!(
                "grid size {} is too small, lines need at least one interior point (n >= 3)",
                self.n
            )));
        }
        if self.n > i32::MAX as usize {
            return Err(AdiError::configuration(format!(
                "grid size {} exceeds the coordinate range",
                self.n
            )));
        }
        if self.threads == 0 {
            return Err(AdiError::configuration("threads must be at least 1"));
        }
        if self.lines_per_task == 0 {
            return Err(AdiError::configuration(
                "lines_per_task must be at least 1",
            ));
        }
        if self.chunk_size == 0 {
            return Err(AdiError::configuration(
                "chunk_size must be at least 1",
            ));
        }
        if self.pivot_epsilon.is_nan() || self.pivot_epsilon < 0.0 {
            return Err(AdiError::configuration(format!(
                "pivot_epsilon must be a non negative number, got {}",
                self.pivot_epsilon
            )));
        }
        Ok(())
    }

    pub fn sweep_options(&self) -> SweepOptions {
        SweepOptions {
            order: self.traversal.strategy(self.seed),
            parallel: self.threads > 1,
            lines_per_task: self.lines_per_task,
            chunk_size: self.chunk_size,
            pivot_epsilon: self.pivot_epsilon,
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn default_test() {
        let p = SolverParameters::default();
        assert_eq!((p.n, p.tsteps), (20, 20));
        assert!(p.validate().is_ok());
        assert_eq!(p.aabb(), AABB::square(20));
        assert!(!p.sweep_options().parallel);
    }

    #[test]
    fn validate_test() {
        let base = SolverParameters::default();
        for bad in [
            SolverParameters { n: 2, ..base.clone() },
            SolverParameters { n: 0, ..base.clone() },
            SolverParameters { threads: 0, ..base.clone() },
            SolverParameters { lines_per_task: 0, ..base.clone() },
            SolverParameters { chunk_size: 0, ..base.clone() },
            SolverParameters { pivot_epsilon: f64::NAN, ..base.clone() },
            SolverParameters { pivot_epsilon: -1.0, ..base.clone() },
        ] {
            assert!(matches!(
                bad.validate(),
                Err(AdiError::Configuration { .. })
            ));
        }
        assert!(SolverParameters { n: 3, tsteps: 0, ..base }.validate().is_ok());
    }
}
