use crate::error::*;
use crate::solver::*;
use crate::util::*;

/// Physical ratio for the column direction.
pub const B1: f64 = 2.0;

/// Physical ratio for the row direction.
pub const B2: f64 = 1.0;

/// Finite difference constants of one run.
/// `a, b, c` drive the column sweep, `d, e, f` the row sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients<T> {
    pub mul1: T,
    pub mul2: T,
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub e: T,
    pub f: T,
}

impl<T: FloatTrait> Coefficients<T> {
    /// Derive the constants for an `n x n` grid marched over `tsteps` steps.
    /// Both must be positive, there is no fallback value.
    pub fn derive(n: usize, tsteps: usize) -> Result<Self> {
        if n == 0 {
            return Err(AdiError::configuration(
                "grid size must be positive to derive coefficients",
            ));
        }
        if tsteps == 0 {
            return Err(AdiError::configuration(
                "step count must be positive to derive coefficients",
            ));
        }

        let one = T::one();
        let two = T::lit(2.0);
        let dx = one / T::from_index(n);
        let dy = one / T::from_index(n);
        let dt = one / T::from_index(tsteps);

        let mul1 = T::lit(B1) * dt / (dx * dx);
        let mul2 = T::lit(B2) * dt / (dy * dy);

        let a = -mul1 / two;
        let b = one + mul1;
        let c = a;

        let d = -mul2 / two;
        let e = one + mul2;
        let f = d;

        Ok(Coefficients {
            mul1,
            mul2,
            a,
            b,
            c,
            d,
            e,
            f,
        })
    }

    /// Column sweep: `(a, b, c)` on the line, `(d, f)` across it.
    pub fn column_phase(&self) -> Phase<T> {
        Phase::Column(SweepCoefficients {
            lo: self.a,
            diag: self.b,
            hi: self.c,
            neighbor_lo: self.d,
            neighbor_hi: self.f,
        })
    }

    /// Row sweep: `(d, e, f)` on the line, `(a, c)` across it.
    pub fn row_phase(&self) -> Phase<T> {
        Phase::Row(SweepCoefficients {
            lo: self.d,
            diag: self.e,
            hi: self.f,
            neighbor_lo: self.a,
            neighbor_hi: self.c,
        })
    }

    /// Phases of one time step in execution order.
    pub fn phases(&self) -> [Phase<T>; 2] {
        [self.column_phase(), self.row_phase()]
    }
}
