use crate::domain::*;

/// Which half of an ADI step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Column,
    Row,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseKind::Column => write!(f, "column"),
            PhaseKind::Row => write!(f, "row"),
        }
    }
}

/// Tridiagonal system of one sweep.
/// `(lo, diag, hi)` couple neighbors along a line,
/// `(neighbor_lo, neighbor_hi)` weight the cross field's adjacent lines
/// in the right hand side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SweepCoefficients<T> {
    pub lo: T,
    pub diag: T,
    pub hi: T,
    pub neighbor_lo: T,
    pub neighbor_hi: T,
}

/// One sweep of an ADI step with its own coefficient set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Phase<T> {
    Column(SweepCoefficients<T>),
    Row(SweepCoefficients<T>),
}

impl<T: Copy> Phase<T> {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Column(_) => PhaseKind::Column,
            Phase::Row(_) => PhaseKind::Row,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Phase::Column(_) => Axis::Column,
            Phase::Row(_) => Axis::Row,
        }
    }

    pub fn coefficients(&self) -> &SweepCoefficients<T> {
        match self {
            Phase::Column(c) | Phase::Row(c) => c,
        }
    }
}
