use crate::domain::*;
use crate::error::*;
use crate::solver::*;
use crate::util::*;

/// Hook called after each completed phase with the field it just wrote.
pub trait PhaseObserver<T: FloatTrait> {
    fn phase_complete<F: FieldView<T>>(
        &mut self,
        step: usize,
        kind: PhaseKind,
        field: &F,
    );
}

impl<T: FloatTrait> PhaseObserver<T> for () {
    fn phase_complete<F: FieldView<T>>(&mut self, _: usize, _: PhaseKind, _: &F) {
    }
}

/// Runs the column and row phase of one time step.
/// Owns the intermediate field `V` and the elimination scratch,
/// both are reused by every step.
#[derive(Debug)]
pub struct PhaseCoordinator<T> {
    column: Phase<T>,
    row: Phase<T>,
    boundary: DirichletBoundary<T>,
    v: OwnedField<T>,
    arena: ScratchArena<T>,
    options: SweepOptions,
}

impl<T: FloatTrait> PhaseCoordinator<T> {
    pub fn new(
        coefficients: &Coefficients<T>,
        aabb: AABB<2>,
        v_layout: Layout,
        options: SweepOptions,
    ) -> Self {
        let [column, row] = coefficients.phases();
        Self::with_coefficients(
            *column.coefficients(),
            *row.coefficients(),
            aabb,
            v_layout,
            options,
        )
    }

    /// Coordinator over explicit sweep systems instead of derived ones.
    pub fn with_coefficients(
        column: SweepCoefficients<T>,
        row: SweepCoefficients<T>,
        aabb: AABB<2>,
        v_layout: Layout,
        options: SweepOptions,
    ) -> Self {
        debug_assert!(aabb.is_square());
        PhaseCoordinator {
            column: Phase::Column(column),
            row: Phase::Row(row),
            boundary: DirichletBoundary::unit(),
            v: OwnedField::new(aabb, v_layout),
            arena: ScratchArena::for_grid(&aabb),
            options,
        }
    }

    pub fn aabb(&self) -> &AABB<2> {
        self.v.aabb()
    }

    /// Result of the most recent column phase.
    pub fn v(&self) -> &OwnedField<T> {
        &self.v
    }

    /// Advance `u` by one time step.
    /// The row phase starts only once every line of `V` is written.
    pub fn step<U, Obs>(
        &mut self,
        step: usize,
        u: &mut U,
        observer: &mut Obs,
    ) -> Result<()>
    where
        U: FieldView<T>,
        Obs: PhaseObserver<T>,
    {
        profiling::scope!("adi::step");

        // Column phase, U -> V
        {
            profiling::scope!("adi::column_phase");
            self.boundary.pin(&mut self.v);
            sweep(
                &self.column,
                &self.boundary,
                &*u,
                &mut self.v,
                &mut self.arena,
                &self.options,
            )?;
            log::debug!("step {}: column phase done", step);
            observer.phase_complete(step, PhaseKind::Column, &self.v);
        }

        // Row phase, V -> U
        {
            profiling::scope!("adi::row_phase");
            self.boundary.pin(u);
            sweep(
                &self.row,
                &self.boundary,
                &self.v,
                u,
                &mut self.arena,
                &self.options,
            )?;
            log::debug!("step {}: row phase done", step);
            observer.phase_complete(step, PhaseKind::Row, &*u);
        }

        Ok(())
    }
}
