use crate::domain::*;
use crate::error::*;
use crate::solver::*;
use crate::util::*;

/// Where a driver is in its run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Stepping { step: usize },
    Done,
}

/// Marches `U` through `tsteps` ADI steps, strictly one after another.
pub struct TimeStepDriver<T> {
    aabb: AABB<2>,
    tsteps: usize,
    state: DriverState,
    coordinator: Option<PhaseCoordinator<T>>,
    pool: Option<rayon::ThreadPool>,
}

impl<T: FloatTrait> TimeStepDriver<T> {
    /// Validate parameters and set up everything a run needs.
    /// With `tsteps == 0` no coefficients are derived, the run is the identity.
    pub fn new(params: &SolverParameters) -> Result<Self> {
        params.validate()?;
        let aabb = params.aabb();
        let coordinator = if params.tsteps == 0 {
            None
        } else {
            let coefficients = Coefficients::derive(params.n, params.tsteps)?;
            Some(PhaseCoordinator::new(
                &coefficients,
                aabb,
                params.v_layout,
                params.sweep_options(),
            ))
        };

        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        if params.threads > available {
            log::warn!(
                "{} threads requested, only {} available",
                params.threads,
                available
            );
        }

        let pool = if params.threads > 1 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(params.threads)
                .thread_name(|i| format!("adi_thread_{}", i))
                .build()
                .map_err(|e| {
                    AdiError::configuration(format!(
                        "failed to build thread pool: {e}"
                    ))
                })?;
            Some(pool)
        } else {
            None
        };

        Ok(TimeStepDriver {
            aabb,
            tsteps: params.tsteps,
            state: DriverState::Idle,
            coordinator,
            pool,
        })
    }

    /// Driver around a prepared coordinator, on the calling thread.
    pub fn from_coordinator(coordinator: PhaseCoordinator<T>, tsteps: usize) -> Self {
        TimeStepDriver {
            aabb: *coordinator.aabb(),
            tsteps,
            state: DriverState::Idle,
            coordinator: Some(coordinator),
            pool: None,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn tsteps(&self) -> usize {
        self.tsteps
    }

    /// Return to `Idle` so the driver can run another field.
    pub fn reset(&mut self) {
        self.state = DriverState::Idle;
    }

    pub fn run<U: FieldView<T> + Send>(&mut self, u: &mut U) -> Result<()> {
        self.run_observed(u, &mut ())
    }

    /// Like `run`, reporting each completed phase to `observer`.
    pub fn run_observed<U, Obs>(
        &mut self,
        u: &mut U,
        observer: &mut Obs,
    ) -> Result<()>
    where
        U: FieldView<T> + Send,
        Obs: PhaseObserver<T> + Send,
    {
        if self.state != DriverState::Idle {
            return Err(AdiError::configuration(format!(
                "driver is {:?}, reset it before running again",
                self.state
            )));
        }
        if *u.aabb() != self.aabb {
            return Err(AdiError::configuration(format!(
                "field bounds {} do not match solver bounds {}",
                u.aabb(),
                self.aabb
            )));
        }

        profiling::scope!("adi::run");
        let TimeStepDriver {
            tsteps,
            state,
            coordinator,
            pool,
            ..
        } = self;
        let tsteps = *tsteps;
        match pool {
            Some(pool) => pool.install(|| {
                march(coordinator.as_mut(), state, tsteps, u, observer)
            }),
            None => march(coordinator.as_mut(), state, tsteps, u, observer),
        }
    }
}

fn march<T, U, Obs>(
    coordinator: Option<&mut PhaseCoordinator<T>>,
    state: &mut DriverState,
    tsteps: usize,
    u: &mut U,
    observer: &mut Obs,
) -> Result<()>
where
    T: FloatTrait,
    U: FieldView<T>,
    Obs: PhaseObserver<T>,
{
    if let Some(coordinator) = coordinator {
        for step in 0..tsteps {
            *state = DriverState::Stepping { step };
            log::debug!("step {}/{}", step + 1, tsteps);
            coordinator.step(step, u, observer)?;
        }
    }
    *state = DriverState::Done;
    Ok(())
}

/// Run a full solve over `u` with a fresh driver.
pub fn solve<T, U>(params: &SolverParameters, u: &mut U) -> Result<()>
where
    T: FloatTrait,
    U: FieldView<T> + Send,
{
    TimeStepDriver::new(params)?.run(u)
}
