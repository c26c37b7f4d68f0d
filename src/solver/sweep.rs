use crate::domain::*;
use crate::error::*;
use crate::solver::*;
use crate::util::*;
use rayon::prelude::*;
use std::ops::Range;

/// How a sweep hands out its lines.
#[derive(Debug)]
pub struct SweepOptions {
    /// Order lines are visited in.
    pub order: Box<dyn LineOrder>,

    /// Run lines on the current rayon pool.
    pub parallel: bool,

    /// Minimum number of lines per rayon task.
    pub lines_per_task: usize,

    /// Chunk size for scattering solved lines into a strided field.
    pub chunk_size: usize,

    /// Pivots with magnitude at or below this are singular.
    pub pivot_epsilon: f64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions {
            order: Box::new(Forward),
            parallel: false,
            lines_per_task: 1,
            chunk_size: 1000,
            pivot_epsilon: f64::EPSILON,
        }
    }
}

/// Thomas elimination for one line.
/// `prev`, `cur` and `next` are the cross field's lines at
/// `line - 1`, `line` and `line + 1` along the same axis.
/// Both ends of the line are pinned to `boundary`,
/// only interior positions are solved for.
#[allow(clippy::too_many_arguments)]
pub fn solve_line<T: FloatTrait>(
    kind: PhaseKind,
    coefficients: &SweepCoefficients<T>,
    boundary: T,
    prev: LineView<'_, T>,
    cur: LineView<'_, T>,
    next: LineView<'_, T>,
    scratch: LineScratch<'_, T>,
    pivot_epsilon: T,
) -> Result<()> {
    let LineScratch { line, p, q, out } = scratch;
    let n = out.len();
    debug_assert!(n >= 3);
    debug_assert!(prev.len() == n && cur.len() == n && next.len() == n);

    let SweepCoefficients {
        lo,
        diag,
        hi,
        neighbor_lo,
        neighbor_hi,
    } = *coefficients;
    let center = T::lit(B2) + T::lit(B1) * neighbor_lo;

    out[0] = boundary;
    p[0] = T::zero();
    q[0] = out[0];

    for j in 1..n - 1 {
        let pivot = lo * p[j - 1] + diag;
        if !pivot.is_finite() || pivot.abs() <= pivot_epsilon {
            return Err(AdiError::Numerical {
                phase: kind,
                line,
                index: j,
                pivot: pivot.as_f64(),
            });
        }
        p[j] = -hi / pivot;
        q[j] = (-neighbor_lo * prev.get(j) + center * cur.get(j)
            - neighbor_hi * next.get(j)
            - lo * q[j - 1])
            / pivot;
    }

    out[n - 1] = boundary;

    for j in (1..n - 1).rev() {
        out[j] = p[j] * out[j + 1] + q[j];
    }

    Ok(())
}

/// Solve every interior line of `out` along the phase's axis,
/// reading right hand sides from `cross`.
/// Boundary lines of `out` are left untouched.
pub fn sweep<T, C, O>(
    phase: &Phase<T>,
    boundary: &DirichletBoundary<T>,
    cross: &C,
    out: &mut O,
    arena: &mut ScratchArena<T>,
    options: &SweepOptions,
) -> Result<()>
where
    T: FloatTrait,
    C: FieldView<T>,
    O: FieldView<T>,
{
    profiling::scope!("adi::sweep");
    let axis = phase.axis();
    let (lines, len) = out.line_shape(axis);
    if cross.aabb() != out.aabb() {
        return Err(AdiError::configuration(format!(
            "cross field bounds {} do not match output bounds {}",
            cross.aabb(),
            out.aabb()
        )));
    }
    if lines < 3 || len < 3 {
        return Err(AdiError::configuration(format!(
            "cannot sweep a {lines} x {len} grid, both sides need an interior point"
        )));
    }
    if arena.lines() != lines || arena.line_len() != len {
        return Err(AdiError::configuration(format!(
            "scratch arena is {} x {}, sweep needs {lines} x {len}",
            arena.lines(),
            arena.line_len()
        )));
    }

    let interior = 1..lines - 1;
    log::trace!(
        "{} sweep over lines {:?} ({:?} order)",
        phase.kind(),
        interior,
        options.order
    );

    if out.lines_contiguous(axis) {
        let tasks = order_tasks(
            arena.line_tasks_into(out.buffer_mut(), interior.clone()),
            options.order.as_ref(),
            interior,
        )?;
        run_tasks(phase, boundary, cross, tasks, options)
    } else {
        let tasks = order_tasks(
            arena.line_tasks(interior.clone()),
            options.order.as_ref(),
            interior.clone(),
        )?;
        run_tasks(phase, boundary, cross, tasks, options)?;
        out.par_write_lines(axis, arena.solution(), interior, options.chunk_size);
        Ok(())
    }
}

fn run_tasks<T: FloatTrait, C: FieldView<T>>(
    phase: &Phase<T>,
    boundary: &DirichletBoundary<T>,
    cross: &C,
    tasks: Vec<LineScratch<'_, T>>,
    options: &SweepOptions,
) -> Result<()> {
    let axis = phase.axis();
    let kind = phase.kind();
    let coefficients = phase.coefficients();
    let value = boundary.value();
    let pivot_epsilon = T::lit(options.pivot_epsilon);

    let solve = |task: LineScratch<'_, T>| {
        let l = task.line;
        solve_line(
            kind,
            coefficients,
            value,
            cross.line(axis, l - 1),
            cross.line(axis, l),
            cross.line(axis, l + 1),
            task,
            pivot_epsilon,
        )
    };

    if options.parallel {
        tasks
            .into_par_iter()
            .with_min_len(options.lines_per_task)
            .try_for_each(solve)
    } else {
        tasks.into_iter().try_for_each(solve)
    }
}

/// Rearrange line sorted tasks into the order a `LineOrder` asks for.
fn order_tasks<'a, T>(
    tasks: Vec<LineScratch<'a, T>>,
    order: &dyn LineOrder,
    lines: Range<usize>,
) -> Result<Vec<LineScratch<'a, T>>> {
    let order = order.order(lines.clone());
    if order.len() != tasks.len() {
        return Err(AdiError::configuration(format!(
            "line order visits {} lines, sweep has {}",
            order.len(),
            tasks.len()
        )));
    }
    let mut slots: Vec<Option<LineScratch<'a, T>>> =
        tasks.into_iter().map(Some).collect();
    order
        .into_iter()
        .map(|line| {
            line.checked_sub(lines.start)
                .and_then(|i| slots.get_mut(i))
                .and_then(Option::take)
                .ok_or_else(|| {
                    AdiError::configuration(format!(
                        "line order is not a permutation of {lines:?}, bad line {line}"
                    ))
                })
        })
        .collect()
}
