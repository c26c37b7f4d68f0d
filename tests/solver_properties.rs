use adi::domain::*;
use adi::initial_conditions::*;
use adi::solver::*;
use adi::util::*;
use adi::AdiError;

fn params(n: usize, tsteps: usize) -> SolverParameters {
    SolverParameters {
        n,
        tsteps,
        ..SolverParameters::default()
    }
}

fn polybench_field(params: &SolverParameters) -> OwnedField<f64> {
    let mut u = OwnedField::new(params.aabb(), params.u_layout);
    generate_ic(&mut u, ICType::Polybench, params.chunk_size);
    u
}

#[test]
fn golden_n5_output() {
    let p = params(5, 1);
    let mut u = polybench_field(&p);
    solve::<f64, _>(&p, &mut u).unwrap();

    let mut out = Vec::new();
    adi::csv::write_rows(&mut out, &u, " ", Some(2)).unwrap();
    let expected = "\
1.00 1.00 1.00 1.00 1.00
1.00 1.01 1.03 1.03 1.00
1.00 0.99 1.00 1.01 1.00
1.00 0.97 0.97 0.99 1.00
1.00 1.00 1.00 1.00 1.00
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);

    let interior = [
        (1, 1, 1.01352538802854),
        (1, 2, 1.026960110041265),
        (2, 1, 0.9934578374992886),
        (2, 2, 1.0),
        (3, 3, 0.9864746119714598),
    ];
    for (r, c, v) in interior {
        float_cmp::assert_approx_eq!(
            f64,
            u.view(&vector![r, c]),
            v,
            epsilon = 1e-12
        );
    }
}

#[test]
fn zero_steps_is_identity() {
    let p = SolverParameters {
        u_layout: Layout::ColumnMajor,
        ..params(9, 0)
    };
    let mut u = OwnedField::<f64>::new(p.aabb(), p.u_layout);
    generate_ic(&mut u, ICType::Rand { seed: 11 }, 7);
    let before = u.clone();
    solve::<f64, _>(&p, &mut u).unwrap();
    assert_eq!(u.buffer(), before.buffer());
}

struct BoundaryCheck {
    phases: Vec<PhaseKind>,
    all_pinned: bool,
}

impl PhaseObserver<f64> for BoundaryCheck {
    fn phase_complete<F: FieldView<f64>>(
        &mut self,
        _step: usize,
        kind: PhaseKind,
        field: &F,
    ) {
        self.phases.push(kind);
        self.all_pinned &= DirichletBoundary::unit().holds(field);
    }
}

#[test]
fn boundary_holds_after_every_phase() {
    for v_layout in [Layout::RowMajor, Layout::ColumnMajor] {
        let p = SolverParameters {
            v_layout,
            threads: 2,
            ..params(10, 5)
        };
        let mut u = OwnedField::<f64>::new(p.aabb(), p.u_layout);
        generate_ic(&mut u, ICType::Impulse { variance: 4.0 }, 13);

        let mut check = BoundaryCheck {
            phases: Vec::new(),
            all_pinned: true,
        };
        let mut driver = TimeStepDriver::new(&p).unwrap();
        driver.run_observed(&mut u, &mut check).unwrap();
        assert!(check.all_pinned);
        assert_eq!(check.phases.len(), 10);
        for pair in check.phases.chunks(2) {
            assert_eq!(pair, &[PhaseKind::Column, PhaseKind::Row]);
        }
    }
}

#[test]
fn repeated_runs_agree() {
    let p = SolverParameters {
        threads: 4,
        lines_per_task: 1,
        traversal: Traversal::Shuffled,
        seed: 3,
        ..params(30, 8)
    };
    let mut first = polybench_field(&p);
    let mut driver = TimeStepDriver::new(&p).unwrap();
    driver.run(&mut first).unwrap();

    let mut second = polybench_field(&p);
    driver.reset();
    driver.run(&mut second).unwrap();
    assert_eq!(first.buffer(), second.buffer());

    let mut serial = polybench_field(&p);
    solve::<f64, _>(&params(30, 8), &mut serial).unwrap();
    assert_eq!(first.buffer(), serial.buffer());
}

#[test]
fn lines_depend_on_adjacent_cross_lines_only() {
    let n = 12;
    let aabb = AABB::square(n);
    let phase = Coefficients::<f64>::derive(n, 4).unwrap().column_phase();
    let boundary = DirichletBoundary::unit();
    let options = SweepOptions::default();

    let mut cross = OwnedField::new(aabb, Layout::RowMajor);
    generate_ic(&mut cross, ICType::Rand { seed: 1 }, 10);
    let mut base = OwnedField::new(aabb, Layout::ColumnMajor);
    let mut arena = ScratchArena::for_grid(&aabb);
    sweep(&phase, &boundary, &cross, &mut base, &mut arena, &options).unwrap();

    // Perturb column 5 of the cross field
    for r in 0..n as i32 {
        let c = vector![r, 5];
        cross.set_coord(&c, cross.view(&c) + 0.5);
    }
    let mut perturbed = OwnedField::new(aabb, Layout::ColumnMajor);
    sweep(&phase, &boundary, &cross, &mut perturbed, &mut arena, &options)
        .unwrap();

    for line in 1..n - 1 {
        let a: Vec<f64> = base.line(Axis::Column, line).iter().collect();
        let b: Vec<f64> = perturbed.line(Axis::Column, line).iter().collect();
        if (4..=6).contains(&line) {
            assert_ne!(a, b, "line {line}");
        } else {
            assert_eq!(a, b, "line {line}");
        }
    }
}

#[test]
fn singular_column_pivot() {
    let n = 6;
    let aabb = AABB::square(n);
    let singular = SweepCoefficients {
        lo: 0.0,
        diag: 0.0,
        hi: 1.0,
        neighbor_lo: 0.0,
        neighbor_hi: 0.0,
    };
    let row = *Coefficients::derive(n, 2).unwrap().row_phase().coefficients();
    let coordinator = PhaseCoordinator::with_coefficients(
        singular,
        row,
        aabb,
        Layout::ColumnMajor,
        SweepOptions::default(),
    );
    let mut driver = TimeStepDriver::from_coordinator(coordinator, 2);
    let mut u = OwnedField::<f64>::new(aabb, Layout::RowMajor);
    generate_ic(&mut u, ICType::Polybench, 8);

    let err = driver.run(&mut u).unwrap_err();
    assert!(err.is_numerical());
    match err {
        AdiError::Numerical {
            phase,
            line,
            index,
            pivot,
        } => {
            assert_eq!(phase, PhaseKind::Column);
            assert_eq!(line, 1);
            assert_eq!(index, 1);
            assert_eq!(pivot, 0.0);
        }
        other => panic!("expected numerical error, got {other}"),
    }
    assert_eq!(driver.state(), DriverState::Stepping { step: 0 });
}

#[test]
fn singular_row_pivot() {
    let n = 5;
    let aabb = AABB::square(n);
    let identity = SweepCoefficients {
        lo: 0.0,
        diag: 1.0,
        hi: 0.0,
        neighbor_lo: 0.0,
        neighbor_hi: 0.0,
    };
    // pivot at index 2 is -1 * -1 + -1 = 0
    let row = SweepCoefficients {
        lo: -1.0,
        diag: -1.0,
        hi: -1.0,
        neighbor_lo: 0.0,
        neighbor_hi: 0.0,
    };
    let options = SweepOptions {
        order: Box::new(Reverse),
        ..SweepOptions::default()
    };
    let coordinator = PhaseCoordinator::with_coefficients(
        identity,
        row,
        aabb,
        Layout::RowMajor,
        options,
    );
    let mut driver = TimeStepDriver::from_coordinator(coordinator, 1);
    let mut u = OwnedField::<f64>::new(aabb, Layout::RowMajor);
    match driver.run(&mut u) {
        Err(AdiError::Numerical {
            phase, line, index, ..
        }) => {
            assert_eq!(phase, PhaseKind::Row);
            assert_eq!(line, 3);
            assert_eq!(index, 2);
        }
        other => panic!("expected numerical error, got {other:?}"),
    }
}

#[test]
fn pivot_epsilon_rejects_small_pivots() {
    // Column pivots start at b = 1 + 50 on this grid
    let p = SolverParameters {
        pivot_epsilon: 100.0,
        ..params(5, 1)
    };
    let mut u = polybench_field(&p);
    let err = solve::<f64, _>(&p, &mut u).unwrap_err();
    assert!(matches!(
        err,
        AdiError::Numerical {
            phase: PhaseKind::Column,
            index: 1,
            ..
        }
    ));
}

#[test]
fn configuration_errors() {
    let bad = [
        (params(2, 1), 3),
        (params(0, 0), 3),
        (params(5, 1), 6),
        (SolverParameters { threads: 0, ..params(5, 1) }, 5),
        (SolverParameters { pivot_epsilon: -1.0, ..params(5, 1) }, 5),
    ];
    for (p, n) in bad {
        let mut u = OwnedField::<f64>::new(AABB::square(n), Layout::RowMajor);
        generate_ic(&mut u, ICType::Rand { seed: 17 }, 4);
        let before = u.buffer().to_vec();
        assert!(matches!(
            solve::<f64, _>(&p, &mut u),
            Err(AdiError::Configuration { .. })
        ));
        assert_eq!(u.buffer(), &before[..]);
    }
    assert!(Coefficients::<f32>::derive(5, 0).is_err());
}

#[test]
fn caller_buffer_matches_owned_field() {
    let p = params(16, 6);
    let mut owned = polybench_field(&p);
    let mut buffer = owned.clone().into_buffer();

    solve::<f64, _>(&p, &mut owned).unwrap();
    {
        let mut borrowed = SliceField::new(p.aabb(), p.u_layout, &mut buffer);
        solve::<f64, _>(&p, &mut borrowed).unwrap();
    }
    assert_eq!(owned.buffer(), &buffer[..]);

    let mut again = polybench_field(&p);
    solve::<f64, _>(&p, &mut again.as_slice_field()).unwrap();
    assert_eq!(again.buffer(), &buffer[..]);
}
