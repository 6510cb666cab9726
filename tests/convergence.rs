use mcpi::prelude::*;
use std::f64::consts::PI;

const SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

#[test]
fn z_score_at_95_percent() {
    let report = analyze_convergence(&SIZES, 0.95, Some(0)).unwrap();
    assert::close(report.z_score(), 1.959_964, 1E-4);
}

#[test]
fn ci_width_strictly_decreases_with_n() {
    let report = analyze_convergence(&SIZES, 0.95, Some(1)).unwrap();
    let widths = report.ci_widths();
    assert!(widths.windows(2).all(|w| w[0] > w[1]));

    // each tenfold increase in n shrinks the width by sqrt(10)
    for w in widths.windows(2) {
        assert::close(w[0] / w[1], 10_f64.sqrt(), 1E-9);
    }
}

#[test]
fn bounds_bracket_every_estimate() {
    let report = analyze_convergence(&SIZES, 0.99, None).unwrap();
    assert_eq!(report.len(), SIZES.len());
    assert_eq!(report.estimates().len(), SIZES.len());
    assert_eq!(report.lower_bounds().len(), SIZES.len());
    assert_eq!(report.upper_bounds().len(), SIZES.len());

    for i in 0..report.len() {
        let est = report.estimates()[i];
        let lower = report.lower_bounds()[i];
        let upper = report.upper_bounds()[i];
        assert!(lower <= est && est <= upper);
        assert::close(report.ci_widths()[i], 2.0 * (upper - est), 1E-9);
        assert::close(report.ci_widths()[i], upper - lower, 1E-9);
    }
}

#[test]
fn absolute_error_shrinks_on_average() {
    // average over many seeds so the comparison is not at the mercy of a
    // single lucky draw at small n
    let n_reps = 40;
    let mean_abs_error = |n: usize| {
        (0..n_reps)
            .map(|seed| {
                run_simulation(n, 1.0, Some(seed))
                    .unwrap()
                    .estimate()
                    .abs_error()
            })
            .sum::<f64>()
            / n_reps as f64
    };

    let small = mean_abs_error(100);
    let large = mean_abs_error(10_000);
    assert!(large < small, "{} !< {}", large, small);
}

#[test]
fn interval_coverage_is_near_nominal() {
    let mut sim = Simulation::seeded(2024);
    let sizes = vec![2_000; 400];
    let report = sim.analyze_convergence(&sizes, 0.95).unwrap();

    let covered = report.iter().filter(|pt| pt.covers(PI)).count();
    let coverage = covered as f64 / sizes.len() as f64;
    // binomial sd of the coverage is about 0.011
    assert!((0.9..=0.99).contains(&coverage), "coverage: {}", coverage);
}

#[test]
fn batch_seed_resets_once() {
    let a = analyze_convergence(&[500, 500], 0.95, Some(77)).unwrap();
    let b = analyze_convergence(&[500, 500], 0.95, Some(77)).unwrap();
    assert_eq!(a, b);

    // the second entry continues the stream rather than reseeding
    let first = run_simulation(500, 1.0, Some(77)).unwrap();
    assert_eq!(a.estimates()[0], first.estimate().pi_estimate());
}

#[test]
fn invalid_inputs() {
    assert!(matches!(
        run_simulation(0, 1.0, Some(0)),
        Err(EstimatorError::InvalidSampleCount { n: 0 })
    ));
    assert!(matches!(
        run_simulation(10, 0.0, Some(0)),
        Err(EstimatorError::InvalidRadius { .. })
    ));
    assert!(matches!(
        analyze_convergence(&SIZES, 1.0, Some(0)),
        Err(EstimatorError::InvalidConfidenceLevel { .. })
    ));
    assert!(matches!(
        analyze_convergence(&SIZES, 0.0, Some(0)),
        Err(EstimatorError::InvalidConfidenceLevel { .. })
    ));
    assert!(matches!(
        analyze_convergence(&[], 0.95, Some(0)),
        Err(EstimatorError::NoSampleSizes)
    ));
}

#[test]
fn per_run_and_theoretical_std_errors_differ() {
    let run = run_simulation(1_000, 1.0, Some(5)).unwrap();
    let est = run.estimate();
    let empirical = est.std_error();
    let expected = (est.pi_estimate() * (4.0 - est.pi_estimate()) / 1_000.0)
        .sqrt();
    assert::close(empirical, expected, 1E-12);

    let theoretical = mcpi::convergence::theoretical_std_error(1_000);
    assert::close(theoretical, (PI * (4.0 - PI) / 1_000.0).sqrt(), 1E-12);
}
