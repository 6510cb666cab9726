// Estimate pi by rejection sampling. Points are drawn from a 2-by-2 square
// with a perfectly inscribed circle, and the ratio of the areas gives pi:
//
//  A_circle      pi * r^2    pi         # in circle
// ----------  =  -------- = ----  => 4 ------------- ~= pi
//  A_square      4 * r^2      4         # in square
//
use mcpi::prelude::*;
use std::f64::consts::PI;

fn main() {
    // Fixed seed so every run of this example prints the same numbers
    let mut sim = Simulation::seeded(42);

    let run = sim.run(1_000_000).unwrap();
    let est = run.estimate();
    let (lower, upper) = est.confidence_interval(0.95).unwrap();

    println!(
        "π_est: {}, π_true: {}, absolute error: {}",
        est.pi_estimate(),
        PI,
        est.abs_error()
    );
    println!(
        "standard error: {}, 95% interval: [{}, {}]",
        est.std_error(),
        lower,
        upper
    );

    // Watch the theoretical interval shrink as 1/sqrt(n)
    let report = sim
        .analyze_convergence(&[100, 1_000, 10_000, 100_000], 0.95)
        .unwrap();

    for pt in report.iter() {
        println!(
            "n = {:>7}: {:.5} ± {:.5}",
            pt.n_samples(),
            pt.estimate(),
            pt.ci_width() / 2.0
        );
    }
}
