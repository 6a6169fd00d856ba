use sdesolve_core::{
    integrate_with, EulerMaruyama, NoiseGenerator, SdeIntegrator, SolveOptions, State,
    StochasticRungeKutta,
};
use sdesolve_models::GeometricBrownianMotion;

/// Mean absolute error at T against the exact GBM solution driven by the
/// same Brownian increments.
fn strong_error(
    scheme: &dyn SdeIntegrator,
    gbm: &GeometricBrownianMotion,
    dt: f64,
    n_steps: usize,
    n_paths: usize,
) -> f64 {
    let x0 = 1.0;
    let opts = SolveOptions::new()
        .with_initial_state(vec![x0])
        .with_step_size(dt)
        .with_step_count(n_steps);
    let t_final = opts.final_time();

    let mut total = 0.0;
    for path_id in 0..n_paths {
        let mut rng = NoiseGenerator::from_path_id(7, path_id as u64);
        let mut w_t = 0.0;
        let mut recording = |x: &State, dt: f64| {
            let dw = rng.generate_dw(x.dim(), dt.sqrt());
            w_t += dw[0];
            dw
        };
        let path =
            integrate_with(scheme, Some(gbm), Some(gbm), &opts, Some(&mut recording)).unwrap();
        let numeric = path.final_state().unwrap()[0];
        total += (numeric - gbm.exact_solution(x0, t_final, w_t)).abs();
    }
    total / n_paths as f64
}

#[test]
fn runge_kutta_beats_euler_maruyama_pathwise() {
    let gbm = GeometricBrownianMotion::new(0.5, 1.0);
    let dt = 1.0 / 256.0;
    let n_steps = 257; // T = 1

    let srk = strong_error(&StochasticRungeKutta, &gbm, dt, n_steps, 400);
    let em = strong_error(&EulerMaruyama, &gbm, dt, n_steps, 400);

    println!("strong error at dt={}: SRK {:.5}, EM {:.5}", dt, srk, em);
    assert!(srk < 0.5 * em, "SRK error {} not clearly below EM error {}", srk, em);
}

#[test]
fn runge_kutta_error_shrinks_linearly() {
    let gbm = GeometricBrownianMotion::new(0.5, 1.0);

    let coarse = strong_error(&StochasticRungeKutta, &gbm, 1.0 / 64.0, 65, 400);
    let fine = strong_error(&StochasticRungeKutta, &gbm, 1.0 / 512.0, 513, 400);

    println!("SRK strong error: dt=1/64 {:.5}, dt=1/512 {:.5}", coarse, fine);
    // Order 1 predicts a factor of 8, order 0.5 only ~2.8.
    assert!(coarse / fine > 4.0, "error ratio {} too small for order 1", coarse / fine);
}
