use sdesolve_core::{integrate, NoiseGenerator, SolveOptions, State};
use sdesolve_models::{BrownianMotion, OrnsteinUhlenbeck};

fn sample_mean_var(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var)
}

#[test]
fn wiener_increments_have_variance_dt() {
    // alfa = 0, beta = 1, dt = 1, N = 1000
    let alfa = |_t: f64, x: &State| State::zeros(x.dim());
    let beta = |_t: f64, x: &State| State(x.0.map(|_| 1.0));
    let opts = SolveOptions::new()
        .with_initial_state(vec![0.0])
        .with_step_size(1.0)
        .with_step_count(1000);
    let mut rng = NoiseGenerator::new(42);

    let path = integrate(Some(&alfa), Some(&beta), &opts, Some(&mut rng)).unwrap();
    let increments = path.increments(0);
    let (mean, var) = sample_mean_var(&increments);

    println!("Wiener increments: mean {:.4}, var {:.4} (expected 0, 1)", mean, var);
    assert_eq!(increments.len(), 999);
    // sd of the sample variance is sqrt(2/999) ~ 0.045
    assert!((var - 1.0).abs() < 0.15, "increment variance {} too far from dt", var);
    assert!(mean.abs() < 4.0 / (999f64).sqrt(), "increment mean {} too large", mean);
}

#[test]
fn brownian_terminal_moments() {
    let n_paths = 4000;
    let dt = 1e-2;
    let opts = SolveOptions::new()
        .with_initial_state(vec![0.0])
        .with_step_size(dt)
        .with_step_count(101);
    let bm = BrownianMotion::new(0.8);
    let t_final = opts.final_time();

    let finals: Vec<f64> = (0..n_paths)
        .map(|path_id| {
            let mut rng = NoiseGenerator::from_path_id(42, path_id as u64);
            let path = integrate(Some(&bm), Some(&bm), &opts, Some(&mut rng)).unwrap();
            path.final_state().unwrap()[0]
        })
        .collect();
    let (mean, var) = sample_mean_var(&finals);

    let expected_var = bm.exact_variance(t_final);
    let stderr = (expected_var / n_paths as f64).sqrt();
    println!("BM: mean {:.5}, var {:.5} (expected {:.5})", mean, var, expected_var);

    assert!(mean.abs() < 4.0 * stderr, "mean {} exceeds 4 standard errors", mean);
    assert!((var - expected_var).abs() / expected_var < 0.1, "variance {} vs {}", var, expected_var);
}

#[test]
fn ou_terminal_moments() {
    let ou = OrnsteinUhlenbeck::new(2.0, 0.5, 1.0);
    let x0 = 2.0;
    let n_paths = 4000;
    let opts = SolveOptions::new()
        .with_initial_state(vec![x0])
        .with_step_size(1e-2)
        .with_step_count(101);
    let t_final = opts.final_time();

    let finals: Vec<f64> = (0..n_paths)
        .map(|path_id| {
            let mut rng = NoiseGenerator::from_path_id(11, path_id as u64);
            let path = integrate(Some(&ou), Some(&ou), &opts, Some(&mut rng)).unwrap();
            path.final_state().unwrap()[0]
        })
        .collect();
    let (mean, var) = sample_mean_var(&finals);

    let expected_mean = ou.exact_mean(x0, t_final);
    let expected_var = ou.exact_variance(t_final);
    let stderr = (expected_var / n_paths as f64).sqrt();
    println!("OU: mean {:.5} (expected {:.5}), var {:.5} (expected {:.5}, stationary {:.5})",
             mean, expected_mean, var, expected_var, ou.stationary_variance());

    // 0.01 absorbs the O(dt) discretisation bias of the mean.
    assert!((mean - expected_mean).abs() < 4.0 * stderr + 0.01, "mean {} vs {}", mean, expected_mean);
    assert!((var - expected_var).abs() / expected_var < 0.1, "variance {} vs {}", var, expected_var);
}
