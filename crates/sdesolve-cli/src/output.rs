use sdesolve_core::{Path, Time};
use serde::Serialize;

/// Plotter-facing form of a solved path: the time grid plus one series per
/// state component.
#[derive(Clone, Debug, Serialize)]
pub struct TrajectoryRecord {
    pub model: String,
    pub scheme: String,
    pub times: Vec<Time>,
    pub series: Vec<Vec<f64>>,
}

impl TrajectoryRecord {
    pub fn new(model: &str, scheme: &str, path: &Path) -> Self {
        Self {
            model: model.to_string(),
            scheme: scheme.to_string(),
            times: path.times.clone(),
            series: (0..path.dim()).map(|i| path.component(i)).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PathSummary {
    pub rows: usize,
    pub dim: usize,
    pub final_time: Option<Time>,
    pub final_state: Vec<f64>,
    pub min: Vec<f64>,
    pub max: Vec<f64>,
    pub increment_variance: Vec<f64>,
    pub finite: bool,
}

impl PathSummary {
    pub fn of(path: &Path) -> Self {
        let dim = path.dim();
        let column_fold = |init: f64, f: fn(f64, f64) -> f64| -> Vec<f64> {
            (0..dim)
                .map(|i| path.states.column(i).iter().copied().fold(init, f))
                .collect()
        };
        Self {
            rows: path.len(),
            dim,
            final_time: path.final_time(),
            final_state: path
                .final_state()
                .map(|s| s.iter().copied().collect())
                .unwrap_or_default(),
            min: column_fold(f64::INFINITY, f64::min),
            max: column_fold(f64::NEG_INFINITY, f64::max),
            increment_variance: (0..dim).map(|i| sample_variance(&path.increments(i))).collect(),
            finite: path.is_finite(),
        }
    }
}

fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdesolve_core::{integrate, SolveOptions, State};

    fn ramp() -> Path {
        let drift = |_t: f64, x: &State| State(x.0.map(|_| 1.0));
        let diffusion = |_t: f64, x: &State| State::zeros(x.dim());
        let opts = SolveOptions::new()
            .with_initial_state(vec![0.0, 5.0])
            .with_step_size(0.5)
            .with_step_count(5)
            .with_seed(1);
        integrate(Some(&drift), Some(&diffusion), &opts, None).unwrap()
    }

    #[test]
    fn test_record_has_one_series_per_component() {
        let record = TrajectoryRecord::new("ramp", "srk", &ramp());
        assert_eq!(record.times.len(), 5);
        assert_eq!(record.series.len(), 2);
        assert_eq!(record.series[1][0], 5.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["series"][0].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_summary() {
        let summary = PathSummary::of(&ramp());
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.final_time, Some(2.0));
        assert_eq!(summary.final_state, vec![2.0, 7.0]);
        assert_eq!(summary.min, vec![0.0, 5.0]);
        assert_eq!(summary.max, vec![2.0, 7.0]);
        assert!(summary.increment_variance.iter().all(|v| v.abs() < 1e-20));
        assert!(summary.finite);
    }
}
