// tests/path_properties_test.rs
use brownian_play::generator::{generate, PathGenerator};
use brownian_play::models::brownian::ArithmeticBrownian;
use brownian_play::rng;
use brownian_play::{PlayError, Sample, SimulationParameters};
use rayon::prelude::*;
use statrs::statistics::Statistics;

#[test]
fn test_structure_for_various_parameters() {
    let cases = [
        (0.0, 1.0, 1000, 10.0),
        (2.5, 0.3, 1, 0.5),
        (-1.0, 4.0, 37, 3.0),
        (0.0, 1.0, 5000, 1.0),
    ];
    for (i, &(mu, sigma, n, k)) in cases.iter().enumerate() {
        let params = SimulationParameters::new(mu, sigma, n, k);
        let path = generate(&params, &mut rng::seeded(i as u64)).expect("valid parameters");

        assert_eq!(path.len(), n + 1);
        assert_eq!(path[0], Sample::new(0.0, 0.0));
        let dt = k / n as f64;
        for (j, s) in path.samples().iter().enumerate() {
            assert_eq!(s.time, j as f64 * dt, "time grid broken at {} for case {}", j, i);
        }
        for pair in path.samples().windows(2) {
            assert!(pair[1].time > pair[0].time);
        }
        assert!((path.final_time() - k).abs() < 1e-9);
    }
}

#[test]
fn test_no_noise_no_drift_is_identically_zero() {
    let params = SimulationParameters::new(0.0, 0.0, 2000, 7.0);
    let path = generate(&params, &mut rng::ambient()).unwrap();
    assert!(path.values().all(|v| v == 0.0));
}

#[test]
fn test_no_noise_is_a_straight_line() {
    let params = SimulationParameters::new(-0.75, 0.0, 400, 4.0);
    let path = generate(&params, &mut rng::ambient()).unwrap();
    for s in path.samples() {
        assert!((s.value - (-0.75 * s.time)).abs() < 1e-9, "{:?}", s);
    }
}

#[test]
fn test_seeded_sources_reproduce_paths() {
    let params = SimulationParameters::default();
    let a = generate(&params, &mut rng::seeded(99)).unwrap();
    let b = generate(&params, &mut rng::seeded(99)).unwrap();
    let c = generate(&params, &mut rng::seeded(100)).unwrap();
    assert_eq!(a.samples(), b.samples());
    assert_ne!(a.samples(), c.samples());
}

#[test]
fn test_invalid_parameters_are_rejected_before_generation() {
    let zero_steps = SimulationParameters::new(0.0, 1.0, 0, 10.0);
    assert!(matches!(
        PathGenerator::new(zero_steps),
        Err(PlayError::InvalidConfiguration { .. })
    ));

    let bad_interval = SimulationParameters::new(0.0, 1.0, 10, 0.0);
    assert!(matches!(
        generate(&bad_interval, &mut rng::seeded(0)),
        Err(PlayError::InvalidParameters { .. })
    ));
}

#[test]
fn test_terminal_moments_match_theory() {
    let mu = 0.5;
    let sigma = 1.5;
    let k = 2.0;
    let params = SimulationParameters::new(mu, sigma, 100, k);
    let generator = PathGenerator::new(params).unwrap();
    let num_paths = 20_000u64;

    let finals: Vec<f64> = (0..num_paths)
        .into_par_iter()
        .map(|i| {
            let path = generator.generate(&mut rng::seeded(42 + i));
            path.last().map(|s| s.value).unwrap_or(f64::NAN)
        })
        .collect();

    let model = ArithmeticBrownian::new(mu, sigma);
    let mean = finals.iter().mean();
    let variance = finals.iter().variance();

    println!("\nterminal mean: {} (expected {})", mean, model.mean_at(k));
    println!("terminal variance: {} (expected {})", variance, model.variance_at(k));

    // ~4 standard errors: sqrt(4.5 / 20000) ≈ 0.015, 4.5 * sqrt(2 / 20000) ≈ 0.045
    assert!(
        (mean - model.mean_at(k)).abs() < 0.06,
        "terminal mean {} too far from {}",
        mean,
        model.mean_at(k)
    );
    assert!(
        (variance - model.variance_at(k)).abs() < 0.2,
        "terminal variance {} too far from {}",
        variance,
        model.variance_at(k)
    );
}

#[test]
fn test_increments_are_independent_of_step_size() {
    // Var(X_k) = σ²k regardless of n for constant coefficients.
    let k = 1.0;
    for &n in &[1usize, 10, 250] {
        let generator = PathGenerator::new(SimulationParameters::new(0.0, 1.0, n, k)).unwrap();
        let finals: Vec<f64> = (0..10_000u64)
            .into_par_iter()
            .map(|i| generator.generate(&mut rng::seeded(7_000 + i))[n].value)
            .collect();
        let variance = finals.iter().variance();
        assert!(
            (variance - 1.0).abs() < 0.08,
            "variance {} with {} steps",
            variance,
            n
        );
    }
}
