extern crate pretty_env_logger as pel;

use approx::assert_abs_diff_eq;
use belos::prelude::*;
use rstest::*;
use std::f64::consts::PI;

/// The reference throw: (100, 100) toward (1000, 800) with a unit step.
fn reference_config(target_radius: f64) -> SimulationConfig {
    SimulationConfig::builder()
        .start(Vector2::new(100.0, 100.0))
        .target(Vector2::new(1000.0, 800.0))
        .target_radius(target_radius)
        .build()
}

#[rstest]
#[case(-PI)]
#[case(-1.3)]
#[case(0.0)]
#[case(0.661)]
#[case(2.5)]
#[case(PI)]
fn series_error_shrinks_with_n(#[case] angle: f64) {
    let coarse_sin = (series::sin(angle, 5) - angle.sin()).abs();
    let fine_sin = (series::sin(angle, 30) - angle.sin()).abs();
    assert!(
        fine_sin <= coarse_sin,
        "sin({angle}): error grew from {coarse_sin:.3e} to {fine_sin:.3e}"
    );
    assert!(fine_sin < 1e-12);

    let coarse_cos = (series::cos(angle, 5) - angle.cos()).abs();
    let fine_cos = (series::cos(angle, 30) - angle.cos()).abs();
    assert!(fine_cos <= coarse_cos);
    assert!(fine_cos < 1e-12);
}

#[rstest]
#[case(0.5, 2.0)]
#[case(0.5, -2.0)]
#[case(-0.5, 2.0)]
#[case(-0.5, -2.0)]
#[case(700.0, 900.0)]
fn atan2_matches_std_in_all_quadrants(#[case] y: f64, #[case] x: f64) {
    assert_abs_diff_eq!(series::atan2(y, x, 30), y.atan2(x), epsilon = 1e-3);
}

#[test]
fn atan2_axis_cases() {
    assert_abs_diff_eq!(series::atan2(3.0, 0.0, 30), PI / 2.0);
    assert_abs_diff_eq!(series::atan2(-3.0, 0.0, 30), -PI / 2.0);
    assert_abs_diff_eq!(series::atan2(0.0, 2.0, 30), 0.0);
    assert_abs_diff_eq!(series::atan2(0.0, -2.0, 30), PI);
}

#[test]
fn simulation_is_deterministic() {
    let cfg = reference_config(4.0);
    for n in [1, 3, 6, 15, 30] {
        assert_eq!(cfg.simulate(n), cfg.simulate(n));
    }
}

#[test]
fn golden_scenario_radius_four() {
    let _ = pel::try_init();

    let cfg = reference_config(4.0);
    let result = PrecisionSearch::default().find_minimal_n(&cfg).unwrap();

    assert_eq!(result.minimal_n, 6, "bisection settles on six terms");
    assert_eq!(result.simulations, 5);
    assert_eq!(result.total_iterations, 23411);
    assert_abs_diff_eq!(result.final_distance, 3.860348, epsilon = 1e-5);
}

#[test]
fn search_honors_call_budget_and_bounds() {
    let bounds = SearchBounds::default();
    let budget = f64::from(bounds.span()).log2().ceil() as usize + 1;
    let search = PrecisionSearch::bisection(bounds);

    for radius in [0.5, 1.0, 4.0, 7.5, 10.0] {
        let result = search.find_minimal_n(&reference_config(radius)).unwrap();
        assert!(result.simulations <= budget);
        assert!(result.minimal_n >= bounds.low_n);
        assert!(result.minimal_n <= bounds.high_n);
    }
}

#[test]
fn malformed_bounds_fail_fast() {
    assert!(SearchBounds::new(7, 2).is_err());

    let search = PrecisionSearch {
        bounds: SearchBounds {
            low_n: 7,
            high_n: 2,
        },
        strategy: Strategy::Bisection,
    };
    let err = search.find_minimal_n(&reference_config(4.0)).unwrap_err();
    assert_eq!(
        err,
        SearchError::InvalidBounds {
            low_n: 7,
            high_n: 2
        }
    );
}

#[test]
fn exhausted_search_returns_sentinel() {
    // Radius 4 misses for every term count in [2, 5]
    let bounds = SearchBounds::new(2, 5).unwrap();
    let cfg = reference_config(4.0);

    for search in [PrecisionSearch::bisection(bounds), PrecisionSearch::linear(bounds)] {
        let result = search.find_minimal_n(&cfg).unwrap();
        assert_eq!(result.minimal_n, bounds.high_n);
        assert!(!cfg.simulate(result.minimal_n).hit);
    }
}

#[test]
fn predicate_is_not_monotonic_in_n() {
    let cfg = reference_config(4.0);

    // The witness: one term hits, the next four miss, six and up hit again
    assert!(cfg.simulate(1).hit);
    for n in 2..=5 {
        assert!(!cfg.simulate(n).hit, "n = {n} should miss");
    }
    assert!(cfg.simulate(6).hit);

    // So the two strategies legitimately disagree on the same scenario
    let linear = PrecisionSearch::linear(SearchBounds::default())
        .find_minimal_n(&cfg)
        .unwrap();
    let bisection = PrecisionSearch::bisection(SearchBounds::default())
        .find_minimal_n(&cfg)
        .unwrap();
    assert_eq!(linear.minimal_n, 1);
    assert_eq!(bisection.minimal_n, 6);
}

#[test]
fn flight_path_ends_inside_radius() {
    let cfg = reference_config(4.0);
    let result = cfg.simulate(10);
    assert!(result.hit);

    let path = cfg.flight_path(10);
    assert_eq!(path.len(), result.iterations + 1);
    assert_eq!(path[0], cfg.start);
    assert!(cfg.distance_to_target(path.last().unwrap()) <= cfg.target_radius);
}
