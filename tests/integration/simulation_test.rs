#![allow(clippy::expect_used)]

use std::sync::Arc;

use chrono::{TimeDelta, Utc};

use seep::application::config::SimulationConfig;
use seep::application::services::SimulatorService;
use seep::domain::simulation::SimulationRun;
use seep::domain::value_objects::{SeriesMode, ValidationError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parametric_config(seed: u64, window_hours: u32) -> SimulationConfig {
    SimulationConfig {
        mode: SeriesMode::Parametric,
        window_hours,
        seed: Some(seed),
        ..SimulationConfig::default()
    }
}

fn counts_of(run: &SimulationRun) -> Vec<u64> {
    run.series.counts().collect()
}

// ---------------------------------------------------------------------------
// Demo mode
// ---------------------------------------------------------------------------

#[test]
fn demo_run_has_the_documented_shape() {
    let anchor = Utc::now();
    let service = SimulatorService::new(SimulationConfig::default());
    let run = service.run_at(anchor).expect("demo run");

    assert_eq!(run.series.len(), 48);
    assert_eq!(run.series.newest().timestamp, anchor);
    assert_eq!(run.series.oldest().timestamp, anchor - TimeDelta::hours(47));

    // fixed pattern figures: calm overnight floor, evening surge of 12
    let counts = counts_of(&run);
    assert_eq!(&counts[..5], &[3, 3, 2, 2, 3]);
    assert_eq!(counts[17], 12);
    assert_eq!(run.summary.max, 12);
    assert_eq!(run.summary.total, 268);
    assert!((run.summary.mean - 268.0 / 48.0).abs() < 1e-12);
    assert_eq!(run.summary.peak_time, anchor - TimeDelta::hours(30));
}

#[test]
fn demo_runs_agree_across_services() {
    let anchor = Utc::now();
    let first = SimulatorService::new(SimulationConfig::default())
        .run_at(anchor)
        .expect("demo run");
    let second = SimulatorService::new(SimulationConfig::default())
        .run_at(anchor)
        .expect("demo run");
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Parametric mode
// ---------------------------------------------------------------------------

#[test]
fn same_seed_reproduces_the_run_across_services() {
    let anchor = Utc::now();
    let first = SimulatorService::new(parametric_config(1234, 48))
        .run_at(anchor)
        .expect("seeded run");
    let second = SimulatorService::new(parametric_config(1234, 48))
        .run_at(anchor)
        .expect("seeded run");
    assert_eq!(first, second);
}

#[test]
fn different_seeds_give_different_series() {
    let anchor = Utc::now();
    let a = SimulatorService::new(parametric_config(1, 48))
        .run_at(anchor)
        .expect("run");
    let b = SimulatorService::new(parametric_config(2, 48))
        .run_at(anchor)
        .expect("run");
    assert_ne!(counts_of(&a), counts_of(&b));
}

#[test]
fn concurrent_runs_match_their_sequential_twins() {
    let anchor = Utc::now();
    let config_a = parametric_config(101, 48);
    let config_b = parametric_config(202, 72);

    let sequential_a = SimulatorService::new(config_a.clone())
        .run_at(anchor)
        .expect("sequential run");
    let sequential_b = SimulatorService::new(config_b.clone())
        .run_at(anchor)
        .expect("sequential run");

    let handle_a = std::thread::spawn(move || {
        SimulatorService::new(config_a)
            .run_at(anchor)
            .expect("parallel run")
    });
    let handle_b = std::thread::spawn(move || {
        SimulatorService::new(config_b)
            .run_at(anchor)
            .expect("parallel run")
    });

    assert_eq!(handle_a.join().expect("join"), sequential_a);
    assert_eq!(handle_b.join().expect("join"), sequential_b);
}

#[test]
fn shared_service_gives_every_caller_the_same_seeded_run() {
    let anchor = Utc::now();
    let service = Arc::new(SimulatorService::new(parametric_config(77, 48)));
    let expected = service.run_at(anchor).expect("reference run");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || service.run_at(anchor).expect("concurrent run"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("join"), expected);
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_parameters_surface_named_errors() {
    let anchor = Utc::now();

    let err = SimulatorService::new(parametric_config(1, 0))
        .run_at(anchor)
        .expect_err("window 0 must fail");
    assert_eq!(err, ValidationError::WindowHours(0));

    let err = SimulatorService::new(parametric_config(1, 169))
        .run_at(anchor)
        .expect_err("window 169 must fail");
    assert_eq!(err, ValidationError::WindowHours(169));

    let mut negative_intensity = parametric_config(1, 48);
    negative_intensity.intensity = -2.0;
    let err = SimulatorService::new(negative_intensity)
        .run_at(anchor)
        .expect_err("negative intensity must fail");
    assert!(matches!(err, ValidationError::Intensity(_)));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn run_serializes_with_summary_and_points() {
    let service = SimulatorService::new(SimulationConfig::default());
    let run = service.run().expect("demo run");
    let value = serde_json::to_value(&run).expect("serialize");

    assert_eq!(value["summary"]["max"], 12);
    assert_eq!(value["summary"]["total"], 268);
    let points = value["series"]["points"].as_array().expect("points array");
    assert_eq!(points.len(), 48);
    assert!(points[0]["timestamp"].is_string());
    assert_eq!(points[0]["count"], 3);
}
