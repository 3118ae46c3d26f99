#![allow(clippy::expect_used)]

use std::path::PathBuf;

use chrono::Utc;

use seep::application::config::AppConfig;
use seep::application::services::SimulatorService;
use seep::domain::entities::MachineProfile;
use seep::domain::ports::Assistant;
use seep::domain::value_objects::SeriesMode;
use seep::infrastructure::assistant::create_assistant;

// ---------------------------------------------------------------------------
// Fixture loader
// ---------------------------------------------------------------------------

fn fixture_path(name: &str) -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_fixture() -> AppConfig {
    AppConfig::load_from(&fixture_path("config_custom.toml")).expect("load fixture")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn fixture_config_drives_a_reproducible_simulation() {
    let config = load_fixture();

    assert_eq!(config.simulation.mode, SeriesMode::Parametric);
    assert_eq!(config.simulation.window_hours, 24);
    assert_eq!(config.simulation.seed, Some(9));

    let anchor = Utc::now();
    let first = SimulatorService::new(config.simulation.clone())
        .run_at(anchor)
        .expect("first run");
    let second = SimulatorService::new(config.simulation)
        .run_at(anchor)
        .expect("second run");

    assert_eq!(first, second);
    assert_eq!(first.series.len(), 24);
}

#[test]
fn partial_machine_section_merges_with_demo_defaults() {
    let config = load_fixture();
    let profile = MachineProfile::from(&config.machine);

    // overridden by the file
    assert_eq!(profile.machine_id, "C7719");
    // untouched fields keep the demo dataset
    assert_eq!(profile.company, "Reply");
    assert_eq!(profile.ticket, "TKT-092311");
    assert_eq!(profile.parts.len(), 3);
}

#[test]
fn fixture_round_trips_through_save_and_load() {
    let config = load_fixture();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    config.save_to(&path).expect("save");

    let reloaded = AppConfig::load_from(&path).expect("reload");
    assert_eq!(reloaded.simulation.mode, config.simulation.mode);
    assert_eq!(reloaded.simulation.seed, config.simulation.seed);
    assert!((reloaded.simulation.intensity - config.simulation.intensity).abs() < f64::EPSILON);
    assert_eq!(reloaded.machine.machine_id, config.machine.machine_id);
    assert_eq!(reloaded.dashboard.tick_ms, config.dashboard.tick_ms);
}

#[tokio::test]
async fn fixture_assistant_stays_offline_end_to_end() {
    let config = load_fixture();
    assert!(!config.assistant.enabled);

    let assistant = create_assistant(&config.assistant);
    let run = SimulatorService::new(config.simulation.clone())
        .run()
        .expect("run");
    let reply = assistant
        .reply(
            &run.summary,
            &MachineProfile::from(&config.machine),
            "status?",
        )
        .await
        .expect("reply");
    assert!(reply.is_none());
}
