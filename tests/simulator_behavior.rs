//! Behavioral tests for the simulator loops.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use telemetry_sim::config::{ActionsConfig, Range, TrafficConfig};
use telemetry_sim::event::EventGenerator;
use telemetry_sim::lifecycle::Shutdown;
use telemetry_sim::sim::{ActionSimulator, TrafficSimulator};
use telemetry_sim::sink::metrics::{
    ACTIVE_USERS, ERRORS_TOTAL, REQUESTS_TOTAL, REQUEST_DURATION_SECONDS,
};
use telemetry_sim::sink::LogLevel;

mod common;
use common::{field, RecordingLogSink, RecordingMetricSink};

fn fast_traffic() -> TrafficConfig {
    let mut config = TrafficConfig::default();
    config.pause = Range::new(0.01, 0.02);
    config
}

fn fast_actions() -> ActionsConfig {
    let mut config = ActionsConfig::default();
    config.pause = Range::new(0.01, 0.02);
    config
}

#[tokio::test]
async fn traffic_loop_records_all_metrics_each_cycle() {
    let traffic = fast_traffic();
    let sink = Arc::new(RecordingMetricSink::default());
    let generator = EventGenerator::new(
        StdRng::seed_from_u64(9),
        traffic.clone(),
        ActionsConfig::default(),
    );
    let simulator = TrafficSimulator::new(generator, sink.clone(), traffic);

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(simulator.run(shutdown.subscribe()));
    tokio::time::sleep(Duration::from_millis(300)).await;
    shutdown.trigger();
    handle.await.unwrap();

    let cycles = sink.counter_count(REQUESTS_TOTAL);
    assert!(cycles > 0, "loop should have completed at least one cycle");
    assert_eq!(sink.histogram_values(REQUEST_DURATION_SECONDS).len(), cycles);
    assert_eq!(sink.gauge_values(ACTIVE_USERS).len(), cycles);

    for labels in sink.counter_labels(REQUESTS_TOTAL) {
        let keys: Vec<&str> = labels.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["method", "endpoint"]);
    }
    for value in sink.gauge_values(ACTIVE_USERS) {
        assert!(value >= 0.0);
    }
    for value in sink.histogram_values(REQUEST_DURATION_SECONDS) {
        assert!(value >= 0.1);
    }
}

#[tokio::test]
async fn forced_errors_increment_error_counter_once_per_cycle() {
    // An all-zero RNG stream trips every probability threshold, so every
    // cycle errors and always lands on the first error kind.
    let traffic = fast_traffic();
    let sink = Arc::new(RecordingMetricSink::default());
    let generator = EventGenerator::new(
        StepRng::new(0, 0),
        traffic.clone(),
        ActionsConfig::default(),
    );
    let simulator = TrafficSimulator::new(generator, sink.clone(), traffic);

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(simulator.run(shutdown.subscribe()));
    tokio::time::sleep(Duration::from_millis(300)).await;
    shutdown.trigger();
    handle.await.unwrap();

    let cycles = sink.counter_count(REQUESTS_TOTAL);
    assert!(cycles > 0);
    assert_eq!(sink.counter_count(ERRORS_TOTAL), cycles);
    for labels in sink.counter_labels(ERRORS_TOTAL) {
        assert_eq!(labels, [("error_type".to_string(), "timeout".to_string())]);
    }
}

#[tokio::test]
async fn errored_actions_emit_paired_records() {
    let mut actions = fast_actions();
    actions.error_probability = 1.0;
    let sink = Arc::new(RecordingLogSink::default());
    let generator = EventGenerator::new(
        StdRng::seed_from_u64(21),
        TrafficConfig::default(),
        actions.clone(),
    );
    let simulator = ActionSimulator::new(generator, sink.clone(), actions);

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(simulator.run(shutdown.subscribe()));
    tokio::time::sleep(Duration::from_millis(300)).await;
    shutdown.trigger();
    handle.await.unwrap();

    let records = sink.records.lock().unwrap();
    assert!(!records.is_empty());
    assert_eq!(records.len() % 2, 0, "every action should log an INFO/ERROR pair");

    for pair in records.chunks(2) {
        let info = &pair[0];
        let error = &pair[1];

        assert_eq!(info.level, LogLevel::Info);
        assert!(info.message.starts_with("User action: "));
        assert!(field(info, "user_id").unwrap().as_str().unwrap().starts_with("user_"));
        assert!(field(info, "request_id").unwrap().as_str().unwrap().starts_with("req_"));
        assert!(field(info, "duration").unwrap().as_f64().unwrap() >= 0.1);

        assert_eq!(error.level, LogLevel::Error);
        assert!(error.message.starts_with("Error during "));
        assert_eq!(field(error, "error_type").unwrap(), "timeout");
        // Both records describe the same action.
        assert_eq!(field(info, "request_id"), field(error, "request_id"));
    }
}

#[tokio::test]
async fn traffic_loop_stops_within_one_max_sleep_interval() {
    let mut traffic = fast_traffic();
    traffic.pause = Range::new(0.2, 0.4);
    let sink = Arc::new(RecordingMetricSink::default());
    let generator = EventGenerator::new(
        StdRng::seed_from_u64(5),
        traffic.clone(),
        ActionsConfig::default(),
    );
    let simulator = TrafficSimulator::new(generator, sink.clone(), traffic);

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(simulator.run(shutdown.subscribe()));
    tokio::time::sleep(Duration::from_millis(50)).await;

    shutdown.trigger();
    // Must observe cancellation within one sleep interval (max 400ms).
    tokio::time::timeout(Duration::from_millis(600), handle)
        .await
        .expect("loop did not stop within one sleep interval")
        .unwrap();

    let cycles_at_stop = sink.counter_count(REQUESTS_TOTAL);
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(
        sink.counter_count(REQUESTS_TOTAL),
        cycles_at_stop,
        "no new events after the loop stopped"
    );
}
