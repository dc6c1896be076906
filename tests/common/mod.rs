//! Shared recording fakes for integration testing.

use std::sync::Mutex;

use telemetry_sim::sink::{LogRecord, LogSink, MetricSink, SinkError};

/// Metric sink that records every write for later assertions.
#[derive(Default)]
pub struct RecordingMetricSink {
    pub counters: Mutex<Vec<(String, Vec<(String, String)>)>>,
    pub histograms: Mutex<Vec<(String, f64)>>,
    pub gauges: Mutex<Vec<(String, f64)>>,
}

#[allow(dead_code)]
impl RecordingMetricSink {
    /// Number of increments recorded against a counter.
    pub fn counter_count(&self, name: &str) -> usize {
        self.counters
            .lock()
            .unwrap()
            .iter()
            .filter(|(counter, _)| counter == name)
            .count()
    }

    /// Label sets recorded against a counter, in order.
    pub fn counter_labels(&self, name: &str) -> Vec<Vec<(String, String)>> {
        self.counters
            .lock()
            .unwrap()
            .iter()
            .filter(|(counter, _)| counter == name)
            .map(|(_, labels)| labels.clone())
            .collect()
    }

    pub fn histogram_values(&self, name: &str) -> Vec<f64> {
        self.histograms
            .lock()
            .unwrap()
            .iter()
            .filter(|(histogram, _)| histogram == name)
            .map(|(_, value)| *value)
            .collect()
    }

    pub fn gauge_values(&self, name: &str) -> Vec<f64> {
        self.gauges
            .lock()
            .unwrap()
            .iter()
            .filter(|(gauge, _)| gauge == name)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl MetricSink for RecordingMetricSink {
    fn increment_counter(
        &self,
        name: &'static str,
        labels: &[(&'static str, &'static str)],
    ) -> Result<(), SinkError> {
        let labels = labels
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        self.counters.lock().unwrap().push((name.to_string(), labels));
        Ok(())
    }

    fn observe_histogram(&self, name: &'static str, value: f64) -> Result<(), SinkError> {
        self.histograms.lock().unwrap().push((name.to_string(), value));
        Ok(())
    }

    fn set_gauge(&self, name: &'static str, value: f64) -> Result<(), SinkError> {
        self.gauges.lock().unwrap().push((name.to_string(), value));
        Ok(())
    }
}

/// Log sink that captures every record.
#[derive(Default)]
pub struct RecordingLogSink {
    pub records: Mutex<Vec<LogRecord>>,
}

impl LogSink for RecordingLogSink {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Look up a structured field on a captured record.
#[allow(dead_code)]
pub fn field<'a>(record: &'a LogRecord, key: &str) -> Option<&'a serde_json::Value> {
    record
        .fields
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value)
}
