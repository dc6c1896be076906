//! Web traffic simulation.
//!
//! # Responsibilities
//! - Drive the event generator forever, one request per cycle
//! - Record request count, latency, errors, and the active-user gauge
//! - Exit cleanly on the shutdown signal
//!
//! # Design Decisions
//! - Telemetry emission is best-effort: a failed sink write is logged
//!   and the loop continues; the next cycle naturally re-emits
//! - No locks are held across the sleep

use rand::Rng;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::TrafficConfig;
use crate::event::generator::EventGenerator;
use crate::event::types::RequestEvent;
use crate::sink::metrics::{self, MetricSink};

/// Infinite loop that records synthetic request metrics.
pub struct TrafficSimulator<R: Rng, M: MetricSink> {
    generator: EventGenerator<R>,
    sink: M,
    config: TrafficConfig,
}

impl<R: Rng, M: MetricSink> TrafficSimulator<R, M> {
    pub fn new(generator: EventGenerator<R>, sink: M, config: TrafficConfig) -> Self {
        Self {
            generator,
            sink,
            config,
        }
    }

    /// Run until the shutdown signal fires.
    ///
    /// Cancellation is observed within one sleep interval.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!("Traffic simulator starting");

        loop {
            let event = self.generator.next_request_event();
            let active_users = self.generator.next_active_users();
            self.record(&event, active_users);

            let pause = self.generator.next_interval(self.config.pause);
            tokio::select! {
                _ = time::sleep(pause) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Traffic simulator received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    fn record(&self, event: &RequestEvent, active_users: u64) {
        if let Err(error) = self.sink.increment_counter(
            metrics::REQUESTS_TOTAL,
            &[
                ("method", event.method.as_str()),
                ("endpoint", event.endpoint.as_str()),
            ],
        ) {
            tracing::warn!(%error, "Failed to record request counter");
        }

        if let Err(error) = self
            .sink
            .observe_histogram(metrics::REQUEST_DURATION_SECONDS, event.total_latency_secs())
        {
            tracing::warn!(%error, "Failed to record request latency");
        }

        if let Some(kind) = event.error {
            if let Err(error) = self
                .sink
                .increment_counter(metrics::ERRORS_TOTAL, &[("error_type", kind.as_str())])
            {
                tracing::warn!(%error, "Failed to record error counter");
            }
        }

        if let Err(error) = self
            .sink
            .set_gauge(metrics::ACTIVE_USERS, active_users as f64)
        {
            tracing::warn!(%error, "Failed to record active-user gauge");
        }
    }
}
