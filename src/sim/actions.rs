//! User action simulation.
//!
//! # Responsibilities
//! - Drive the event generator forever, one user action per cycle
//! - Emit an INFO record per action, plus an ERROR record when the
//!   action failed
//! - Exit cleanly on the shutdown signal

use rand::Rng;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::ActionsConfig;
use crate::event::generator::EventGenerator;
use crate::event::types::ActionEvent;
use crate::sink::logs::{LogRecord, LogSink};

/// Infinite loop that emits synthetic structured log records.
pub struct ActionSimulator<R: Rng, L: LogSink> {
    generator: EventGenerator<R>,
    sink: L,
    config: ActionsConfig,
}

impl<R: Rng, L: LogSink> ActionSimulator<R, L> {
    pub fn new(generator: EventGenerator<R>, sink: L, config: ActionsConfig) -> Self {
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
        tracing::info!("Action simulator starting");

        loop {
            let event = self.generator.next_action_event();
            self.log(&event);

            let pause = self.generator.next_interval(self.config.pause);
            tokio::select! {
                _ = time::sleep(pause) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Action simulator received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    fn log(&self, event: &ActionEvent) {
        let record = LogRecord::info(format!("User action: {}", event.action.as_str()))
            .field("user_id", event.user_id.as_str())
            .field("request_id", event.request_id.as_str())
            .field("duration", event.duration_secs)
            .field("action", event.action.as_str());

        if let Err(error) = self.sink.emit(&record) {
            tracing::warn!(%error, "Failed to emit action record");
        }

        if let Some(error_type) = event.error_type {
            let record = LogRecord::error(format!("Error during {}", event.action.as_str()))
                .field("user_id", event.user_id.as_str())
                .field("request_id", event.request_id.as_str())
                .field("error_type", error_type)
                .field("action", event.action.as_str());

            if let Err(error) = self.sink.emit(&record) {
                tracing::warn!(%error, "Failed to emit action error record");
            }
        }
    }
}
