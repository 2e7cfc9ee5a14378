#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

// ============================================================================
// Captures emitted events so tests can assert on log output
// ============================================================================

#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub level: Level,
    pub step: Option<String>,
}

#[derive(Clone, Default)]
pub struct LogRecorder {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl LogRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == Level::ERROR)
            .cloned()
            .collect()
    }
}

struct StepVisitor(Option<String>);

impl Visit for StepVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "step" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

impl<S: Subscriber> Layer<S> for LogRecorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = StepVisitor(None);
        event.record(&mut visitor);
        self.events.lock().unwrap().push(RecordedEvent {
            level: *event.metadata().level(),
            step: visitor.0,
        });
    }
}
