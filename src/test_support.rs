//! Shared test helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Counts events at WARN or above.
#[derive(Clone, Default)]
struct DiagnosticCounter {
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for DiagnosticCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() <= Level::WARN {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` under a scoped subscriber and return its result along with the
/// number of warning/error events it emitted.
pub fn count_diagnostics<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let counter = DiagnosticCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.count.load(Ordering::SeqCst))
}
