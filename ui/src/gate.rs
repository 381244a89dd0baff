//! Switches the whole view between the loading indicator and the dashboard.

use api::Backend;
use dioxus_logger::tracing::info;

/// Asks the backend whether it is ready, fresh on every call.
///
/// The last answer is remembered only to log transitions; it is never
/// returned in place of a fresh query.
#[derive(Debug, Default)]
pub struct LivenessGate {
    last_seen: Option<bool>,
}

impl LivenessGate {
    pub fn is_ready<B: Backend + ?Sized>(&mut self, backend: &B) -> bool {
        let ready = backend.is_running();
        if self.last_seen != Some(ready) {
            if ready {
                info!("backend is ready");
            } else {
                info!("waiting for backend");
            }
            self.last_seen = Some(ready);
        }
        ready
    }
}
