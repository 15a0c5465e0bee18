use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`. Every event carries the component that
/// emitted it so category and product traffic can be filtered apart.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "inventory", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "inventory", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "inventory", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "inventory", component = self.component, "{}", message);
    }
}
