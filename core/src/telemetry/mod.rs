pub mod log;
pub mod metrics;

pub use self::log::{EventLog, SessionEvent};
pub use metrics::{InteractionMetrics, MetricsSnapshot};
