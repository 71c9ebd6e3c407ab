use hazardcore::telemetry::MetricsSnapshot;
use serde::Serialize;

/// Outcome of one replayed session, written to the report as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub name: String,
    pub steps_run: usize,
    pub rejected: usize,
    pub visible: Vec<u32>,
    pub selection: Option<u32>,
    pub viewer_open: bool,
    pub metrics: MetricsSnapshot,
    #[serde(skip)]
    pub transcript: Vec<String>,
}

impl SessionSummary {
    pub fn headline(&self) -> String {
        format!(
            "{} -> {} steps ({} rejected), visible {:?}, selection {}, recomputes {}, selections {}",
            self.name,
            self.steps_run,
            self.rejected,
            self.visible,
            self.selection
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "none".into()),
            self.metrics.recomputes,
            self.metrics.selections
        )
    }
}
