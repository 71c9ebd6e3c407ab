use serde::Serialize;

/// Running interaction counters for one controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionMetrics {
    recomputes: usize,
    selections: usize,
    viewer_opens: usize,
    ignored: usize,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub recomputes: usize,
    pub selections: usize,
    pub viewer_opens: usize,
    pub ignored: usize,
}

impl InteractionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_recompute(&mut self) {
        self.recomputes += 1;
    }

    pub fn record_selection(&mut self) {
        self.selections += 1;
    }

    pub fn record_viewer_open(&mut self) {
        self.viewer_opens += 1;
    }

    /// Counts requests that were accepted but had nothing to act on.
    pub fn record_ignored(&mut self) {
        self.ignored += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            recomputes: self.recomputes,
            selections: self.selections,
            viewer_opens: self.viewer_opens,
            ignored: self.ignored,
        }
    }
}
