use crate::catalog::HazardId;
use crate::filtering::Criterion;
use log::{debug, error, info};

/// Interaction events worth a log line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent<'a> {
    Recomputed {
        criterion: &'a Criterion,
        visible: usize,
    },
    Selected(HazardId),
    Deselected,
    ViewerOpened(HazardId),
    ViewerClosed,
    ViewerIgnored,
    BackgroundFailed(&'a str),
}

pub struct EventLog;

impl EventLog {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, event: &SessionEvent<'_>) {
        match event {
            SessionEvent::Recomputed { criterion, visible } => {
                info!("visible subset {} -> {} hazards", criterion, visible)
            }
            SessionEvent::Selected(id) => info!("selected hazard {}", id),
            SessionEvent::Deselected => debug!("selection cleared"),
            SessionEvent::ViewerOpened(id) => info!("street view opened for {}", id),
            SessionEvent::ViewerClosed => debug!("street view closed"),
            SessionEvent::ViewerIgnored => debug!("street view requested without a selection"),
            SessionEvent::BackgroundFailed(reason) => {
                error!("Custom map image failed to load: {}", reason)
            }
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
