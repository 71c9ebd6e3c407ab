use std::path::PathBuf;

/// Short user-facing message, shown as an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LocateUnavailable,
    ReportUnavailable,
    BackgroundUnavailable { path: PathBuf },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::LocateUnavailable => {
                "Location feature would use coordinates relative to your custom map".into()
            }
            Self::ReportUnavailable => "Hazard reporting feature would open here".into(),
            Self::BackgroundUnavailable { path } => format!(
                "Custom map image failed to load. Please check the image path ({}).",
                path.display()
            ),
        }
    }
}
