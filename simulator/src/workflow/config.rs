use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One user interaction replayed against the controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Category control by name, `all` included.
    Filter(String),
    Search(String),
    /// Marker click.
    Select(u32),
    /// Sidebar entry click.
    SelectFromList(u32),
    CloseDetail,
    OpenStreetView,
    CloseStreetView,
    ClickBackdrop,
    ZoomIn,
    ZoomOut,
    ToggleSidebar,
    ToggleFullscreen,
    LocateMe,
    ReportHazard,
    /// Fails the session unless exactly these ids are visible, in order.
    ExpectVisible(Vec<u32>),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub name: Option<String>,
    /// Data-carrying steps are written as one-key maps (`- filter: flood`).
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

impl SessionScript {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading session script {}", path_ref.display()))?;
        let script: SessionScript = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing session script {}", path_ref.display()))?;
        Ok(script)
    }

    /// Walkthrough used when no script is given: filter, search, fall back
    /// to the active category, then select and open the street view.
    pub fn walkthrough() -> Self {
        Self {
            name: Some("walkthrough".into()),
            steps: vec![
                Step::ExpectVisible(vec![1, 2, 3, 4, 5]),
                Step::Filter("flood".into()),
                Step::ExpectVisible(vec![2]),
                Step::Search("erosion".into()),
                Step::ExpectVisible(vec![5]),
                Step::Filter("fire".into()),
                Step::Search(String::new()),
                Step::ExpectVisible(vec![1]),
                Step::OpenStreetView,
                Step::SelectFromList(1),
                Step::OpenStreetView,
                Step::ClickBackdrop,
                Step::CloseDetail,
                Step::Filter("all".into()),
                Step::ExpectVisible(vec![1, 2, 3, 4, 5]),
            ],
        }
    }
}
