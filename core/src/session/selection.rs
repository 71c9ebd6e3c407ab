use crate::catalog::HazardId;

/// Which hazard, if any, the detail panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(HazardId),
}

impl Selection {
    pub fn id(&self) -> Option<HazardId> {
        match self {
            Self::Unselected => None,
            Self::Selected(id) => Some(*id),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}
