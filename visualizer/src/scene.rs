use hazardcore::catalog::HazardId;
use hazardcore::mapping::MapView;
use hazardcore::render::{DetailPanel, Marker, Notice, RenderTarget, SidebarList, StreetView};
use hazardcore::session::ChromeState;

/// Retained copy of everything the controller asked to display; the iced
/// view function reads it every frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub list: SidebarList,
    pub detail: Option<DetailPanel>,
    pub modal: Option<StreetView>,
    pub view: MapView,
    pub chrome: ChromeState,
    pub pinned_label: Option<HazardId>,
    pub notice: Option<String>,
}

impl Scene {
    pub fn new(view: MapView) -> Self {
        Self {
            markers: Vec::new(),
            list: SidebarList::Entries(Vec::new()),
            detail: None,
            modal: None,
            view,
            chrome: ChromeState::default(),
            pinned_label: None,
            notice: None,
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl RenderTarget for Scene {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
        self.pinned_label = None;
    }

    fn render_list(&mut self, list: &SidebarList) {
        self.list = list.clone();
    }

    fn render_detail(&mut self, detail: Option<&DetailPanel>) {
        self.detail = detail.cloned();
    }

    fn render_modal(&mut self, modal: Option<&StreetView>) {
        self.modal = modal.cloned();
    }

    fn render_view(&mut self, view: &MapView) {
        self.view = view.clone();
    }

    fn render_chrome(&mut self, chrome: &ChromeState) {
        self.chrome = *chrome;
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notice = Some(notice.message());
    }

    fn pin_label(&mut self, id: Option<HazardId>) {
        self.pinned_label = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazardcore::MapController;

    #[test]
    fn scene_tracks_controller_output() {
        let mut controller = MapController::default();
        let mut scene = Scene::new(controller.view().clone());
        controller.initialize(&mut scene);
        assert_eq!(scene.markers.len(), 5);

        controller
            .select_from_list(hazardcore::HazardId(2), &mut scene)
            .unwrap();
        assert_eq!(scene.pinned_label, Some(hazardcore::HazardId(2)));
        assert_eq!(scene.view.zoom(), 1);

        controller.search("erosion", &mut scene);
        assert_eq!(scene.pinned_label, None);
        assert!(scene.detail.is_none());
        assert_eq!(scene.markers.len(), 1);
    }

    #[test]
    fn stub_notice_can_be_dismissed() {
        let controller = MapController::default();
        let mut scene = Scene::new(controller.view().clone());
        controller.report_hazard(&mut scene);
        assert_eq!(
            scene.notice.as_deref(),
            Some("Hazard reporting feature would open here")
        );
        scene.dismiss_notice();
        assert!(scene.notice.is_none());
    }
}
