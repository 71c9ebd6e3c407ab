use hazardcore::catalog::HazardId;
use hazardcore::mapping::MapView;
use hazardcore::render::{DetailPanel, Marker, Notice, RenderTarget, SidebarList, StreetView};
use hazardcore::session::ChromeState;
use log::debug;

/// Render target that keeps the latest frame of every capability and a
/// printable transcript of what changed.
#[derive(Debug, Default)]
pub struct ConsoleTarget {
    pub markers: Vec<HazardId>,
    pub list: Vec<HazardId>,
    pub empty_message: Option<String>,
    pub detail: Option<DetailPanel>,
    pub modal: Option<StreetView>,
    pub pinned_label: Option<HazardId>,
    pub notices: Vec<String>,
    pub transcript: Vec<String>,
}

impl ConsoleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, line: String) {
        debug!("{}", line);
        self.transcript.push(line);
    }
}

fn join(ids: &[HazardId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl RenderTarget for ConsoleTarget {
    fn render_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.iter().map(|marker| marker.id).collect();
        self.pinned_label = None;
        let line = format!("[markers] {}", join(&self.markers));
        self.emit(line);
    }

    fn render_list(&mut self, list: &SidebarList) {
        self.list = list.ids();
        self.empty_message = match list {
            SidebarList::Empty { message } => Some(message.clone()),
            SidebarList::Entries(_) => None,
        };
        let line = match &self.empty_message {
            Some(message) => format!("[list] {}", message),
            None => format!("[list] {}", join(&self.list)),
        };
        self.emit(line);
    }

    fn render_detail(&mut self, detail: Option<&DetailPanel>) {
        self.detail = detail.cloned();
        let line = match detail {
            Some(panel) => format!(
                "[detail] {} {} [{}]",
                panel.id,
                panel.name.trim(),
                panel
                    .tags
                    .iter()
                    .map(|tag| tag.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            None => "[detail] hidden".to_string(),
        };
        self.emit(line);
    }

    fn render_modal(&mut self, modal: Option<&StreetView>) {
        self.modal = modal.cloned();
        let line = match modal {
            Some(view) => format!("[street] {} {} ({})", view.id, view.street_name, view.image),
            None => "[street] closed".to_string(),
        };
        self.emit(line);
    }

    fn render_view(&mut self, view: &MapView) {
        let center = view.center();
        self.emit(format!(
            "[view] center ({:.1}, {:.1}) zoom {}",
            center.x,
            center.y,
            view.zoom()
        ));
    }

    fn render_chrome(&mut self, chrome: &ChromeState) {
        self.emit(format!(
            "[chrome] sidebar {} ({}), {}",
            if chrome.sidebar_visible() { "open" } else { "hidden" },
            chrome.sidebar_icon(),
            chrome.fullscreen_label()
        ));
    }

    fn show_notice(&mut self, notice: &Notice) {
        let message = notice.message();
        self.notices.push(message.clone());
        self.emit(format!("[notice] {}", message));
    }

    fn pin_label(&mut self, id: Option<HazardId>) {
        self.pinned_label = id;
        if let Some(id) = id {
            self.emit(format!("[label] {}", id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazardcore::MapController;

    #[test]
    fn console_target_mirrors_initial_render() {
        let mut controller = MapController::default();
        let mut target = ConsoleTarget::new();
        controller.initialize(&mut target);
        assert_eq!(target.markers, controller.visible());
        assert_eq!(target.list, controller.visible());
        assert!(target.transcript.iter().any(|line| line == "[detail] hidden"));
    }

    #[test]
    fn console_target_prints_empty_state() {
        let mut controller = MapController::default();
        let mut target = ConsoleTarget::new();
        controller.search("nothing matches this", &mut target);
        assert_eq!(target.empty_message.as_deref(), Some("No hazards found."));
        assert!(target.list.is_empty());
    }
}
