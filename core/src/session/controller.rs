use super::chrome::{ChromeState, DeferredResize};
use super::selection::Selection;
use crate::catalog::{Catalog, HazardId, HazardRecord};
use crate::config::MapConfig;
use crate::filtering::{compute_visible, CategoryFilter, Criterion, SearchQuery};
use crate::mapping::{MapView, Viewport};
use crate::prelude::{MapError, MapResult};
use crate::render::{DetailPanel, Marker, Notice, RenderTarget, SidebarList, StreetView};
use crate::telemetry::{EventLog, InteractionMetrics, MetricsSnapshot, SessionEvent};
use std::path::Path;
use std::time::Duration;

/// Sole owner of the catalog, the visible subset, the selection and the map
/// view. Every user action goes through one of its `&mut self` methods and
/// publishes its visible effects to a [`RenderTarget`].
pub struct MapController {
    catalog: Catalog,
    active_category: CategoryFilter,
    criterion: Criterion,
    visible: Vec<HazardId>,
    markers: Vec<Marker>,
    list: SidebarList,
    selection: Selection,
    viewer_open: bool,
    pinned_label: Option<HazardId>,
    view: MapView,
    chrome: ChromeState,
    select_zoom: i32,
    resize_delay: Duration,
    log: EventLog,
    metrics: InteractionMetrics,
}

impl MapController {
    pub fn new(catalog: Catalog, config: &MapConfig) -> Self {
        let mut controller = Self {
            catalog,
            active_category: CategoryFilter::All,
            criterion: Criterion::default(),
            visible: Vec::new(),
            markers: Vec::new(),
            list: SidebarList::Entries(Vec::new()),
            selection: Selection::Unselected,
            viewer_open: false,
            pinned_label: None,
            view: config.map_view(),
            chrome: ChromeState::default(),
            select_zoom: config.select_zoom,
            resize_delay: config.resize_delay(),
            log: EventLog::new(),
            metrics: InteractionMetrics::new(),
        };
        controller.derive_subset();
        controller
    }

    /// Publishes the initial state: the whole catalog, nothing selected.
    pub fn initialize(&mut self, target: &mut impl RenderTarget) {
        self.refresh(target);
        target.render_view(&self.view);
        target.render_chrome(&self.chrome);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    pub fn visible(&self) -> &[HazardId] {
        &self.visible
    }

    pub fn visible_records(&self) -> Vec<&HazardRecord> {
        compute_visible(&self.catalog, &self.criterion)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn list(&self) -> &SidebarList {
        &self.list
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_record(&self) -> Option<&HazardRecord> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    pub fn is_viewer_open(&self) -> bool {
        self.viewer_open
    }

    pub fn pinned_label(&self) -> Option<HazardId> {
        self.pinned_label
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Activates a category control and shows its subset.
    pub fn filter_by_category(&mut self, filter: CategoryFilter, target: &mut impl RenderTarget) {
        self.active_category = filter.clone();
        self.criterion = Criterion::Category(filter);
        self.refresh(target);
    }

    /// Runs a text search. A blank query falls back to the active category
    /// control rather than to `all`.
    pub fn search(&mut self, raw: &str, target: &mut impl RenderTarget) {
        self.criterion = match SearchQuery::parse(raw) {
            Some(query) => Criterion::Search(query),
            None => Criterion::Category(self.active_category.clone()),
        };
        self.refresh(target);
    }

    /// Selection from a marker click.
    pub fn select(&mut self, id: HazardId, target: &mut impl RenderTarget) -> MapResult<()> {
        let record = self.catalog.get(id).ok_or(MapError::UnknownHazard(id))?;
        if !self.visible.contains(&id) {
            return Err(MapError::NotVisible(id));
        }
        let panel = DetailPanel::from_record(record);
        let center = record.map_point();

        self.selection = Selection::Selected(id);
        target.render_detail(Some(&panel));
        self.view.set_view(center, self.select_zoom);
        target.render_view(&self.view);
        if self.pinned_label.take().is_some() {
            target.pin_label(None);
        }

        self.metrics.record_selection();
        self.log.record(&SessionEvent::Selected(id));
        Ok(())
    }

    /// Selection from a sidebar entry; also pins the marker's name label.
    pub fn select_from_list(
        &mut self,
        id: HazardId,
        target: &mut impl RenderTarget,
    ) -> MapResult<()> {
        self.select(id, target)?;
        self.pinned_label = Some(id);
        target.pin_label(Some(id));
        Ok(())
    }

    /// Explicit close control of the detail panel. Clicks elsewhere on the
    /// page never reach this.
    pub fn close_detail(&mut self, target: &mut impl RenderTarget) {
        self.selection = Selection::Unselected;
        target.render_detail(None);
        self.log.record(&SessionEvent::Deselected);
        if self.viewer_open {
            self.close_street_view(target);
        }
    }

    /// Opens the street-level viewer for the selection. Returns `false`
    /// and changes nothing when no hazard is selected.
    pub fn open_street_view(&mut self, target: &mut impl RenderTarget) -> bool {
        let Some(record) = self.selected_record() else {
            self.metrics.record_ignored();
            self.log.record(&SessionEvent::ViewerIgnored);
            return false;
        };
        let modal = StreetView::from_record(record);
        let id = record.id;

        self.viewer_open = true;
        target.render_modal(Some(&modal));
        self.metrics.record_viewer_open();
        self.log.record(&SessionEvent::ViewerOpened(id));
        true
    }

    /// Close control of the viewer. The selection is left as it was.
    pub fn close_street_view(&mut self, target: &mut impl RenderTarget) {
        if !self.viewer_open {
            return;
        }
        self.viewer_open = false;
        target.render_modal(None);
        self.log.record(&SessionEvent::ViewerClosed);
    }

    /// Click on the backdrop around the viewer content.
    pub fn dismiss_street_view(&mut self, target: &mut impl RenderTarget) {
        self.close_street_view(target);
    }

    pub fn zoom_in(&mut self, target: &mut impl RenderTarget) -> bool {
        let changed = self.view.zoom_in();
        target.render_view(&self.view);
        changed
    }

    pub fn zoom_out(&mut self, target: &mut impl RenderTarget) -> bool {
        let changed = self.view.zoom_out();
        target.render_view(&self.view);
        changed
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32, target: &mut impl RenderTarget) {
        self.view.pan_by(dx, dy);
        target.render_view(&self.view);
    }

    /// First measurement of the map area: fit the whole image.
    pub fn fit_to(&mut self, viewport: Viewport, target: &mut impl RenderTarget) {
        self.view.invalidate_size(viewport);
        self.view.fit_bounds();
        target.render_view(&self.view);
    }

    pub fn invalidate_size(&mut self, viewport: Viewport, target: &mut impl RenderTarget) {
        self.view.invalidate_size(viewport);
        target.render_view(&self.view);
    }

    pub fn toggle_sidebar(&mut self, target: &mut impl RenderTarget) {
        self.chrome.toggle_sidebar();
        target.render_chrome(&self.chrome);
    }

    /// Flips full-screen mode. The caller fires the returned resize once,
    /// after its delay, through [`MapController::invalidate_size`].
    pub fn toggle_fullscreen(&mut self, target: &mut impl RenderTarget) -> DeferredResize {
        self.chrome.toggle_fullscreen();
        target.render_chrome(&self.chrome);
        DeferredResize {
            delay: self.resize_delay,
        }
    }

    pub fn locate_me(&self, target: &mut impl RenderTarget) {
        target.show_notice(&Notice::LocateUnavailable);
    }

    pub fn report_hazard(&self, target: &mut impl RenderTarget) {
        target.show_notice(&Notice::ReportUnavailable);
    }

    pub fn report_background_failure(
        &self,
        path: &Path,
        error: &MapError,
        target: &mut impl RenderTarget,
    ) {
        let reason = error.to_string();
        self.log.record(&SessionEvent::BackgroundFailed(&reason));
        target.show_notice(&Notice::BackgroundUnavailable {
            path: path.to_path_buf(),
        });
    }

    fn derive_subset(&mut self) {
        let records = compute_visible(&self.catalog, &self.criterion);
        self.visible = records.iter().map(|record| record.id).collect();
        self.markers = records.iter().map(|record| Marker::from_record(record)).collect();
        self.list = SidebarList::build(records);
    }

    /// Recomputes the subset and replaces markers and list; the detail
    /// panel and the viewer are hidden and the selection cleared.
    fn refresh(&mut self, target: &mut impl RenderTarget) {
        self.derive_subset();
        self.pinned_label = None;
        target.render_markers(&self.markers);
        target.render_list(&self.list);

        self.selection = Selection::Unselected;
        target.render_detail(None);
        self.viewer_open = false;
        target.render_modal(None);

        self.metrics.record_recompute();
        self.log.record(&SessionEvent::Recomputed {
            criterion: &self.criterion,
            visible: self.visible.len(),
        });
    }
}

impl Default for MapController {
    fn default() -> Self {
        Self::new(Catalog::builtin(), &MapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::mapping::MapPoint;
    use crate::render::TagChip;

    /// Captures the latest call for each capability.
    #[derive(Default)]
    struct Recorder {
        markers: Option<Vec<HazardId>>,
        list: Option<SidebarList>,
        detail: Option<Option<DetailPanel>>,
        modal: Option<Option<StreetView>>,
        view: Option<(MapPoint, i32)>,
        chrome: Option<ChromeState>,
        notices: Vec<Notice>,
        label: Option<Option<HazardId>>,
        calls: usize,
    }

    impl RenderTarget for Recorder {
        fn render_markers(&mut self, markers: &[Marker]) {
            self.calls += 1;
            self.markers = Some(markers.iter().map(|marker| marker.id).collect());
            self.label = None;
        }

        fn render_list(&mut self, list: &SidebarList) {
            self.calls += 1;
            self.list = Some(list.clone());
        }

        fn render_detail(&mut self, detail: Option<&DetailPanel>) {
            self.calls += 1;
            self.detail = Some(detail.cloned());
        }

        fn render_modal(&mut self, modal: Option<&StreetView>) {
            self.calls += 1;
            self.modal = Some(modal.cloned());
        }

        fn render_view(&mut self, view: &MapView) {
            self.calls += 1;
            self.view = Some((view.center(), view.zoom()));
        }

        fn render_chrome(&mut self, chrome: &ChromeState) {
            self.calls += 1;
            self.chrome = Some(*chrome);
        }

        fn show_notice(&mut self, notice: &Notice) {
            self.calls += 1;
            self.notices.push(notice.clone());
        }

        fn pin_label(&mut self, id: Option<HazardId>) {
            self.calls += 1;
            self.label = Some(id);
        }
    }

    fn ids(values: &[u32]) -> Vec<HazardId> {
        values.iter().copied().map(HazardId).collect()
    }

    fn booted() -> (MapController, Recorder) {
        let mut controller = MapController::default();
        let mut target = Recorder::default();
        controller.initialize(&mut target);
        (controller, target)
    }

    #[test]
    fn initialize_shows_everything_unselected() {
        let (controller, target) = booted();
        assert_eq!(controller.visible(), ids(&[1, 2, 3, 4, 5]).as_slice());
        assert_eq!(target.markers, Some(ids(&[1, 2, 3, 4, 5])));
        assert_eq!(target.list.unwrap().ids(), ids(&[1, 2, 3, 4, 5]));
        assert_eq!(target.detail, Some(None));
        assert_eq!(controller.selection(), Selection::Unselected);
    }

    #[test]
    fn flood_filter_yields_section_two() {
        let (mut controller, mut target) = booted();
        controller.filter_by_category(CategoryFilter::Only(Category::Flood), &mut target);
        assert_eq!(controller.visible(), ids(&[2]).as_slice());
        assert_eq!(target.markers, Some(ids(&[2])));
    }

    #[test]
    fn blank_search_reverts_to_active_category() {
        let (mut controller, mut target) = booted();
        controller.filter_by_category(CategoryFilter::from_name("fire"), &mut target);
        controller.search("erosion", &mut target);
        assert_eq!(controller.visible(), ids(&[5]).as_slice());
        assert_eq!(controller.active_category(), &CategoryFilter::Only(Category::Fire));

        controller.search("   ", &mut target);
        assert_eq!(controller.visible(), ids(&[1]).as_slice());
        assert_eq!(target.list.unwrap().ids(), ids(&[1]));
    }

    #[test]
    fn tag_only_search_shows_tagged_hazard() {
        let (mut controller, mut target) = booted();
        controller.search("accessibility", &mut target);
        assert_eq!(controller.visible(), ids(&[2]).as_slice());
        assert_eq!(target.markers, Some(ids(&[2])));
        assert_eq!(target.list.unwrap().ids(), ids(&[2]));
    }

    #[test]
    fn empty_result_renders_empty_state() {
        let (mut controller, mut target) = booted();
        controller.search("volcano", &mut target);
        assert!(controller.visible().is_empty());
        assert_eq!(target.markers, Some(Vec::new()));
        assert!(matches!(target.list, Some(SidebarList::Empty { .. })));
    }

    #[test]
    fn selecting_populates_detail_and_recenters() {
        let (mut controller, mut target) = booted();
        controller.select(HazardId(3), &mut target).unwrap();

        let detail = target.detail.clone().flatten().unwrap();
        let record = controller.catalog().get(HazardId(3)).unwrap().clone();
        assert_eq!(detail.name, record.name);
        assert_eq!(detail.address, record.address);
        let tags: Vec<TagChip> = record.tags.iter().map(TagChip::new).collect();
        assert_eq!(detail.tags, tags);
        assert_eq!(target.view, Some((record.map_point(), 1)));
        assert_eq!(controller.selection(), Selection::Selected(HazardId(3)));
    }

    #[test]
    fn reselecting_replaces_detail_directly() {
        let (mut controller, mut target) = booted();
        controller.select(HazardId(1), &mut target).unwrap();
        controller.select(HazardId(4), &mut target).unwrap();
        assert_eq!(target.detail.flatten().unwrap().id, HazardId(4));
        assert_eq!(controller.selection(), Selection::Selected(HazardId(4)));
    }

    #[test]
    fn refilter_clears_selection_and_hides_detail() {
        let (mut controller, mut target) = booted();
        controller.select(HazardId(2), &mut target).unwrap();
        controller.filter_by_category(CategoryFilter::Only(Category::Flood), &mut target);
        assert_eq!(controller.selection(), Selection::Unselected);
        assert_eq!(target.detail, Some(None));

        controller.select(HazardId(2), &mut target).unwrap();
        controller.search("flood", &mut target);
        assert_eq!(controller.selection(), Selection::Unselected);
        assert_eq!(target.detail, Some(None));
    }

    #[test]
    fn selecting_hidden_or_unknown_hazard_is_rejected() {
        let (mut controller, mut target) = booted();
        controller.filter_by_category(CategoryFilter::Only(Category::Road), &mut target);
        let calls = target.calls;
        assert!(matches!(
            controller.select(HazardId(1), &mut target),
            Err(MapError::NotVisible(HazardId(1)))
        ));
        assert!(matches!(
            controller.select(HazardId(42), &mut target),
            Err(MapError::UnknownHazard(HazardId(42)))
        ));
        assert_eq!(target.calls, calls);
        assert_eq!(controller.selection(), Selection::Unselected);
    }

    #[test]
    fn close_detail_does_not_recenter() {
        let (mut controller, mut target) = booted();
        controller.select(HazardId(5), &mut target).unwrap();
        let view = target.view;
        controller.close_detail(&mut target);
        assert_eq!(target.detail, Some(None));
        assert_eq!(target.view, view);
        assert_eq!(controller.selection(), Selection::Unselected);
    }

    #[test]
    fn street_view_without_selection_is_noop() {
        let (mut controller, mut target) = booted();
        let calls = target.calls;
        assert!(!controller.open_street_view(&mut target));
        assert_eq!(target.calls, calls);
        assert!(!controller.is_viewer_open());
        assert_eq!(controller.metrics().ignored, 1);
    }

    #[test]
    fn closing_viewer_keeps_selection() {
        let (mut controller, mut target) = booted();
        controller.select(HazardId(4), &mut target).unwrap();
        assert!(controller.open_street_view(&mut target));
        let modal = target.modal.clone().flatten().unwrap();
        assert_eq!(modal.street_name, "Mountain Path, Palayan Road");
        assert_eq!(modal.image, "img/4.jpeg");

        controller.dismiss_street_view(&mut target);
        assert_eq!(target.modal, Some(None));
        assert_eq!(controller.selection(), Selection::Selected(HazardId(4)));
    }

    #[test]
    fn refilter_also_closes_viewer() {
        let (mut controller, mut target) = booted();
        controller.select(HazardId(1), &mut target).unwrap();
        controller.open_street_view(&mut target);
        controller.filter_by_category(CategoryFilter::All, &mut target);
        assert!(!controller.is_viewer_open());
        assert_eq!(target.modal, Some(None));
    }

    #[test]
    fn list_selection_pins_label_until_next_marker_click() {
        let (mut controller, mut target) = booted();
        controller.select_from_list(HazardId(2), &mut target).unwrap();
        assert_eq!(controller.pinned_label(), Some(HazardId(2)));
        assert_eq!(target.label, Some(Some(HazardId(2))));

        controller.select(HazardId(3), &mut target).unwrap();
        assert_eq!(controller.pinned_label(), None);
        assert_eq!(target.label, Some(None));
    }

    #[test]
    fn fullscreen_returns_one_deferred_resize() {
        let (mut controller, mut target) = booted();
        let resize = controller.toggle_fullscreen(&mut target);
        assert_eq!(resize.delay, Duration::from_millis(300));
        assert!(!target.chrome.unwrap().sidebar_visible());
        controller.invalidate_size(Viewport::new(1200.0, 800.0), &mut target);
        assert_eq!(controller.view().viewport(), Viewport::new(1200.0, 800.0));
    }

    #[test]
    fn stub_actions_only_notify() {
        let (controller, mut target) = booted();
        controller.locate_me(&mut target);
        controller.report_hazard(&mut target);
        assert_eq!(
            target.notices,
            vec![Notice::LocateUnavailable, Notice::ReportUnavailable]
        );
        assert_eq!(controller.visible().len(), 5);
    }

    #[test]
    fn zoom_controls_leave_data_alone() {
        let (mut controller, mut target) = booted();
        controller.fit_to(Viewport::new(1025.0, 775.0), &mut target);
        assert_eq!(controller.view().zoom(), -2);
        assert!(controller.zoom_in(&mut target));
        assert_eq!(target.view.unwrap().1, -1);
        assert!(controller.zoom_out(&mut target));
        assert!(!controller.zoom_out(&mut target));
        assert_eq!(controller.view().zoom(), -2);
        assert_eq!(controller.visible().len(), 5);
    }
}
