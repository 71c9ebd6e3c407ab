use crate::console::model::SessionSummary;
use crate::console::target::ConsoleTarget;
use crate::workflow::config::Step;
use anyhow::{ensure, Context};
use hazardcore::catalog::{Catalog, HazardId};
use hazardcore::filtering::CategoryFilter;
use hazardcore::{MapConfig, MapController, MapError};
use log::warn;

#[derive(Clone)]
pub struct Runner {
    config: MapConfig,
    catalog: Catalog,
}

impl Runner {
    pub fn new(config: MapConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replays `steps` on a fresh controller, checking after every step that
    /// markers, list and panels agree with the controller's state.
    pub fn execute(&self, name: &str, steps: &[Step]) -> anyhow::Result<SessionSummary> {
        let mut controller = MapController::new(self.catalog.clone(), &self.config);
        let mut target = ConsoleTarget::new();
        controller.initialize(&mut target);
        check_consistency(&controller, &target).context("initial render")?;

        let mut rejected = 0;
        for (index, step) in steps.iter().enumerate() {
            let accepted = apply(&mut controller, &mut target, step)
                .with_context(|| format!("step {} ({:?})", index + 1, step))?;
            if !accepted {
                rejected += 1;
            }
            check_consistency(&controller, &target)
                .with_context(|| format!("after step {} ({:?})", index + 1, step))?;
        }

        Ok(SessionSummary {
            name: name.to_string(),
            steps_run: steps.len(),
            rejected,
            visible: controller.visible().iter().map(|id| id.0).collect(),
            selection: controller.selection().id().map(|id| id.0),
            viewer_open: controller.is_viewer_open(),
            metrics: controller.metrics(),
            transcript: target.transcript,
        })
    }
}

/// Applies one step. Returns `Ok(false)` for interactions the map refuses
/// without failing the session.
fn apply(
    controller: &mut MapController,
    target: &mut ConsoleTarget,
    step: &Step,
) -> anyhow::Result<bool> {
    match step {
        Step::Filter(name) => {
            controller.filter_by_category(CategoryFilter::from_name(name), target);
            ensure_cleared(controller, target)?;
        }
        Step::Search(query) => {
            controller.search(query, target);
            ensure_cleared(controller, target)?;
        }
        Step::Select(id) => return select(controller.select(HazardId(*id), target)),
        Step::SelectFromList(id) => {
            return select(controller.select_from_list(HazardId(*id), target))
        }
        Step::CloseDetail => controller.close_detail(target),
        Step::OpenStreetView => return Ok(controller.open_street_view(target)),
        Step::CloseStreetView => controller.close_street_view(target),
        Step::ClickBackdrop => controller.dismiss_street_view(target),
        Step::ZoomIn => return Ok(controller.zoom_in(target)),
        Step::ZoomOut => return Ok(controller.zoom_out(target)),
        Step::ToggleSidebar => controller.toggle_sidebar(target),
        Step::ToggleFullscreen => {
            let resize = controller.toggle_fullscreen(target);
            // no layout to settle here, so the deferred resize fires at once
            let viewport = controller.view().viewport();
            log::debug!("resize after {:?}", resize.delay);
            controller.invalidate_size(viewport, target);
        }
        Step::LocateMe => controller.locate_me(target),
        Step::ReportHazard => controller.report_hazard(target),
        Step::ExpectVisible(expected) => {
            let visible: Vec<u32> = controller.visible().iter().map(|id| id.0).collect();
            ensure!(
                &visible == expected,
                "expected visible {:?}, found {:?}",
                expected,
                visible
            );
        }
    }
    Ok(true)
}

fn select(result: Result<(), MapError>) -> anyhow::Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err @ (MapError::NotVisible(_) | MapError::UnknownHazard(_))) => {
            warn!("selection refused: {}", err);
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn ensure_cleared(controller: &MapController, target: &ConsoleTarget) -> anyhow::Result<()> {
    ensure!(
        !controller.selection().is_selected(),
        "selection survived a recompute"
    );
    ensure!(target.detail.is_none(), "detail panel survived a recompute");
    ensure!(target.modal.is_none(), "street view survived a recompute");
    Ok(())
}

fn check_consistency(controller: &MapController, target: &ConsoleTarget) -> anyhow::Result<()> {
    ensure!(
        target.markers == controller.visible(),
        "markers {:?} differ from visible {:?}",
        target.markers,
        controller.visible()
    );
    ensure!(
        target.list == controller.visible(),
        "list {:?} differs from visible {:?}",
        target.list,
        controller.visible()
    );
    ensure!(
        target.empty_message.is_some() == controller.visible().is_empty(),
        "empty-state message out of sync"
    );
    let shown = target.detail.as_ref().map(|panel| panel.id);
    ensure!(
        shown == controller.selection().id(),
        "detail panel shows {:?} but selection is {:?}",
        shown,
        controller.selection()
    );
    ensure!(
        target.modal.is_some() == controller.is_viewer_open(),
        "street view visibility out of sync"
    );
    if controller.is_viewer_open() {
        ensure!(
            controller.selection().is_selected(),
            "street view open without a selection"
        );
    }
    if let Some(panel) = &target.detail {
        let record = controller
            .catalog()
            .get(panel.id)
            .context("detail panel shows an unknown hazard")?;
        let tags: Vec<&str> = panel.tags.iter().map(|tag| tag.label.as_str()).collect();
        ensure!(tags == record.tags, "detail tags differ from the record");
    }
    Ok(())
}
