//! Render contracts: what the controller asks a front end to display.

pub mod detail;
pub mod marker;
pub mod notice;
pub mod sidebar;

pub use detail::{DetailPanel, StreetView, TagChip};
pub use marker::{hit_test, Marker, MarkerColor};
pub use notice::Notice;
pub use sidebar::{ListEntry, SidebarList};

use crate::catalog::HazardId;
use crate::mapping::MapView;
use crate::session::ChromeState;

/// Capabilities a front end offers the controller.
///
/// Every call replaces what was previously shown for that capability;
/// `None` hides the panel or modal. Rendering markers also drops any pinned
/// label.
pub trait RenderTarget {
    fn render_markers(&mut self, markers: &[Marker]);
    fn render_list(&mut self, list: &SidebarList);
    fn render_detail(&mut self, detail: Option<&DetailPanel>);
    fn render_modal(&mut self, modal: Option<&StreetView>);
    fn render_view(&mut self, view: &MapView);
    fn render_chrome(&mut self, chrome: &ChromeState);
    fn show_notice(&mut self, notice: &Notice);
    /// Keeps the name label of a rendered marker open, or closes it.
    fn pin_label(&mut self, id: Option<HazardId>);
}
