use anyhow::Context;
use clap::Parser;
use hazardcore::background::BackgroundImage;
use hazardcore::catalog::{Catalog, HazardId};
use hazardcore::filtering::CategoryFilter;
use hazardcore::mapping::Viewport;
use hazardcore::render::{DetailPanel, SidebarList, StreetView, TagChip};
use hazardcore::session::Icon;
use hazardcore::{MapConfig, MapController};
use iced::{
    alignment,
    widget::{
        button, center, column, container, image, mouse_area, opaque, row, scrollable, stack,
        text, text_input, Canvas, Column, Row,
    },
    Border, Color, Element, Length, Task, Theme,
};
use map_canvas::MapCanvas;
use scene::Scene;
use std::path::PathBuf;

mod map_canvas;
mod scene;

#[derive(Parser)]
#[command(author, version, about = "Interactive hazard map")]
struct Args {
    /// Map settings in YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Alternate hazard catalog in JSON
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = &args.config {
        MapConfig::load(path)
            .with_context(|| format!("loading map config {}", path.display()))?
    } else {
        MapConfig::default()
    };
    if args.catalog.is_some() {
        config.catalog = args.catalog.clone();
    }
    let catalog = config.load_catalog().context("loading hazard catalog")?;

    iced::application(
        move || HazardMap::boot(config.clone(), catalog.clone()),
        HazardMap::update,
        HazardMap::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()
    .context("running the map window")?;
    Ok(())
}

fn application_title(_: &HazardMap) -> String {
    "Palayan Road Hazard Map".into()
}

fn application_theme(_: &HazardMap) -> Theme {
    Theme::Light
}

struct HazardMap {
    controller: MapController,
    scene: Scene,
    background: Option<image::Handle>,
    search: String,
    measured: Option<Viewport>,
    resize_pending: bool,
}

#[derive(Debug, Clone)]
enum Message {
    CategorySelected(CategoryFilter),
    SearchChanged(String),
    SearchSubmitted,
    MarkerClicked(HazardId),
    ListEntryClicked(HazardId),
    CloseDetail,
    OpenStreetView,
    CloseStreetView,
    BackdropClicked,
    ZoomIn,
    ZoomOut,
    Panned(f32, f32),
    ViewportMeasured(Viewport),
    ToggleSidebar,
    ToggleFullscreen,
    ResizeSettled,
    LocateMe,
    ReportHazard,
    DismissNotice,
}

impl HazardMap {
    fn boot(config: MapConfig, catalog: Catalog) -> (Self, Task<Message>) {
        let mut controller = MapController::new(catalog, &config);
        let mut scene = Scene::new(controller.view().clone());
        controller.initialize(&mut scene);

        let background = match BackgroundImage::probe(&config.background_image) {
            Ok(probed) => Some(image::Handle::from_path(probed.path)),
            Err(err) => {
                controller.report_background_failure(&config.background_image, &err, &mut scene);
                None
            }
        };

        (
            HazardMap {
                controller,
                scene,
                background,
                search: String::new(),
                measured: None,
                resize_pending: false,
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        let scene = &mut state.scene;
        match message {
            Message::CategorySelected(filter) => {
                state.controller.filter_by_category(filter, scene);
            }
            Message::SearchChanged(value) => state.search = value,
            Message::SearchSubmitted => state.controller.search(&state.search, scene),
            Message::MarkerClicked(id) => {
                if let Err(err) = state.controller.select(id, scene) {
                    log::warn!("marker click ignored: {err}");
                }
            }
            Message::ListEntryClicked(id) => {
                if let Err(err) = state.controller.select_from_list(id, scene) {
                    log::warn!("list click ignored: {err}");
                }
            }
            Message::CloseDetail => state.controller.close_detail(scene),
            Message::OpenStreetView => {
                state.controller.open_street_view(scene);
            }
            Message::CloseStreetView => state.controller.close_street_view(scene),
            Message::BackdropClicked => state.controller.dismiss_street_view(scene),
            Message::ZoomIn => {
                state.controller.zoom_in(scene);
            }
            Message::ZoomOut => {
                state.controller.zoom_out(scene);
            }
            Message::Panned(dx, dy) => state.controller.pan_by(dx, dy, scene),
            Message::ViewportMeasured(viewport) => {
                let first = state.measured.is_none();
                state.measured = Some(viewport);
                if first {
                    state.controller.fit_to(viewport, scene);
                } else if !state.resize_pending {
                    state.controller.invalidate_size(viewport, scene);
                }
            }
            Message::ToggleSidebar => state.controller.toggle_sidebar(scene),
            Message::ToggleFullscreen => {
                let resize = state.controller.toggle_fullscreen(scene);
                state.resize_pending = true;
                return Task::perform(tokio::time::sleep(resize.delay), |_| {
                    Message::ResizeSettled
                });
            }
            Message::ResizeSettled => {
                state.resize_pending = false;
                if let Some(viewport) = state.measured {
                    state.controller.invalidate_size(viewport, scene);
                }
            }
            Message::LocateMe => state.controller.locate_me(scene),
            Message::ReportHazard => state.controller.report_hazard(scene),
            Message::DismissNotice => scene.dismiss_notice(),
        }
        Task::none()
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scene = &state.scene;
        let map = state.map_area();

        let body: Element<'_, Message> = if scene.chrome.sidebar_visible() {
            row![state.sidebar(), map].into()
        } else {
            map
        };

        let body = match &scene.modal {
            Some(street) => modal(body, street_view(street), Message::BackdropClicked),
            None => body,
        };

        match &scene.notice {
            Some(notice) => modal(body, notice_box(notice), Message::DismissNotice),
            None => body,
        }
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let active = self.controller.active_category();
        let categories = CategoryFilter::controls().into_iter().fold(
            Column::new().spacing(4),
            |col, filter| {
                let style = if &filter == active {
                    button::primary
                } else {
                    button::secondary
                };
                col.push(
                    button(text(title_case(filter.as_str())).size(14))
                        .width(Length::Fill)
                        .padding(6)
                        .style(style)
                        .on_press(Message::CategorySelected(filter)),
                )
            },
        );

        let search = row![
            text_input("Search hazards...", &self.search)
                .on_input(Message::SearchChanged)
                .on_submit(Message::SearchSubmitted)
                .padding(6),
            button(text("Search")).on_press(Message::SearchSubmitted).padding(6),
        ]
        .spacing(6);

        let places: Element<'_, Message> = match &self.scene.list {
            SidebarList::Empty { message } => text(message.as_str()).size(14).into(),
            SidebarList::Entries(entries) => entries
                .iter()
                .fold(Column::new().spacing(6), |col, entry| {
                    col.push(
                        button(column![
                            text(entry.title.as_str()).size(15),
                            text(entry.excerpt.as_str()).size(12),
                        ])
                        .width(Length::Fill)
                        .padding(8)
                        .style(button::secondary)
                        .on_press(Message::ListEntryClicked(entry.id)),
                    )
                })
                .into(),
        };

        column![
            text("Hazard Map").size(26),
            search,
            text("Categories").size(16),
            categories,
            text("Hazards").size(16),
            scrollable(places).height(Length::Fill),
            button(text("Report Hazard"))
                .width(Length::Fill)
                .padding(8)
                .style(button::danger)
                .on_press(Message::ReportHazard),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(320.0))
        .into()
    }

    fn map_area(&self) -> Element<'_, Message> {
        let scene = &self.scene;
        let canvas = Canvas::new(MapCanvas {
            markers: &scene.markers,
            view: &scene.view,
            background: self.background.as_ref(),
            pinned: scene.pinned_label,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let controls = column![
            control_button("+", Message::ZoomIn),
            control_button("-", Message::ZoomOut),
            control_button("o", Message::LocateMe),
        ]
        .spacing(6);

        let mut top_bar = Row::new().spacing(8);
        if scene.chrome.sidebar_toggle_visible() {
            top_bar = top_bar.push(control_button(
                icon_glyph(scene.chrome.sidebar_icon()),
                Message::ToggleSidebar,
            ));
        }
        top_bar = top_bar.push(
            button(text(format!(
                "{} {}",
                icon_glyph(scene.chrome.fullscreen_icon()),
                scene.chrome.fullscreen_label()
            )))
            .padding(6)
            .style(button::secondary)
            .on_press(Message::ToggleFullscreen),
        );

        let mut layers = stack![
            canvas,
            container(top_bar)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(12)
                .align_x(alignment::Horizontal::Left)
                .align_y(alignment::Vertical::Top),
            container(controls)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(12)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top),
        ];
        if let Some(detail) = &scene.detail {
            layers = layers.push(
                container(detail_panel(detail))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(16)
                    .align_x(alignment::Horizontal::Left)
                    .align_y(alignment::Vertical::Bottom),
            );
        }
        layers.width(Length::Fill).height(Length::Fill).into()
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ChevronLeft => "<",
        Icon::ChevronRight => ">",
        Icon::Expand => "[ ]",
        Icon::Compress => "] [",
    }
}

fn control_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(16))
        .padding([4, 10])
        .style(button::secondary)
        .on_press(message)
        .into()
}

fn color_of(chip: &TagChip) -> Color {
    let (r, g, b) = chip.color().rgb8();
    Color::from_rgb8(r, g, b)
}

fn tag_row(tags: &[TagChip]) -> Element<'_, Message> {
    tags.iter()
        .fold(Row::new().spacing(6), |row, tag| {
            let background = color_of(tag);
            row.push(
                container(text(tag.label.as_str()).size(12))
                    .padding([2, 8])
                    .style(move |_theme: &Theme| container::Style {
                        background: Some(background.into()),
                        text_color: Some(Color::WHITE),
                        border: Border {
                            radius: 10.0.into(),
                            ..Border::default()
                        },
                        ..container::Style::default()
                    }),
            )
        })
        .into()
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::WHITE.into()),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: Color::from_rgb(0.8, 0.8, 0.82),
        },
        ..container::Style::default()
    }
}

fn detail_panel(detail: &DetailPanel) -> Element<'_, Message> {
    let header = row![
        text(detail.name.trim()).size(20).width(Length::Fill),
        button(text("x")).style(button::text).on_press(Message::CloseDetail),
    ];
    container(
        column![
            header,
            text(detail.address.as_str()).size(13),
            text(detail.description.as_str()).size(14),
            tag_row(&detail.tags),
            button(text("View Street"))
                .padding(8)
                .style(button::primary)
                .on_press(Message::OpenStreetView),
        ]
        .spacing(8),
    )
    .padding(14)
    .width(Length::Fixed(360.0))
    .style(panel_style)
    .into()
}

fn street_view(street: &StreetView) -> Element<'_, Message> {
    let header = row![
        text(street.street_name.as_str()).size(22).width(Length::Fill),
        button(text("x")).style(button::text).on_press(Message::CloseStreetView),
    ];
    container(
        column![
            header,
            image(image::Handle::from_path(&street.image))
                .width(Length::Fill)
                .height(Length::Fixed(360.0)),
            text(street.street_description.as_str()).size(14),
            tag_row(&street.tags),
        ]
        .spacing(10),
    )
    .padding(18)
    .width(Length::Fixed(720.0))
    .style(panel_style)
    .into()
}

fn notice_box(message: &str) -> Element<'_, Message> {
    container(
        column![
            text(message).size(15),
            button(text("OK")).padding([4, 16]).on_press(Message::DismissNotice),
        ]
        .spacing(12),
    )
    .padding(18)
    .max_width(420.0)
    .style(panel_style)
    .into()
}

/// Layers `content` over `base`; a press anywhere outside the content
/// sends `on_blur`.
fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.7,
                        ..Color::BLACK
                    }
                    .into()
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_are_title_cased() {
        assert_eq!(title_case("environmental"), "Environmental");
        assert_eq!(title_case("all"), "All");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn every_icon_has_a_glyph() {
        for icon in [Icon::ChevronLeft, Icon::ChevronRight, Icon::Expand, Icon::Compress] {
            assert!(!icon_glyph(icon).is_empty());
        }
    }
}
