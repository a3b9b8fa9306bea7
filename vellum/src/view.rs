use iced::widget::{Space, container, row, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, Event};
use crate::features::aichat::AichatEvent;
use crate::features::settings::SettingsEvent;
use crate::features::sidebar::SIDEBAR_RAIL_WIDTH;
use crate::panels::{BOTTOM_PANELS, TOP_PANELS};
use crate::theme::ThemeProps;
use crate::ui::components::{drag_overlay, resize_handle};
use crate::ui::widgets::{icon_rail, panel_host};

const RAIL_SEPARATOR_WIDTH: f32 = 0.3;
const SEPARATOR_ALPHA: f32 = 0.3;
const WORKSPACE_HINT_SIZE: f32 = 13.0;

pub(super) fn view(app: &App) -> Element<'_, Event, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let active_panel = app.features.router().active_panel();

    let workspace = view_workspace(theme_props);
    let handle = resize_handle::view(theme_props).map(Event::ResizeHandle);

    let panel = panel_host::view(panel_host::PanelHostProps {
        active_panel,
        panel_width: app.features.sidebar().width(),
        aichat: app.features.aichat().state(),
        settings: app.features.settings().state(),
        theme: theme_props,
    })
    .map(map_panel_event);

    let palette = theme_props.theme.iced_palette();
    let rail_separator = container(Space::new())
        .width(Length::Fixed(RAIL_SEPARATOR_WIDTH))
        .height(Length::Fill)
        .style(move |_| {
            let mut background = palette.dim_white;
            background.a = SEPARATOR_ALPHA;
            iced::widget::container::Style {
                background: Some(background.into()),
                ..Default::default()
            }
        });

    let rail = icon_rail::view(icon_rail::IconRailProps {
        active_panel,
        rail_width: SIDEBAR_RAIL_WIDTH,
        top: &TOP_PANELS,
        bottom: &BOTTOM_PANELS,
        theme: theme_props,
    })
    .map(Event::IconRail);

    let content_row = row![workspace, handle, panel, rail_separator, rail]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, Event, Theme, iced::Renderer>> =
        vec![content_row.into()];

    if app.features.sidebar().is_dragging() {
        layers.push(drag_overlay::view().map(Event::DragOverlay));
    }

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_workspace<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, Event, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let hint = text("Open a file to begin")
        .size(WORKSPACE_HINT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        });

    container(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn map_panel_event(event: panel_host::PanelHostEvent) -> Event {
    match event {
        panel_host::PanelHostEvent::Aichat(event) => {
            Event::Aichat(AichatEvent::Panel(event))
        },
        panel_host::PanelHostEvent::Settings(event) => {
            Event::Settings(SettingsEvent::Panel(event))
        },
    }
}
