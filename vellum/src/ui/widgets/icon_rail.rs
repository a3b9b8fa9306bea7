use iced::widget::{
    Space, button, column, container, row, scrollable, svg, text, tooltip,
};
use iced::{Border, Element, Length, alignment};

use crate::panels::{PanelDescriptor, PanelId};
use crate::theme::ThemeProps;

const RAIL_BUTTON_SIZE: f32 = 44.0;
const RAIL_ICON_SIZE: f32 = 20.0;
const RAIL_BUTTON_PADDING: f32 = 8.0;
const RAIL_META_SPACING: f32 = 0.0;
const ACTIVE_BORDER_WIDTH: f32 = 2.0;
const TOOLTIP_GAP: f32 = 6.0;
const TOOLTIP_TEXT_SIZE: f32 = 12.0;

/// UI events emitted by the icon rail.
#[derive(Debug, Clone)]
pub(crate) enum IconRailEvent {
    SelectPanel(PanelId),
}

/// Props for rendering the vertical icon rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconRailProps<'a> {
    pub(crate) active_panel: PanelId,
    pub(crate) rail_width: f32,
    pub(crate) top: &'a [PanelDescriptor],
    pub(crate) bottom: &'a [PanelDescriptor],
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the icon rail with scrollable panel entries and fixed meta.
pub(crate) fn view<'a>(props: IconRailProps<'a>) -> Element<'a, IconRailEvent> {
    let palette = props.theme.theme.iced_palette();

    let mut top_items = column![].spacing(0).width(Length::Fill);
    for descriptor in props.top {
        top_items = top_items.push(rail_button(
            *descriptor,
            props.active_panel,
            props.theme,
        ));
    }

    let top_scroll = scrollable::Scrollable::with_direction(
        top_items,
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut meta_items = column![].spacing(RAIL_META_SPACING);
    for descriptor in props.bottom {
        meta_items = meta_items.push(rail_button(
            *descriptor,
            props.active_panel,
            props.theme,
        ));
    }

    let content = column![top_scroll, meta_items]
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fixed(props.rail_width))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            ..Default::default()
        })
        .into()
}

fn rail_button<'a>(
    descriptor: PanelDescriptor,
    active_panel: PanelId,
    theme: ThemeProps<'a>,
) -> Element<'a, IconRailEvent> {
    let palette = theme.theme.iced_palette();
    let is_active = descriptor.id() == active_panel;
    let base_color = palette.dim_foreground;
    let hover_color = palette.blue;
    let active_color = palette.blue;

    let icon = svg::Svg::new(svg::Handle::from_memory(descriptor.glyph()))
        .width(Length::Fixed(RAIL_ICON_SIZE))
        .height(Length::Fixed(RAIL_ICON_SIZE))
        .style(move |_, status| {
            let color = if is_active {
                active_color
            } else if status == svg::Status::Hovered {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(RAIL_BUTTON_PADDING);

    // The strip sits on the edge facing the panel it opens.
    let border_color = if is_active {
        palette.blue
    } else {
        iced::Color::TRANSPARENT
    };

    let border_strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(border_color.into()),
            ..Default::default()
        });

    let content = row![border_strip, icon_container]
        .spacing(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let entry = button(content)
        .on_press(IconRailEvent::SelectPanel(descriptor.id()))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(RAIL_BUTTON_SIZE))
        .style(|_, _| iced::widget::button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        });

    tooltip(
        entry,
        text(descriptor.description()).size(TOOLTIP_TEXT_SIZE),
        tooltip::Position::Left,
    )
    .gap(TOOLTIP_GAP)
    .style(move |_| iced::widget::container::Style {
        text_color: Some(palette.foreground),
        background: Some(palette.overlay.into()),
        border: Border {
            color: palette.dim_white,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}
