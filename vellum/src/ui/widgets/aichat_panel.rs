use iced::alignment;
use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    Column, button, column, container, row, scrollable, text, text_input,
};
use iced::{Background, Element, Length};

use crate::features::aichat::{AichatState, ChatRole};
use crate::theme::{IcedColorPalette, ThemeProps};

const PANEL_PADDING: f32 = 12.0;
const TRANSCRIPT_SPACING: f32 = 10.0;
const ENTRY_SPACING: f32 = 2.0;
const ROLE_FONT_SIZE: f32 = 11.0;
const BODY_FONT_SIZE: f32 = 12.0;
const COMPOSER_SPACING: f32 = 8.0;
const INPUT_PADDING_X: f32 = 8.0;
const INPUT_PADDING_Y: f32 = 4.0;
const SEND_BUTTON_HEIGHT: f32 = 24.0;
const SEND_BUTTON_PADDING_X: f32 = 10.0;

/// Props for the AI chat panel: transcript plus composer state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AichatPanelProps<'a> {
    pub(crate) state: &'a AichatState,
    pub(crate) theme: ThemeProps<'a>,
}

#[derive(Debug, Clone)]
pub(crate) enum AichatPanelEvent {
    DraftChanged(String),
    SendPressed,
}

pub(crate) fn view<'a>(
    props: AichatPanelProps<'a>,
) -> Element<'a, AichatPanelEvent> {
    let transcript = transcript_view(props);
    let composer = composer_view(props);

    column![transcript, composer]
        .spacing(COMPOSER_SPACING)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .into()
}

fn transcript_view<'a>(
    props: AichatPanelProps<'a>,
) -> Element<'a, AichatPanelEvent> {
    let palette = props.theme.theme.iced_palette();
    let mut entries = Column::new().spacing(TRANSCRIPT_SPACING);

    for entry in props.state.transcript() {
        entries = entries.push(transcript_entry(
            entry.role(),
            entry.text(),
            props.theme,
        ));
    }

    if props.state.is_busy() {
        entries = entries.push(
            text("Thinking...").size(BODY_FONT_SIZE).style(move |_| {
                iced::widget::text::Style {
                    color: Some(palette.dim_foreground),
                }
            }),
        );
    }

    if let Some(message) = props.state.last_error() {
        entries = entries.push(text(message).size(BODY_FONT_SIZE).style(
            move |_| iced::widget::text::Style {
                color: Some(palette.red),
            },
        ));
    }

    let palette = props.theme.theme.iced_palette().clone();

    // Anchored at the bottom so the newest reply stays in view while
    // the transcript grows.
    scrollable::Scrollable::new(entries.width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .anchor_bottom()
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(4)
                .margin(0)
                .scroller_width(4),
        ))
        .style(move |theme, status| {
            let mut style = scrollable::default(theme, status);
            let radius = iced::border::Radius::from(0.0);

            style.vertical_rail.border.radius = radius;
            style.vertical_rail.scroller.border.radius = radius;

            let mut scroller_color =
                match style.vertical_rail.scroller.background {
                    Background::Color(color) => color,
                    _ => palette.dim_foreground,
                };
            scroller_color.a = (scroller_color.a * 0.7).min(1.0);
            style.vertical_rail.scroller.background =
                Background::Color(scroller_color);

            style
        })
        .into()
}

fn transcript_entry<'a>(
    role: ChatRole,
    body: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, AichatPanelEvent> {
    let palette = theme.theme.iced_palette();
    let role_color = match role {
        ChatRole::User => palette.blue,
        ChatRole::Assistant => palette.green,
    };

    let role = text(role.label()).size(ROLE_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(role_color),
        }
    });
    let body = text(body).size(BODY_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.foreground),
        }
    });

    column![role, body].spacing(ENTRY_SPACING).into()
}

fn composer_view<'a>(
    props: AichatPanelProps<'a>,
) -> Element<'a, AichatPanelEvent> {
    let draft = props.state.draft();
    let can_send = !props.state.is_busy() && !draft.trim().is_empty();

    let mut input = text_input("Ask about your project", draft)
        .on_input(AichatPanelEvent::DraftChanged)
        .padding([INPUT_PADDING_Y, INPUT_PADDING_X])
        .size(BODY_FONT_SIZE)
        .width(Length::Fill)
        .style(text_input_style(props.theme));

    if can_send {
        input = input.on_submit(AichatPanelEvent::SendPressed);
    }

    let send = send_button(can_send, props.theme);

    row![input, send]
        .spacing(COMPOSER_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn send_button<'a>(
    enabled: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, AichatPanelEvent> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(
        text("Send")
            .size(BODY_FONT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut button = button(content)
        .padding([0.0, SEND_BUTTON_PADDING_X])
        .height(Length::Fixed(SEND_BUTTON_HEIGHT))
        .style(move |_, status| button_style(&palette, status, enabled));

    if enabled {
        button = button.on_press(AichatPanelEvent::SendPressed);
    }

    button.into()
}

fn button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    enabled: bool,
) -> iced::widget::button::Style {
    let base_color = if enabled {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => palette.dim_blue,
            _ => palette.overlay,
        }
    } else {
        let mut color = palette.overlay;
        color.a = 0.4;
        color
    };

    let text_color = if enabled {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => palette.dim_black,
            _ => palette.foreground,
        }
    } else {
        palette.dim_foreground
    };

    iced::widget::button::Style {
        background: Some(base_color.into()),
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn text_input_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |base: &iced::Theme, status| {
        let mut style = iced::widget::text_input::default(base, status);
        style.selection = palette.blue;
        style
    }
}
