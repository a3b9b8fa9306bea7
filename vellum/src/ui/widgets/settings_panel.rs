use iced::alignment;
use iced::widget::button::Status as ButtonStatus;
use iced::widget::{
    button, column, container, row, scrollable, text, text_input,
};
use iced::{Background, Element, Length};

use crate::features::settings::{
    KeyValidation, ProviderChoice, SettingsState,
};
use crate::theme::{IcedColorPalette, ThemePreset, ThemeProps};

const HEADER_HEIGHT: f32 = 32.0;
const HEADER_PADDING_X: f32 = 12.0;
const HEADER_FONT_SIZE: f32 = 12.0;
const HEADER_BUTTON_HEIGHT: f32 = 22.0;
const HEADER_BUTTON_PADDING_X: f32 = 10.0;
const HEADER_BUTTON_SPACING: f32 = 8.0;

const FORM_PADDING: f32 = 16.0;
const FORM_SECTION_SPACING: f32 = 16.0;
const FORM_ROW_SPACING: f32 = 10.0;
const FORM_INPUT_PADDING_X: f32 = 8.0;
const FORM_INPUT_PADDING_Y: f32 = 4.0;
const FORM_INPUT_FONT_SIZE: f32 = 12.0;
const STATUS_FONT_SIZE: f32 = 11.0;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SettingsPanelProps<'a> {
    pub(crate) state: &'a SettingsState,
    pub(crate) theme: ThemeProps<'a>,
}

#[derive(Debug, Clone)]
pub(crate) enum SettingsPanelEvent {
    SelectProvider(ProviderChoice),
    ApiKeyChanged(String),
    ValidatePressed,
    SelectTheme(ThemePreset),
    SavePressed,
    ResetPressed,
}

pub(crate) fn view<'a>(
    props: SettingsPanelProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let header = settings_header(props);
    let form = settings_form(props);

    column![header, form]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn settings_header<'a>(
    props: SettingsPanelProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let save_button = action_button(
        "Save",
        props.state.is_dirty(),
        SettingsPanelEvent::SavePressed,
        props.theme,
    );
    let reset_button = action_button(
        "Reset",
        props.state.is_dirty(),
        SettingsPanelEvent::ResetPressed,
        props.theme,
    );

    let actions =
        row![save_button, reset_button].spacing(HEADER_BUTTON_SPACING);

    let palette = props.theme.theme.iced_palette().clone();

    container(actions)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.overlay.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        })
        .into()
}

fn settings_form<'a>(
    props: SettingsPanelProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let content = column![
        provider_section(props),
        key_section(props),
        theme_section(props),
    ]
    .spacing(FORM_SECTION_SPACING)
    .padding(FORM_PADDING);

    let palette = props.theme.theme.iced_palette().clone();

    let scrollable = scrollable::Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
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
        });

    container(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn provider_section<'a>(
    props: SettingsPanelProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let active = props.state.draft().provider();
    let mut choices = row![].spacing(HEADER_BUTTON_SPACING);

    for choice in ProviderChoice::all() {
        choices = choices.push(choice_button(
            choice.label(),
            choice == active,
            SettingsPanelEvent::SelectProvider(choice),
            props.theme,
        ));
    }

    column![section_title("Provider", props.theme), choices]
        .spacing(FORM_ROW_SPACING)
        .into()
}

fn key_section<'a>(
    props: SettingsPanelProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let checking = props.state.validation() == KeyValidation::Checking;

    let mut input = text_input("", props.state.active_draft_key())
        .secure(true)
        .on_input(SettingsPanelEvent::ApiKeyChanged)
        .padding([FORM_INPUT_PADDING_Y, FORM_INPUT_PADDING_X])
        .size(FORM_INPUT_FONT_SIZE)
        .width(Length::Fill)
        .style(text_input_style(props.theme));

    if !checking {
        input = input.on_submit(SettingsPanelEvent::ValidatePressed);
    }

    let validate = action_button(
        "Validate",
        !checking,
        SettingsPanelEvent::ValidatePressed,
        props.theme,
    );

    let mut actions = row![validate]
        .spacing(HEADER_BUTTON_SPACING)
        .align_y(alignment::Vertical::Center);

    if let Some(status) = validation_status(props) {
        actions = actions.push(status);
    }

    column![section_title("API key", props.theme), input, actions]
        .spacing(FORM_ROW_SPACING)
        .into()
}

fn validation_status<'a>(
    props: SettingsPanelProps<'a>,
) -> Option<Element<'a, SettingsPanelEvent>> {
    let palette = props.theme.theme.iced_palette();
    let (message, color) = match props.state.validation() {
        KeyValidation::Unknown => return None,
        KeyValidation::Checking => {
            ("Checking key...", palette.dim_foreground)
        },
        KeyValidation::Valid => ("Key is valid.", palette.green),
        KeyValidation::Invalid => ("Key is invalid.", palette.red),
    };

    Some(
        text(message)
            .size(STATUS_FONT_SIZE)
            .style(move |_| iced::widget::text::Style { color: Some(color) })
            .into(),
    )
}

fn theme_section<'a>(
    props: SettingsPanelProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let active = props.state.draft().theme();
    let mut choices = row![].spacing(HEADER_BUTTON_SPACING);

    for preset in ThemePreset::all() {
        choices = choices.push(choice_button(
            preset.label(),
            preset == active,
            SettingsPanelEvent::SelectTheme(preset),
            props.theme,
        ));
    }

    column![section_title("Theme", props.theme), choices]
        .spacing(FORM_ROW_SPACING)
        .into()
}

fn section_title<'a>(
    title: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let palette = theme.theme.iced_palette();
    text(title)
        .size(HEADER_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        })
        .into()
}

fn action_button<'a>(
    label: &'a str,
    enabled: bool,
    event: SettingsPanelEvent,
    theme: ThemeProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(
        text(label)
            .size(HEADER_FONT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut button = button(content)
        .padding([0.0, HEADER_BUTTON_PADDING_X])
        .height(Length::Fixed(HEADER_BUTTON_HEIGHT))
        .style(move |_, status| button_style(&palette, status, enabled));

    if enabled {
        button = button.on_press(event);
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

/// Toggle-style button for a mutually exclusive choice row.
fn choice_button<'a>(
    label: &'a str,
    selected: bool,
    event: SettingsPanelEvent,
    theme: ThemeProps<'a>,
) -> Element<'a, SettingsPanelEvent> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(
        text(label)
            .size(HEADER_FONT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, HEADER_BUTTON_PADDING_X])
        .height(Length::Fixed(HEADER_BUTTON_HEIGHT))
        .style(move |_, status| choice_style(&palette, status, selected))
        .on_press(event)
        .into()
}

fn choice_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    selected: bool,
) -> iced::widget::button::Style {
    let (base_color, text_color) = if selected {
        (palette.dim_blue, palette.dim_black)
    } else {
        match status {
            ButtonStatus::Hovered | ButtonStatus::Pressed => {
                let mut color = palette.dim_blue;
                color.a = 0.7;
                (color, palette.dim_black)
            },
            _ => (palette.overlay, palette.foreground),
        }
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
