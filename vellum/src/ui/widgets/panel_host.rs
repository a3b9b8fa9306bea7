use iced::alignment;
use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::features::aichat::AichatState;
use crate::features::settings::SettingsState;
use crate::panels::PanelId;
use crate::theme::ThemeProps;
use crate::ui::widgets::{aichat_panel, settings_panel};

const TITLE_BAR_HEIGHT: f32 = 30.0;
const TITLE_PADDING_X: f32 = 12.0;
const TITLE_FONT_SIZE: f32 = 12.0;
const HINT_FONT_SIZE: f32 = 12.0;
const HINT_PADDING: f32 = 16.0;

/// Props for the panel outlet: routes one panel body under a title bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelHostProps<'a> {
    pub(crate) active_panel: PanelId,
    pub(crate) panel_width: f32,
    pub(crate) aichat: &'a AichatState,
    pub(crate) settings: &'a SettingsState,
    pub(crate) theme: ThemeProps<'a>,
}

/// Events re-emitted from whichever functional panel is mounted.
#[derive(Debug, Clone)]
pub(crate) enum PanelHostEvent {
    Aichat(aichat_panel::AichatPanelEvent),
    Settings(settings_panel::SettingsPanelEvent),
}

pub(crate) fn view<'a>(
    props: PanelHostProps<'a>,
) -> Element<'a, PanelHostEvent> {
    let body: Element<'a, PanelHostEvent> = match props.active_panel {
        PanelId::Files => hint_panel("No folder opened.", props.theme),
        PanelId::Search => hint_panel("Nothing to search yet.", props.theme),
        PanelId::Source => {
            hint_panel("No source control providers registered.", props.theme)
        },
        PanelId::Aichat => aichat_panel::view(aichat_panel::AichatPanelProps {
            state: props.aichat,
            theme: props.theme,
        })
        .map(PanelHostEvent::Aichat),
        PanelId::Profile => hint_panel("Not signed in.", props.theme),
        PanelId::Settings => {
            settings_panel::view(settings_panel::SettingsPanelProps {
                state: props.settings,
                theme: props.theme,
            })
            .map(PanelHostEvent::Settings)
        },
    };

    let title_bar = title_bar(props);
    let palette = props.theme.theme.iced_palette().clone();

    container(
        column![title_bar, body]
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(props.panel_width))
    .height(Length::Fill)
    .style(move |_| iced::widget::container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    })
    .into()
}

fn title_bar<'a>(props: PanelHostProps<'a>) -> Element<'a, PanelHostEvent> {
    let palette = props.theme.theme.iced_palette();
    let title = text(props.active_panel.title())
        .size(TITLE_FONT_SIZE)
        .style(move |_| iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        });

    container(title)
        .width(Length::Fill)
        .height(Length::Fixed(TITLE_BAR_HEIGHT))
        .padding([0.0, TITLE_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Placeholder body for the panels whose engines live outside this app.
fn hint_panel<'a>(
    hint: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, PanelHostEvent> {
    let palette = theme.theme.iced_palette();
    let message = text(hint).size(HINT_FONT_SIZE).style(move |_| {
        iced::widget::text::Style {
            color: Some(palette.dim_foreground),
        }
    });

    container(message)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(HINT_PADDING)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
