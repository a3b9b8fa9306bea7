use iced::widget::{container, mouse_area, text};
use iced::{Element, Length, mouse};

use crate::theme::ThemeProps;

/// Thickness of the grab strip between workspace and panel.
pub(crate) const HANDLE_WIDTH: f32 = 4.0;
const HANDLE_LINE_ALPHA: f32 = 0.35;

/// Events emitted by the panel resize handle.
#[derive(Debug, Clone)]
pub(crate) enum ResizeHandleEvent {
    DragStarted,
}

/// Render the grab strip on the panel's workspace edge.
pub(crate) fn view<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, ResizeHandleEvent> {
    let palette = theme.theme.iced_palette();
    let line_color = iced::Color {
        a: HANDLE_LINE_ALPHA,
        ..palette.dim_white
    };

    mouse_area(
        container(text(""))
            .width(Length::Fixed(HANDLE_WIDTH))
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(line_color.into()),
                ..Default::default()
            }),
    )
    .on_press(ResizeHandleEvent::DragStarted)
    .interaction(mouse::Interaction::ResizingHorizontally)
    .into()
}
