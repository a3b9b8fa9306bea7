use iced::widget::{container, mouse_area, text};
use iced::{Element, Length, Point, mouse};

/// Pointer events captured by the full-window drag overlay.
#[derive(Debug, Clone)]
pub(crate) enum DragOverlayEvent {
    PointerMoved { position: Point },
    PointerReleased,
}

/// Render the transparent layer that tracks a live resize drag.
///
/// Mounted only while a drag is live, so pointer capture and the
/// resize cursor end together with the drag no matter where the
/// pointer sits when the button is released.
pub(crate) fn view() -> Element<'static, DragOverlayEvent> {
    mouse_area(
        container(text("")).width(Length::Fill).height(Length::Fill),
    )
    .on_move(|position| DragOverlayEvent::PointerMoved { position })
    .on_release(DragOverlayEvent::PointerReleased)
    .interaction(mouse::Interaction::ResizingHorizontally)
    .into()
}
