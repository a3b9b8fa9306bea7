use crate::ui::components::{drag_overlay, resize_handle};
use crate::ui::widgets::icon_rail;

/// Events emitted by sidebar surfaces and window notifications.
#[derive(Debug, Clone)]
pub(crate) enum SidebarEvent {
    Rail(icon_rail::IconRailEvent),
    Handle(resize_handle::ResizeHandleEvent),
    Overlay(drag_overlay::DragOverlayEvent),
    WindowResized,
    AbortDrag,
}
