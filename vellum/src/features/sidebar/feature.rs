use iced::Task;

use super::event::SidebarEvent;
use super::model::{clamp_panel_width, drag_reference_edge};
use super::state::SidebarState;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::router::RouterEvent;
use crate::ui::components::{drag_overlay, resize_handle};
use crate::ui::widgets::icon_rail;

/// Layout inputs the sidebar needs from outside its own state.
pub(crate) struct SidebarCtx {
    pub(crate) window_width: f32,
}

/// Sidebar feature owning panel width and the resize drag machine.
pub(crate) struct SidebarFeature {
    state: SidebarState,
}

impl SidebarFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::new(),
        }
    }

    /// Return the clamped panel width used by the layout.
    pub(crate) fn width(&self) -> f32 {
        self.state.width()
    }

    /// Return whether a resize drag is currently live.
    pub(crate) fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}

impl Feature for SidebarFeature {
    type Event = SidebarEvent;
    type Ctx<'a>
        = SidebarCtx
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: SidebarEvent,
        ctx: &SidebarCtx,
    ) -> Task<AppEvent> {
        match event {
            SidebarEvent::Rail(icon_rail::IconRailEvent::SelectPanel(
                panel,
            )) => Task::done(AppEvent::Router(RouterEvent::Navigate(panel))),
            SidebarEvent::Handle(
                resize_handle::ResizeHandleEvent::DragStarted,
            ) => {
                self.state
                    .begin_drag(drag_reference_edge(ctx.window_width));
                Task::none()
            },
            SidebarEvent::Overlay(
                drag_overlay::DragOverlayEvent::PointerMoved { position },
            ) => {
                if let Some(report) = self.state.drag_report(position.x) {
                    self.state.set_width(clamp_panel_width(
                        report,
                        ctx.window_width,
                    ));
                }
                Task::none()
            },
            SidebarEvent::Overlay(
                drag_overlay::DragOverlayEvent::PointerReleased,
            )
            | SidebarEvent::AbortDrag => {
                self.state.end_drag();
                Task::none()
            },
            SidebarEvent::WindowResized => {
                self.state.set_width(clamp_panel_width(
                    self.state.width(),
                    ctx.window_width,
                ));
                Task::none()
            },
        }
    }
}
