use iced::Task;

use super::event::RouterEvent;
use super::model::{active_panel_from_path, panel_route};
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::panels::PanelId;

/// Router feature owning the current navigation path.
///
/// The path is the single source of truth; the active panel is derived
/// from it on every query instead of being stored next to it.
pub(crate) struct RouterFeature {
    path: String,
}

impl RouterFeature {
    pub(crate) fn new() -> Self {
        Self {
            path: panel_route(PanelId::Files),
        }
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Derive the panel the current path refers to.
    pub(crate) fn active_panel(&self) -> PanelId {
        active_panel_from_path(&self.path)
    }
}

impl Feature for RouterFeature {
    type Event = RouterEvent;
    type Ctx<'a>
        = ()
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: RouterEvent,
        _ctx: &(),
    ) -> Task<AppEvent> {
        match event {
            RouterEvent::Navigate(panel) => {
                self.path = panel_route(panel);
                Task::none()
            },
        }
    }
}
