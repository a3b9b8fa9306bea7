mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::SidebarEvent;
pub(crate) use feature::{SidebarCtx, SidebarFeature};
pub(crate) use model::{SIDEBAR_RAIL_WIDTH, shortcut_panel};
#[allow(unused_imports)]
pub(crate) use model::{DEFAULT_PANEL_WIDTH, MIN_PANEL_WIDTH};
