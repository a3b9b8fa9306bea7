mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::AichatEvent;
pub(crate) use feature::{AichatCtx, AichatFeature};
pub(crate) use model::{ChatEntry, ChatRole};
pub(crate) use state::AichatState;
