mod event;
mod feature;
mod model;
mod state;
mod storage;

pub(crate) use event::SettingsEvent;
pub(crate) use feature::{SettingsCtx, SettingsFeature};
pub(crate) use model::{KeyValidation, ProviderChoice, SettingsData};
pub(crate) use state::SettingsState;
