use std::sync::Arc;

use iced::Task;
use vellum_ai::{ConfigStore, validate_api_key};

use super::event::SettingsEvent;
use super::model::{KeyValidation, SettingsData};
use super::state::SettingsState;
use super::storage::{load_settings, save_settings};
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::ui::widgets::settings_panel;

/// Dependencies the settings feature resolves per reduction.
pub(crate) struct SettingsCtx<'a> {
    pub(crate) config: &'a Arc<dyn ConfigStore>,
}

/// Settings feature root that owns settings state and reduction logic.
#[derive(Debug)]
pub(crate) struct SettingsFeature {
    state: SettingsState,
}

impl SettingsFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: SettingsState::default(),
        }
    }

    /// Return read-only access to settings state for the view layer.
    pub(crate) fn state(&self) -> &SettingsState {
        &self.state
    }

    fn reduce_panel(
        &mut self,
        event: settings_panel::SettingsPanelEvent,
        ctx: &SettingsCtx<'_>,
    ) -> Task<AppEvent> {
        match event {
            settings_panel::SettingsPanelEvent::SelectProvider(provider) => {
                self.state.set_provider_choice(provider);
                Task::none()
            },
            settings_panel::SettingsPanelEvent::ApiKeyChanged(value) => {
                self.state.set_active_key(value);
                Task::none()
            },
            settings_panel::SettingsPanelEvent::ValidatePressed => {
                self.validate_active_key()
            },
            settings_panel::SettingsPanelEvent::SelectTheme(preset) => {
                self.state.set_theme(preset);
                Task::none()
            },
            settings_panel::SettingsPanelEvent::SavePressed => {
                request_save(ctx, self.state.draft().clone())
            },
            settings_panel::SettingsPanelEvent::ResetPressed => {
                self.state.reset();
                Task::none()
            },
        }
    }

    fn validate_active_key(&mut self) -> Task<AppEvent> {
        let key = self.state.active_draft_key().trim().to_string();
        if key.is_empty() {
            // Nothing to ask the provider about.
            self.state.set_validation(KeyValidation::Invalid);
            return Task::none();
        }

        self.state.set_validation(KeyValidation::Checking);
        let provider = self.state.draft().provider().provider();

        Task::perform(
            async move { validate_api_key(provider, &key).await },
            |valid| AppEvent::Settings(SettingsEvent::KeyValidated(valid)),
        )
    }
}

impl Feature for SettingsFeature {
    type Event = SettingsEvent;
    type Ctx<'a>
        = SettingsCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: SettingsEvent,
        ctx: &SettingsCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            SettingsEvent::Panel(event) => self.reduce_panel(event, ctx),
            SettingsEvent::Reload => request_reload(ctx),
            SettingsEvent::ReloadLoaded(settings) => {
                self.state.replace_with_settings(settings.clone());
                Task::done(AppEvent::SettingsApplied(settings))
            },
            SettingsEvent::KeyValidated(valid) => {
                self.state.set_validation(if valid {
                    KeyValidation::Valid
                } else {
                    KeyValidation::Invalid
                });
                Task::none()
            },
            SettingsEvent::SaveCompleted(settings) => {
                self.state.mark_saved(settings.clone());
                Task::done(AppEvent::SettingsApplied(settings))
            },
            SettingsEvent::SaveFailed(message) => {
                log::warn!("settings save failed: {message}");
                Task::none()
            },
        }
    }
}

fn request_reload(ctx: &SettingsCtx<'_>) -> Task<AppEvent> {
    let store = Arc::clone(ctx.config);

    Task::perform(
        async move { load_settings(store.as_ref()) },
        |settings| AppEvent::Settings(SettingsEvent::ReloadLoaded(settings)),
    )
}

fn request_save(
    ctx: &SettingsCtx<'_>,
    draft: SettingsData,
) -> Task<AppEvent> {
    let store = Arc::clone(ctx.config);

    Task::perform(
        async move {
            match save_settings(store.as_ref(), &draft) {
                Ok(()) => Ok(draft),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(settings) => {
                AppEvent::Settings(SettingsEvent::SaveCompleted(settings))
            },
            Err(message) => {
                AppEvent::Settings(SettingsEvent::SaveFailed(message))
            },
        },
    )
}
