use std::sync::Arc;

use iced::Task;
use vellum_ai::{ConfigStore, create_ai_service};

use super::event::AichatEvent;
use super::state::AichatState;
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::ui::widgets::aichat_panel;

const MISSING_PROVIDER_HINT: &str =
    "No AI provider configured. Add an API key in Settings.";

/// Dependencies the chat feature resolves per reduction.
pub(crate) struct AichatCtx<'a> {
    pub(crate) config: &'a Arc<dyn ConfigStore>,
}

/// AI chat feature owning the transcript and request lifecycle.
pub(crate) struct AichatFeature {
    state: AichatState,
}

impl AichatFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: AichatState::new(),
        }
    }

    pub(crate) fn state(&self) -> &AichatState {
        &self.state
    }

    fn send_draft(&mut self, ctx: &AichatCtx<'_>) -> Task<AppEvent> {
        let prompt = self.state.draft().trim().to_string();
        if prompt.is_empty() || self.state.is_busy() {
            return Task::none();
        }

        self.state.begin_exchange(prompt.clone());

        // The service is rebuilt per exchange so provider or key edits
        // in the settings panel apply to the very next message.
        let Some(service) = create_ai_service(ctx.config.as_ref()) else {
            self.state.fail_exchange(String::from(MISSING_PROVIDER_HINT));
            return Task::none();
        };

        Task::perform(
            async move {
                service
                    .generate_content(&prompt, None)
                    .await
                    .map_err(|err| err.to_string())
            },
            |result| AppEvent::Aichat(AichatEvent::Completed(result)),
        )
    }
}

impl Feature for AichatFeature {
    type Event = AichatEvent;
    type Ctx<'a>
        = AichatCtx<'a>
    where
        Self: 'a;

    fn reduce<'a>(
        &mut self,
        event: AichatEvent,
        ctx: &AichatCtx<'a>,
    ) -> Task<AppEvent> {
        match event {
            AichatEvent::Panel(aichat_panel::AichatPanelEvent::DraftChanged(
                draft,
            )) => {
                self.state.set_draft(draft);
                Task::none()
            },
            AichatEvent::Panel(aichat_panel::AichatPanelEvent::SendPressed) => {
                self.send_draft(ctx)
            },
            AichatEvent::Completed(Ok(reply)) => {
                self.state.complete_exchange(reply);
                Task::none()
            },
            AichatEvent::Completed(Err(message)) => {
                log::warn!("AI chat generation failed: {message}");
                self.state.fail_exchange(message);
                Task::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vellum_ai::{
        ConfigStore, MemoryConfigStore, Provider, set_api_key, set_provider,
    };

    use super::{AichatCtx, AichatFeature};
    use crate::features::Feature;
    use crate::features::aichat::{AichatEvent, ChatRole};
    use crate::ui::widgets::aichat_panel;

    fn empty_ctx_store() -> Arc<dyn ConfigStore> {
        Arc::new(MemoryConfigStore::default())
    }

    fn configured_store() -> Arc<dyn ConfigStore> {
        let store = MemoryConfigStore::default();
        set_provider(&store, Provider::Gemini)
            .expect("provider should be stored");
        set_api_key(&store, "gemini", "k-123")
            .expect("api key should be stored");
        Arc::new(store)
    }

    fn type_draft(
        feature: &mut AichatFeature,
        store: &Arc<dyn ConfigStore>,
        text: &str,
    ) {
        let _task = feature.reduce(
            AichatEvent::Panel(aichat_panel::AichatPanelEvent::DraftChanged(
                String::from(text),
            )),
            &AichatCtx { config: store },
        );
    }

    fn press_send(feature: &mut AichatFeature, store: &Arc<dyn ConfigStore>) {
        let _task = feature.reduce(
            AichatEvent::Panel(aichat_panel::AichatPanelEvent::SendPressed),
            &AichatCtx { config: store },
        );
    }

    #[test]
    fn given_blank_draft_when_sending_then_nothing_happens() {
        let store = configured_store();
        let mut feature = AichatFeature::new();
        type_draft(&mut feature, &store, "   ");

        press_send(&mut feature, &store);

        assert!(feature.state().transcript().is_empty());
        assert!(!feature.state().is_busy());
    }

    #[test]
    fn given_configured_provider_when_sending_then_exchange_begins() {
        let store = configured_store();
        let mut feature = AichatFeature::new();
        type_draft(&mut feature, &store, "  explain lifetimes  ");

        press_send(&mut feature, &store);

        let transcript = feature.state().transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role(), ChatRole::User);
        assert_eq!(transcript[0].text(), "explain lifetimes");
        assert_eq!(feature.state().draft(), "");
        assert!(feature.state().is_busy());
    }

    #[test]
    fn given_missing_provider_when_sending_then_hint_replaces_request() {
        let store = empty_ctx_store();
        let mut feature = AichatFeature::new();
        type_draft(&mut feature, &store, "hello");

        press_send(&mut feature, &store);

        assert_eq!(feature.state().transcript().len(), 1);
        assert!(!feature.state().is_busy());
        let hint = feature.state().last_error().unwrap_or_default();
        assert!(hint.contains("No AI provider configured"));
    }

    #[test]
    fn given_busy_exchange_when_sending_again_then_second_send_ignored() {
        let store = configured_store();
        let mut feature = AichatFeature::new();
        type_draft(&mut feature, &store, "first");
        press_send(&mut feature, &store);

        type_draft(&mut feature, &store, "second");
        press_send(&mut feature, &store);

        assert_eq!(feature.state().transcript().len(), 1);
        assert_eq!(feature.state().draft(), "second");
    }

    #[test]
    fn given_successful_reply_when_completed_then_transcript_grows() {
        let store = configured_store();
        let mut feature = AichatFeature::new();
        type_draft(&mut feature, &store, "hello");
        press_send(&mut feature, &store);

        let _task = feature.reduce(
            AichatEvent::Completed(Ok(String::from("hi there"))),
            &AichatCtx { config: &store },
        );

        let transcript = feature.state().transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[1].role(), ChatRole::Assistant);
        assert!(!feature.state().is_busy());
    }

    #[test]
    fn given_failed_reply_when_completed_then_error_is_surfaced() {
        let store = configured_store();
        let mut feature = AichatFeature::new();
        type_draft(&mut feature, &store, "hello");
        press_send(&mut feature, &store);

        let _task = feature.reduce(
            AichatEvent::Completed(Err(String::from(
                "AI provider returned 401: API key not valid",
            ))),
            &AichatCtx { config: &store },
        );

        assert_eq!(feature.state().transcript().len(), 1);
        assert!(!feature.state().is_busy());
        let error = feature.state().last_error().unwrap_or_default();
        assert!(error.contains("401"));
    }
}
