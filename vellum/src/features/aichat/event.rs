use crate::ui::widgets::aichat_panel;

/// Events for the AI chat feature: panel input and async replies.
#[derive(Debug, Clone)]
pub(crate) enum AichatEvent {
    Panel(aichat_panel::AichatPanelEvent),
    Completed(Result<String, String>),
}
