use iced::Size;

/// Shared renderer state that does not belong to a single feature.
#[derive(Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self { window_size }
    }
}
