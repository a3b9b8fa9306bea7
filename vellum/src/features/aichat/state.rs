use super::model::ChatEntry;

/// Chat panel state: the transcript plus one in-flight exchange.
#[derive(Debug)]
pub(crate) struct AichatState {
    transcript: Vec<ChatEntry>,
    draft: String,
    busy: bool,
    last_error: Option<String>,
}

impl AichatState {
    pub(crate) fn new() -> Self {
        Self {
            transcript: Vec::new(),
            draft: String::new(),
            busy: false,
            last_error: None,
        }
    }

    pub(crate) fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub(crate) fn draft(&self) -> &str {
        &self.draft
    }

    pub(crate) fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Append the user's prompt and mark the exchange in flight.
    pub(crate) fn begin_exchange(&mut self, prompt: String) {
        self.transcript.push(ChatEntry::user(prompt));
        self.draft.clear();
        self.busy = true;
        self.last_error = None;
    }

    /// Record the assistant reply for the exchange in flight.
    pub(crate) fn complete_exchange(&mut self, reply: String) {
        self.transcript.push(ChatEntry::assistant(reply));
        self.busy = false;
    }

    /// Record a failed exchange without touching the transcript.
    pub(crate) fn fail_exchange(&mut self, message: String) {
        self.last_error = Some(message);
        self.busy = false;
    }
}
