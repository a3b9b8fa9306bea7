/// Author of one transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        }
    }
}

/// One line of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChatEntry {
    role: ChatRole,
    text: String,
}

impl ChatEntry {
    pub(crate) fn user(text: String) -> Self {
        Self {
            role: ChatRole::User,
            text,
        }
    }

    pub(crate) fn assistant(text: String) -> Self {
        Self {
            role: ChatRole::Assistant,
            text,
        }
    }

    pub(crate) fn role(&self) -> ChatRole {
        self.role
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}
