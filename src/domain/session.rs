//! Session-scoped chat history for interactive surfaces.

use serde::{Deserialize, Serialize};

/// A single entry in the session history.
///
/// Append-only: entries are never mutated after insertion. The log is
/// replayed by the presentation layer to render the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChatEntry {
    /// A user request.
    User {
        /// The free-text request.
        text: String,
    },
    /// A generated configuration, rendered as YAML.
    Bot {
        /// Serialized YAML shown to the user.
        yaml: String,
    },
    /// A download artifact for a generated configuration.
    Download {
        /// `data:` URI encoding the serialized document.
        link: String,
    },
}

/// Ordered, append-only log of one session's exchanges.
///
/// Owned explicitly by the session context rather than hidden in global
/// state; lifecycle is created at session start, dropped at session end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLog {
    entries: Vec<ChatEntry>,
}

impl SessionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user request.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(ChatEntry::User { text: text.into() });
    }

    /// Appends a generated YAML response.
    pub fn push_bot(&mut self, yaml: impl Into<String>) {
        self.entries.push(ChatEntry::Bot { yaml: yaml.into() });
    }

    /// Appends a download link.
    pub fn push_download(&mut self, link: impl Into<String>) {
        self.entries.push(ChatEntry::Download { link: link.into() });
    }

    /// Iterates entries in append order.
    pub fn entries(&self) -> impl Iterator<Item = &ChatEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
