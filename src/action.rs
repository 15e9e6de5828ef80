//! Action Data Model
//!
//! Normalized description of one user-triggered editor action and its
//! outcome. All values here are transient: one set per invocation,
//! discarded when the invocation finishes.

use serde::{Deserialize, Serialize};

/// The two editor commands, as a closed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    GenerateCode,
    ExplainCode,
}

impl ActionKind {
    /// Informational prompt shown when the selection is empty
    pub fn empty_selection_prompt(&self) -> &'static str {
        match self {
            ActionKind::GenerateCode => "Please select some text to generate code",
            ActionKind::ExplainCode => "Please select some code to explain",
        }
    }

    /// Status shown when the remote call starts
    pub fn progress_message(&self) -> &'static str {
        match self {
            ActionKind::GenerateCode => "Generating code...",
            ActionKind::ExplainCode => "Explaining code...",
        }
    }

    /// Status shown after the result has been applied
    pub fn completion_message(&self) -> &'static str {
        match self {
            ActionKind::GenerateCode => "Code generated successfully!",
            ActionKind::ExplainCode => "Code explanation generated!",
        }
    }

    /// Prefix for remote failure notifications
    pub fn error_prefix(&self) -> &'static str {
        match self {
            ActionKind::GenerateCode => "Error generating code",
            ActionKind::ExplainCode => "Error explaining code",
        }
    }
}

/// One validated user action, ready to send to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub kind: ActionKind,
    pub input_text: String,
    pub language_id: String,
}

impl ActionRequest {
    /// Build a request from the raw selection content.
    ///
    /// Construction is the validation point: the selection is trimmed and
    /// `None` is returned when nothing remains, so no `ActionRequest` ever
    /// carries empty input.
    pub fn from_selection(kind: ActionKind, selection: &str, language_id: &str) -> Option<Self> {
        let input_text = selection.trim();
        if input_text.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            input_text: input_text.to_string(),
            language_id: language_id.to_string(),
        })
    }
}

/// Outcome of a successful remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Text to insert after the selection end (GenerateCode)
    Insertion { text: String },
    /// Content for a new display surface (ExplainCode)
    Display { content: String, format: String },
}
