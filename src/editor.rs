//! Editor Host Seam
//!
//! Abstracts the host editor surface the pipeline reads from and writes to.
//! The real host (VS Code, a terminal, a test fixture) implements
//! [`EditorHost`]; everything above this trait is host-agnostic.

use crate::error::ApplyFailure;
use async_trait::async_trait;

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Snapshot of the active document, taken at validation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    /// Raw content of the current selection (may be empty)
    pub selection_text: String,
    /// The editor's declared language of the document
    pub language_id: String,
}

/// Trait for editor hosts
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Current document and selection, or `None` when no editor is active.
    ///
    /// An empty `selection_text` is a valid answer and is distinct from
    /// having no active editor at all.
    fn active_document(&self) -> Option<DocumentContext>;

    /// Insert `text` immediately after the end of the current selection
    async fn insert_after_selection(&self, text: &str) -> Result<(), ApplyFailure>;

    /// Open a new, unsaved display surface with the given content and
    /// syntax mode, and bring it into focus
    async fn open_display(&self, content: &str, format: &str) -> Result<(), ApplyFailure>;

    /// Show a user-visible notification
    fn notify(&self, severity: Severity, message: &str);
}
