//! Terminal Editor Host
//!
//! A minimal [`EditorHost`] for running the pipeline from a shell: the
//! "selection" is whatever text was handed to the process, insertions and
//! display surfaces go to stdout, notifications to stderr.

use crate::editor::{DocumentContext, EditorHost, Severity};
use crate::error::ApplyFailure;
use async_trait::async_trait;
use std::io::Write;

/// Stdio-backed editor host
pub struct StdioHost {
    document: Option<DocumentContext>,
}

impl StdioHost {
    /// Host with an "open document" holding the given selection
    pub fn new(selection_text: String, language_id: String) -> Self {
        Self {
            document: Some(DocumentContext {
                selection_text,
                language_id,
            }),
        }
    }

    fn write_stdout(text: &str) -> Result<(), ApplyFailure> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())
            .and_then(|_| lock.write_all(b"\n"))
            .map_err(|e| ApplyFailure(e.to_string()))
    }
}

#[async_trait]
impl EditorHost for StdioHost {
    fn active_document(&self) -> Option<DocumentContext> {
        self.document.clone()
    }

    async fn insert_after_selection(&self, text: &str) -> Result<(), ApplyFailure> {
        Self::write_stdout(text)
    }

    async fn open_display(&self, content: &str, _format: &str) -> Result<(), ApplyFailure> {
        Self::write_stdout(content)
    }

    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => eprintln!("{message}"),
            Severity::Error => eprintln!("error: {message}"),
        }
    }
}
