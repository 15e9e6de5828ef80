//! Action Orchestrator
//!
//! Drives one editor command from selection to applied result. Each
//! invocation is an independent, linear run: validate the selection,
//! call the backend, place the result, report status. Every failure is
//! absorbed here and surfaced as a single user notification; nothing
//! escapes a command invocation.

use crate::action::{ActionKind, ActionRequest};
use crate::client::ActionClient;
use crate::editor::{EditorHost, Severity};
use crate::handler::ActionResultHandler;
use std::sync::Arc;
use tracing::debug;

/// States of one command invocation. `Error` is absorbing; the rest are
/// passed through in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Calling,
    Applying,
    Done,
    Error,
}

/// Ties client and host together, parameterized by [`ActionKind`]
pub struct ActionOrchestrator {
    client: Arc<dyn ActionClient>,
    host: Arc<dyn EditorHost>,
}

impl ActionOrchestrator {
    pub fn new(client: Arc<dyn ActionClient>, host: Arc<dyn EditorHost>) -> Self {
        Self { client, host }
    }

    /// Run one command invocation to its terminal phase.
    ///
    /// The await on the backend call in `Calling` is the only suspension
    /// point; concurrent invocations own disjoint state, and if two race
    /// their edits land in response-arrival order (last-applied-wins).
    /// There is no cancellation: once the call is in flight it runs to
    /// completion or failure.
    pub async fn run(&self, kind: ActionKind) -> Phase {
        debug!("{:?} -> {:?} ({:?})", Phase::Idle, Phase::Validating, kind);

        let doc = match self.host.active_document() {
            Some(doc) => doc,
            None => {
                self.host.notify(Severity::Error, "No active editor");
                return Phase::Error;
            }
        };

        let request = match ActionRequest::from_selection(kind, &doc.selection_text, &doc.language_id)
        {
            Some(request) => request,
            None => {
                // Benign stop, not a crash: the user just selected nothing
                self.host.notify(Severity::Info, kind.empty_selection_prompt());
                return Phase::Error;
            }
        };

        self.host.notify(Severity::Info, kind.progress_message());

        debug!("{:?} -> {:?}", Phase::Validating, Phase::Calling);
        let result = match self.client.send(&request).await {
            Ok(result) => result,
            Err(failure) => {
                self.host.notify(
                    Severity::Error,
                    &format!("{}: {}", kind.error_prefix(), failure.message),
                );
                return Phase::Error;
            }
        };

        debug!("{:?} -> {:?}", Phase::Calling, Phase::Applying);
        let handler = ActionResultHandler::new(self.host.as_ref());
        if let Err(failure) = handler.apply(&result).await {
            self.host.notify(Severity::Error, &failure.to_string());
            return Phase::Error;
        }

        self.host.notify(Severity::Info, kind.completion_message());
        debug!("{:?} -> {:?}", Phase::Applying, Phase::Done);
        Phase::Done
    }
}
