//! Action Result Handler
//!
//! Places a successful result on the editor surface: generated code is
//! inserted after the selection, explanations open a new display surface.

use crate::action::ActionResult;
use crate::editor::EditorHost;
use crate::error::ApplyFailure;

/// Applies an [`ActionResult`] to the editor via the host seam
pub struct ActionResultHandler<'a> {
    host: &'a dyn EditorHost,
}

impl<'a> ActionResultHandler<'a> {
    pub fn new(host: &'a dyn EditorHost) -> Self {
        Self { host }
    }

    /// Apply the result, polymorphic over the variant.
    ///
    /// Insertions are separated from the selection by a blank line, the
    /// way the backend output reads best inline.
    pub async fn apply(&self, result: &ActionResult) -> Result<(), ApplyFailure> {
        match result {
            ActionResult::Insertion { text } => {
                self.host.insert_after_selection(&format!("\n\n{text}")).await
            }
            ActionResult::Display { content, format } => {
                self.host.open_display(content, format).await
            }
        }
    }
}
