//! Saving and restoring layouts.
//!
//! The transport lives behind [`LayoutBackend`] so the browser bridge can
//! plug in `fetch` while tests use an in-memory backend. Requests are
//! fire-and-forget: no retry, no timeout. The payload is serialized before
//! the request goes out, so the editor is never borrowed across an await.

use crate::notice::{Notice, SAVE_FAILED, SAVE_OK};
use certgen_core::{EditorError, Layout};
use serde::Deserialize;

/// Body of the save endpoint's reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl SaveResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Where layouts are persisted. Futures run on the UI thread and need
/// not be `Send`.
#[allow(async_fn_in_trait)]
pub trait LayoutBackend {
    /// Send the serialized layout. Transport or decode failures are errors;
    /// a decoded non-success status is not.
    async fn save(&self, payload: String) -> Result<SaveResponse, EditorError>;

    /// Fetch the previously saved layout. `Ok(None)` when there is none.
    async fn load(&self) -> Result<Option<Layout>, EditorError>;
}

/// Send `payload` (from `LayoutEditor::save_payload`) and turn the outcome
/// into a notice. An `Err` payload never reaches the backend.
pub async fn save_layout<B: LayoutBackend>(
    backend: &B,
    payload: Result<String, EditorError>,
) -> Notice {
    let payload = match payload {
        Ok(payload) => payload,
        Err(e) => return Notice::for_error(&e).unwrap_or_else(|| Notice::error(SAVE_FAILED)),
    };

    match backend.save(payload).await {
        Ok(resp) if resp.is_success() => {
            log::info!("layout saved");
            Notice::info(SAVE_OK)
        }
        Ok(resp) => {
            let message = resp.message.unwrap_or_default();
            log::warn!("layout save rejected: status={} message={message}", resp.status);
            Notice::error(format!("Error saving layout: {message}"))
        }
        Err(e) => {
            log::error!("layout save failed: {e}");
            Notice::error(SAVE_FAILED)
        }
    }
}

/// Fetch the saved layout. Any failure counts as "nothing saved".
pub async fn load_saved_layout<B: LayoutBackend>(backend: &B) -> Option<Layout> {
    match backend.load().await {
        Ok(layout) => layout,
        Err(e) => {
            log::debug!("no saved layout: {e}");
            None
        }
    }
}
