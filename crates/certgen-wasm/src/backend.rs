//! `fetch`-backed layout persistence.

use certgen_core::{EditorConfig, EditorError, Layout};
use certgen_editor::persist::{LayoutBackend, SaveResponse};
use gloo_net::http::Request;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    save_url: String,
    load_url: String,
}

impl HttpBackend {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            save_url: config.save_url.clone(),
            load_url: config.saved_layout_url.clone(),
        }
    }
}

impl LayoutBackend for HttpBackend {
    async fn save(&self, payload: String) -> Result<SaveResponse, EditorError> {
        let resp = Request::post(&self.save_url)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|e| EditorError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| EditorError::Network(e.to_string()))?;
        // Error replies carry a JSON status/message too, so decode regardless
        // of the HTTP status.
        resp.json::<SaveResponse>()
            .await
            .map_err(|e| EditorError::Decode(format!("HTTP {}: {e}", resp.status())))
    }

    async fn load(&self) -> Result<Option<Layout>, EditorError> {
        let resp = Request::get(&self.load_url)
            .send()
            .await
            .map_err(|e| EditorError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(EditorError::NotFound);
        }
        let text = resp
            .text()
            .await
            .map_err(|e| EditorError::Decode(e.to_string()))?;
        Layout::from_json(&text).map(Some)
    }
}
