//! Editor configuration.
//!
//! Defaults match the routes served by the certificate backend; the host
//! page may override any subset by passing a JSON object.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// `POST` endpoint that persists the layout.
    pub save_url: String,
    /// Previously saved layout, fetched on startup.
    pub saved_layout_url: String,
    /// Base path of session-scoped generated images.
    pub generated_base: String,
    /// Element holding the embedded `sessionData` JSON.
    pub session_data_id: String,
    /// Element holding the embedded `formData` JSON.
    pub form_data_id: String,
    /// Element that announces restored fields.
    pub restored_info_id: String,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_url: "/save_layout".to_string(),
            saved_layout_url: "/static/uploads/layout.json".to_string(),
            generated_base: "/static/generated".to_string(),
            session_data_id: "sessionDataJson".to_string(),
            form_data_id: "formDataJson".to_string(),
            restored_info_id: "restoredFieldsInfo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a partial JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = EditorConfig::from_json(r#"{"save_url": "/api/layout", "extra": 1}"#).unwrap();
        assert_eq!(config.save_url, "/api/layout");
        assert_eq!(config.generated_base, "/static/generated");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = EditorConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);

        let config = EditorConfig {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }
}
