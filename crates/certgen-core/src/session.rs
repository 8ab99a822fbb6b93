//! Session context supplied by the host page.
//!
//! The server embeds two JSON blobs (`sessionData`, `formData`) in the page.
//! They are parsed once at startup into a typed [`Bootstrap`] and only read
//! afterwards: the session id and template filename are enough to rebuild
//! the URL of a previously uploaded template.

use crate::error::EditorError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use winnow::combinator::terminated;
use winnow::prelude::*;
use winnow::token::take_till;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormData {
    #[serde(default)]
    pub template_filename: Option<String>,
}

/// Parsed host-page context. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bootstrap {
    pub session: Option<SessionData>,
    pub form: Option<FormData>,
}

impl Bootstrap {
    /// Build from the raw text of the embedded JSON nodes. Missing nodes,
    /// empty text, `null`, and invalid JSON all yield `None` for that half.
    pub fn from_embedded(session_json: Option<&str>, form_json: Option<&str>) -> Self {
        Self {
            session: parse_optional(session_json, "sessionData"),
            form: parse_optional(form_json, "formData"),
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.session_id.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn template_filename(&self) -> Option<&str> {
        self.form
            .as_ref()
            .and_then(|f| f.template_filename.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// URL of the template uploaded earlier in this session.
    pub fn template_url(&self, generated_base: &str) -> Result<String, EditorError> {
        let filename = self.template_filename().ok_or(EditorError::NotFound)?;
        let session = self.session_id().ok_or(EditorError::MissingSession)?;
        Ok(generated_image_url(generated_base, session, filename))
    }
}

fn parse_optional<T: DeserializeOwned>(text: Option<&str>, what: &str) -> Option<T> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<Option<T>>(text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring invalid embedded {what}: {e}");
            None
        }
    }
}

/// `<base>/<session>/<file>`
pub fn generated_image_url(generated_base: &str, session_id: &str, filename: &str) -> String {
    format!(
        "{}/{session_id}/{filename}",
        generated_base.trim_end_matches('/')
    )
}

/// Extract the session id from a URL containing `<base>/<session>/...`.
/// The match may start anywhere in the URL, so absolute URLs work too.
pub fn session_id_from_image_url(url: &str, generated_base: &str) -> Option<String> {
    let marker = format!("{}/", generated_base.trim_end_matches('/'));
    let mut rest = url;
    while let Some(idx) = rest.find(&marker) {
        let mut tail = &rest[idx + marker.len()..];
        if let Ok(id) = session_segment.parse_next(&mut tail) {
            return Some(id.to_string());
        }
        rest = &rest[idx + marker.chars().next().map_or(1, char::len_utf8)..];
    }
    None
}

fn session_segment<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    terminated(take_till(1.., '/'), "/").parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "/static/generated";

    #[test]
    fn bootstrap_parses_both_halves() {
        let boot = Bootstrap::from_embedded(
            Some(r#"{"session_id": "abc123", "created": 1}"#),
            Some(r#"{"template_filename": "template.png", "event": "Expo"}"#),
        );
        assert_eq!(boot.session_id(), Some("abc123"));
        assert_eq!(boot.template_filename(), Some("template.png"));
        assert_eq!(
            boot.template_url(BASE).unwrap(),
            "/static/generated/abc123/template.png"
        );
    }

    #[test]
    fn bootstrap_null_empty_and_invalid() {
        let boot = Bootstrap::from_embedded(Some("null"), Some("   "));
        assert_eq!(boot, Bootstrap::default());

        let boot = Bootstrap::from_embedded(Some("{not json"), None);
        assert_eq!(boot.session, None);
    }

    #[test]
    fn template_url_reports_missing_context() {
        let boot = Bootstrap::from_embedded(None, Some(r#"{"template_filename": "t.png"}"#));
        assert_eq!(boot.template_url(BASE), Err(EditorError::MissingSession));

        let boot = Bootstrap::from_embedded(Some(r#"{"session_id": "s"}"#), Some("{}"));
        assert_eq!(boot.template_url(BASE), Err(EditorError::NotFound));
    }

    #[test]
    fn session_id_from_relative_and_absolute_urls() {
        assert_eq!(
            session_id_from_image_url("/static/generated/s-42/cert_1.png", BASE),
            Some("s-42".to_string())
        );
        assert_eq!(
            session_id_from_image_url(
                "http://localhost:5000/static/generated/9f1c/cert_7.png",
                BASE
            ),
            Some("9f1c".to_string())
        );
    }

    #[test]
    fn session_id_with_multibyte_base_skips_empty_match() {
        assert_eq!(
            session_id_from_image_url("ümlaut//ümlaut/s9/cert_1.png", "ümlaut"),
            Some("s9".to_string())
        );
        assert_eq!(session_id_from_image_url("ümlaut//x", "ümlaut"), None);
    }

    #[test]
    fn session_id_requires_trailing_segment() {
        assert_eq!(
            session_id_from_image_url("/static/generated/only", BASE),
            None
        );
        assert_eq!(
            session_id_from_image_url("/static/generated//x.png", BASE),
            None
        );
        assert_eq!(session_id_from_image_url("/static/uploads/a/b.png", BASE), None);
    }

    #[test]
    fn generated_url_tolerates_trailing_slash_in_base() {
        assert_eq!(
            generated_image_url("/static/generated/", "s", "f.png"),
            "/static/generated/s/f.png"
        );
    }
}
