//! Certificate viewer modal state.
//!
//! The results page lists generated certificates as thumbnails whose URLs
//! look like `/static/generated/<session>/<file>`. Opening one shows it full
//! size; the session is recovered from a thumbnail URL since the page does
//! not embed it anywhere else.

use certgen_core::{EditorConfig, generated_image_url, session_id_from_image_url};

/// What the modal should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub student_name: String,
    pub certificate_file: String,
    /// Empty when the session could not be determined.
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

/// Ways the user can dismiss the modal. All of them just close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// Click on the backdrop outside the modal content.
    Backdrop,
    /// The cancel key (Escape).
    CancelKey,
}

#[derive(Debug, Clone, Default)]
pub struct CertificateModal {
    generated_base: String,
    current_file: Option<String>,
    session_id: Option<String>,
    open: bool,
}

impl CertificateModal {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            generated_base: config.generated_base.clone(),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Open `cert_file`. `thumbnail_srcs` are the `src`s of the certificate
    /// thumbnails already on the page; the first one decides the session.
    pub fn open<'a>(
        &mut self,
        cert_file: &str,
        cert_number: &str,
        student_name: &str,
        thumbnail_srcs: impl IntoIterator<Item = &'a str>,
    ) -> ModalView {
        self.current_file = Some(cert_file.to_string());
        self.open = true;

        let session = thumbnail_srcs
            .into_iter()
            .next()
            .and_then(|src| session_id_from_image_url(src, &self.generated_base));

        let image_url = match session {
            Some(session) => {
                let url = generated_image_url(&self.generated_base, &session, cert_file);
                self.session_id = Some(session);
                url
            }
            None => {
                log::error!("could not determine session ID for {cert_file}");
                String::new()
            }
        };

        ModalView {
            title: format!("Certificate {cert_number}"),
            student_name: student_name.to_string(),
            certificate_file: cert_file.to_string(),
            image_url,
        }
    }

    /// Close the modal. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) -> bool {
        log::trace!("dismiss via {trigger:?}");
        self.close()
    }

    /// Link for downloading the current certificate, if both the file and
    /// the session are known.
    pub fn download_target(&self) -> Option<DownloadLink> {
        let file = self.current_file.as_deref()?;
        let session = self.session_id.as_deref()?;
        Some(DownloadLink {
            href: generated_image_url(&self.generated_base, session, file),
            filename: file.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn modal() -> CertificateModal {
        CertificateModal::new(&EditorConfig::default())
    }

    #[test]
    fn open_derives_session_from_first_thumbnail() {
        let mut m = modal();
        let view = m.open(
            "cert_2.png",
            "2",
            "Ada Lovelace",
            ["http://host/static/generated/abc/cert_1.png", "/static/generated/zzz/x.png"],
        );
        assert_eq!(
            view,
            ModalView {
                title: "Certificate 2".into(),
                student_name: "Ada Lovelace".into(),
                certificate_file: "cert_2.png".into(),
                image_url: "/static/generated/abc/cert_2.png".into(),
            }
        );
        assert!(m.is_open());
        assert_eq!(m.session_id(), Some("abc"));
    }

    #[test]
    fn open_without_thumbnails_shows_empty_image() {
        let mut m = modal();
        let view = m.open("cert_1.png", "1", "Grace", std::iter::empty());
        assert_eq!(view.image_url, "");
        assert!(m.is_open());
        assert_eq!(m.download_target(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut m = modal();
        m.open("c.png", "1", "n", ["/static/generated/s/c.png"]);
        assert!(m.dismiss(DismissTrigger::Backdrop));
        assert!(!m.dismiss(DismissTrigger::CancelKey));
        assert!(!m.is_open());
    }
}
