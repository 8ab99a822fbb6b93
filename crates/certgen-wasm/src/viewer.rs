//! Results page: full-size certificate modal with a download action.

use crate::dom;
use crate::init_logging;
use certgen_core::EditorConfig;
use certgen_editor::input::InputEvent;
use certgen_editor::shortcuts::ShortcutAction;
use certgen_editor::viewer::{CertificateModal, DismissTrigger};
use wasm_bindgen::prelude::*;

const MODAL_ID: &str = "certificateModal";
const MODAL_IMAGE_ID: &str = "modalImage";
const MODAL_TITLE_ID: &str = "modalTitle";
const MODAL_STUDENT_ID: &str = "modalStudentName";
const MODAL_NUMBER_ID: &str = "modalCertificateNumber";
const THUMBNAIL_SELECTOR: &str = ".certificate-image";

#[wasm_bindgen]
pub struct CertViewer {
    modal: CertificateModal,
}

#[wasm_bindgen]
impl CertViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CertViewer {
        let config = EditorConfig::default();
        init_logging(config.level_filter());
        CertViewer {
            modal: CertificateModal::new(&config),
        }
    }

    pub fn open_modal(&mut self, cert_file: &str, cert_number: &str, student_name: &str) {
        let thumbnails = dom::image_srcs(THUMBNAIL_SELECTOR);
        let view = self.modal.open(
            cert_file,
            cert_number,
            student_name,
            thumbnails.iter().map(String::as_str),
        );

        dom::set_text(MODAL_TITLE_ID, &view.title);
        dom::set_text(MODAL_STUDENT_ID, &view.student_name);
        dom::set_text(MODAL_NUMBER_ID, &view.certificate_file);
        dom::set_image_src(MODAL_IMAGE_ID, &view.image_url);
        dom::set_display(MODAL_ID, "block");
        dom::set_body_overflow("hidden");
    }

    /// Hide the modal and restore page scrolling. Returns whether it was open.
    pub fn close_modal(&mut self) -> bool {
        let was_open = self.modal.close();
        hide_modal();
        was_open
    }

    /// Download the certificate currently shown. `false` if there is none
    /// or its session is unknown.
    pub fn download_current(&self) -> bool {
        match self.modal.download_target() {
            Some(link) => dom::trigger_download(&link.href, &link.filename),
            None => false,
        }
    }

    /// Window click handler: closes the modal when the backdrop itself
    /// (not its content) was clicked.
    pub fn handle_backdrop_click(&mut self, target_id: &str) -> bool {
        if target_id != MODAL_ID {
            return false;
        }
        let was_open = self.modal.dismiss(DismissTrigger::Backdrop);
        hide_modal();
        was_open
    }

    /// Keydown handler: Escape closes the modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let event = InputEvent::key(key, false, false, false, false);
        if event.shortcut() != Some(ShortcutAction::Dismiss) {
            return false;
        }
        let was_open = self.modal.dismiss(DismissTrigger::CancelKey);
        hide_modal();
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }
}

impl Default for CertViewer {
    fn default() -> Self {
        Self::new()
    }
}

fn hide_modal() {
    dom::set_display(MODAL_ID, "none");
    dom::set_body_overflow("auto");
}
