//! WASM bridge for CertGen: exposes the layout editor and the certificate
//! viewer to the pages that host them.
//!
//! Compiled via `wasm-pack build --target web`. Page scripts only forward
//! DOM events (clicks, key presses, file picks) to `CertEditor` /
//! `CertViewer`; all state lives on the Rust side.

mod backend;
mod canvas2d;
mod dom;
mod viewer;

pub use viewer::CertViewer;

use backend::HttpBackend;
use canvas2d::CanvasSurface;
use certgen_core::{Bootstrap, EditorConfig};
use certgen_editor::editor::LayoutEditor;
use certgen_editor::input::InputEvent;
use certgen_editor::notice::{Notice, RESTORED_FIELDS};
use certgen_editor::persist::{load_saved_layout, save_layout};
use certgen_editor::shortcuts::ShortcutAction;
use certgen_editor::template::TemplateLoads;
use certgen_render::RenderTheme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// State shared between the controller and its pending callbacks
/// (image loads, fetches).
struct EditorState {
    editor: LayoutEditor,
    background: Option<HtmlImageElement>,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    theme: RenderTheme,
    loads: TemplateLoads,
    pending: Option<PendingTemplate>,
}

/// Image being fetched for the background, with its callbacks. They stay
/// alive until the next load or `clear_template` replaces them.
struct PendingTemplate {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl PendingTemplate {
    /// Unhook the callbacks so they are never invoked after being dropped.
    fn detach(&self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

impl EditorState {
    fn redraw(&self) {
        let mut surface = CanvasSurface::new(
            &self.ctx,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        self.editor
            .redraw(&mut surface, self.background.as_ref(), &self.theme);
    }

    fn canvas_rect(&self) -> kurbo::Rect {
        let r = self.canvas.get_bounding_client_rect();
        kurbo::Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }
}

/// Controller for the layout editor page.
///
/// Owns the editor state behind `Rc<RefCell<_>>`. Borrows are released
/// before any await, so callbacks never observe a half-applied update.
#[wasm_bindgen]
pub struct CertEditor {
    state: Rc<RefCell<EditorState>>,
    config: EditorConfig,
    bootstrap: Bootstrap,
}

#[wasm_bindgen]
impl CertEditor {
    /// Attach to the `<canvas>` with id `canvas_id` using default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<CertEditor, JsValue> {
        Self::build(canvas_id, EditorConfig::default())
    }

    /// Like `new`, with a JSON object overriding parts of the config.
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<CertEditor, JsValue> {
        let config = EditorConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid editor config: {e}")))?;
        Self::build(canvas_id, config)
    }

    /// Place the field named `field_text` where the user clicked.
    /// Returns `true` if the layout changed.
    pub fn handle_click(&self, client_x: f64, client_y: f64, field_text: &str) -> bool {
        if field_text.trim().is_empty() {
            return false;
        }
        let mut state = self.state.borrow_mut();
        let event = InputEvent::click(client_x, client_y);
        let Some(point) = event.canvas_point(state.canvas_rect()) else {
            return false;
        };
        match state.editor.place_field(field_text, point.x, point.y) {
            Ok(_) => {
                state.redraw();
                true
            }
            Err(e) => {
                log::debug!("click ignored: {e}");
                false
            }
        }
    }

    /// "Add field" button: explain where to click next.
    pub fn add_field(&self, field_text: &str) {
        let message = match self.state.borrow().editor.placement_hint(field_text) {
            Ok(hint) => hint,
            Err(e) => Notice::for_error(&e).map(|n| n.message).unwrap_or_default(),
        };
        dom::alert(&message);
    }

    /// Remove the last placement. Returns `true` if anything was undone.
    pub fn undo(&self) -> bool {
        let mut state = self.state.borrow_mut();
        let undone = state.editor.undo().is_some();
        if undone {
            state.redraw();
        }
        undone
    }

    pub fn redraw(&self) {
        self.state.borrow().redraw();
    }

    /// Persist the layout. Resolves to `true` on success; the outcome is
    /// also shown to the user.
    pub fn save_layout(&self) -> js_sys::Promise {
        let payload = self.state.borrow().editor.save_payload();
        let backend = HttpBackend::new(&self.config);
        future_to_promise(async move {
            let notice = save_layout(&backend, payload).await;
            dom::alert(&notice.message);
            Ok(JsValue::from_bool(!notice.is_error()))
        })
    }

    /// Merge the previously saved layout, if the server has one. Resolves
    /// to the number of restored fields.
    pub fn restore_saved_layout(&self) -> js_sys::Promise {
        let state = Rc::clone(&self.state);
        let backend = HttpBackend::new(&self.config);
        let info_id = self.config.restored_info_id.clone();
        future_to_promise(async move {
            let Some(saved) = load_saved_layout(&backend).await else {
                return Ok(JsValue::from(0u32));
            };
            let restored = state.borrow_mut().editor.restore(saved);
            if restored > 0 {
                state.borrow().redraw();
                dom::show_info(&info_id, RESTORED_FIELDS);
            }
            Ok(JsValue::from(u32::try_from(restored).unwrap_or(u32::MAX)))
        })
    }

    /// Use the image at `src` (URL or data URL) as the template background.
    /// Supersedes any load still in flight: only the latest one is shown.
    pub fn load_template(&self, src: &str) -> Result<(), JsValue> {
        let image = HtmlImageElement::new()?;
        let ticket = self.state.borrow_mut().loads.begin();

        let weak = Rc::downgrade(&self.state);
        let loaded = image.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let mut state = shared.borrow_mut();
            if !state.loads.is_current(ticket) {
                log::debug!("ignoring superseded template load");
                return;
            }
            state.background = Some(loaded.clone());
            state.redraw();
        });
        let src_owned = src.to_string();
        let onerror = Closure::<dyn FnMut()>::new(move || {
            log::warn!("template image failed to load: {src_owned}");
        });
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        image.set_src(src);

        let previous = self.state.borrow_mut().pending.replace(PendingTemplate {
            image,
            _onload: onload,
            _onerror: onerror,
        });
        if let Some(previous) = previous {
            previous.detach();
        }
        Ok(())
    }

    /// Drop the background, cancel any pending load and repaint the labels
    /// alone.
    pub fn clear_template(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.loads.cancel();
            state.background = None;
            state.redraw();
            state.pending.take()
        };
        if let Some(pending) = pending {
            pending.detach();
        }
    }

    /// Handle a key press. Returns the action name, or `"none"`.
    pub fn handle_key(
        &self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        match InputEvent::key(key, ctrl, shift, alt, meta).shortcut() {
            Some(ShortcutAction::Undo) => {
                self.undo();
                "undo".to_string()
            }
            Some(ShortcutAction::Save) => {
                // The promise runs on its own; the notice reports the outcome.
                let _ = self.save_layout();
                "save".to_string()
            }
            Some(ShortcutAction::Dismiss) | None => "none".to_string(),
        }
    }

    /// Current layout as the JSON object sent to the server.
    pub fn layout_json(&self) -> String {
        self.state
            .borrow()
            .editor
            .layout()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    pub fn field_count(&self) -> usize {
        self.state.borrow().editor.layout().len()
    }

    pub fn can_undo(&self) -> bool {
        self.state.borrow().editor.can_undo()
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl CertEditor {
    fn build(canvas_id: &str, config: EditorConfig) -> Result<CertEditor, JsValue> {
        init_logging(config.level_filter());

        let canvas: HtmlCanvasElement = dom::document()
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("#{canvas_id} is not a canvas")))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let bootstrap = Bootstrap::from_embedded(
            dom::element_text(&config.session_data_id).as_deref(),
            dom::element_text(&config.form_data_id).as_deref(),
        );
        log::debug!("session data: {:?}", bootstrap.session);
        log::debug!("form data: {:?}", bootstrap.form);

        let editor = CertEditor {
            state: Rc::new(RefCell::new(EditorState {
                editor: LayoutEditor::new(),
                background: None,
                canvas,
                ctx,
                theme: RenderTheme::default(),
                loads: TemplateLoads::new(),
                pending: None,
            })),
            config,
            bootstrap,
        };
        editor.restore_session_template()?;
        Ok(editor)
    }

    /// Reload the template uploaded earlier in this session, when the page
    /// was reached by coming back from the review step.
    fn restore_session_template(&self) -> Result<(), JsValue> {
        match self.bootstrap.template_url(&self.config.generated_base) {
            Ok(url) => self.load_template(&url),
            Err(e) => {
                log::debug!("no session template to restore: {e}");
                Ok(())
            }
        }
    }
}

// ─── Logging ─────────────────────────────────────────────────────────────

/// Route `log` to the browser console and panics to `console.error`.
/// Safe to call more than once.
fn init_logging(level: log::LevelFilter) {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if let Some(level) = level.to_level() {
            let _ = console_log::init_with_level(level);
        }
        console_error_panic_hook_setup();
    });
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        std::panic::set_hook(Box::new(|info| {
            let msg = format!("CertGen WASM panic: {info}");
            web_sys::console::error_1(&msg.into());
        }));
    }
}
