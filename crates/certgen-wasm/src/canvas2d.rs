//! Canvas2D drawing surface.
//!
//! Adapts an HTML `<canvas>` 2D context to the renderer's `Surface`. Canvas
//! calls that can throw are logged and skipped; a failed label must not
//! abort the rest of the frame.

use certgen_render::Surface;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Surface for CanvasSurface<'_> {
    type Image = HtmlImageElement;

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement) {
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            0.0,
            0.0,
            self.width,
            self.height,
        ) {
            log::warn!("drawImage failed: {e:?}");
        }
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            log::warn!("fillText {text:?} failed: {e:?}");
        }
    }
}
