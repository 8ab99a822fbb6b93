//! Drawing surface abstraction.
//!
//! `redraw` only needs a handful of Canvas2D-style calls. The browser
//! bridge implements them on a real `<canvas>`; `DisplayList` records them
//! so rendering can be checked without a browser.

/// A 2D target that can show a background image and text labels.
pub trait Surface {
    /// Decoded image type this surface can draw.
    type Image;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Draw `image` stretched over the whole surface.
    fn draw_image(&mut self, image: &Self::Image);

    /// CSS font shorthand, e.g. `20px Arial`.
    fn set_font(&mut self, font: &str);

    /// CSS colour for subsequent text.
    fn set_fill(&mut self, color: &str);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Image { name: String, width: f64, height: f64 },
    Font(String),
    Fill(String),
    Text { text: String, x: f64, y: f64 },
}

/// Recording surface. Images are identified by name.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Ops since the last `Clear`, i.e. what is currently visible.
    pub fn visible(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Text labels currently visible, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.visible()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DisplayList {
    type Image = String;

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_image(&mut self, image: &String) {
        self.ops.push(DrawOp::Image {
            name: image.clone(),
            width: self.width,
            height: self.height,
        });
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }

    fn set_fill(&mut self, color: &str) {
        self.ops.push(DrawOp::Fill(color.to_string()));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
}
