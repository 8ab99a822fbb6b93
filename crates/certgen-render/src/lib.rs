pub mod paint;
pub mod surface;

pub use paint::{Caption, RenderTheme, caption_for, redraw};
pub use surface::{DisplayList, DrawOp, Surface};
