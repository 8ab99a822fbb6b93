//! Layout → drawing calls.
//!
//! Redraw is from scratch every time: clear, background, then one label per
//! placed field. It reads the layout and never changes it, so calling it
//! twice with the same inputs paints the same frame.

use crate::surface::Surface;
use certgen_core::{FieldKey, Layout, SignatureSlot};

/// Fonts and colours for field labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTheme {
    pub font: &'static str,
    pub color: &'static str,
    pub signature_font: &'static str,
    pub signature_color: &'static str,
}

impl Default for RenderTheme {
    fn default() -> Self {
        Self {
            font: "20px Arial",
            color: "black",
            signature_font: "16px Arial",
            signature_color: "red",
        }
    }
}

/// What gets written at a field's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caption {
    /// Ordinary field, drawn as its name.
    Plain(String),
    /// Signature placeholder, drawn with the signature style.
    Signature(String),
}

impl Caption {
    pub fn text(&self) -> &str {
        match self {
            Caption::Plain(t) | Caption::Signature(t) => t,
        }
    }
}

pub fn caption_for(key: FieldKey) -> Caption {
    match SignatureSlot::of(key) {
        None => Caption::Plain(key.as_str().to_string()),
        Some(SignatureSlot::Multi {
            signature,
            position,
        }) => Caption::Signature(format!("✍️ SIGNATURE {signature} (POS {position})")),
        Some(SignatureSlot::Legacy { signature }) => {
            Caption::Signature(format!("✍️ SIGNATURE {signature}"))
        }
        Some(SignatureSlot::Other { suffix }) => {
            Caption::Signature(format!("✍️ SIGNATURE {suffix}"))
        }
    }
}

/// Repaint `surface` from `layout` over an optional background image.
pub fn redraw<S: Surface>(
    surface: &mut S,
    background: Option<&S::Image>,
    layout: &Layout,
    theme: &RenderTheme,
) {
    surface.clear();
    if let Some(image) = background {
        surface.draw_image(image);
    }

    surface.set_font(theme.font);
    surface.set_fill(theme.color);
    for (key, pos) in layout.iter() {
        match caption_for(key) {
            Caption::Plain(text) => surface.fill_text(&text, pos.x, pos.y),
            Caption::Signature(text) => {
                surface.set_fill(theme.signature_color);
                surface.set_font(theme.signature_font);
                surface.fill_text(&text, pos.x, pos.y);
                surface.set_fill(theme.color);
                surface.set_font(theme.font);
            }
        }
    }
    log::trace!("redraw: {} labels", layout.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawOp};
    use certgen_core::Position;
    use pretty_assertions::assert_eq;

    fn key(s: &str) -> FieldKey {
        FieldKey::intern(s)
    }

    #[test]
    fn captions() {
        assert_eq!(caption_for(key("name")), Caption::Plain("name".into()));
        assert_eq!(
            caption_for(key("signature1_pos2")),
            Caption::Signature("✍️ SIGNATURE 1 (POS 2)".into())
        );
        assert_eq!(
            caption_for(key("signature")),
            Caption::Signature("✍️ SIGNATURE 1".into())
        );
        assert_eq!(
            caption_for(key("signature4")),
            Caption::Signature("✍️ SIGNATURE 4".into())
        );
        assert_eq!(
            caption_for(key("signatureX")).text(),
            "✍️ SIGNATURE X"
        );
    }

    #[test]
    fn signature_style_is_restored_after_each_label() {
        let layout: Layout = [
            (key("signature1_pos1"), Position::new(5.0, 6.0)),
            (key("date"), Position::new(7.0, 8.0)),
        ]
        .into_iter()
        .collect();
        let mut list = DisplayList::new(100.0, 50.0);
        redraw(&mut list, None, &layout, &RenderTheme::default());

        assert_eq!(
            list.ops,
            vec![
                DrawOp::Clear,
                DrawOp::Font("20px Arial".into()),
                DrawOp::Fill("black".into()),
                DrawOp::Fill("red".into()),
                DrawOp::Font("16px Arial".into()),
                DrawOp::Text {
                    text: "✍️ SIGNATURE 1 (POS 1)".into(),
                    x: 5.0,
                    y: 6.0
                },
                DrawOp::Fill("black".into()),
                DrawOp::Font("20px Arial".into()),
                DrawOp::Text {
                    text: "date".into(),
                    x: 7.0,
                    y: 8.0
                },
            ]
        );
    }

    #[test]
    fn background_is_drawn_before_labels() {
        let layout: Layout = [(key("name"), Position::new(1.0, 2.0))].into_iter().collect();
        let mut list = DisplayList::new(800.0, 600.0);
        redraw(&mut list, Some(&"template.png".to_string()), &layout, &RenderTheme::default());

        assert_eq!(
            list.ops[1],
            DrawOp::Image {
                name: "template.png".into(),
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(list.texts(), vec!["name"]);
    }
}
