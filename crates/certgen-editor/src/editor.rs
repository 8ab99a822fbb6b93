//! Field placement controller.
//!
//! `LayoutEditor` owns the layout and its undo history. The platform layer
//! holds one instance and calls into it from its event handlers; nothing
//! here touches the DOM or the network.
//!
//! Placement rules:
//! - names are trimmed and stripped of `(` / `)` before use as keys
//! - `signature` (any case) never overwrites: each click claims the first
//!   free `signature1_pos<k>` slot
//! - any other name is stored as-is, last write wins
//! - every placement pushes its key onto the history, so repeated names
//!   appear more than once there

use crate::history::History;
use certgen_core::signature::{is_signature_request, next_free_position};
use certgen_core::{EditorError, FieldKey, Layout, Position};
use certgen_render::{RenderTheme, Surface};

/// Logical signature that new signature placements attach to.
const SIGNATURE_ID: u32 = 1;

#[derive(Debug, Clone, Default)]
pub struct LayoutEditor {
    layout: Layout,
    history: History,
}

impl LayoutEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Record `name` at `(x, y)`. Returns the key it was stored under.
    pub fn place_field(&mut self, name: &str, x: f64, y: f64) -> Result<FieldKey, EditorError> {
        let name = sanitize_field_name(name)?;
        let key = if is_signature_request(&name) {
            let position = next_free_position(SIGNATURE_ID, |k| self.layout.contains(k));
            FieldKey::signature_slot(SIGNATURE_ID, position)
        } else {
            FieldKey::intern(&name)
        };

        self.layout.insert(key, Position::new(x, y));
        self.history.push(key);
        log::debug!("placed {key} at ({x}, {y})");
        Ok(key)
    }

    /// Remove the most recent placement. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<FieldKey> {
        let key = self.history.pop()?;
        if self.layout.remove(key).is_none() {
            log::debug!("undo {key}: already removed by a later undo");
        }
        Some(key)
    }

    /// Merge a previously saved layout. Every restored key becomes undoable.
    /// Returns how many entries were merged.
    pub fn restore(&mut self, saved: Layout) -> usize {
        let mut restored = 0;
        for (key, pos) in saved.iter() {
            self.layout.insert(key, pos);
            self.history.push(key);
            restored += 1;
        }
        if restored > 0 {
            log::info!("restored {restored} saved fields");
        }
        restored
    }

    /// Repaint the whole layout over `background`. Read-only.
    pub fn redraw<S: Surface>(
        &self,
        surface: &mut S,
        background: Option<&S::Image>,
        theme: &RenderTheme,
    ) {
        certgen_render::redraw(surface, background, &self.layout, theme);
    }

    /// JSON body for the save request. Refuses an empty layout so no
    /// request is made.
    pub fn save_payload(&self) -> Result<String, EditorError> {
        if self.layout.is_empty() {
            return Err(EditorError::EmptyLayout);
        }
        self.layout.to_json()
    }

    /// Guidance shown when the user announces a field before clicking.
    pub fn placement_hint(&self, raw: &str) -> Result<String, EditorError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EditorError::EmptyFieldName);
        }
        if trimmed.eq_ignore_ascii_case("signature") {
            let next = self.layout.signature_count() + 1;
            Ok(format!(
                "Now click on the canvas where you want to place Signature {next}. \
                 You can add multiple signatures by typing \"signature\" again and \
                 clicking different positions."
            ))
        } else {
            Ok(format!(
                "Now click on the canvas where you want to place the '{trimmed}' text."
            ))
        }
    }
}

/// Trim and strip literal parentheses. Rejects names that end up empty.
pub fn sanitize_field_name(raw: &str) -> Result<String, EditorError> {
    let stripped: String = raw.trim().chars().filter(|c| !matches!(c, '(' | ')')).collect();
    let name = stripped.trim();
    if name.is_empty() {
        return Err(EditorError::EmptyFieldName);
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(editor: &LayoutEditor) -> Vec<&str> {
        editor.layout().keys().map(|k| k.as_str()).collect()
    }

    #[test]
    fn sanitize_strips_parentheses_and_whitespace() {
        assert_eq!(sanitize_field_name("  (name) ").unwrap(), "name");
        assert_eq!(sanitize_field_name("date (DD/MM)").unwrap(), "date DD/MM");
        assert_eq!(sanitize_field_name("()"), Err(EditorError::EmptyFieldName));
        assert_eq!(sanitize_field_name("   "), Err(EditorError::EmptyFieldName));
        assert_eq!(sanitize_field_name(""), Err(EditorError::EmptyFieldName));
    }

    #[test]
    fn empty_name_is_rejected_without_side_effects() {
        let mut editor = LayoutEditor::new();
        assert_eq!(
            editor.place_field(" ", 1.0, 1.0),
            Err(EditorError::EmptyFieldName)
        );
        assert!(editor.is_empty());
        assert_eq!(editor.history_len(), 0);
    }

    #[test]
    fn signature_request_tolerates_case_and_parentheses() {
        let mut editor = LayoutEditor::new();
        let key = editor.place_field("(Signature)", 100.0, 150.0).unwrap();
        assert_eq!(key.as_str(), "signature1_pos1");
    }

    #[test]
    fn freed_signature_slot_is_reused() {
        let mut editor = LayoutEditor::new();
        for x in [1.0, 2.0, 3.0] {
            editor.place_field("signature", x, 0.0).unwrap();
        }
        editor.undo();
        editor.undo();
        editor.undo();
        editor.place_field("name", 0.0, 0.0).unwrap();
        let key = editor.place_field("signature", 9.0, 9.0).unwrap();
        assert_eq!(key.as_str(), "signature1_pos1");
    }

    #[test]
    fn restored_legacy_signature_does_not_block_new_slots() {
        let mut editor = LayoutEditor::new();
        editor.restore(
            [(FieldKey::intern("signature"), Position::new(1.0, 1.0))]
                .into_iter()
                .collect(),
        );
        let key = editor.place_field("signature", 2.0, 2.0).unwrap();
        assert_eq!(key.as_str(), "signature1_pos1");
        assert_eq!(keys(&editor), vec!["signature", "signature1_pos1"]);
    }

    #[test]
    fn restore_merges_over_existing_entries() {
        let mut editor = LayoutEditor::new();
        editor.place_field("name", 1.0, 1.0).unwrap();
        let saved = Layout::from_json(r#"{"name": [5, 5], "date": [6, 6]}"#).unwrap();

        assert_eq!(editor.restore(saved), 2);
        assert_eq!(keys(&editor), vec!["name", "date"]);
        assert_eq!(
            editor.layout().get(FieldKey::intern("name")),
            Some(Position::new(5.0, 5.0))
        );
        assert_eq!(editor.history_len(), 3);
    }

    #[test]
    fn save_payload_refuses_empty_layout() {
        let editor = LayoutEditor::new();
        assert_eq!(editor.save_payload(), Err(EditorError::EmptyLayout));
    }

    #[test]
    fn placement_hints() {
        let mut editor = LayoutEditor::new();
        assert_eq!(
            editor.placement_hint("event").unwrap(),
            "Now click on the canvas where you want to place the 'event' text."
        );
        editor.place_field("signature", 0.0, 0.0).unwrap();
        assert!(
            editor
                .placement_hint(" SIGNATURE ")
                .unwrap()
                .starts_with("Now click on the canvas where you want to place Signature 2.")
        );
        assert_eq!(
            editor.placement_hint(""),
            Err(EditorError::EmptyFieldName)
        );
    }
}
