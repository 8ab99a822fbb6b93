//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. Uses
//! platform-aware modifier detection: on macOS `meta` is ⌘, elsewhere
//! `ctrl` plays the same role.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Remove the last placement.
    Undo,
    /// Persist the layout.
    Save,
    /// Close the certificate modal.
    Dismiss,
}

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Escape"`).
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if cmd && !shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "s" | "S" => Some(ShortcutAction::Save),
                _ => None,
            };
        }

        match key {
            "Escape" | "Esc" => Some(ShortcutAction::Dismiss),
            _ => None,
        }
    }
}
