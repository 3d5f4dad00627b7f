//! Hotkey system
//!
//! Maps key events on the page to semantic actions.
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// Actions that can be triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Close the header menu.
    CloseMenu,
}

/// Page state that decides which hotkeys are live.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether the header menu panel is open
    pub menu_open: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
}

/// Turn a DOM `KeyboardEvent.key` name into a [`Key`].
pub fn key_from_name(name: &str) -> Key {
    match name {
        "Escape" | "Esc" => Key::Escape,
        "Enter" => Key::Enter,
        "Tab" => Key::Tab,
        other => Key::Character(other.to_string()),
    }
}

pub fn handle_hotkey(key: &Key, context: &HotkeyContext) -> HotkeyResult {
    match key {
        Key::Escape if context.menu_open => HotkeyResult::Action(HotkeyAction::CloseMenu),
        _ => HotkeyResult::NoMatch,
    }
}
