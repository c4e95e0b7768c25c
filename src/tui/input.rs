//! Input handling for the search screen.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Every printable character edits the
//! query, so there are no single-letter shortcuts.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.key {
        KeyCode::Char('c') if control => Some(AppMsg::Quit),
        KeyCode::Char('u') if control => Some(AppMsg::ClearQuery),
        KeyCode::Char(_) if control => None,
        KeyCode::Char(character) => Some(AppMsg::InsertChar(character)),
        KeyCode::Esc => Some(AppMsg::Quit),
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::Home => Some(AppMsg::Home),
        KeyCode::End => Some(AppMsg::End),
        _ => None,
    }
}
