//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ztp_app::message::Message;
use ztp_app::InputKey;
use ztp_core::prelude::*;

/// Poll interval; a quiet interval produces one [`Message::Tick`]
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c.to_ascii_lowercase()))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Messages for one terminal event
pub fn event_to_messages(event: Event) -> Vec<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_event_to_input(key)
            .map(Message::Key)
            .into_iter()
            .collect(),
        // Pasted paths and URLs arrive as typed characters; newlines are dropped
        // so a paste never submits a prompt by itself
        Event::Paste(text) => text
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .map(|c| Message::Key(InputKey::Char(c)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Vec<Message>> {
    if event::poll(TICK_INTERVAL)? {
        Ok(event_to_messages(event::read()?))
    } else {
        Ok(vec![Message::Tick])
    }
}
