//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title/tabs row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Footer height: status line + key hints
pub const FOOTER_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, server URL and tab bar
    pub header: Rect,

    /// Content of the active tab
    pub body: Rect,

    /// Status line and key hints
    pub footer: Rect,
}

/// Split the terminal into header, body and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}
