//! Header bar with title, tab strip and server URL

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use ztp_app::state::Tab;

use crate::theme::styles;

const APP_TITLE: &str = "ZTP Console";

/// Header showing the app title, tabs, unsaved marker and backend URL
pub struct MainHeader<'a> {
    server_url: &'a str,
    active: Tab,
    dirty: bool,
    busy: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(server_url: &'a str, active: Tab) -> Self {
        Self {
            server_url,
            active,
            dirty: false,
            busy: false,
        }
    }

    /// Mark the profiles as having unsaved edits
    pub fn dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }

    /// Show the request-in-flight indicator
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    fn tab_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for tab in Tab::ALL {
            let label = format!(" {} {} ", tab.position() + 1, tab.title());
            let style = if tab == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::styled(format!(" {APP_TITLE} "), styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
        ];
        left.extend(self.tab_spans());
        if self.dirty {
            left.push(Span::styled("● unsaved", styles::status_yellow()));
        }
        Paragraph::new(Line::from(left)).render(inner, buf);

        // Server URL right-aligned, dropped when it would overlap the tabs
        let mut right = String::new();
        if self.busy {
            right.push_str("↻ ");
        }
        right.push_str(self.server_url);
        right.push(' ');
        let right_width = right.width() as u16;
        let left_width = (APP_TITLE.len() + 4 + Tab::ALL.len() * 14) as u16;
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.right().saturating_sub(right_width),
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(Span::styled(right, styles::text_muted())).render(right_area, buf);
        }
    }
}
