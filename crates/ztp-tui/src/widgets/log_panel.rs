//! Provisioning log table with an optional detail pane

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, Widget, Wrap},
};

use ztp_app::log_state::LogState;
use ztp_core::LogEntry;

use crate::theme::styles;

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(16),
    Constraint::Length(20),
    Constraint::Length(16),
    Constraint::Length(14),
    Constraint::Min(8),
];

pub struct LogPanel<'a> {
    log: &'a LogState,
}

impl<'a> LogPanel<'a> {
    pub fn new(log: &'a LogState) -> Self {
        Self { log }
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let title = if self.log.loading {
            " Log (loading…) ".to_string()
        } else {
            format!(" Log ─ {} entries ", self.log.entries.len())
        };
        let block = styles::glass_block(!self.log.show_detail).title(title);

        if self.log.entries.is_empty() {
            Paragraph::new(Span::styled("  No provisioning requests", styles::text_muted()))
                .block(block)
                .render(area, buf);
            return;
        }

        // Keep the selected row on screen: border (2) + header (1)
        let height = area.height.saturating_sub(3) as usize;
        let offset = (self.log.selected + 1).saturating_sub(height);
        let rows = self
            .log
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, entry)| {
                let style = if i == self.log.selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                let marker = if entry.has_detail() { " …" } else { "" };
                Row::new(vec![
                    entry.ip.clone(),
                    entry.time.clone(),
                    entry.serial.clone(),
                    entry.version.clone(),
                    format!("{}{marker}", entry.status),
                ])
                .style(style)
            });

        let header = Row::new(["IP", "Time", "Serial", "Version", "Status"])
            .style(styles::text_muted());
        Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}

fn detail_lines(entry: &LogEntry) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (label, text) in [("logbuf", &entry.logbuf), ("cli", &entry.cli)] {
        let Some(text) = text.as_deref().filter(|t| !t.is_empty()) else {
            continue;
        };
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(label, styles::accent_bold())));
        lines.extend(
            text.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), styles::text_primary()))),
        );
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No detail for this entry",
            styles::text_muted(),
        )));
    }
    lines
}

impl Widget for LogPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let selected = self.log.selected_entry().filter(|_| self.log.show_detail);
        let Some(entry) = selected else {
            self.render_table(area, buf);
            return;
        };

        let [table_area, detail_area] =
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);
        self.render_table(table_area, buf);

        let title = format!(" {} ─ {} ", entry.serial, entry.time);
        Paragraph::new(detail_lines(entry))
            .block(styles::glass_block(true).title(title))
            .wrap(Wrap { trim: false })
            .render(detail_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn entry(serial: &str, logbuf: Option<&str>) -> LogEntry {
        LogEntry {
            ip: "10.0.0.7".to_string(),
            time: "2024-05-01 10:00".to_string(),
            serial: serial.to_string(),
            version: "17.9.4".to_string(),
            status: "ok".to_string(),
            logbuf: logbuf.map(str::to_string),
            cli: None,
        }
    }

    #[test]
    fn test_renders_entries() {
        let mut log = LogState::default();
        log.set_entries(vec![entry("FOC1234", None), entry("FOC5678", None)]);

        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(LogPanel::new(&log), term.area());

        assert!(term.buffer_contains("Serial"));
        assert!(term.buffer_contains("FOC1234"));
        assert!(term.buffer_contains("FOC5678"));
        assert!(term.buffer_contains("2 entries"));
    }

    #[test]
    fn test_detail_pane_shows_logbuf() {
        let mut log = LogState::default();
        log.set_entries(vec![entry("FOC1234", Some("booting\ninstalling image"))]);
        log.toggle_detail();

        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(LogPanel::new(&log), term.area());

        assert!(term.buffer_contains("logbuf"));
        assert!(term.buffer_contains("installing image"));
    }

    #[test]
    fn test_detail_hidden_until_toggled() {
        let mut log = LogState::default();
        log.set_entries(vec![entry("FOC1234", Some("booting"))]);

        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(LogPanel::new(&log), term.area());

        assert!(!term.buffer_contains("booting"));
    }

    #[test]
    fn test_empty_log() {
        let log = LogState::default();
        let mut term = TestTerminal::new();
        term.render_widget(LogPanel::new(&log), term.area());
        assert!(term.buffer_contains("No provisioning requests"));
    }
}
