//! Files tab: in-flight uploads above the served file table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use ztp_app::files_state::{FilesState, UploadRow};

use crate::theme::{palette, styles};

/// Width of the size column
const SIZE_WIDTH: usize = 12;

pub struct FilesPanel<'a> {
    files: &'a FilesState,
    upload_folder: &'a str,
}

impl<'a> FilesPanel<'a> {
    pub fn new(files: &'a FilesState, upload_folder: &'a str) -> Self {
        Self {
            files,
            upload_folder,
        }
    }

    fn render_upload(&self, row: &UploadRow, selected: bool, area: Rect, buf: &mut Buffer) {
        let [label_area, gauge_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let style = if selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        Paragraph::new(Line::from(vec![
            Span::styled("↑ ", styles::accent()),
            Span::styled(row.name.clone(), style),
        ]))
        .render(label_area, buf);

        Gauge::default()
            .gauge_style(Style::default().fg(palette::STATUS_GREEN))
            .percent(row.percent.min(100))
            .label(format!("{}%", row.percent))
            .render(gauge_area, buf);
    }

    fn file_lines(&self) -> Vec<Line<'static>> {
        let offset = self.files.uploads.len();
        self.files
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if self.files.selected == offset + i {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$}  ", entry.size, width = SIZE_WIDTH),
                        styles::text_secondary(),
                    ),
                    Span::styled(entry.file.clone(), style),
                ])
            })
            .collect()
    }
}

impl Widget for FilesPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let folder = if self.upload_folder.is_empty() {
            "(root)"
        } else {
            self.upload_folder
        };
        let title = if self.files.loading {
            " Files (loading…) ".to_string()
        } else {
            format!(" Files ─ upload folder: {folder} ")
        };
        let block = styles::glass_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let uploads_height = (self.files.uploads.len() as u16).min(inner.height / 2);
        let [uploads_area, header_area, table_area] = Layout::vertical([
            Constraint::Length(uploads_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        for (i, row) in self
            .files
            .uploads
            .iter()
            .enumerate()
            .take(uploads_height as usize)
        {
            let row_area = Rect {
                y: uploads_area.y + i as u16,
                height: 1,
                ..uploads_area
            };
            self.render_upload(row, self.files.selected == i, row_area, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{:>width$}  ", "Size", width = SIZE_WIDTH),
                styles::text_muted(),
            ),
            Span::styled("Name", styles::text_muted()),
        ]))
        .render(header_area, buf);

        if self.files.entries.is_empty() {
            Paragraph::new(Span::styled("  No files uploaded", styles::text_muted()))
                .render(table_area, buf);
            return;
        }

        let height = table_area.height as usize;
        let selected_file = self
            .files
            .selected
            .saturating_sub(self.files.uploads.len());
        let offset = (selected_file + 1).saturating_sub(height);
        Paragraph::new(self.file_lines())
            .scroll((offset as u16, 0))
            .render(table_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ztp_core::FileEntry;

    fn entry(name: &str, size: &str) -> FileEntry {
        FileEntry {
            file: name.to_string(),
            size: size.to_string(),
        }
    }

    #[test]
    fn test_renders_file_table() {
        let mut files = FilesState::default();
        files.set_entries(vec![entry("a.bin", "1024"), entry("base.cfg", "77")]);

        let mut term = TestTerminal::new();
        term.render_widget(FilesPanel::new(&files, ""), term.area());

        assert!(term.buffer_contains("a.bin"));
        assert!(term.buffer_contains("base.cfg"));
        assert!(term.buffer_contains("1024"));
        assert!(term.buffer_contains("upload folder: (root)"));
    }

    #[test]
    fn test_renders_upload_progress() {
        let mut files = FilesState::default();
        let id = files.start_upload("image.bin");
        files.set_progress(id, 42);

        let mut term = TestTerminal::new();
        term.render_widget(FilesPanel::new(&files, "images"), term.area());

        assert!(term.buffer_contains("image.bin"));
        assert!(term.buffer_contains("42%"));
        assert!(term.buffer_contains("upload folder: images"));
    }

    #[test]
    fn test_empty_listing() {
        let files = FilesState::default();
        let mut term = TestTerminal::new();
        term.render_widget(FilesPanel::new(&files, ""), term.area());
        assert!(term.buffer_contains("No files uploaded"));
    }

    #[test]
    fn test_loading_title() {
        let mut files = FilesState::default();
        files.loading = true;
        let mut term = TestTerminal::new();
        term.render_widget(FilesPanel::new(&files, ""), term.area());
        assert!(term.buffer_contains("loading"));
    }
}
