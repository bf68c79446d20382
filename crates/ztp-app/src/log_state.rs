//! Provisioning log panel state

use ztp_core::LogEntry;

#[derive(Debug, Clone, Default)]
pub struct LogState {
    pub entries: Vec<LogEntry>,
    pub selected: usize,
    /// Show `logbuf` / `cli` of the selected entry
    pub show_detail: bool,
    pub loading: bool,
}

impl LogState {
    pub fn set_entries(&mut self, entries: Vec<LogEntry>) {
        self.entries = entries;
        self.loading = false;
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = 0;
        self.show_detail = false;
    }

    pub fn selected_entry(&self) -> Option<&LogEntry> {
        self.entries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_detail(&mut self) {
        self.show_detail = !self.show_detail;
    }
}
