//! File panel state: served files and in-flight uploads

use ztp_core::FileEntry;

/// Progress row for one running upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRow {
    pub id: u64,
    pub name: String,
    pub percent: u16,
}

/// Selectable row of the files panel. Uploads are listed above files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilesRow<'a> {
    Upload(&'a UploadRow),
    File(&'a FileEntry),
}

#[derive(Debug, Clone, Default)]
pub struct FilesState {
    pub entries: Vec<FileEntry>,
    pub uploads: Vec<UploadRow>,
    pub selected: usize,
    pub loading: bool,
    next_upload_id: u64,
}

impl FilesState {
    pub fn row_count(&self) -> usize {
        self.uploads.len() + self.entries.len()
    }

    pub fn selected_row(&self) -> Option<FilesRow<'_>> {
        if self.selected < self.uploads.len() {
            return self.uploads.get(self.selected).map(FilesRow::Upload);
        }
        self.entries
            .get(self.selected - self.uploads.len())
            .map(FilesRow::File)
    }

    pub fn selected_file(&self) -> Option<&FileEntry> {
        match self.selected_row()? {
            FilesRow::File(entry) => Some(entry),
            FilesRow::Upload(_) => None,
        }
    }

    pub fn selected_upload(&self) -> Option<&UploadRow> {
        match self.selected_row()? {
            FilesRow::Upload(row) => Some(row),
            FilesRow::File(_) => None,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp(&mut self) {
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }

    /// Replace the listing, keeping selection in range
    pub fn set_entries(&mut self, entries: Vec<FileEntry>) {
        self.entries = entries;
        self.loading = false;
        self.clamp();
    }

    /// File names offered as combo suggestions
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.file.clone()).collect()
    }

    pub fn remove_entry(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.file != name);
        self.clamp();
        self.entries.len() != before
    }

    /// Add a progress row; returns its id
    pub fn start_upload(&mut self, name: impl Into<String>) -> u64 {
        let id = self.next_upload_id;
        self.next_upload_id += 1;
        self.uploads.push(UploadRow {
            id,
            name: name.into(),
            percent: 0,
        });
        id
    }

    pub fn set_progress(&mut self, id: u64, percent: u16) {
        if let Some(row) = self.uploads.iter_mut().find(|r| r.id == id) {
            row.percent = percent.min(100);
        }
    }

    /// Drop a progress row. Returns the row if it was present.
    pub fn finish_upload(&mut self, id: u64) -> Option<UploadRow> {
        let pos = self.uploads.iter().position(|r| r.id == id)?;
        let row = self.uploads.remove(pos);
        self.clamp();
        Some(row)
    }

    pub fn has_uploads(&self) -> bool {
        !self.uploads.is_empty()
    }
}
