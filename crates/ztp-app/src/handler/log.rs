//! Provisioning log handlers

use crate::state::AppState;
use ztp_core::LogEntry;

use super::{UpdateAction, UpdateResult};

pub fn handle_refresh_log(state: &mut AppState) -> UpdateResult {
    state.log.loading = true;
    UpdateResult::action(UpdateAction::GetLog)
}

pub fn handle_log_loaded(state: &mut AppState, entries: Vec<LogEntry>) -> UpdateResult {
    state.log.set_entries(entries);
    UpdateResult::none()
}

pub fn handle_log_cleared(state: &mut AppState) -> UpdateResult {
    state.log.clear();
    state.set_status("Log cleared");
    UpdateResult::none()
}
