//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::{Block, Widget as _};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;
use ztp_app::state::{AppState, Tab, UiMode};
use ztp_core::Widget as FormWidget;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let busy = state.loading_data || state.files.loading || state.log.loading;
    let header = widgets::MainHeader::new(&state.settings.server.url, state.tab)
        .dirty(state.dirty)
        .busy(busy);
    frame.render_widget(header, areas.header);

    match state.tab {
        Tab::Profiles => frame.render_widget(
            widgets::ProfileEditor::new(&state.form, &state.editor).loading(state.loading_data),
            areas.body,
        ),
        Tab::Files => frame.render_widget(
            widgets::FilesPanel::new(&state.files, &state.settings.files.upload_folder),
            areas.body,
        ),
        Tab::Log => frame.render_widget(widgets::LogPanel::new(&state.log), areas.body),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);

    render_overlay(frame, state);
}

/// Draw the modal for the current UI mode on top of everything else
fn render_overlay(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    match state.ui_mode {
        UiMode::Normal | UiMode::Editing => {}
        UiMode::Picker => {
            let Some(picker) = state.editor.picker else {
                return;
            };
            let widget = state
                .form
                .group(picker.index)
                .and_then(|g| g.widget(picker.field));
            if let Some(FormWidget::Combo(combo)) = widget {
                widgets::PickerDialog::new(combo.options(), picker.selected).render(area, buf);
            }
        }
        UiMode::Prompt => {
            if let Some(prompt) = &state.prompt {
                widgets::PromptDialog::new(prompt).render(area, buf);
            }
        }
        UiMode::Alert => {
            if let Some(alert) = &state.alert {
                widgets::AlertDialog::new(alert).render(area, buf);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog_state) = &state.confirm_dialog_state {
                widgets::ConfirmDialog::new(dialog_state).render(area, buf);
            }
        }
    }
}
