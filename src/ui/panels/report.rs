// TaxDesk - ui/panels/report.rs
//
// Saved report page: the persisted result table as read from disk, with
// export and refresh controls.

use crate::app::state::AppState;
use crate::core::model::RESULT_COLUMNS;
use crate::ui::theme;

/// Actions the report toolbar can request. Dialogs and process launches
/// belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    ExportCsv,
    ExportJson,
    Reveal,
}

/// Render the saved report page (central area).
///
/// Returns the toolbar action clicked this frame, if any.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<ReportAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.heading("Laporan tersimpan");
        ui.label(format!("({} rows)", state.report_rows.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("\u{1f4c2} Show file")
                .on_hover_text("Reveal the result file in the file manager")
                .clicked()
            {
                action = Some(ReportAction::Reveal);
            }
            if ui.button("Export JSON\u{2026}").clicked() {
                action = Some(ReportAction::ExportJson);
            }
            if ui.button("Export CSV\u{2026}").clicked() {
                action = Some(ReportAction::ExportCsv);
            }
            if ui.button("\u{21bb} Refresh").clicked() {
                state.refresh_report();
            }
        });
    });
    ui.separator();

    if state.report_rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("The result file is empty.\nSave rows from the search page to fill it.");
        });
        return action;
    }

    let dark_mode = ui.visuals().dark_mode;
    egui::ScrollArea::both()
        .id_salt("saved_report")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("saved_report_grid")
                .num_columns(RESULT_COLUMNS.len())
                .striped(true)
                .spacing([12.0, 4.0])
                .min_row_height(theme::ROW_HEIGHT)
                .show(ui, |ui| {
                    for column in RESULT_COLUMNS {
                        ui.strong(column);
                    }
                    ui.end_row();

                    for row in &state.report_rows {
                        let cells = row.cells();
                        let last_col = cells.len() - 1;
                        for (col, cell) in cells.iter().enumerate() {
                            let mut text = egui::RichText::new(*cell).size(theme::CELL_FONT_SIZE);
                            if col == 0 {
                                text = text.strong();
                            } else if col == last_col {
                                if let Some(c) = theme::payment_colour(cell, dark_mode) {
                                    text = text.color(c);
                                }
                            }
                            ui.label(text);
                        }
                        ui.end_row();
                    }
                });
        });

    action
}
