// TaxDesk - ui/panels/results.rs
//
// Search page: result-file controls, last-search caption and the result
// grid with per-row "Add" buttons.
//
// Save clicks are collected into a single pending action and applied after
// the grid is drawn, so `state.session.results` is not mutably borrowed while
// rows still reference it.

use crate::app::session::SaveAction;
use crate::app::state::AppState;
use crate::core::model::MASTER_COLUMNS;
use crate::ui::theme;

/// Render the search page (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // ---- Result file controls ----
    ui.horizontal(|ui| {
        ui.strong(format!("{} rows saved", state.saved_count));
        ui.label(
            egui::RichText::new(state.files.results.display().to_string())
                .monospace()
                .weak()
                .size(11.5),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button("Reset hasil")
                .on_hover_text("Empty the result file (header only)")
                .clicked()
            {
                state.show_reset_confirm = true;
            }
        });
    });
    ui.separator();

    let Some(last) = state.session.last_search.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.label("Fill in a name or address in the sidebar and press Cari.");
        });
        return;
    };

    // ---- Caption ----
    let mut terms = Vec::new();
    if !last.name.is_empty() {
        terms.push(format!("nama \"{}\"", last.name));
    }
    if !last.address.is_empty() {
        terms.push(format!("alamat \"{}\"", last.address));
    }
    let mut caption = format!("{} match(es)", last.matches);
    if !terms.is_empty() {
        caption.push_str(&format!(" for {}", terms.join(" and ")));
    }
    match state.session.office.as_deref() {
        Some(office) => caption.push_str(&format!(", saving to {office}")),
        None => caption.push_str(", no office selected"),
    }

    let mut pending: Option<SaveAction> = None;

    ui.horizontal(|ui| {
        ui.label(caption);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_save = !state.session.results.is_empty();
            if ui
                .add_enabled(can_save, egui::Button::new("Simpan semua"))
                .clicked()
            {
                pending = Some(SaveAction::SaveAll);
            }
        });
    });
    ui.add_space(4.0);

    if state.session.results.is_empty() {
        ui.label(egui::RichText::new("No rows match.").italics().weak());
        return;
    }

    // ---- Result grid ----
    let dark_mode = ui.visuals().dark_mode;
    egui::ScrollArea::both()
        .id_salt("search_results")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("search_results_grid")
                .num_columns(MASTER_COLUMNS.len() + 1)
                .striped(true)
                .spacing([12.0, 4.0])
                .min_row_height(theme::ROW_HEIGHT)
                .show(ui, |ui| {
                    ui.strong("");
                    for column in MASTER_COLUMNS {
                        ui.strong(column);
                    }
                    ui.end_row();

                    for (i, record) in state.session.results.iter().enumerate() {
                        if ui
                            .small_button("Tambah")
                            .on_hover_text("Add this row to the result file")
                            .clicked()
                        {
                            pending = Some(SaveAction::SaveOne(i));
                        }
                        let cells = record.cells();
                        let last_col = cells.len() - 1;
                        for (col, cell) in cells.iter().enumerate() {
                            let mut text = egui::RichText::new(*cell).size(theme::CELL_FONT_SIZE);
                            if col == last_col {
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

    if let Some(action) = pending {
        state.save(action);
    }
}
