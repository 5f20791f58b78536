// TaxDesk - ui/panels/summary.rs
//
// Data summary window.
// Shows where each table lives, how many rows it holds, and every warning
// collected while loading data and config.

use crate::app::state::AppState;
use crate::ui::theme;
use std::path::Path;

/// Render the data summary dialog (if state.show_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Data Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(480.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.strong("Tables");
            egui::Grid::new("summary_tables")
                .num_columns(3)
                .spacing([16.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Table");
                    ui.strong("Rows");
                    ui.strong("Path");
                    ui.end_row();

                    table_row(ui, "Master", state.master.len(), &state.files.master);
                    table_row(ui, "Instansi", state.offices.len(), &state.files.offices);
                    table_row(ui, "Hasil", state.saved_count, &state.files.results);
                });

            if !state.warnings.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                ui.strong(format!("Warnings ({})", state.warnings.len()));

                egui::ScrollArea::vertical()
                    .id_salt("summary_warnings")
                    .max_height(160.0)
                    .show(ui, |ui| {
                        for warn in &state.warnings {
                            ui.label(
                                egui::RichText::new(warn)
                                    .color(theme::WARNING_TEXT)
                                    .size(11.5),
                            );
                        }
                    });
            }

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Close").clicked() {
                    state.show_summary = false;
                }
                if !state.warnings.is_empty() && ui.button("Clear warnings").clicked() {
                    state.warnings.clear();
                }
            });
        });

    if !open {
        state.show_summary = false;
    }
}

fn table_row(ui: &mut egui::Ui, label: &str, rows: usize, path: &Path) {
    ui.label(label);
    let colour = if rows == 0 {
        theme::WARNING_TEXT
    } else {
        ui.style().visuals.text_color()
    };
    ui.colored_label(colour, rows.to_string());
    ui.label(egui::RichText::new(path.display().to_string()).monospace().size(11.5));
    ui.end_row();
}
