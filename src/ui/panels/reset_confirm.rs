// TaxDesk - ui/panels/reset_confirm.rs
//
// Confirmation window for emptying the result file.

use crate::app::state::AppState;

/// Render the reset confirmation (if `state.show_reset_confirm` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_reset_confirm {
        return;
    }

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Reset hasil pencarian")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Remove all {} saved rows from {}?",
                state.saved_count,
                state.files.results.display()
            ));
            ui.label(egui::RichText::new("The header row is kept. This cannot be undone.").weak());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Reset").color(egui::Color32::from_rgb(248, 113, 113)))
                    .clicked()
                {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        state.reset_results();
    }
    if confirmed || cancelled || !open {
        state.show_reset_confirm = false;
    }
}
