// TaxDesk - ui/panels/about.rs
//
// About dialog, opened from Help > About.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_TITLE, APP_VERSION};

/// Render the About dialog (if `state.show_about` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut open = true;
    egui::Window::new(format!("About {APP_NAME}"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(APP_NAME).size(26.0).strong());
                ui.label(egui::RichText::new(format!("v{APP_VERSION}")).weak());
                ui.add_space(6.0);
                ui.label(APP_TITLE);
            });

            ui.add_space(8.0);
            ui.separator();

            ui.label("Search the vehicle tax master by owner name or address,");
            ui.label("tag matches with an office and collect them in the result file.");

            ui.add_space(6.0);
            ui.label(egui::RichText::new("Built with Rust & egui").small().weak());
            ui.add_space(4.0);
        });

    if !open {
        state.show_about = false;
    }
}
