// TaxDesk - ui/panels/search_form.rs
//
// Sidebar: office picker, name and address inputs, Search button and page
// navigation. Pressing Enter in either text field also runs the search.

use crate::app::state::{AppState, Page};

/// Render the search form sidebar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Pencarian");
    ui.separator();

    // ---- Office picker ----
    ui.label("Instansi:");
    if state.offices.is_empty() {
        ui.label(
            egui::RichText::new("No offices loaded.")
                .weak()
                .italics(),
        );
    } else {
        let selected_text = state
            .selected_office()
            .unwrap_or("(choose an office)")
            .to_string();
        egui::ComboBox::from_id_salt("office_picker")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for (i, office) in state.offices.iter().enumerate() {
                    ui.selectable_value(&mut state.form.office_index, Some(i), office);
                }
            });
    }

    ui.add_space(6.0);

    // ---- Text inputs ----
    let mut submitted = false;

    ui.label("Nama:");
    let name_resp = ui.add(
        egui::TextEdit::singleline(&mut state.form.name)
            .hint_text("part of the owner name")
            .desired_width(f32::INFINITY),
    );
    submitted |= name_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.label("Alamat:");
    let address_resp = ui.add(
        egui::TextEdit::singleline(&mut state.form.address)
            .hint_text("part of the address")
            .desired_width(f32::INFINITY),
    );
    submitted |= address_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("\u{1f50d} Cari").clicked() {
            submitted = true;
        }
        if ui
            .small_button("Clear")
            .on_hover_text("Clear name and address")
            .clicked()
        {
            state.form.name.clear();
            state.form.address.clear();
        }
    });

    if submitted {
        state.run_search();
    }

    ui.add_space(12.0);
    ui.separator();

    // ---- Navigation ----
    ui.label("Halaman:");
    ui.selectable_value(&mut state.page, Page::Search, "Hasil pencarian");
    let report = ui.selectable_value(&mut state.page, Page::Report, "Laporan tersimpan");
    if report.clicked() {
        state.refresh_report();
    }
}
