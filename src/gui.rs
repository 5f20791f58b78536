// TaxDesk - gui.rs
//
// Top-level eframe::App implementation.
// Wires together all UI panels and handles the actions that need native
// dialogs or the platform layer (export, reveal, quit).

use crate::app::state::{AppState, Page, StatusKind};
use crate::ui;
use crate::ui::panels::report::ReportAction;
use crate::util::constants;

/// The TaxDesk application.
pub struct TaxDeskApp {
    pub state: AppState,
}

impl TaxDeskApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn export_csv_dialog(&mut self) {
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(constants::EXPORT_CSV_FILE_NAME)
            .save_file()
        {
            self.state.export_csv(&dest);
        }
    }

    fn export_json_dialog(&mut self) {
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(constants::EXPORT_JSON_FILE_NAME)
            .save_file()
        {
            self.state.export_json(&dest);
        }
    }

    fn reveal_results(&mut self) {
        let path = self.state.files.results.clone();
        crate::platform::fs::reveal_in_file_manager(&path);
        self.state
            .set_status(StatusKind::Info, format!("Opened {}", path.display()));
    }

    fn apply_report_action(&mut self, action: ReportAction) {
        match action {
            ReportAction::ExportCsv => self.export_csv_dialog(),
            ReportAction::ExportJson => self.export_json_dialog(),
            ReportAction::Reveal => self.reveal_results(),
        }
    }
}

impl eframe::App for TaxDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut pending_report: Option<ReportAction> = None;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Reload data").clicked() {
                        self.state.reload_data();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export", |ui| {
                        if ui.button("Export CSV\u{2026}").clicked() {
                            pending_report = Some(ReportAction::ExportCsv);
                            ui.close_menu();
                        }
                        if ui.button("Export JSON\u{2026}").clicked() {
                            pending_report = Some(ReportAction::ExportJson);
                            ui.close_menu();
                        }
                    });
                    if ui.button("Reveal result file").clicked() {
                        pending_report = Some(ReportAction::Reveal);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Search").clicked() {
                        self.state.page = Page::Search;
                        ui.close_menu();
                    }
                    if ui.button("Saved report").clicked() {
                        self.state.refresh_report();
                        self.state.page = Page::Report;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Data summary").clicked() {
                        self.state.show_summary = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(constants::APP_TITLE).strong());
                });
            });
        });

        // Status bar
        let dark_mode = ctx.style().visuals.dark_mode;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.debug_mode {
                    ui.label(egui::RichText::new(" DEBUG ").small().strong());
                    ui.separator();
                }
                ui.colored_label(
                    ui::theme::status_colour(self.state.status_kind, dark_mode),
                    &self.state.status_message,
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} saved", self.state.saved_count));
                    if !self.state.warnings.is_empty() {
                        let label = egui::RichText::new(format!(
                            "\u{26a0} {}",
                            self.state.warnings.len()
                        ))
                        .color(ui::theme::WARNING_TEXT);
                        if ui
                            .add(egui::Label::new(label).sense(egui::Sense::click()))
                            .on_hover_text("Show data summary")
                            .clicked()
                        {
                            self.state.show_summary = true;
                        }
                    }
                });
            });
        });

        // Left sidebar: search form
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("sidebar_form")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui::panels::search_form::render(ui, &mut self.state);
                    });
            });

        // Central panel: current page
        let page = self.state.page;
        egui::CentralPanel::default().show(ctx, |ui| match page {
            Page::Search => ui::panels::results::render(ui, &mut self.state),
            Page::Report => {
                if let Some(action) = ui::panels::report::render(ui, &mut self.state) {
                    pending_report = Some(action);
                }
            }
        });

        // Dialogs
        ui::panels::reset_confirm::render(ctx, &mut self.state);
        ui::panels::summary::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);

        // Native dialogs block, so run them after the frame's panels are laid out.
        if let Some(action) = pending_report.take() {
            self.apply_report_action(action);
        }
    }
}
