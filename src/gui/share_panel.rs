use eframe::egui::{
    self,
    Ui,
};

use crate::{
    core::models::Plan,
    gui::theme::Theme,
    share,
};

#[derive(Default)]
pub struct SharePanel {
    import_text: String,
    import_error: Option<String>,
}

impl SharePanel {
    /// The "Share Your Schedule" card: the current plan as a link, plus
    /// an import field accepting a pasted link or bare token. Returns a
    /// replacement plan when an import succeeds.
    pub fn show(&mut self, ui: &mut Ui, theme: &Theme, plan: &Plan) -> Option<Plan> {
        ui.label(theme.heading(ui.ctx(), "Share Your Schedule"));
        ui.add_space(4.0);

        let link = share::share_link(plan).unwrap_or_default();
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut link.as_str()).desired_width(420.0),
            );
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(link.clone());
            }
        });

        ui.add_space(6.0);

        let mut imported = None;
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.import_text)
                    .hint_text("Paste a shared link or token")
                    .desired_width(420.0),
            );
            if ui.button("Import").clicked() {
                match share::extract_token(&self.import_text).and_then(share::decode_plan) {
                    Some(plan) => {
                        imported = Some(plan);
                        self.import_text.clear();
                        self.import_error = None;
                    }
                    None => {
                        self.import_error =
                            Some("Could not read that link. Nothing was changed.".to_string());
                    }
                }
            }
        });

        if let Some(error) = &self.import_error {
            ui.colored_label(theme.red(ui.ctx()), error);
        }

        imported
    }
}
