use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const FLASH_DURATION: Duration = Duration::from_secs(4);

/// Short-lived centered notice, used for the timer's "Time's up!"
/// flash. Dismisses itself after a few seconds or on click.
pub struct FlashOverlay {
    message: Option<(String, Instant)>,
}

impl FlashOverlay {
    pub fn new() -> Self {
        FlashOverlay { message: None }
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Instant::now()));
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let Some((message, shown_at)) = &self.message else {
            return;
        };

        if shown_at.elapsed() >= FLASH_DURATION {
            self.message = None;
            return;
        }

        let mut dismissed = false;
        egui::Window::new("flash_overlay")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke = egui::Stroke::new(2.0, theme.red(ui.ctx()));
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(message.as_str()).size(24.0).strong());
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                    ui.add_space(4.0);
                });
            });

        if dismissed {
            self.message = None;
        } else {
            // Wake up in time to take the notice down again.
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl Default for FlashOverlay {
    fn default() -> Self {
        Self::new()
    }
}
