use eframe::egui;

use crate::{
    core::session::{
        ActiveView,
        SessionView,
    },
    gui::theme::Theme,
};

pub enum StepperAction {
    StartTimer,
    CancelTimer,
    Next,
    Quit,
}

/// The stepper window drawn while a session is live: current set and
/// exercise, countdown controls for timed exercises, manual advance
/// otherwise. Returns whichever control the user pressed.
pub fn stepper_window(
    ctx: &egui::Context,
    theme: &Theme,
    view: &SessionView,
) -> Option<StepperAction> {
    let mut action = None;

    egui::Window::new("Workout")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-16.0, 48.0))
        .show(ctx, |ui| match view {
            SessionView::Complete { workout_name } => {
                ui.label(theme.heading(ui.ctx(), "Workout Complete!"));
                if !workout_name.is_empty() {
                    ui.label(workout_name);
                }
                ui.add_space(6.0);
                if ui.button("Back").clicked() {
                    action = Some(StepperAction::Quit);
                }
            }
            SessionView::Active(active) => {
                action = active_body(ui, theme, active);
            }
        });

    action
}

fn active_body(ui: &mut egui::Ui, theme: &Theme, view: &ActiveView) -> Option<StepperAction> {
    let mut action = None;

    ui.label(theme.heading(
        ui.ctx(),
        &format!("Set {} - {}", view.set_number, view.exercise_name),
    ));
    ui.label(view.workout_name.as_str());
    ui.add_space(4.0);

    ui.label(format!("Sets: {}", view.sets));
    ui.label(format!("Reps: {}", view.reps));
    if !view.duration.is_empty() {
        ui.label(format!("Duration: {}", view.duration));
    }
    ui.add_space(6.0);

    match view.duration_seconds {
        Some(seconds) => {
            let shown = if view.timer_running { view.remaining } else { u64::from(seconds) };
            ui.label(
                egui::RichText::new(format!("{}s", shown))
                    .size(28.0)
                    .color(theme.yellow(ui.ctx()))
                    .strong(),
            );
            ui.add_space(4.0);

            if view.timer_running {
                if ui.button("Cancel Timer").clicked() {
                    action = Some(StepperAction::CancelTimer);
                }
            } else if ui.button("Start").clicked() {
                action = Some(StepperAction::StartTimer);
            }
        }
        None => {
            if ui.button("Next").clicked() {
                action = Some(StepperAction::Next);
            }
        }
    }

    ui.add_space(6.0);
    if ui.button("Quit").clicked() {
        action = Some(StepperAction::Quit);
    }

    action
}
