use eframe::egui::{
    self,
    Ui,
};

use crate::{
    core::{
        models::{
            Plan,
            WorkoutId,
        },
        Weekday,
    },
    gui::theme::Theme,
};

const UNASSIGNED: &str = "-- Select Workout --";

/// The "Assign Workouts to Days" card. Returns true when an assignment
/// changed this frame.
pub fn schedule_card(ui: &mut Ui, theme: &Theme, plan: &mut Plan) -> bool {
    let mut changed = false;

    ui.label(theme.heading(ui.ctx(), "Assign Workouts to Days"));
    ui.add_space(4.0);

    for day in Weekday::ALL {
        ui.horizontal(|ui| {
            let today = day == Weekday::today();
            let label = if today {
                theme.bold(ui.ctx(), day.label())
            } else {
                egui::RichText::new(day.label())
            };
            ui.add_sized([90.0, ui.spacing().interact_size.y], egui::Label::new(label));

            let mut selection = plan.schedule.workout_for_day(day);
            let selected_text = selection
                .and_then(|id| {
                    plan.position(id).map(|position| plan.workouts[position].display_name(position))
                })
                .unwrap_or_else(|| UNASSIGNED.to_string());

            let before = selection;
            egui::ComboBox::from_id_salt(day.label())
                .selected_text(selected_text)
                .width(180.0)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selection, None::<WorkoutId>, UNASSIGNED);
                    for (position, workout) in plan.workouts.iter().enumerate() {
                        ui.selectable_value(
                            &mut selection,
                            Some(workout.id),
                            workout.display_name(position),
                        );
                    }
                });

            if selection != before {
                plan.schedule.assign(day, selection);
                changed = true;
            }
        });
    }

    changed
}

/// The "Start a Workout" card: one button per day with a resolvable
/// assignment; today's button is emphasized. Returns the workout to
/// start, if any button was clicked.
pub fn start_card(ui: &mut Ui, theme: &Theme, plan: &Plan) -> Option<WorkoutId> {
    let mut start = None;

    ui.label(theme.heading(ui.ctx(), "Start a Workout"));
    ui.add_space(4.0);

    let mut any = false;
    for day in Weekday::ALL {
        // Dangling assignments read as unassigned and get no button.
        let Some(workout) = plan.scheduled_workout(day) else {
            continue;
        };
        any = true;

        let position = plan.position(workout.id).unwrap_or(0);
        let text = format!("{}: {}", day.label(), workout.display_name(position));
        let button = if day == Weekday::today() {
            egui::Button::new(egui::RichText::new(text).color(theme.green(ui.ctx())))
        } else {
            egui::Button::new(text)
        };

        if ui.add(button).clicked() {
            start = Some(workout.id);
        }
    }

    if !any {
        ui.label("Assign a workout to a day to start it from here.");
    }

    start
}
