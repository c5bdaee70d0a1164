use eframe::egui::{
    self,
    Ui,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::models::{
        Plan,
        WorkoutId,
    },
    gui::theme::Theme,
};

/// The "Create Workouts" card: every workout with its exercise table,
/// editable in place. Returns true when the plan changed this frame.
pub fn builder_card(ui: &mut Ui, theme: &Theme, plan: &mut Plan) -> bool {
    let mut changed = false;
    let mut removed_workout: Option<WorkoutId> = None;

    ui.label(theme.heading(ui.ctx(), "Create Workouts"));
    ui.add_space(4.0);

    for index in 0..plan.workouts.len() {
        let id = plan.workouts[index].id;

        ui.push_id(id, |ui| {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    let workout = &mut plan.workouts[index];
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut workout.name)
                                .hint_text("Workout name")
                                .desired_width(200.0),
                        )
                        .changed()
                    {
                        changed = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Remove Workout").clicked() {
                            removed_workout = Some(id);
                        }
                    });
                });

                if !plan.workouts[index].exercises.is_empty() {
                    changed |= exercise_table(ui, plan, index);
                }

                if ui.button("Add Exercise").clicked() {
                    plan.workouts[index].add_exercise();
                    changed = true;
                }
            });
        });
        ui.add_space(6.0);
    }

    if let Some(id) = removed_workout {
        plan.remove_workout(id);
        changed = true;
    }

    if ui.button("Add Workout").clicked() {
        plan.add_workout();
        changed = true;
    }

    changed
}

fn exercise_table(ui: &mut Ui, plan: &mut Plan, workout_index: usize) -> bool {
    let mut changed = false;
    let mut removed_exercise: Option<usize> = None;

    let text_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    let exercises = &mut plan.workouts[workout_index].exercises;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(70.0))
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.label("Exercise");
            });
            header.col(|ui| {
                ui.label("Sets");
            });
            header.col(|ui| {
                ui.label("Reps");
            });
            header.col(|ui| {
                ui.label("Duration");
            });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            body.rows(text_height, exercises.len(), |mut row| {
                let index = row.index();
                let exercise = &mut exercises[index];

                row.col(|ui| {
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut exercise.name)
                                .hint_text("Exercise name")
                                .desired_width(f32::INFINITY),
                        )
                        .changed();
                });
                row.col(|ui| {
                    changed |=
                        ui.add(egui::DragValue::new(&mut exercise.sets).range(0..=99)).changed();
                });
                row.col(|ui| {
                    changed |=
                        ui.add(egui::DragValue::new(&mut exercise.reps).range(0..=999)).changed();
                });
                row.col(|ui| {
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut exercise.duration)
                                .hint_text("e.g. 30s")
                                .desired_width(100.0),
                        )
                        .changed();
                });
                row.col(|ui| {
                    if ui.button("Remove").clicked() {
                        removed_exercise = Some(index);
                    }
                });
            });
        });

    if let Some(index) = removed_exercise {
        plan.workouts[workout_index].remove_exercise(index);
        changed = true;
    }

    changed
}
