use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::{
    core::{
        models::Plan,
        notify::{
            Notify,
            TerminalBell,
        },
        session::WorkoutSession,
    },
    gui::{
        builder::builder_card,
        overlay::FlashOverlay,
        planner::{
            schedule_card,
            start_card,
        },
        settings::SettingsData,
        share_panel::SharePanel,
        stepper::{
            stepper_window,
            StepperAction,
        },
        theme::{
            set_theme,
            Theme,
        },
        top_bar::TopBar,
    },
    persistence::{
        load_json_or_default,
        save_json,
        PLAN_FILE,
        SETTINGS_FILE,
    },
};

/// What "notify" means inside the GUI: ring the bell and raise the
/// on-screen flash.
struct BellAndFlash<'a> {
    overlay: &'a mut FlashOverlay,
}

impl Notify for BellAndFlash<'_> {
    fn notify(&mut self) {
        TerminalBell.notify();
        self.overlay.flash("Time's up!");
    }
}

pub struct SetflowApp {
    plan: Plan,
    session: WorkoutSession,
    settings: SettingsData,
    theme: Theme,
    overlay: FlashOverlay,
    share: SharePanel,
}

impl SetflowApp {
    pub fn new(cc: &eframe::CreationContext<'_>, shared_plan: Option<Plan>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        // A shared link on the command line wins over the autosave.
        let plan = match shared_plan {
            Some(plan) => plan,
            None => load_json_or_default::<Plan>(PLAN_FILE),
        };

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());

        cc.egui_ctx.set_zoom_factor(settings.zoom);
        cc.egui_ctx.set_theme(if settings.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        cc.egui_ctx.options_mut(|options| {
            options.theme_preference = if settings.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        Self {
            plan,
            session: WorkoutSession::new(),
            settings,
            theme,
            overlay: FlashOverlay::new(),
            share: SharePanel::default(),
        }
    }

    /// The theme switch and ctrl+/- zoom live in egui; mirror them into
    /// the settings file when they move.
    fn sync_settings(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        let zoom = ctx.zoom_factor();

        if dark_mode != self.settings.dark_mode || (zoom - self.settings.zoom).abs() > 0.01 {
            self.settings.dark_mode = dark_mode;
            self.settings.zoom = zoom;
            if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                eprintln!("Failed to save settings: {}", e);
            }
        }
    }

    fn save_plan(&self) {
        if let Err(e) = save_json(&self.plan, PLAN_FILE) {
            eprintln!("Failed to save plan: {}", e);
        }
    }
}

impl eframe::App for SetflowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        {
            let mut notifier = BellAndFlash { overlay: &mut self.overlay };
            self.session.tick(&self.plan, now, &mut notifier);
        }

        TopBar::show(ctx);
        self.sync_settings(ctx);

        let mut changed = false;
        let mut imported: Option<Plan> = None;
        let mut start = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Setflow");
                ui.add_space(8.0);

                changed |= builder_card(ui, &self.theme, &mut self.plan);
                ui.separator();
                changed |= schedule_card(ui, &self.theme, &mut self.plan);
                ui.separator();
                start = start_card(ui, &self.theme, &self.plan);
                ui.separator();
                imported = self.share.show(ui, &self.theme, &self.plan);
            });
        });

        if let Some(plan) = imported {
            self.session.quit();
            self.plan = plan;
            changed = true;
        }

        if let Some(workout) = start {
            self.session.start(&self.plan, workout);
        }

        if let Some(view) = self.session.snapshot(&self.plan, now) {
            if let Some(action) = stepper_window(ctx, &self.theme, &view) {
                match action {
                    StepperAction::StartTimer => self.session.start_timer(&self.plan, now),
                    StepperAction::CancelTimer => self.session.cancel_timer(),
                    StepperAction::Next => self.session.next_manual(&self.plan),
                    StepperAction::Quit => self.session.quit(),
                }
            }
        }

        self.overlay.show(ctx, &self.theme);

        // Keep the countdown label moving without a busy repaint loop.
        if self.session.timer_running() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        if changed {
            self.save_plan();
        }
    }
}
