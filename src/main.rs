use eframe::egui;
use setflow::{
    core::models::Plan,
    gui::SetflowApp,
    share,
};

fn main() -> Result<(), eframe::Error> {
    let shared_plan = shared_plan_from_args();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 760.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Setflow",
        options,
        Box::new(move |cc| Ok(Box::new(SetflowApp::new(cc, shared_plan)))),
    )
}

/// A shared link (or bare token) passed on the command line preloads
/// the plan, the way opening a `?state=` URL did in the browser.
fn shared_plan_from_args() -> Option<Plan> {
    let arg = std::env::args().nth(1)?;
    let plan = share::extract_token(&arg).and_then(share::decode_plan);
    if plan.is_none() {
        eprintln!("Could not read shared state from the command line, starting from the saved plan.");
    }
    plan
}
