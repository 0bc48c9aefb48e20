mod app;
mod format;
mod label;
mod preview;
mod wizard;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([760.0, 860.0])
            .with_min_inner_size([520.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fiber Optic Label Generator",
        native_options,
        Box::new(|cc| Ok(Box::new(app::LabelWizardApp::new(cc)))),
    )
}
