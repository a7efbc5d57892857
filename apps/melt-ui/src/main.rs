#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod demo;
mod surface;

use app::MeltApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_title("MeltLine"),
        ..Default::default()
    };

    eframe::run_native(
        "MeltLine",
        options,
        Box::new(|_cc| Ok(Box::new(MeltApp::new()))),
    )
}
