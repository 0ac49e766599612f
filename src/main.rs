//! Leaf Todo: to-do list desktop app (Rust + egui)

use leaf_todo::{app, assets, config, logging, scene};

fn main() -> eframe::Result<()> {
    logging::init();
    let config = config::AppConfig::load_or_default();

    let icon = assets::load_icon(&config.assets_dir).unwrap_or_default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(scene::VIEWPORT)
            .with_resizable(false)
            .with_maximize_button(false)
            .with_title("To Do App")
            .with_icon(icon),
        ..Default::default()
    };
    eframe::run_native(
        "To Do App",
        options,
        Box::new(move |cc| Ok(Box::new(app::TodoApp::new(cc, &config)))),
    )
}
