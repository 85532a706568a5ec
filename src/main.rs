use bio_page_builder::{BioBuilderApp, EditorConfig};
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match EditorConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}");
            log::warn!("Falling back to default editor settings");
            EditorConfig::default()
        }
    };
    log::info!("exporting to {}", config.export_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Bio Page Builder"),
        ..Default::default()
    };

    eframe::run_native(
        "Bio Page Builder",
        options,
        Box::new(|_cc| Ok(Box::new(BioBuilderApp::new(config)))),
    )
}
