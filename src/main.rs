// src/main.rs

use anyhow::anyhow;
use eframe::egui;

use chroma_clock::ChromaticClockApp;
use chroma_clock::core::display_constants::{WINDOW_SIZE, WINDOW_TITLE};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(ChromaticClockApp::new(cc)?))),
    )
    .map_err(|e| anyhow!("failed to run clock window: {e}"))
}
