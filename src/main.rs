#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use finaware::FinAwareApp;

    // RUST_LOG overrides the default level
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("FinAware")
            .with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "FinAware",
        options,
        Box::new(|cc| Ok(Box::new(FinAwareApp::new(cc)))),
    )
}

// The web build starts from `web::start` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
