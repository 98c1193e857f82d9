use crate::FinAwareApp;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Mounts the app on the `<canvas>` with id `canvas_id`. Called from the page's loader script.
#[wasm_bindgen]
pub fn start(canvas_id: String) {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&canvas_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("canvas #{canvas_id} not found");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(FinAwareApp::new(cc)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
