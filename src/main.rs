use nepal_quiz::QuizApp;

const WINDOW_TITLE: &str = "Nepal Quiz";
#[cfg(not(target_arch = "wasm32"))]
const WINDOW_SIZE: [f32; 2] = [720.0, 560.0];

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Arrancando {WINDOW_TITLE} v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| {
            let app = QuizApp::from_embedded()
                .inspect_err(|e| log::error!("No se pudo cargar el banco de preguntas: {e}"))?;
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    log::info!("Arrancando {WINDOW_TITLE} v{} (web)", env!("CARGO_PKG_VERSION"));

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("No se encontró el canvas 'the_canvas_id'");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let app = QuizApp::from_embedded().inspect_err(|e| {
                        log::error!("No se pudo cargar el banco de preguntas: {e}")
                    })?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Fallo al arrancar eframe: {e:?}");
        }
    });
}
