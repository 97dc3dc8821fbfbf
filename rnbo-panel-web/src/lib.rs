pub mod app;
pub mod binders;
pub mod console;
pub mod context;
pub mod elements;
pub mod loader;
pub mod report;
pub mod runtime;

pub use app::App;
pub use report::{ErrorReporter, SetupError};

use rnbo_panel_core::config::Config;
use wasm_bindgen::prelude::*;

/// page entry point. `reporter` is the optional error collaborator; when the
/// page passes one, setup failures are handed to it instead of thrown
#[wasm_bindgen]
pub async fn web_main(reporter: Option<js_sys::Function>) -> Result<(), JsValue> {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let reporter = reporter.map(report::js_reporter);

    if let Some(started) = App::start(Config::default(), reporter).await? {
        app::retain(started);
    }

    Ok(())
}
