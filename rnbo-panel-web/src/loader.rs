//! fetch the patch export bundle and build the device from it. every failure
//! here is a load-time failure: wrapped with context and either handed to the
//! reporter or thrown, aborting the rest of setup

use rnbo_panel_core::logging::info;
use rnbo_panel_core::patch::PatchExport;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, Response, Window};

use crate::report::{SetupError, js_error_string};
use crate::runtime;

pub struct LoadedPatch {
    /// the fields the panel reads: version, ports, parameter ranges
    pub export: PatchExport,
    /// the whole bundle, untouched, for `createDevice`
    pub patcher: JsValue,
}

const FETCH_HEADER: &str = "Couldn't load patcher export bundle";
const FETCH_GUIDANCE: &str = "Check that the patch was exported into the directory the page is \
                              served from, and that the configured patch URL points at it.";

pub async fn fetch_patch(window: &Window, url: &str) -> Result<LoadedPatch, SetupError> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| {
            SetupError::with_context(js_error_string(&err), FETCH_HEADER, FETCH_GUIDANCE)
        })?;
    let response: Response = response.unchecked_into();

    if !response.ok() {
        return Err(SetupError::with_context(
            format!("HTTP {} fetching {url}", response.status()),
            FETCH_HEADER,
            FETCH_GUIDANCE,
        ));
    }

    let text = JsFuture::from(response.text().map_err(|err| SetupError::new(js_error_string(&err)))?)
        .await
        .map_err(|err| SetupError::new(js_error_string(&err)))?
        .as_string()
        .unwrap_or_default();

    // the parse failure surfaces raw, without the fetch guidance
    let export = PatchExport::from_json(&text)?;
    let patcher = js_sys::JSON::parse(&text).map_err(|err| SetupError::new(js_error_string(&err)))?;

    info!(
        "loaded patch export: runtime {}, {} inports, {} outports",
        export.desc.meta.rnboversion,
        export.desc.inports.len(),
        export.desc.outports.len()
    );

    Ok(LoadedPatch { export, patcher })
}

pub async fn create_device(
    context: &AudioContext,
    patcher: &JsValue,
) -> Result<runtime::Device, SetupError> {
    runtime::create_device(context, patcher).await.map_err(|err| {
        SetupError::with_context(
            js_error_string(&err),
            "Failed to construct device",
            "The runtime rejected the patch export. The export and the loaded runtime \
             version have to match.",
        )
    })
}
