//! setup runs once, top to bottom: audio output, patch bundle, runtime
//! script, device, dom bindings. the resulting `App` owns everything for the
//! page lifetime; there is no teardown

use std::cell::RefCell;

use rnbo_panel_core::config::Config;
use rnbo_panel_core::logging::info;
use rnbo_panel_core::version::{check_runtime_version, runtime_script_url};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::context::AudioOutput;
use crate::elements::PanelElements;
use crate::report::{ErrorReporter, SetupError, js_error_string};
use crate::{binders, console, loader, runtime};

pub struct App {
    pub output: AudioOutput,
    pub device: runtime::Device,
    /// dom event handlers. dropping these would detach the controls
    handlers: Vec<Closure<dyn FnMut()>>,
    outport_listener: Option<Closure<dyn FnMut(JsValue)>>,
}

impl App {
    /// build the whole panel. with a reporter injected, failures go to it in
    /// place of throwing; either way a failure aborts setup
    pub async fn start(
        config: Config,
        reporter: Option<ErrorReporter>,
    ) -> Result<Option<Self>, JsValue> {
        match Self::try_start(&config).await {
            Ok(app) => Ok(Some(app)),
            Err(err) => match reporter {
                Some(report) => {
                    report(&err);
                    Ok(None)
                }
                None => Err(err.into_js()),
            },
        }
    }

    async fn try_start(config: &Config) -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or_else(|| SetupError::new("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| SetupError::new("no document"))?;

        let output = AudioOutput::new().map_err(js_setup)?;

        let mut handlers = Vec::new();
        handlers.push(output.install_resume_on_gesture(&document).map_err(js_setup)?);

        let patch = loader::fetch_patch(&window, config.patch_url).await?;
        let version = &patch.export.desc.meta.rnboversion;

        check_runtime_version(version)?;

        let script_url = runtime_script_url(
            config.runtime_cdn_base,
            &String::from(js_sys::encode_uri_component(version)),
        );
        runtime::ensure_runtime(&document, &script_url)
            .await
            .map_err(|err| {
                SetupError::with_context(
                    js_error_string(&err),
                    format!("Failed to load rnbo.min.js v{version}"),
                    "Check the version pin and that the cdn is reachable from this page.",
                )
            })?;

        let device = loader::create_device(&output.context, &patch.patcher).await?;
        device
            .node()
            .connect_with_audio_node(&output.gain)
            .map_err(js_setup)?;

        let elements = PanelElements::from_document(&document, config.step_count)?;
        let desc = &patch.export.desc;

        let bound = [
            binders::bind_step_sliders(
                &device,
                desc,
                config.melody_inport,
                &elements.melody_sliders,
            ),
            binders::bind_step_sliders(
                &device,
                desc,
                config.rhythm_inport,
                &elements.rhythm_sliders,
            ),
            binders::bind_tempo(&device, config.tempo_param, &elements.tempo_text),
            binders::bind_transport(
                &device,
                desc,
                config.transport_inport,
                config.transport_param,
                &elements.tempo_toggle,
            ),
            binders::bind_level(
                &device,
                config.melody_level_param,
                &elements.melody_volume,
                &elements.melody_volume_text,
            ),
            binders::bind_level(
                &device,
                config.rhythm_level_param,
                &elements.rhythm_volume,
                &elements.rhythm_volume_text,
            ),
        ];
        for handler in bound {
            if let Some(handler) = handler.map_err(js_setup)? {
                handlers.push(handler);
            }
        }

        let outport_listener = console::attach_outports(&device, &elements).map_err(js_setup)?;

        info!("panel ready");

        Ok(Self {
            output,
            device,
            handlers,
            outport_listener,
        })
    }
}

fn js_setup(err: JsValue) -> SetupError {
    SetupError::new(js_error_string(&err))
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// park the app for the page lifetime
pub fn retain(app: App) {
    APP.with(|cell| cell.borrow_mut().replace(app));
}
