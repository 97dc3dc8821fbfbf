//! audio output bootstrap. the context comes up suspended under autoplay
//! policy, so a page-wide click listener resumes it; the state check keeps
//! repeat clicks a no-op

use rnbo_panel_core::logging::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AudioContext, AudioContextState, Document, GainNode};

pub struct AudioOutput {
    pub context: AudioContext,
    pub gain: GainNode,
}

impl AudioOutput {
    pub fn new() -> Result<Self, JsValue> {
        let context = AudioContext::new()?;
        let gain = GainNode::new(&context)?;

        gain.connect_with_audio_node(&context.destination())?;

        debug!("audio context: {:?}", context);

        Ok(Self { context, gain })
    }

    /// resume on the first user gesture. the listener stays installed for the
    /// page lifetime; once the context is running it does nothing
    pub fn install_resume_on_gesture(
        &self,
        document: &Document,
    ) -> Result<Closure<dyn FnMut()>, JsValue> {
        let context = self.context.clone();

        let on_click = Closure::wrap(Box::new(move || {
            if context.state() == AudioContextState::Suspended {
                info!("resuming audio context");
                let _ = context.resume();
            }
        }) as Box<dyn FnMut()>);

        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        Ok(on_click)
    }
}
