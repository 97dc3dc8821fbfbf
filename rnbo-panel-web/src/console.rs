//! on-page log of device-originated messages. with no declared outports the
//! log ui comes down instead of subscribing to a stream that stays silent

use rnbo_panel_core::console::ConsolePlan;
use rnbo_panel_core::logging::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::elements::PanelElements;
use crate::runtime::{self, Device};

pub fn attach_outports(
    device: &Device,
    elements: &PanelElements,
) -> Result<Option<Closure<dyn FnMut(JsValue)>>, JsValue> {
    let tags = runtime::port_tags(&device.outports());

    let filter = match ConsolePlan::for_outports(tags) {
        ConsolePlan::Remove => {
            debug!("patch declares no outports, removing the console");
            elements.console.remove_child(&elements.console_div)?;
            return Ok(None);
        }
        ConsolePlan::Subscribe(filter) => filter,
    };

    elements.console.remove_child(&elements.no_outports_label)?;

    let readout = elements.console_readout.clone();
    let on_message = Closure::wrap(Box::new(move |event: JsValue| {
        let Some((tag, payload)) = runtime::message_parts(&event) else {
            return;
        };

        if !filter.accepts(&tag) {
            return;
        }

        let line = filter.format_line(&tag, &payload);
        info!("{line}");
        readout.set_inner_text(&line);
    }) as Box<dyn FnMut(JsValue)>);

    // one subscription for the page lifetime. nothing ever unsubscribes
    let _ = device
        .message_event()
        .subscribe(on_message.as_ref().unchecked_ref());

    Ok(Some(on_message))
}
