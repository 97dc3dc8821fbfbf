//! one binder per control group. each binder wires dom events straight into
//! runtime calls and owns no state beyond its own elements; the returned
//! closures live in the app state for the page lifetime

use rnbo_panel_core::logging::{debug, warn};
use rnbo_panel_core::patch::PatchDesc;
use rnbo_panel_core::tempo::{TempoField, TempoInput};
use rnbo_panel_core::{levels, steps, transport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlInputElement};

use crate::runtime::{self, Device, TIME_NOW};

type Handler = Closure<dyn FnMut()>;

/// melody/rhythm rows: any slider change resends all the row's values as one
/// message. skipped when the patch never declared the inport
pub fn bind_step_sliders(
    device: &Device,
    desc: &PatchDesc,
    tag: &str,
    sliders: &[HtmlInputElement],
) -> Result<Option<Handler>, JsValue> {
    if !desc.has_inport(tag) {
        warn!("patch declares no {tag:?} inport, leaving its sliders unbound");
        return Ok(None);
    }

    let device = device.clone();
    let tag = tag.to_string();
    let row = sliders.to_vec();

    let on_input = Closure::wrap(Box::new(move || {
        let joined = steps::join_step_values(row.iter().map(|s| s.value()));

        match steps::parse_number_list(&joined) {
            Ok(values) => runtime::schedule_message(&device, TIME_NOW, &tag, &values),
            Err(err) => warn!("dropping {tag} message: {err}"),
        }
    }) as Box<dyn FnMut()>);

    for slider in sliders {
        slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    }

    Ok(Some(on_input))
}

/// tempo text field. the field seeds from the parameter and bad input snaps
/// back to the last good value; good input writes the parameter directly
pub fn bind_tempo(
    device: &Device,
    param_name: &str,
    field: &HtmlInputElement,
) -> Result<Option<Handler>, JsValue> {
    let Some(param) = runtime::find_parameter(device, param_name) else {
        warn!("patch has no {param_name:?} parameter, leaving the tempo field unbound");
        return Ok(None);
    };

    let mut tempo = TempoField::new(param.min(), param.max(), param.value());
    field.set_value(&TempoField::display(param.value()));

    let field_for_cb = field.clone();
    let on_change = Closure::wrap(Box::new(move || {
        match tempo.submit(&field_for_cb.value()) {
            TempoInput::Accepted(v) => {
                param.set_value(v);
                field_for_cb.set_value(&TempoField::display(v));
            }
            TempoInput::Reverted(last) => {
                field_for_cb.set_value(&TempoField::display(last));
            }
        }
    }) as Box<dyn FnMut()>);

    field.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;

    Ok(Some(on_change))
}

/// start/stop checkbox. seeds from the 0/1 parameter, then every click
/// schedules one discrete message instead of writing the parameter
pub fn bind_transport(
    device: &Device,
    desc: &PatchDesc,
    tag: &str,
    param_name: &str,
    toggle: &HtmlInputElement,
) -> Result<Option<Handler>, JsValue> {
    if !desc.has_inport(tag) {
        warn!("patch declares no {tag:?} inport, leaving the transport toggle unbound");
        return Ok(None);
    }

    match runtime::find_parameter(device, param_name) {
        Some(param) => toggle.set_checked(transport::seed_checked(param.value())),
        None => debug!("no {param_name:?} parameter to seed the transport toggle from"),
    }

    let device = device.clone();
    let tag = tag.to_string();
    let toggle_for_cb = toggle.clone();

    let on_click = Closure::wrap(Box::new(move || {
        let payload = transport::toggle_payload(toggle_for_cb.checked());

        runtime::schedule_message(&device, TIME_NOW, &tag, &payload);
    }) as Box<dyn FnMut()>);

    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    Ok(Some(on_click))
}

/// per-track volume slider + percentage label. writes the gain parameter
/// directly, scaled to its 0..240 range
pub fn bind_level(
    device: &Device,
    param_name: &str,
    slider: &HtmlInputElement,
    label: &HtmlElement,
) -> Result<Option<Handler>, JsValue> {
    let Some(param) = runtime::find_parameter(device, param_name) else {
        warn!("patch has no {param_name:?} parameter, leaving its volume slider unbound");
        return Ok(None);
    };

    if let Ok(v) = slider.value().parse::<f64>() {
        label.set_inner_text(&levels::level_display_text(v));
    }

    let slider_for_cb = slider.clone();
    let label = label.clone();

    let on_input = Closure::wrap(Box::new(move || {
        let Ok(v) = slider_for_cb.value().parse::<f64>() else {
            return;
        };

        param.set_value(levels::level_param_value(v));
        label.set_inner_text(&levels::level_display_text(v));
    }) as Box<dyn FnMut()>);

    slider.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;

    Ok(Some(on_input))
}
