//! bindings to the page-global `RNBO` namespace. the runtime is loaded from a
//! version-pinned script, so every binding here resolves at call time, after
//! `ensure_runtime` has done its job

use js_sys::{Array, Object, Promise, Reflect};
use rnbo_panel_core::logging::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioContext, Document};

/// the runtime's "schedule at the current time" sentinel (`RNBO.TimeNow`)
pub const TIME_NOW: f64 = 0.0;

#[wasm_bindgen]
extern "C" {
    /// one loaded patch. parameters and message ports hang off of this
    #[wasm_bindgen(js_namespace = RNBO)]
    pub type Device;

    #[wasm_bindgen(method, getter)]
    pub fn parameters(this: &Device) -> Array;

    #[wasm_bindgen(method, getter)]
    pub fn inports(this: &Device) -> Array;

    #[wasm_bindgen(method, getter)]
    pub fn outports(this: &Device) -> Array;

    /// the device's spot in the web audio graph
    #[wasm_bindgen(method, getter)]
    pub fn node(this: &Device) -> web_sys::AudioNode;

    #[wasm_bindgen(method, getter, js_name = messageEvent)]
    pub fn message_event(this: &Device) -> MessageSubject;

    #[wasm_bindgen(method, js_name = scheduleEvent)]
    pub fn schedule_event(this: &Device, event: &RnboMessageEvent);

    /// named, range-bounded continuous control. writing `value` is synchronous
    #[wasm_bindgen(js_namespace = RNBO)]
    pub type Parameter;

    #[wasm_bindgen(method, getter)]
    pub fn name(this: &Parameter) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn min(this: &Parameter) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn max(this: &Parameter) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn value(this: &Parameter) -> f64;

    #[wasm_bindgen(method, setter)]
    pub fn set_value(this: &Parameter, value: f64);

    /// a named message channel into or out of the device
    pub type Port;

    #[wasm_bindgen(method, getter)]
    pub fn tag(this: &Port) -> String;

    #[wasm_bindgen(js_namespace = RNBO, js_name = MessageEvent)]
    pub type RnboMessageEvent;

    #[wasm_bindgen(constructor, js_namespace = RNBO, js_class = "MessageEvent")]
    pub fn new(time: f64, tag: &str, payload: &Array) -> RnboMessageEvent;

    /// the device's message-event stream
    pub type MessageSubject;

    #[wasm_bindgen(method)]
    pub fn subscribe(this: &MessageSubject, callback: &js_sys::Function) -> JsValue;

    #[wasm_bindgen(js_namespace = RNBO, js_name = createDevice)]
    fn create_device_js(options: &Object) -> Promise;
}

pub fn runtime_present() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("RNBO")).unwrap_or(false)
}

/// inject the version-pinned runtime script and wait for it. no-op when some
/// earlier script tag already brought the runtime in
pub async fn ensure_runtime(document: &Document, url: &str) -> Result<(), JsValue> {
    if runtime_present() {
        debug!("rnbo runtime already loaded");
        return Ok(());
    }

    let script: web_sys::HtmlScriptElement = document.create_element("script")?.unchecked_into();
    script.set_src(url);

    let loaded = Promise::new(&mut |resolve, reject| {
        script
            .add_event_listener_with_callback("load", &resolve)
            .unwrap();
        script
            .add_event_listener_with_callback("error", &reject)
            .unwrap();
    });

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    head.append_child(&script)?;

    debug!("loading rnbo runtime from {url}");
    JsFuture::from(loaded).await?;

    Ok(())
}

/// `RNBO.createDevice({ context, patcher })`
pub async fn create_device(context: &AudioContext, patcher: &JsValue) -> Result<Device, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("context"), context.as_ref())?;
    Reflect::set(&options, &JsValue::from_str("patcher"), patcher)?;

    let device = JsFuture::from(create_device_js(&options)).await?;

    Ok(device.unchecked_into())
}

pub fn find_parameter(device: &Device, name: &str) -> Option<Parameter> {
    device
        .parameters()
        .iter()
        .map(|p| p.unchecked_into::<Parameter>())
        .find(|p| p.name() == name)
}

pub fn port_tags(ports: &Array) -> Vec<String> {
    ports
        .iter()
        .map(|p| p.unchecked_into::<Port>().tag())
        .collect()
}

pub fn schedule_message(device: &Device, time: f64, tag: &str, payload: &[f64]) {
    let payload: Array = payload.iter().copied().map(JsValue::from_f64).collect();
    let event = RnboMessageEvent::new(time, tag, &payload);

    device.schedule_event(&event);
}

/// pull (tag, payload) out of an incoming message event. the payload is a
/// bare number for single-element messages and an array otherwise
pub fn message_parts(event: &JsValue) -> Option<(String, Vec<f64>)> {
    let tag = Reflect::get(event, &JsValue::from_str("tag")).ok()?.as_string()?;
    let payload = Reflect::get(event, &JsValue::from_str("payload")).ok()?;

    let payload = if let Some(n) = payload.as_f64() {
        vec![n]
    } else if Array::is_array(&payload) {
        Array::from(&payload).iter().filter_map(|v| v.as_f64()).collect()
    } else {
        vec![]
    };

    Some((tag, payload))
}
