//! browser-only smoke tests for the dom side. run with
//! `wasm-pack test --headless --chrome rnbo-panel-web`

#![cfg(target_arch = "wasm32")]

use rnbo_panel_web::context::AudioOutput;
use rnbo_panel_web::elements::PanelElements;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install_panel_markup(step_count: usize) {
    let html = {
        let mut html = String::new();

        for i in 1..=step_count {
            html.push_str(&format!(r#"<input id="melody-slider-{i}" type="range">"#));
            html.push_str(&format!(r#"<input id="rhythm-slider-{i}" type="range">"#));
        }
        html.push_str(
            r#"
            <input id="tempo-text" type="text">
            <input id="tempo-toggle" type="checkbox">
            <input id="melody-volume" type="range">
            <input id="rhythm-volume" type="range">
            <p class="volume-text"></p>
            <p class="volume-text"></p>
            <div id="rnbo-console">
                <div id="rnbo-console-div">
                    <p id="rnbo-console-readout"></p>
                </div>
                <p id="no-outports-label">No outports available</p>
            </div>
            "#,
        );

        html
    };

    document().body().unwrap().set_inner_html(&html);
}

#[wasm_bindgen_test]
fn test_elements_resolve() {
    install_panel_markup(8);

    let elements = PanelElements::from_document(&document(), 8).unwrap();

    assert_eq!(elements.melody_sliders.len(), 8);
    assert_eq!(elements.rhythm_sliders.len(), 8);
}

#[wasm_bindgen_test]
fn test_missing_element_is_reported() {
    install_panel_markup(8);
    document()
        .get_element_by_id("tempo-text")
        .unwrap()
        .remove();

    let err = PanelElements::from_document(&document(), 8).unwrap_err();

    assert!(err.error.contains("tempo-text"));
}

#[wasm_bindgen_test]
fn test_audio_output_builds() {
    let output = AudioOutput::new().unwrap();

    // fresh contexts start suspended until a user gesture
    assert_ne!(
        output.context.state(),
        web_sys::AudioContextState::Closed
    );
}
