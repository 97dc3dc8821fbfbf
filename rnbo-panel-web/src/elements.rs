//! every dom handle the panel touches, resolved once at setup. binders get
//! explicit references instead of doing their own id lookups

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::report::SetupError;

#[derive(Debug)]
pub struct PanelElements {
    pub melody_sliders: Vec<HtmlInputElement>,
    pub rhythm_sliders: Vec<HtmlInputElement>,
    pub tempo_text: HtmlInputElement,
    pub tempo_toggle: HtmlInputElement,
    pub melody_volume: HtmlInputElement,
    pub rhythm_volume: HtmlInputElement,
    /// the two `volume-text` labels, in document order: melody, then rhythm
    pub melody_volume_text: HtmlElement,
    pub rhythm_volume_text: HtmlElement,
    pub console: Element,
    pub console_div: Element,
    pub no_outports_label: Element,
    pub console_readout: HtmlElement,
}

impl PanelElements {
    pub fn from_document(document: &Document, step_count: usize) -> Result<Self, SetupError> {
        let melody_sliders = step_sliders(document, "melody-slider", step_count)?;
        let rhythm_sliders = step_sliders(document, "rhythm-slider", step_count)?;

        let volume_texts = document.get_elements_by_class_name("volume-text");
        let melody_volume_text = html_at(&volume_texts, 0)?;
        let rhythm_volume_text = html_at(&volume_texts, 1)?;

        Ok(Self {
            melody_sliders,
            rhythm_sliders,
            tempo_text: input_by_id(document, "tempo-text")?,
            tempo_toggle: input_by_id(document, "tempo-toggle")?,
            melody_volume: input_by_id(document, "melody-volume")?,
            rhythm_volume: input_by_id(document, "rhythm-volume")?,
            melody_volume_text,
            rhythm_volume_text,
            console: element_by_id(document, "rnbo-console")?,
            console_div: element_by_id(document, "rnbo-console-div")?,
            no_outports_label: element_by_id(document, "no-outports-label")?,
            console_readout: html_by_id(document, "rnbo-console-readout")?,
        })
    }
}

/// slider ids are 1-based: `melody-slider-1` .. `melody-slider-8`
fn step_sliders(
    document: &Document,
    prefix: &str,
    count: usize,
) -> Result<Vec<HtmlInputElement>, SetupError> {
    (1..=count)
        .map(|i| input_by_id(document, &format!("{prefix}-{i}")))
        .collect()
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::new(format!("page is missing element #{id}")))
}

fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, SetupError> {
    element_by_id(document, id)?
        .dyn_into()
        .map_err(|_| SetupError::new(format!("element #{id} is not an <input>")))
}

fn html_by_id(document: &Document, id: &str) -> Result<HtmlElement, SetupError> {
    element_by_id(document, id)?
        .dyn_into()
        .map_err(|_| SetupError::new(format!("element #{id} is not an html element")))
}

fn html_at(collection: &web_sys::HtmlCollection, index: u32) -> Result<HtmlElement, SetupError> {
    collection
        .item(index)
        .ok_or_else(|| {
            SetupError::new(format!(
                "page has {} volume-text labels, expected at least {}",
                collection.length(),
                index + 1
            ))
        })?
        .dyn_into()
        .map_err(|_| SetupError::new("volume-text label is not an html element"))
}
