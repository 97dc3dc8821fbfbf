//! setup failures and the optional collaborator that consumes them. the
//! reporter is injected at construction time; when it's present it is called
//! in place of throwing, and setup still aborts

use js_sys::{Object, Reflect};
use rnbo_panel_core::errors::PanelError;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug)]
pub struct SetupError {
    pub error: String,
    pub header: Option<String>,
    pub description: Option<String>,
}

impl SetupError {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            header: None,
            description: None,
        }
    }

    pub fn with_context(
        error: impl ToString,
        header: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            error: error.to_string(),
            header: Some(header.into()),
            description: Some(description.into()),
        }
    }

    pub fn into_js(self) -> JsValue {
        let message = match &self.header {
            Some(header) => format!("{header}: {}", self.error),
            None => self.error.clone(),
        };

        js_sys::Error::new(&message).into()
    }

    /// the `{error, header?, description?}` shape the reporter expects
    pub fn to_report_object(&self) -> Object {
        let report = Object::new();

        let _ = Reflect::set(
            &report,
            &JsValue::from_str("error"),
            &JsValue::from_str(&self.error),
        );
        if let Some(header) = &self.header {
            let _ = Reflect::set(
                &report,
                &JsValue::from_str("header"),
                &JsValue::from_str(header),
            );
        }
        if let Some(description) = &self.description {
            let _ = Reflect::set(
                &report,
                &JsValue::from_str("description"),
                &JsValue::from_str(description),
            );
        }

        report
    }
}

impl From<PanelError> for SetupError {
    fn from(err: PanelError) -> Self {
        Self::new(err)
    }
}

pub type ErrorReporter = Box<dyn Fn(&SetupError)>;

/// adapt a page-supplied callback into a reporter
pub fn js_reporter(callback: js_sys::Function) -> ErrorReporter {
    Box::new(move |err| {
        let _ = callback.call1(&JsValue::NULL, &err.to_report_object());
    })
}

/// js errors don't carry a useful Display; stringify through the js side
pub fn js_error_string(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
