//! typed view of the patch export bundle. only the fields the panel reads are
//! modeled; the runtime gets the raw json and owns the rest

use serde::Deserialize;

use crate::errors::PanelResult;

#[derive(Debug, Deserialize)]
pub struct PatchExport {
    pub desc: PatchDesc,
}

#[derive(Debug, Deserialize)]
pub struct PatchDesc {
    #[serde(default)]
    pub parameters: Vec<ParameterDesc>,
    #[serde(default)]
    pub inports: Vec<PortDesc>,
    #[serde(default)]
    pub outports: Vec<PortDesc>,
    pub meta: PatchMeta,
}

#[derive(Debug, Deserialize)]
pub struct PatchMeta {
    /// the runtime version the patch was exported against. the loaded script
    /// has to match it
    pub rnboversion: String,
}

#[derive(Debug, Deserialize)]
pub struct ParameterDesc {
    #[serde(rename = "paramId")]
    pub param_id: String,
    pub name: String,
    pub minimum: f64,
    pub maximum: f64,
    #[serde(rename = "initialValue")]
    pub initial_value: f64,
}

#[derive(Debug, Deserialize)]
pub struct PortDesc {
    pub tag: String,
}

impl PatchExport {
    pub fn from_json(json: &str) -> PanelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PatchDesc {
    pub fn has_inport(&self, tag: &str) -> bool {
        self.inports.iter().any(|p| p.tag == tag)
    }

    pub fn outport_tags(&self) -> impl Iterator<Item = &str> {
        self.outports.iter().map(|p| p.tag.as_str())
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDesc> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::PatchExport;

    const EXPORT_JSON: &str = r#"{
        "desc": {
            "numParameters": 2,
            "parameters": [
                {
                    "type": "ParameterTypeNumber",
                    "index": 0,
                    "name": "tempo",
                    "paramId": "tempo",
                    "minimum": 20.0,
                    "maximum": 300.0,
                    "initialValue": 120.0
                },
                {
                    "type": "ParameterTypeNumber",
                    "index": 1,
                    "name": "running",
                    "paramId": "running",
                    "minimum": 0.0,
                    "maximum": 1.0,
                    "initialValue": 0.0
                }
            ],
            "inports": [{ "tag": "melody" }, { "tag": "rhythm" }],
            "outports": [{ "tag": "beat" }],
            "meta": { "architecture": "x64", "rnboversion": "1.3.2" }
        },
        "presets": []
    }"#;

    #[test_log::test]
    fn test_parse_export() {
        let export = PatchExport::from_json(EXPORT_JSON).unwrap();

        assert_eq!(export.desc.meta.rnboversion, "1.3.2");
        assert_eq!(export.desc.parameters.len(), 2);
        assert!(export.desc.has_inport("melody"));
        assert!(export.desc.has_inport("rhythm"));
        assert!(!export.desc.has_inport("chords"));

        let tags: Vec<_> = export.desc.outport_tags().collect();
        assert_eq!(tags, vec!["beat"]);

        let tempo = export.desc.parameter("tempo").unwrap();
        assert_eq!(tempo.minimum, 20.0);
        assert_eq!(tempo.maximum, 300.0);
        assert_eq!(tempo.initial_value, 120.0);
    }

    #[test_log::test]
    fn test_ports_default_to_empty() {
        let export = PatchExport::from_json(
            r#"{ "desc": { "meta": { "rnboversion": "1.3.2" } } }"#,
        )
        .unwrap();

        assert!(export.desc.parameters.is_empty());
        assert!(export.desc.inports.is_empty());
        assert_eq!(export.desc.outport_tags().count(), 0);
    }

    #[test_log::test]
    fn test_parse_failure_surfaces_serde_error() {
        let err = PatchExport::from_json("not json").unwrap_err();

        // the raw serde message passes through
        assert!(err.to_string().contains("parse error"));
    }
}
