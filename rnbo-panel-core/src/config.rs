/// where to find the exported patch and what its ports and parameters are called
#[derive(Debug, Clone)]
pub struct Config {
    pub patch_url: &'static str,
    pub runtime_cdn_base: &'static str,
    /// steps per sequence. the page has one slider per step
    pub step_count: usize,
    pub melody_inport: &'static str,
    pub rhythm_inport: &'static str,
    pub transport_inport: &'static str,
    pub tempo_param: &'static str,
    /// 0/1 valued. seeds the start/stop checkbox
    pub transport_param: &'static str,
    pub melody_level_param: &'static str,
    pub rhythm_level_param: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            patch_url: "export/patch.export.json",
            runtime_cdn_base: "https://c74-public.nyc3.digitaloceanspaces.com/rnbo",
            step_count: 8,
            melody_inport: "melody",
            rhythm_inport: "rhythm",
            transport_inport: "transport",
            tempo_param: "tempo",
            transport_param: "running",
            melody_level_param: "melody-level",
            rhythm_level_param: "rhythm-level",
        }
    }
}
