use serde::{
    Deserialize,
    Serialize,
};

fn default_zoom() -> f32 {
    1.0
}

fn default_dark_mode() -> bool {
    true
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_zoom")]
    pub zoom: f32,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: default_dark_mode(), zoom: default_zoom() }
    }
}
