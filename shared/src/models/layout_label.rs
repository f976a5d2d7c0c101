//! Layout Label Model

use serde::{Deserialize, Serialize};

/// Free-text annotation placed on the seating canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLabel {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub rotation: f64,
}

/// One label in a save-all request; ids are assigned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutLabelInput {
    pub text: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub rotation: f64,
}

fn default_font_size() -> f64 {
    16.0
}

/// Replace-all payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutLabelsReplace {
    pub labels: Vec<LayoutLabelInput>,
}
