//! Layout Shape Model

use serde::{Deserialize, Serialize};

/// Decorative shape drawn on the seating canvas (walls, zones, aisles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutShape {
    pub id: String,
    /// Free-form kind understood by the canvas, e.g. `rectangle` or `circle`
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub color: String,
    pub label: Option<String>,
}

/// One shape in a save-all request; ids are assigned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutShapeInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_color() -> String {
    "#e5e7eb".to_string()
}

/// Replace-all payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutShapesReplace {
    pub shapes: Vec<LayoutShapeInput>,
}
