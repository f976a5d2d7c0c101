//! Reference Object Model

use serde::{Deserialize, Serialize};

/// Fixed venue feature placed for orientation (stage, bar, dance floor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceObject {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceObjectInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// Replace-all payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceObjectsReplace {
    pub reference_objects: Vec<ReferenceObjectInput>,
}
