//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Smallest accepted table capacity
pub const MIN_TABLE_CAPACITY: i32 = 1;
/// Largest accepted table capacity
pub const MAX_TABLE_CAPACITY: i32 = 50;

/// Table shape. Presentational only; it suggests a default capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableShape {
    #[default]
    Round,
    Rectangular,
    Square,
    Oval,
    UShape,
    Cocktail,
}

impl TableShape {
    /// Capacity used when a table is created without one
    pub const fn suggested_capacity(&self) -> i32 {
        match self {
            Self::Round => 8,
            Self::Rectangular => 10,
            Self::Square => 4,
            Self::Oval => 10,
            Self::UShape => 16,
            Self::Cocktail => 4,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Rectangular => "rectangular",
            Self::Square => "square",
            Self::Oval => "oval",
            Self::UShape => "u-shape",
            Self::Cocktail => "cocktail",
        }
    }

    /// Parse a shape name, falling back to [`TableShape::Round`] for anything unknown
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Self::Rectangular,
            "square" => Self::Square,
            "oval" => Self::Oval,
            "u-shape" | "u_shape" | "ushape" => Self::UShape,
            "cocktail" => Self::Cocktail,
            _ => Self::Round,
        }
    }
}

/// Dining table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub shape: TableShape,
    pub capacity: i32,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
    /// Degrees, 0-360
    #[serde(default)]
    pub rotation: f64,
    pub created_at: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub shape: Option<String>,
    pub capacity: Option<i32>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub rotation: Option<f64>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub name: Option<String>,
    pub shape: Option<String>,
    pub capacity: Option<i32>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub rotation: Option<f64>,
}

/// Rename payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableRename {
    pub name: String,
}
