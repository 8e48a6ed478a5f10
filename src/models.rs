// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A file handed in by the caller, either from a multipart upload or a tool call.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub size: usize,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: data.len(),
            data,
        }
    }
}

/// Cheap signals derived from an upload. No pixel content is inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFeatures {
    pub file_name: String,
    pub file_size: usize,
    pub aspect_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Office,
    DiningRoom,
    Unknown,
}

impl RoomType {
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "living room",
            RoomType::Bedroom => "bedroom",
            RoomType::Kitchen => "kitchen",
            RoomType::Bathroom => "bathroom",
            RoomType::Office => "office",
            RoomType::DiningRoom => "dining room",
            RoomType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetection {
    pub is_room: bool,
    pub confidence: f64,
    pub room_type: RoomType,
    pub reasons: Vec<String>,
    pub suggested_actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

// ---------------------------------------------------------------------------
// Furniture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureCategory {
    Sofa,
    Chair,
    Table,
    Bed,
    Storage,
    Decor,
    Lighting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    InStock,
    OutOfStock,
    Limited,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation: Vector3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureSuggestion {
    pub id: String,
    pub name: String,
    pub category: FurnitureCategory,
    pub brand: String,
    pub price: f64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    pub dimensions: Dimensions,
    pub material: String,
    pub color: String,
    pub style: Vec<String>,
    pub availability: Availability,
    pub tags: Vec<String>,
    #[serde(rename = "position3D")]
    pub position_3d: Position3D,
    pub compatibility: f64,
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorType {
    Wall,
    Accent,
    Furniture,
    Textile,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePlacement {
    pub surfaces: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSuggestion {
    pub id: String,
    pub name: String,
    pub hex: String,
    pub rgb: Rgb,
    #[serde(rename = "type")]
    pub color_type: ColorType,
    pub area: String,
    pub confidence: f64,
    pub mood: Vec<String>,
    #[serde(rename = "position3D")]
    pub position_3d: SurfacePlacement,
}

// ---------------------------------------------------------------------------
// Synthetic 3D scene
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall3D {
    pub points: [Vector3; 4],
    pub material: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor3D {
    pub material: String,
    pub color: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ceiling3D {
    pub height: f64,
    pub material: String,
    pub color: String,
}

/// A window or door cut into a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening3D {
    pub position: Vector3,
    pub dimensions: Dimensions,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light3D {
    #[serde(rename = "type")]
    pub light_type: String,
    pub position: Vector3,
    pub intensity: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room3DModel {
    pub walls: Vec<Wall3D>,
    pub floor: Floor3D,
    pub ceiling: Ceiling3D,
    pub windows: Vec<Opening3D>,
    pub doors: Vec<Opening3D>,
    pub lighting: Vec<Light3D>,
}

// ---------------------------------------------------------------------------
// Aggregate analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialAnalysis {
    pub room_dimensions: Dimensions,
    /// Percentage of floor area left free.
    pub available_space: f64,
    pub traffic_flow: Vec<String>,
    pub natural_light: String,
    pub functionality: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAnalysis {
    pub detected_style: String,
    pub style_confidence: f64,
    pub compatible_styles: Vec<String>,
    pub design_principles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetBuckets {
    pub low: Vec<FurnitureSuggestion>,
    pub medium: Vec<FurnitureSuggestion>,
    pub high: Vec<FurnitureSuggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub immediate: Vec<String>,
    pub long_term: Vec<String>,
    pub budget: BudgetBuckets,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhanced3DAnalysis {
    pub id: Uuid,
    pub room_detection: RoomDetection,
    #[serde(rename = "room3DModel")]
    pub room_3d_model: Room3DModel,
    pub furniture_suggestions: Vec<FurnitureSuggestion>,
    pub color_suggestions: Vec<ColorSuggestion>,
    pub spatial_analysis: SpatialAnalysis,
    pub style_analysis: StyleAnalysis,
    pub recommendations: Recommendations,
    pub processed_at: DateTime<Utc>,
}
