//! Node, geometry, and typography types.
//!
//! `Node` is the one recursive type in the document: a design-tool
//! layer with identity, a coarse kind tag, geometry, paint and effect
//! lists, optional auto-layout and typography metadata, and its
//! children in render order (preserved verbatim).

use crate::paint::{Color, Effect, Paint};
use serde::Deserialize;

/// A point or offset on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned box in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The coarse node kind reported by Figma's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Document,
    Canvas,
    Frame,
    Group,
    Text,
    Component,
    Instance,
    Rectangle,
    Vector,
    #[serde(other)]
    #[default]
    Other,
}

/// Where a stroke is drawn relative to the shape boundary.
/// OUTSIDE strokes overflow the bounding box and grow the effective box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeAlign {
    Inside,
    Outside,
    Center,
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
    None,
}

/// Typography metadata on a text node.
///
/// Line height arrives in one of four mutually exclusive units; the
/// extractor resolves them in a fixed priority order, so all four raw
/// fields are kept side by side here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub font_family: Option<String>,
    pub font_style: Option<String>,
    pub text_align_horizontal: Option<String>,
    pub text_align_vertical: Option<String>,
    pub letter_spacing: Option<f64>,
    pub line_height_px: Option<f64>,
    pub line_height_percent: Option<f64>,
    pub line_height_percent_font_size: Option<f64>,
    pub line_height_unit: Option<String>,
}

/// One node of the design document tree. Read-only input: the
/// converter never mutates a `Node`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,

    #[serde(default)]
    pub children: Vec<Node>,

    pub absolute_bounding_box: Option<Rect>,
    /// Tighter render box that includes stroke overflow, when available.
    pub absolute_render_bounds: Option<Rect>,

    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    pub stroke_weight: Option<f64>,
    pub stroke_align: Option<StrokeAlign>,
    #[serde(default)]
    pub stroke_dashes: Vec<f64>,

    pub corner_radius: Option<f64>,
    pub rectangle_corner_radii: Option<Vec<f64>>,

    pub opacity: Option<f64>,
    /// Radians.
    pub rotation: Option<f64>,
    pub blend_mode: Option<String>,

    #[serde(default)]
    pub effects: Vec<Effect>,

    pub layout_mode: Option<LayoutMode>,
    pub item_spacing: Option<f64>,
    pub padding_left: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_bottom: Option<f64>,

    /// Literal text content of TEXT nodes.
    pub characters: Option<String>,
    pub style: Option<TypeStyle>,

    /// Page/frame background, used only when no fills are present.
    pub background_color: Option<Color>,
    pub clips_content: Option<bool>,
}

impl Node {
    /// True for text leaf nodes.
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// The box used for layout: render bounds when present, else the
    /// bounding box.
    pub fn bounds(&self) -> Option<&Rect> {
        self.absolute_render_bounds
            .as_ref()
            .or(self.absolute_bounding_box.as_ref())
    }
}
