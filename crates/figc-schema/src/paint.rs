//! Paint, color, and effect types.

use crate::node::Vec2;
use serde::Deserialize;

/// A color in the document's self-describing [0, 1] component range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

/// The paint kind tag. Gradient kinds share stop/transform fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintKind {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    #[serde(other)]
    #[default]
    Other,
}

impl PaintKind {
    pub fn is_gradient(self) -> bool {
        matches!(
            self,
            PaintKind::GradientLinear
                | PaintKind::GradientRadial
                | PaintKind::GradientAngular
                | PaintKind::GradientDiamond
        )
    }
}

/// One ordered color stop of a gradient, position in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    #[serde(default)]
    pub position: f64,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type", default)]
    pub kind: PaintKind,
    pub color: Option<Color>,
    #[serde(default)]
    pub gradient_stops: Vec<GradientStop>,
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vec2>,
    /// 2×2 + offset affine transform, rows of length 3.
    pub gradient_transform: Option<Vec<Vec<f64>>>,
}

/// Effect kind tag. Shadows stack; only the last visible blur wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    #[serde(other)]
    #[default]
    Other,
}

/// A visual effect attached to a node, independently toggleable.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type", default)]
    pub kind: EffectKind,
    #[serde(default)]
    pub visible: bool,
    pub color: Option<Color>,
    pub offset: Option<Vec2>,
    pub radius: Option<f64>,
    pub spread: Option<f64>,
}
