//! figc IR
//!
//! The conversion core: turns the raw document tree into a semantic
//! intermediate representation. Three stages, consumed in order:
//!
//! ```text
//! Node → extract_style() → StyleRecord      (per node, leaf stage)
//! Node → classify()      → Role             (needs built children)
//! Node → build_ir()      → IrNode           (depth-first assembly)
//! ```
//!
//! Every stage is a pure, total function: missing or malformed
//! optional input fields degrade to omitted output fields, never to
//! errors.

pub mod builder;
pub mod classify;
pub mod style;

pub use builder::{build_ir, document_to_ir};
pub use classify::classify;
pub use style::{extract_style, fmt_num};

/// The semantic widget role inferred for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A plain positioned container (frame, group, artboard).
    PlainContainer,
    /// A text leaf.
    Text,
    /// A clickable button.
    Button,
    /// A single-line text input.
    TextInput,
    /// A container grouping two or more text inputs (e.g. a form).
    InputGroup,
}

/// The inferred HTML input type for a `Role::TextInput` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
}

impl InputType {
    /// The HTML `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }
}

/// Position mode of a style record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Absolute,
    Relative,
}

/// Corner radius: a 4-element per-corner list takes precedence over a
/// uniform radius at extraction time, so only one form is ever stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    Uniform(f64),
    PerCorner([f64; 4]),
}

impl Radius {
    /// True if any corner is rounded.
    pub fn is_rounded(&self) -> bool {
        match self {
            Radius::Uniform(r) => *r > 0.0,
            Radius::PerCorner(rs) => rs.iter().any(|r| *r > 0.0),
        }
    }
}

/// Line height in one of the three emittable forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeight {
    /// `normal`
    Normal,
    /// Pixels.
    Px(f64),
    /// A raw percentage string, e.g. `150%`.
    Percent(f64),
}

/// Flex direction of an auto-layout container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Solid,
    Dashed,
}

impl BorderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
        }
    }
}

/// A stroke paint beyond the first, kept for approximation as an
/// extra outline rather than rendered as a real border.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraStroke {
    pub width: f64,
    pub color: String,
    pub style: BorderStyle,
}

/// The flat semantic style record attached to each IR node.
///
/// Every field is optional; absence means "do not emit this
/// property", never "emit a default". Offsets are relative to the
/// nearest positioned ancestor's top-left corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRecord {
    pub position: Option<Position>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,

    pub background_color: Option<String>,
    /// Primary background image, used when no solid fill exists.
    pub background_image: Option<String>,
    /// Further background layers (extra solids and gradients), in
    /// source paint order.
    pub background_images: Vec<String>,
    pub opacity: Option<f64>,
    pub blend_mode: Option<String>,
    pub background_blend_mode: Option<String>,

    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    pub border_style: Option<BorderStyle>,
    pub border_dash_pattern: Vec<f64>,
    pub extra_strokes: Vec<ExtraStroke>,
    /// Requested by inside-aligned strokes.
    pub border_box_sizing: bool,
    pub radius: Option<Radius>,

    pub box_shadow: Option<String>,
    pub blur_filter: Option<String>,
    pub transform: Option<String>,
    pub overflow_hidden: bool,

    /// Presence implies `display: flex`.
    pub flex_direction: Option<FlexDirection>,
    pub gap: Option<f64>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,

    pub color: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<f64>,
    pub font_family: Option<String>,
    pub font_style: Option<String>,
    pub text_align: Option<String>,
    pub vertical_align: Option<String>,
    pub letter_spacing: Option<f64>,
    pub line_height: Option<LineHeight>,
    pub placeholder_color: Option<String>,
}

/// One node of the semantic IR tree.
///
/// Built once per source node, bottom-up, and never mutated after the
/// builder returns it. Children are exclusively owned; there is no
/// back-reference to the parent.
#[derive(Debug, Clone, PartialEq)]
pub struct IrNode {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub style: StyleRecord,
    /// Literal text content.
    pub text: Option<String>,
    /// Placeholder for text-input nodes.
    pub placeholder: Option<String>,
    pub input_type: Option<InputType>,
    pub children: Vec<IrNode>,
}
