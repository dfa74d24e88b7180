//! figc Schema
//!
//! Typed model for the Figma REST file JSON (`GET /v1/files/{key}`).
//! Every optional field the converter relies on is declared here
//! explicitly; downstream crates never probe loosely-typed values.
//! Unknown fields and unknown enum tags are tolerated (`Other`
//! variants), since the Figma format grows faster than this tool.
//!
//! # Example
//!
//! ```
//! use figc_schema::File;
//!
//! let file = File::parse(r#"{"name":"x","document":{"children":[]}}"#).unwrap();
//! assert!(file.entry_node().is_none());
//! ```

pub mod node;
pub mod paint;

pub use node::{LayoutMode, Node, NodeKind, Rect, StrokeAlign, TypeStyle, Vec2};
pub use paint::{Color, Effect, EffectKind, GradientStop, Paint, PaintKind};

use serde::Deserialize;

/// Schema error raised at the JSON boundary.
#[derive(Debug, thiserror::Error)]
#[error("Schema error: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

/// A complete Figma file response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct File {
    #[serde(default)]
    pub name: String,
    pub document: Document,
}

/// The document root. Its children are pages; each page's children
/// are the top-level frames on that canvas.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub children: Vec<Node>,
}

impl File {
    /// Parse a Figma file JSON string, validating shape at the boundary.
    pub fn parse(json: &str) -> Result<File, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The conversion entry node: the first frame of the first page.
    pub fn entry_node(&self) -> Option<&Node> {
        self.document.children.first()?.children.first()
    }
}
