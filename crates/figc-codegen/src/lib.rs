//! figc Code Generator
//!
//! Renders the finished IR tree into two outputs: a static HTML
//! document and an accompanying stylesheet. Both emitters are pure,
//! stateless depth-first walks; all classification and extraction
//! happened upstream in `figc-ir`.
//!
//! ```text
//! IrNode → compile() → Output { html, css }
//! ```

pub mod css;
pub mod html;

use figc_ir::IrNode;

/// The rendered output for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub html: String,
    pub css: String,
}

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Codegen error: {message}")]
pub struct CodegenError {
    pub message: String,
}

/// The CSS selector-safe class for a node, derived from its id.
pub fn class_name(id: &str) -> String {
    format!("node-{}", id.replace(':', "_"))
}

/// Render an IR tree into HTML + CSS.
pub fn compile(root: &IrNode) -> Result<Output, CodegenError> {
    Ok(Output {
        html: html::generate(root)?,
        css: css::generate(root)?,
    })
}
