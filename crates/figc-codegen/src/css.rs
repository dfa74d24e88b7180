//! CSS emitter.
//!
//! One rule block per IR node keyed by the node's class, preceded by
//! a fixed preamble (resets, artboard sizing from the root box,
//! control normalization). The root is the positioning frame, not
//! itself positioned: its absolute position is rewritten to
//! relative-at-origin during emission, leaving the IR untouched.

use figc_ir::{fmt_num, IrNode, LineHeight, Position, Radius, Role, StyleRecord};

use crate::{class_name, CodegenError};

/// Artboard fallback size when the root carries no box.
const DEFAULT_WIDTH: f64 = 393.0;
const DEFAULT_HEIGHT: f64 = 852.0;

/// Render the stylesheet for an IR tree.
pub fn generate(root: &IrNode) -> Result<String, CodegenError> {
    let mut out: Vec<String> = vec![preamble(root)];

    let mut root_style = root.style.clone();
    if root_style.position == Some(Position::Absolute) {
        root_style.position = Some(Position::Relative);
        root_style.left = Some(0.0);
        root_style.top = Some(0.0);
    }

    emit_node(root, &root_style, &mut out, None);
    Ok(out.join("\n"))
}

fn preamble(root: &IrNode) -> String {
    let width = fmt_num(root.style.width.unwrap_or(DEFAULT_WIDTH));
    let height = fmt_num(root.style.height.unwrap_or(DEFAULT_HEIGHT));

    format!(
        "* {{
  box-sizing: border-box;
}}
body {{
  margin: 0;
  padding: 0;
  background: #1e1e1e;
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 100vh;
  font-family: system-ui, -apple-system, sans-serif;
}}
.artboard {{
  position: relative;
  width: {width}px;
  height: {height}px;
  background: white;
  border-radius: 32px;
  overflow: hidden;
  box-shadow: 0 4px 24px rgba(0,0,0,0.1);
}}
input, button, p {{
  margin: 0;
  padding: 0;
  font-family: inherit;
}}
input {{
  border: none;
  outline: none;
  background: transparent;
  font-size: inherit;
  color: inherit;
  width: 100%;
}}
input::placeholder {{
  color: inherit;
  opacity: 0.7;
}}
button {{
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: inherit;
  color: inherit;
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  font-weight: inherit;
  letter-spacing: inherit;
}}
"
    )
}

fn emit_node(n: &IrNode, style: &StyleRecord, out: &mut Vec<String>, parent: Option<Role>) {
    // A button already rendered its label inline; no rule for it.
    if parent == Some(Role::Button) && n.role == Role::Text {
        return;
    }

    let is_short_text = n.role == Role::Text
        && n.text
            .as_deref()
            .is_some_and(|t| !t.is_empty() && t.chars().count() < 50 && !t.contains('\n'));

    let props = declarations(style, n.role, is_short_text);
    if !props.is_empty() {
        out.push(format!("{} {{ {} }}", selector(&n.id), props.join(" ")));
    }

    if n.role == Role::TextInput {
        if let Some(color) = &style.placeholder_color {
            out.push(format!(
                "{}::placeholder {{ color: {color}; }}",
                selector(&n.id)
            ));
        }
    }

    for child in &n.children {
        emit_node(child, &child.style, out, Some(n.role));
    }
}

fn selector(id: &str) -> String {
    format!(".{}", class_name(id))
}

fn px(n: f64) -> String {
    format!("{}px", fmt_num(n))
}

/// Flatten one style record into CSS declarations, in a stable order.
fn declarations(style: &StyleRecord, role: Role, is_short_text: bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    if let Some(position) = style.position {
        let value = match position {
            Position::Absolute => "absolute",
            Position::Relative => "relative",
        };
        out.push(format!("position: {value};"));
    }
    if let Some(left) = style.left {
        out.push(format!("left: {};", px(left)));
    }
    if let Some(top) = style.top {
        out.push(format!("top: {};", px(top)));
    }

    // Text measures its own width; a hard width would break wrapping.
    if let Some(width) = style.width {
        if role != Role::Text {
            out.push(format!("width: {};", px(width)));
        }
    }
    if let Some(height) = style.height {
        out.push(format!("height: {};", px(height)));
    }

    if style.border_box_sizing {
        out.push("box-sizing: border-box;".to_string());
    }

    if let Some(direction) = style.flex_direction {
        if role == Role::Text {
            out.push("display: block;".to_string());
        } else {
            out.push("display: flex;".to_string());
        }
        let value = match direction {
            figc_ir::FlexDirection::Row => "row",
            figc_ir::FlexDirection::Column => "column",
        };
        out.push(format!("flex-direction: {value};"));
    }
    if let Some(gap) = style.gap {
        out.push(format!("gap: {};", px(gap)));
    }

    if let Some(color) = &style.background_color {
        out.push(format!("background-color: {color};"));
    }

    if !style.background_images.is_empty() {
        let mut layers: Vec<String> = Vec::new();
        if let Some(primary) = &style.background_image {
            layers.push(primary.clone());
        }
        layers.extend(style.background_images.iter().cloned());
        out.push(format!("background-image: {};", layers.join(", ")));
        out.push("background-size: cover;".to_string());
    } else if let Some(primary) = &style.background_image {
        out.push(format!("background-image: {primary};"));
        if primary.contains("gradient") {
            out.push("background-size: cover;".to_string());
        }
    }

    if let Some(mode) = &style.blend_mode {
        out.push(format!("mix-blend-mode: {mode};"));
    }
    if let Some(mode) = &style.background_blend_mode {
        out.push(format!("background-blend-mode: {mode};"));
    }

    if let Some(opacity) = style.opacity {
        out.push(format!("opacity: {};", fmt_num(opacity)));
    }

    if let Some(color) = &style.color {
        out.push(format!("color: {color};"));
    }
    if let Some(size) = style.font_size {
        out.push(format!("font-size: {};", px(size)));
    }
    if let Some(weight) = style.font_weight {
        out.push(format!("font-weight: {};", fmt_num(weight)));
    }
    if let Some(family) = &style.font_family {
        out.push(format!(
            "font-family: \"{family}\", system-ui, -apple-system, sans-serif;"
        ));
    }
    if let Some(font_style) = &style.font_style {
        out.push(format!("font-style: {font_style};"));
    }
    if let Some(align) = &style.text_align {
        out.push(format!("text-align: {align};"));
    }

    if role == Role::Text {
        if is_short_text {
            out.push("white-space: nowrap;".to_string());
            if let Some(width) = style.width {
                out.push(format!("min-width: {};", px(width)));
            }
        } else {
            out.push("white-space: normal;".to_string());
            if let Some(width) = style.width {
                out.push(format!("max-width: {};", px(width)));
            }
        }

        // Approximate vertical centering for single-line labels.
        if style.vertical_align.as_deref() == Some("middle") && style.line_height.is_none() {
            if let Some(height) = style.height {
                out.push(format!("line-height: {};", px(height)));
            }
        }
    }

    if let Some(spacing) = style.letter_spacing {
        out.push(format!("letter-spacing: {};", px(spacing)));
    }

    if let Some(line_height) = style.line_height {
        let value = match line_height {
            LineHeight::Px(v) => px(v),
            LineHeight::Percent(v) => format!("{}%", fmt_num(v)),
            LineHeight::Normal => "normal".to_string(),
        };
        out.push(format!("line-height: {value};"));
    }

    if let Some(padding) = style.padding_top {
        out.push(format!("padding-top: {};", px(padding)));
    }
    if let Some(padding) = style.padding_right {
        out.push(format!("padding-right: {};", px(padding)));
    }
    if let Some(padding) = style.padding_bottom {
        out.push(format!("padding-bottom: {};", px(padding)));
    }
    if let Some(padding) = style.padding_left {
        out.push(format!("padding-left: {};", px(padding)));
    }

    if let Some(radius) = style.radius {
        let value = match radius {
            Radius::Uniform(r) => px(r),
            Radius::PerCorner(rs) => rs.map(px).join(" "),
        };
        out.push(format!("border-radius: {value};"));
    }

    if let (Some(width), Some(color)) = (style.border_width, &style.border_color) {
        let border_style = style
            .border_style
            .map_or("solid", |s| s.as_str());
        out.push(format!("border: {} {border_style} {color};", px(width)));
    }

    let mut shadows: Vec<String> = Vec::new();
    if let Some(shadow) = &style.box_shadow {
        shadows.push(shadow.clone());
    }
    // Extra strokes approximated as stacked outlines.
    for stroke in &style.extra_strokes {
        shadows.push(format!("0 0 0 {} {}", px(stroke.width), stroke.color));
    }
    if !shadows.is_empty() {
        out.push(format!("box-shadow: {};", shadows.join(", ")));
    }

    if let Some(filter) = &style.blur_filter {
        out.push(format!("filter: {filter};"));
    }
    if let Some(transform) = &style.transform {
        out.push(format!("transform: {transform};"));
    }
    if style.overflow_hidden {
        out.push("overflow: hidden;".to_string());
    }

    out
}
