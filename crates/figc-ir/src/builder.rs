//! Tree building.
//!
//! Depth-first, children-first assembly of the IR: classification
//! needs already-built children, so every node's subtree is finished
//! before the node itself is classified. Each recursion step threads
//! the current node's own box origin down as the positioning origin
//! for its children (passing the inherited origin through when the
//! node has no box of its own).

use figc_schema::{File, Node, PaintKind, Vec2};

use crate::classify::{classify, detect_input_type, find_placeholder, is_placeholder_text};
use crate::style::{extract_style, rgba};
use crate::{IrNode, Role, StyleRecord};

/// Convert a whole document, entering at the first frame of the
/// first page. `None` for an empty document.
pub fn document_to_ir(file: &File) -> Option<IrNode> {
    file.entry_node().map(|n| build_ir(n, None, true))
}

/// Build one fully-formed IR node including its entire subtree.
pub fn build_ir(n: &Node, ancestor_origin: Option<Vec2>, is_root: bool) -> IrNode {
    let own_origin = n
        .bounds()
        .map(|b| Vec2 { x: b.x, y: b.y })
        .or(ancestor_origin);

    let children: Vec<IrNode> = n
        .children
        .iter()
        .map(|c| build_ir(c, own_origin, false))
        .collect();

    let role = classify(n, &children, is_root);
    let mut style = extract_style(n, ancestor_origin);
    let mut text = n.characters.clone();
    let mut placeholder = None;
    let mut input_type = None;

    if role == Role::TextInput {
        input_type = Some(detect_input_type(n));
        resolve_input_text(n, &mut style, &mut text, &mut placeholder);
    }

    if role == Role::Button || role == Role::TextInput {
        promote_text_style(n, &children, ancestor_origin, &mut style);
    }

    IrNode {
        id: n.id.clone(),
        name: n.name.clone(),
        role,
        style,
        text,
        placeholder,
        input_type,
        children,
    }
}

/// Decide whether an input node's rendered text is a placeholder or
/// prefilled content.
///
/// An explicit vocabulary match wins and additionally promotes the
/// text child's fill into the placeholder color. Text containing "@"
/// or longer than 10 characters (and not placeholder-like) is treated
/// as literal content. Everything else is a placeholder.
fn resolve_input_text(
    n: &Node,
    style: &mut StyleRecord,
    text: &mut Option<String>,
    placeholder: &mut Option<String>,
) {
    let text_child = n.children.iter().find(|c| c.is_text());
    let content = text_child.and_then(|c| c.characters.as_deref());

    let Some(content) = content else {
        *placeholder = find_placeholder(n).map(str::to_string);
        return;
    };

    if let Some(found) = find_placeholder(n) {
        *placeholder = Some(found.to_string());

        if let Some(child) = text_child {
            if let Some(fill) = child.fills.first() {
                if fill.kind == PaintKind::Solid {
                    if let Some(c) = &fill.color {
                        style.placeholder_color = Some(rgba(c));
                    }
                }
            }
        }
    } else if content.contains('@')
        || (content.chars().count() > 10 && !is_placeholder_text(content))
    {
        *text = Some(content.to_string());
    } else {
        *placeholder = Some(content.to_string());
    }
}

/// Promote typography from the first text-bearing descendant into an
/// atomic widget's own style, so the emitted button/input element
/// renders its label correctly without the (suppressed) text child.
/// Prefers the built IR children; falls back to re-deriving from the
/// first raw text source child. Never overwrites a present field.
fn promote_text_style(
    n: &Node,
    children: &[IrNode],
    ancestor_origin: Option<Vec2>,
    style: &mut StyleRecord,
) {
    if let Some(text_child) = children.iter().find(|c| c.role == Role::Text) {
        merge_typography(style, &text_child.style);
    } else if let Some(raw) = n.children.iter().find(|c| c.is_text()) {
        let derived = extract_style(raw, ancestor_origin);
        merge_typography(style, &derived);
    }
}

fn merge_typography(dst: &mut StyleRecord, src: &StyleRecord) {
    if dst.font_size.is_none() {
        dst.font_size = src.font_size;
    }
    if dst.font_weight.is_none() {
        dst.font_weight = src.font_weight;
    }
    if dst.font_family.is_none() {
        dst.font_family = src.font_family.clone();
    }
    if dst.font_style.is_none() {
        dst.font_style = src.font_style.clone();
    }
    if dst.color.is_none() {
        dst.color = src.color.clone();
    }
    if dst.text_align.is_none() {
        dst.text_align = src.text_align.clone();
    }
    if dst.letter_spacing.is_none() {
        dst.letter_spacing = src.letter_spacing;
    }
    if dst.line_height.is_none() {
        dst.line_height = src.line_height;
    }
}
