//! Node classification.
//!
//! The source format carries no semantic widget types, so roles are
//! inferred from visual conventions: naming, fills, corner rounding,
//! borders, padding, and child shape. Each signal is a named
//! predicate; one ordered decision function combines them, most
//! specific rule first. Ties resolve by rule order, never by scoring.

use figc_schema::Node;

use crate::{InputType, IrNode, Role};

/// Display-name substrings that suggest a button.
const BUTTON_NAMES: &[&str] = &["button", "btn", "submit", "action"];

/// Display-name substrings that suggest a text input.
const INPUT_NAMES: &[&str] = &["input", "field", "textfield", "text field"];

/// Strings commonly used as input placeholders in design files.
const PLACEHOLDER_VOCABULARY: &[&str] = &[
    "email",
    "password",
    "username",
    "name",
    "phone",
    "search",
    "enter",
    "type",
    "input",
    "confirm password",
    "re-enter",
];

/// Assign exactly one role to a node. Total and deterministic; first
/// match wins:
///
/// 1. the tree root is always a plain container (the artboard),
/// 2. text leaves are text,
/// 3. button heuristics,
/// 4. text-input heuristics,
/// 5. two or more text-input children make an input group,
/// 6. plain container.
pub fn classify(n: &Node, built_children: &[IrNode], is_root: bool) -> Role {
    if is_root {
        return Role::PlainContainer;
    }
    if n.is_text() {
        return Role::Text;
    }
    if is_button(n) {
        return Role::Button;
    }
    if is_text_input(n) {
        return Role::TextInput;
    }

    let input_count = built_children
        .iter()
        .filter(|c| c.role == Role::TextInput)
        .count();
    if input_count >= 2 {
        return Role::InputGroup;
    }

    Role::PlainContainer
}

// =========================================================================
// Predicates
// =========================================================================

fn name_contains_any(n: &Node, candidates: &[&str]) -> bool {
    let name = n.name.to_lowercase();
    candidates.iter().any(|c| name.contains(c))
}

fn has_gradient_fill(n: &Node) -> bool {
    n.fills.iter().any(|f| f.kind.is_gradient())
}

fn has_solid_background(n: &Node) -> bool {
    n.fills
        .iter()
        .any(|f| f.kind == figc_schema::PaintKind::Solid)
        || n.background_color.is_some_and(|c| c.a > 0.0)
}

fn has_rounded_corners(n: &Node) -> bool {
    n.corner_radius.is_some_and(|r| r > 0.0)
        || n.rectangle_corner_radii
            .as_ref()
            .is_some_and(|rs| rs.iter().any(|r| *r > 0.0))
}

fn has_single_text_child(n: &Node) -> bool {
    n.children.len() == 1 && n.children[0].is_text()
}

fn has_any_padding(n: &Node) -> bool {
    n.padding_left.is_some()
        || n.padding_right.is_some()
        || n.padding_top.is_some()
        || n.padding_bottom.is_some()
}

fn has_border(n: &Node) -> bool {
    !n.strokes.is_empty()
}

fn has_text_child(n: &Node) -> bool {
    n.children.iter().any(Node::is_text)
}

fn has_declared_layout(n: &Node) -> bool {
    n.layout_mode.is_some()
}

/// Button heuristics, in decreasing specificity: gradient pill,
/// solid pill around a single label, or an explicitly named button.
fn is_button(n: &Node) -> bool {
    let primary = has_gradient_fill(n) && has_rounded_corners(n);
    let secondary =
        has_solid_background(n) && has_rounded_corners(n) && has_single_text_child(n);
    let named = name_contains_any(n, BUTTON_NAMES)
        && has_rounded_corners(n)
        && (has_any_padding(n) || has_single_text_child(n));
    primary || secondary || named
}

/// Text-input heuristics: the typical bordered rounded padded box, an
/// explicitly named input (no rounding required), or a bordered
/// rounded auto-layout box holding placeholder text.
fn is_text_input(n: &Node) -> bool {
    let typical = has_border(n) && has_rounded_corners(n) && has_any_padding(n);
    let named = name_contains_any(n, INPUT_NAMES) && has_border(n);
    let with_placeholder = has_border(n)
        && has_rounded_corners(n)
        && has_text_child(n)
        && has_declared_layout(n);
    typical || named || with_placeholder
}

// =========================================================================
// Rendered-text heuristics
// =========================================================================

/// Whether a rendered string is likely a placeholder rather than real
/// content. Vocabulary match on equality, or containment for short
/// strings; a long string containing "@" is treated as a prefilled
/// value (e.g. an email address) and overrides the match.
pub fn is_placeholder_text(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    let len = text.chars().count();

    let matches_vocabulary = PLACEHOLDER_VOCABULARY
        .iter()
        .any(|p| lower == *p || (lower.contains(p) && len < 25));
    let is_actual_content = text.contains('@') && len > 10;

    matches_vocabulary && !is_actual_content
}

/// Infer the HTML input type from the node's display name and the
/// content of its first text child, in priority order.
pub fn detect_input_type(n: &Node) -> InputType {
    let name = n.name.to_lowercase();
    let text = n
        .children
        .iter()
        .find(|c| c.is_text())
        .and_then(|c| c.characters.as_deref())
        .unwrap_or("")
        .to_lowercase();

    if name.contains("email") || text.contains("email") || text.contains('@') {
        InputType::Email
    } else if name.contains("password") || text.contains("password") {
        InputType::Password
    } else if name.contains("phone") || name.contains("tel") || text.contains("phone") {
        InputType::Tel
    } else if name.contains("number") || name.contains("num") {
        InputType::Number
    } else if name.contains("url") || text.contains("url") {
        InputType::Url
    } else {
        InputType::Text
    }
}

/// The first text child whose content passes the placeholder check.
pub fn find_placeholder(n: &Node) -> Option<&str> {
    n.children.iter().filter(|c| c.is_text()).find_map(|c| {
        let text = c.characters.as_deref()?;
        is_placeholder_text(text).then_some(text)
    })
}
