//! Style extraction.
//!
//! Maps a node's raw visual properties (geometry, paint, stroke,
//! effects, typography, layout) onto the flat [`StyleRecord`]
//! vocabulary, resolving unit and coordinate-system mismatches:
//! absolute canvas coordinates become offsets relative to the nearest
//! positioned ancestor, radians become degrees, [0,1] color channels
//! become 8-bit `rgba()` strings, and the four line-height units
//! collapse into one value by fixed priority.
//!
//! Pure and total: a node with missing or partial data simply yields
//! a sparser record.

use figc_schema::{
    Color, EffectKind, LayoutMode, Node, Paint, PaintKind, StrokeAlign, Vec2,
};

use crate::{
    BorderStyle, ExtraStroke, FlexDirection, LineHeight, Position, Radius, StyleRecord,
};

/// Format a number the way CSS expects it, removing `.0` for integers.
pub fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Render a [0,1]-channel color as a CSS `rgba()` string. RGB is
/// rounded to 8-bit; alpha passes through unmodified.
pub(crate) fn rgba(c: &Color) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (c.r * 255.0).round() as i64,
        (c.g * 255.0).round() as i64,
        (c.b * 255.0).round() as i64,
        fmt_num(c.a)
    )
}

/// Render a gradient paint as a CSS gradient expression.
/// Returns `None` when the paint has no stops or is not a gradient.
pub(crate) fn gradient(p: &Paint) -> Option<String> {
    if p.gradient_stops.is_empty() {
        return None;
    }

    let stops = p
        .gradient_stops
        .iter()
        .map(|s| format!("{} {}%", rgba(&s.color), (s.position * 100.0).round() as i64))
        .collect::<Vec<_>>()
        .join(", ");

    match p.kind {
        PaintKind::GradientLinear => {
            let angle = linear_angle(p);
            Some(format!("linear-gradient({}deg, {stops})", fmt_num(angle)))
        }
        PaintKind::GradientRadial => Some(format!("radial-gradient(circle, {stops})")),
        PaintKind::GradientAngular => Some(format!("conic-gradient({stops})")),
        // Lossy approximation kept for output compatibility: the
        // target vocabulary has no diamond gradient.
        PaintKind::GradientDiamond => {
            Some(format!("radial-gradient(ellipse at center, {stops})"))
        }
        _ => None,
    }
}

/// Angle of a linear gradient in degrees. The explicit transform
/// matrix wins (normalized to [0,360)); otherwise the two handle
/// points define it; otherwise a top-to-bottom 180.
fn linear_angle(p: &Paint) -> f64 {
    if let Some(m) = &p.gradient_transform {
        if m.len() >= 2 && m[0].len() >= 2 {
            let mut angle = m[0][1].atan2(m[0][0]).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            return angle;
        }
    }
    if p.gradient_handle_positions.len() >= 2 {
        let start = p.gradient_handle_positions[0];
        let end = p.gradient_handle_positions[1];
        return (end.y - start.y).atan2(end.x - start.x).to_degrees() + 90.0;
    }
    180.0
}

/// Fold the visible effects into one composite box-shadow and one
/// blur filter. Shadow layers stack in order; the last visible blur
/// wins.
fn extract_effects(n: &Node) -> (Option<String>, Option<String>) {
    let mut shadows: Vec<String> = Vec::new();
    let mut blur: Option<String> = None;

    for effect in &n.effects {
        if !effect.visible {
            continue;
        }
        match effect.kind {
            EffectKind::DropShadow | EffectKind::InnerShadow => {
                let Some(color) = &effect.color else { continue };
                let offset = effect.offset.unwrap_or_default();
                let radius = effect.radius.unwrap_or(0.0);
                let spread = effect.spread.unwrap_or(0.0);
                let inset = if effect.kind == EffectKind::InnerShadow {
                    "inset "
                } else {
                    ""
                };
                shadows.push(format!(
                    "{inset}{}px {}px {}px {}px {}",
                    fmt_num(offset.x),
                    fmt_num(offset.y),
                    fmt_num(radius),
                    fmt_num(spread),
                    rgba(color)
                ));
            }
            EffectKind::LayerBlur | EffectKind::BackgroundBlur => {
                blur = Some(format!("blur({}px)", fmt_num(effect.radius.unwrap_or(0.0))));
            }
            EffectKind::Other => {}
        }
    }

    let box_shadow = if shadows.is_empty() {
        None
    } else {
        Some(shadows.join(", "))
    };
    (box_shadow, blur)
}

/// Blend modes not covered by the table fall back to their own
/// lowercased name.
fn blend_mode_css(mode: &str) -> String {
    match mode {
        "MULTIPLY" => "multiply",
        "SCREEN" => "screen",
        "OVERLAY" => "overlay",
        "DARKEN" => "darken",
        "LIGHTEN" => "lighten",
        "COLOR_DODGE" => "color-dodge",
        "COLOR_BURN" => "color-burn",
        "HARD_LIGHT" => "hard-light",
        "SOFT_LIGHT" => "soft-light",
        "DIFFERENCE" => "difference",
        "EXCLUSION" => "exclusion",
        "HUE" => "hue",
        "SATURATION" => "saturation",
        "COLOR" => "color",
        "LUMINOSITY" => "luminosity",
        other => return other.to_lowercase(),
    }
    .to_string()
}

/// Derive the flat style record for one node.
///
/// `ancestor_origin` is the absolute top-left of the nearest
/// positioned ancestor; `None` for the overall root, whose offsets
/// stay in raw canvas coordinates.
pub fn extract_style(n: &Node, ancestor_origin: Option<Vec2>) -> StyleRecord {
    let mut st = StyleRecord::default();

    extract_box(n, ancestor_origin, &mut st);

    if let Some(opacity) = n.opacity {
        if opacity != 1.0 {
            st.opacity = Some(opacity);
        }
    }
    if let Some(rotation) = n.rotation {
        if rotation != 0.0 {
            st.transform = Some(format!("rotate({}deg)", fmt_num(rotation.to_degrees())));
        }
    }

    if !n.is_text() {
        extract_backgrounds(n, &mut st);
    }
    extract_blend_mode(n, &mut st);
    extract_borders(n, &mut st);
    extract_corners(n, &mut st);
    extract_layout(n, &mut st);
    extract_typography(n, &mut st);

    // Text nodes never receive a background from fills: the first
    // fill becomes the text color instead.
    if n.is_text() {
        if let Some(fill) = n.fills.first() {
            if fill.kind == PaintKind::Solid {
                if let Some(c) = &fill.color {
                    st.color = Some(rgba(c));
                }
            } else if fill.kind.is_gradient() {
                // No gradient text support: first stop only.
                if let Some(stop) = fill.gradient_stops.first() {
                    st.color = Some(rgba(&stop.color));
                }
            }
        }
    }

    let (box_shadow, blur) = extract_effects(n);
    st.box_shadow = box_shadow;
    st.blur_filter = blur;

    if n.clips_content == Some(true) {
        st.overflow_hidden = true;
    }

    st
}

/// Box and position. Outside-aligned strokes overflow the shape, so
/// the box is grown by the stroke weight on every side before the
/// origin is rebased onto the ancestor.
fn extract_box(n: &Node, ancestor_origin: Option<Vec2>, st: &mut StyleRecord) {
    let Some(bounds) = n.bounds() else { return };

    let weight = n.stroke_weight.unwrap_or(0.0);
    let mut width = bounds.width;
    let mut height = bounds.height;
    let mut left = bounds.x;
    let mut top = bounds.y;

    if n.stroke_align == Some(StrokeAlign::Outside) && weight > 0.0 {
        width += weight * 2.0;
        height += weight * 2.0;
        left -= weight;
        top -= weight;
    }

    st.width = Some(width);
    st.height = Some(height);
    match ancestor_origin {
        Some(origin) => {
            st.left = Some(left - origin.x);
            st.top = Some(top - origin.y);
        }
        None => {
            st.left = Some(left);
            st.top = Some(top);
        }
    }
    st.position = Some(Position::Absolute);
}

/// Fill paints in order: the first solid is the primary background
/// color, further solids and every gradient become image layers.
/// Image fills are out of scope and skipped. With no fills at all,
/// the node background color is the fallback.
fn extract_backgrounds(n: &Node, st: &mut StyleRecord) {
    if n.fills.is_empty() {
        if let Some(bg) = &n.background_color {
            if bg.a > 0.0 {
                st.background_color = Some(rgba(bg));
            }
        }
        return;
    }

    let mut solid: Option<String> = None;
    let mut layers: Vec<String> = Vec::new();

    for fill in &n.fills {
        if fill.kind == PaintKind::Solid {
            if let Some(c) = &fill.color {
                let color = rgba(c);
                if solid.is_none() {
                    solid = Some(color);
                } else {
                    layers.push(color);
                }
            }
        } else if fill.kind.is_gradient() {
            if let Some(g) = gradient(fill) {
                layers.push(g);
            }
        }
    }

    if let Some(color) = solid {
        st.background_color = Some(color);
        st.background_images = layers;
    } else if !layers.is_empty() {
        st.background_image = Some(layers.remove(0));
        st.background_images = layers;
    }
}

fn extract_blend_mode(n: &Node, st: &mut StyleRecord) {
    let Some(mode) = &n.blend_mode else { return };
    if mode == "NORMAL" || mode == "PASS_THROUGH" {
        return;
    }
    let css = blend_mode_css(mode);
    if st.background_image.is_some() || !st.background_images.is_empty() {
        st.background_blend_mode = Some(css.clone());
    }
    st.blend_mode = Some(css);
}

/// Only the first stroke paint becomes the border; the rest are kept
/// as extra strokes for later approximation as inset outlines.
fn extract_borders(n: &Node, st: &mut StyleRecord) {
    if n.strokes.is_empty() {
        return;
    }

    let weight = n.stroke_weight.unwrap_or(1.0);
    let style = if n.stroke_dashes.is_empty() {
        BorderStyle::Solid
    } else {
        BorderStyle::Dashed
    };

    for (i, stroke) in n.strokes.iter().enumerate() {
        let Some(c) = &stroke.color else { continue };
        let color = rgba(c);

        if i == 0 {
            st.border_color = Some(color);
            st.border_style = Some(style);
            st.border_width = Some(weight);
            st.border_dash_pattern = n.stroke_dashes.clone();
            if n.stroke_align == Some(StrokeAlign::Inside) {
                st.border_box_sizing = true;
            }
        } else {
            st.extra_strokes.push(ExtraStroke {
                width: weight,
                color,
                style,
            });
        }
    }
}

fn extract_corners(n: &Node, st: &mut StyleRecord) {
    if let Some(radii) = &n.rectangle_corner_radii {
        if radii.len() == 4 {
            st.radius = Some(Radius::PerCorner([radii[0], radii[1], radii[2], radii[3]]));
            return;
        }
    }
    if let Some(r) = n.corner_radius {
        st.radius = Some(Radius::Uniform(r));
    }
}

/// A declared auto-layout direction becomes a flex layout; padding is
/// emitted either way.
fn extract_layout(n: &Node, st: &mut StyleRecord) {
    match n.layout_mode {
        Some(LayoutMode::Horizontal) => {
            st.flex_direction = Some(FlexDirection::Row);
            st.gap = n.item_spacing;
        }
        Some(LayoutMode::Vertical) => {
            st.flex_direction = Some(FlexDirection::Column);
            st.gap = n.item_spacing;
        }
        _ => {}
    }
    st.padding_left = n.padding_left;
    st.padding_right = n.padding_right;
    st.padding_top = n.padding_top;
    st.padding_bottom = n.padding_bottom;
}

fn extract_typography(n: &Node, st: &mut StyleRecord) {
    let Some(ts) = &n.style else { return };

    st.font_size = ts.font_size;
    st.font_weight = ts.font_weight;
    st.font_family = ts.font_family.clone();
    st.font_style = ts.font_style.clone();

    if let Some(align) = &ts.text_align_horizontal {
        let align = align.to_lowercase();
        st.text_align = Some(if align == "justified" {
            "justify".to_string()
        } else {
            align
        });
    }
    if let Some(valign) = &ts.text_align_vertical {
        let valign = valign.to_lowercase();
        st.vertical_align = Some(if valign == "center" {
            "middle".to_string()
        } else {
            valign
        });
    }

    st.letter_spacing = ts.letter_spacing;

    // One unit fires, in this priority order.
    st.line_height = if matches!(
        ts.line_height_unit.as_deref(),
        Some("AUTO") | Some("AUTO_HEIGHT")
    ) {
        Some(LineHeight::Normal)
    } else if let Some(px) = ts.line_height_px {
        Some(LineHeight::Px(px))
    } else if let (Some(percent), Some(size)) = (ts.line_height_percent_font_size, ts.font_size) {
        Some(LineHeight::Px(percent / 100.0 * size))
    } else {
        ts.line_height_percent.map(LineHeight::Percent)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node_from(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    // =========================================================================
    // Color & gradient rendering
    // =========================================================================

    #[test]
    fn test_rgba_round_trip_red() {
        let c = Color {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(rgba(&c), "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn test_rgba_fractional_alpha() {
        let c = Color {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 0.25,
        };
        assert_eq!(rgba(&c), "rgba(128, 128, 128, 0.25)");
    }

    fn two_stop_gradient(kind: &str, extra: &str) -> Paint {
        serde_json::from_str(&format!(
            r#"{{
                "type": "{kind}",
                "gradientStops": [
                    {{"color": {{"r": 1, "g": 0, "b": 0, "a": 1}}, "position": 0}},
                    {{"color": {{"r": 0, "g": 0, "b": 1, "a": 1}}, "position": 1}}
                ]{extra}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_gradient_angle_from_handles() {
        let p = two_stop_gradient(
            "GRADIENT_LINEAR",
            r#", "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]"#,
        );
        assert_eq!(
            gradient(&p).unwrap(),
            "linear-gradient(90deg, rgba(255, 0, 0, 1) 0%, rgba(0, 0, 255, 1) 100%)"
        );
    }

    #[test]
    fn test_gradient_angle_from_transform_wins_over_handles() {
        let p = two_stop_gradient(
            "GRADIENT_LINEAR",
            r#", "gradientTransform": [[0, 1, 0], [-1, 0, 0]],
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]"#,
        );
        // atan2(1, 0) = 90deg
        assert!(gradient(&p).unwrap().starts_with("linear-gradient(90deg,"));
    }

    #[test]
    fn test_gradient_angle_from_transform_normalized() {
        // atan2(-1, 0) = -90deg, normalized to 270
        let p = two_stop_gradient("GRADIENT_LINEAR", r#", "gradientTransform": [[0, -1, 0], [1, 0, 0]]"#);
        assert!(gradient(&p).unwrap().starts_with("linear-gradient(270deg,"));
    }

    #[test]
    fn test_gradient_default_angle() {
        let p = two_stop_gradient("GRADIENT_LINEAR", "");
        assert!(gradient(&p).unwrap().starts_with("linear-gradient(180deg,"));
    }

    #[test]
    fn test_radial_gradient() {
        let p = two_stop_gradient("GRADIENT_RADIAL", "");
        assert!(gradient(&p).unwrap().starts_with("radial-gradient(circle,"));
    }

    #[test]
    fn test_angular_gradient() {
        let p = two_stop_gradient("GRADIENT_ANGULAR", "");
        assert!(gradient(&p).unwrap().starts_with("conic-gradient("));
    }

    #[test]
    fn test_diamond_gradient_approximated_as_radial() {
        let p = two_stop_gradient("GRADIENT_DIAMOND", "");
        assert!(gradient(&p)
            .unwrap()
            .starts_with("radial-gradient(ellipse at center,"));
    }

    #[test]
    fn test_gradient_without_stops_is_none() {
        let p: Paint = serde_json::from_str(r#"{"type":"GRADIENT_LINEAR"}"#).unwrap();
        assert_eq!(gradient(&p), None);
    }

    // =========================================================================
    // Box & position
    // =========================================================================

    #[test]
    fn test_box_relative_to_ancestor() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "absoluteBoundingBox": {"x": 120, "y": 40, "width": 100, "height": 50}
            }"#,
        );
        let st = extract_style(&n, Some(Vec2 { x: 100.0, y: 30.0 }));
        assert_eq!(st.left, Some(20.0));
        assert_eq!(st.top, Some(10.0));
        assert_eq!(st.position, Some(Position::Absolute));
    }

    #[test]
    fn test_box_raw_origin_without_ancestor() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "absoluteBoundingBox": {"x": 120, "y": 40, "width": 100, "height": 50}
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.left, Some(120.0));
        assert_eq!(st.top, Some(40.0));
    }

    #[test]
    fn test_outside_stroke_expands_box() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "RECTANGLE",
                "absoluteBoundingBox": {"x": 10, "y": 10, "width": 100, "height": 50},
                "strokeAlign": "OUTSIDE", "strokeWeight": 2
            }"#,
        );
        let st = extract_style(&n, Some(Vec2 { x: 0.0, y: 0.0 }));
        assert_eq!(st.left, Some(8.0));
        assert_eq!(st.top, Some(8.0));
        assert_eq!(st.width, Some(104.0));
        assert_eq!(st.height, Some(54.0));
    }

    #[test]
    fn test_inside_stroke_does_not_expand_box() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "RECTANGLE",
                "absoluteBoundingBox": {"x": 10, "y": 10, "width": 100, "height": 50},
                "strokeAlign": "INSIDE", "strokeWeight": 2
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.width, Some(100.0));
        assert_eq!(st.left, Some(10.0));
    }

    #[test]
    fn test_no_box_no_position() {
        let n = node_from(r#"{"id":"1:1","name":"x","type":"FRAME"}"#);
        let st = extract_style(&n, None);
        assert_eq!(st.position, None);
        assert_eq!(st.width, None);
    }

    // =========================================================================
    // Backgrounds
    // =========================================================================

    #[test]
    fn test_first_solid_becomes_background_color() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "fills": [
                    {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}},
                    {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 0.5}}
                ]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.background_color.as_deref(), Some("rgba(255, 255, 255, 1)"));
        assert_eq!(st.background_images, vec!["rgba(0, 0, 0, 0.5)".to_string()]);
    }

    #[test]
    fn test_lone_gradient_becomes_background_image() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "fills": [{
                    "type": "GRADIENT_LINEAR",
                    "gradientStops": [
                        {"color": {"r": 1, "g": 0, "b": 0, "a": 1}, "position": 0},
                        {"color": {"r": 0, "g": 0, "b": 1, "a": 1}, "position": 1}
                    ]
                }]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.background_color, None);
        assert!(st.background_image.unwrap().starts_with("linear-gradient(180deg,"));
        assert!(st.background_images.is_empty());
    }

    #[test]
    fn test_background_color_fallback_when_no_fills() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "backgroundColor": {"r": 0, "g": 1, "b": 0, "a": 1}
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.background_color.as_deref(), Some("rgba(0, 255, 0, 1)"));
    }

    #[test]
    fn test_transparent_background_color_ignored() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "backgroundColor": {"r": 0, "g": 1, "b": 0, "a": 0}
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.background_color, None);
    }

    #[test]
    fn test_image_fill_skipped() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"FRAME","fills":[{"type":"IMAGE"}]}"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.background_color, None);
        assert_eq!(st.background_image, None);
    }

    #[test]
    fn test_text_fill_becomes_color_not_background() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "Label", "type": "TEXT",
                "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.color.as_deref(), Some("rgba(0, 0, 0, 1)"));
        assert_eq!(st.background_color, None);
    }

    #[test]
    fn test_text_gradient_fill_uses_first_stop() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "Label", "type": "TEXT",
                "fills": [{
                    "type": "GRADIENT_LINEAR",
                    "gradientStops": [
                        {"color": {"r": 1, "g": 0, "b": 0, "a": 1}, "position": 0},
                        {"color": {"r": 0, "g": 0, "b": 1, "a": 1}, "position": 1}
                    ]
                }]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.color.as_deref(), Some("rgba(255, 0, 0, 1)"));
    }

    // =========================================================================
    // Blend modes
    // =========================================================================

    #[test]
    fn test_normal_and_pass_through_omitted() {
        for mode in ["NORMAL", "PASS_THROUGH"] {
            let n = node_from(&format!(
                r#"{{"id":"1:1","name":"x","type":"FRAME","blendMode":"{mode}"}}"#
            ));
            assert_eq!(extract_style(&n, None).blend_mode, None);
        }
    }

    #[test]
    fn test_blend_mode_table() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"FRAME","blendMode":"COLOR_DODGE"}"#,
        );
        assert_eq!(
            extract_style(&n, None).blend_mode.as_deref(),
            Some("color-dodge")
        );
    }

    #[test]
    fn test_unknown_blend_mode_lowercased() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"FRAME","blendMode":"LINEAR_BURN"}"#,
        );
        assert_eq!(
            extract_style(&n, None).blend_mode.as_deref(),
            Some("linear_burn")
        );
    }

    #[test]
    fn test_blend_mode_applied_to_background_layers() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "blendMode": "MULTIPLY",
                "fills": [
                    {"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}},
                    {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}
                ]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.blend_mode.as_deref(), Some("multiply"));
        assert_eq!(st.background_blend_mode.as_deref(), Some("multiply"));
    }

    // =========================================================================
    // Borders & corners
    // =========================================================================

    #[test]
    fn test_first_stroke_becomes_border() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "RECTANGLE",
                "strokes": [
                    {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}},
                    {"type": "SOLID", "color": {"r": 1, "g": 0, "b": 0, "a": 1}}
                ],
                "strokeWeight": 3
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.border_color.as_deref(), Some("rgba(0, 0, 0, 1)"));
        assert_eq!(st.border_width, Some(3.0));
        assert_eq!(st.border_style, Some(BorderStyle::Solid));
        assert_eq!(st.extra_strokes.len(), 1);
        assert_eq!(st.extra_strokes[0].color, "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn test_dash_pattern_makes_border_dashed() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "RECTANGLE",
                "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}],
                "strokeDashes": [4, 4]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.border_style, Some(BorderStyle::Dashed));
        assert_eq!(st.border_dash_pattern, vec![4.0, 4.0]);
        // Weight defaults to 1 when strokes exist but no weight is set.
        assert_eq!(st.border_width, Some(1.0));
    }

    #[test]
    fn test_inside_stroke_requests_border_box() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "RECTANGLE",
                "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}],
                "strokeAlign": "INSIDE"
            }"#,
        );
        assert!(extract_style(&n, None).border_box_sizing);
    }

    #[test]
    fn test_per_corner_radii_win_over_uniform() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "RECTANGLE",
                "cornerRadius": 8, "rectangleCornerRadii": [1, 2, 3, 4]
            }"#,
        );
        assert_eq!(
            extract_style(&n, None).radius,
            Some(Radius::PerCorner([1.0, 2.0, 3.0, 4.0]))
        );
    }

    #[test]
    fn test_uniform_radius() {
        let n = node_from(r#"{"id":"1:1","name":"x","type":"RECTANGLE","cornerRadius":8}"#);
        assert_eq!(extract_style(&n, None).radius, Some(Radius::Uniform(8.0)));
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn test_horizontal_layout_is_flex_row() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "layoutMode": "HORIZONTAL", "itemSpacing": 8,
                "paddingLeft": 16, "paddingRight": 16
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.flex_direction, Some(FlexDirection::Row));
        assert_eq!(st.gap, Some(8.0));
        assert_eq!(st.padding_left, Some(16.0));
    }

    #[test]
    fn test_padding_without_layout_mode() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"FRAME","paddingTop":4}"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.flex_direction, None);
        assert_eq!(st.padding_top, Some(4.0));
    }

    // =========================================================================
    // Typography
    // =========================================================================

    #[test]
    fn test_justified_becomes_justify() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "TEXT",
                "style": {"textAlignHorizontal": "JUSTIFIED", "textAlignVertical": "CENTER"}
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.text_align.as_deref(), Some("justify"));
        assert_eq!(st.vertical_align.as_deref(), Some("middle"));
    }

    #[test]
    fn test_line_height_px_wins_over_percent_of_font_size() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "TEXT",
                "style": {"fontSize": 16, "lineHeightPx": 24, "lineHeightPercentFontSize": 150}
            }"#,
        );
        assert_eq!(extract_style(&n, None).line_height, Some(LineHeight::Px(24.0)));
    }

    #[test]
    fn test_line_height_percent_of_font_size() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "TEXT",
                "style": {"fontSize": 16, "lineHeightPercentFontSize": 150}
            }"#,
        );
        assert_eq!(extract_style(&n, None).line_height, Some(LineHeight::Px(24.0)));
    }

    #[test]
    fn test_line_height_auto_is_normal() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "TEXT",
                "style": {"lineHeightUnit": "AUTO", "lineHeightPx": 24}
            }"#,
        );
        assert_eq!(extract_style(&n, None).line_height, Some(LineHeight::Normal));
    }

    #[test]
    fn test_line_height_raw_percent() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"TEXT","style":{"lineHeightPercent":120}}"#,
        );
        assert_eq!(
            extract_style(&n, None).line_height,
            Some(LineHeight::Percent(120.0))
        );
    }

    // =========================================================================
    // Effects, opacity, rotation, clipping
    // =========================================================================

    #[test]
    fn test_shadow_layers_joined() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "effects": [
                    {"type": "DROP_SHADOW", "visible": true,
                     "offset": {"x": 0, "y": 4}, "radius": 8, "spread": 2,
                     "color": {"r": 0, "g": 0, "b": 0, "a": 0.25}},
                    {"type": "INNER_SHADOW", "visible": true,
                     "offset": {"x": 1, "y": 1}, "radius": 2,
                     "color": {"r": 1, "g": 1, "b": 1, "a": 1}}
                ]
            }"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(
            st.box_shadow.as_deref(),
            Some("0px 4px 8px 2px rgba(0, 0, 0, 0.25), inset 1px 1px 2px 0px rgba(255, 255, 255, 1)")
        );
    }

    #[test]
    fn test_invisible_effects_skipped() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "effects": [{"type": "DROP_SHADOW", "visible": false, "radius": 8,
                             "color": {"r": 0, "g": 0, "b": 0, "a": 1}}]
            }"#,
        );
        assert_eq!(extract_style(&n, None).box_shadow, None);
    }

    #[test]
    fn test_last_visible_blur_wins() {
        let n = node_from(
            r#"{
                "id": "1:1", "name": "x", "type": "FRAME",
                "effects": [
                    {"type": "LAYER_BLUR", "visible": true, "radius": 4},
                    {"type": "BACKGROUND_BLUR", "visible": true, "radius": 12}
                ]
            }"#,
        );
        assert_eq!(extract_style(&n, None).blur_filter.as_deref(), Some("blur(12px)"));
    }

    #[test]
    fn test_identity_opacity_and_rotation_omitted() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"FRAME","opacity":1,"rotation":0}"#,
        );
        let st = extract_style(&n, None);
        assert_eq!(st.opacity, None);
        assert_eq!(st.transform, None);
    }

    #[test]
    fn test_rotation_converted_to_degrees() {
        let n = node_from(
            r#"{"id":"1:1","name":"x","type":"FRAME","rotation":3.141592653589793}"#,
        );
        assert_eq!(
            extract_style(&n, None).transform.as_deref(),
            Some("rotate(180deg)")
        );
    }

    #[test]
    fn test_clips_content_requests_overflow_hidden() {
        let n = node_from(r#"{"id":"1:1","name":"x","type":"FRAME","clipsContent":true}"#);
        assert!(extract_style(&n, None).overflow_hidden);

        let n = node_from(r#"{"id":"1:1","name":"x","type":"FRAME","clipsContent":false}"#);
        assert!(!extract_style(&n, None).overflow_hidden);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(24.0), "24");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-2.0), "-2");
    }
}
