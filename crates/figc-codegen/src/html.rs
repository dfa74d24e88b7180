//! HTML emitter.
//!
//! Walks the IR and emits one element per node: text → `<p>`,
//! button → `<button>`, text-input → self-closing `<input>`, the
//! container roles → `<div>`. A text child whose content was already
//! consumed by its button or input parent is not rendered again.

use figc_ir::{IrNode, Role};

use crate::{class_name, CodegenError};

/// Render the IR into a complete standalone HTML document.
pub fn generate(root: &IrNode) -> Result<String, CodegenError> {
    let mut body = String::new();
    render_node(root, &mut body);

    Ok(format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"utf-8\" />\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n\
         \x20 <title>Figma Output</title>\n\
         \x20 <link rel=\"stylesheet\" href=\"styles.css\" />\n\
         </head>\n\
         <body>\n\
         \x20 <div class=\"artboard\">\n\
         \x20   {body}\n\
         \x20 </div>\n\
         </body>\n\
         </html>"
    ))
}

fn esc(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn tag_for(role: Role) -> &'static str {
    match role {
        Role::Text => "p",
        Role::Button => "button",
        Role::TextInput => "input",
        Role::InputGroup | Role::PlainContainer => "div",
    }
}

/// Attributes specific to input elements: inferred type, placeholder
/// or prefilled value, and a form-friendly name.
fn input_attributes(n: &IrNode) -> String {
    let mut attrs = Vec::new();

    let input_type = n.input_type.map_or("text", |t| t.as_str());
    attrs.push(format!("type=\"{input_type}\""));

    if let Some(placeholder) = &n.placeholder {
        attrs.push(format!("placeholder=\"{}\"", esc(placeholder)));
    } else if let Some(text) = &n.text {
        let is_actual_content = text.contains('@') || text.chars().count() > 15;
        if is_actual_content {
            attrs.push(format!("value=\"{}\"", esc(text)));
        } else {
            attrs.push(format!("placeholder=\"{}\"", esc(text)));
        }
    }

    if !n.name.is_empty() {
        let name: String = n
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        attrs.push(format!("name=\"{name}\""));
    }

    if attrs.is_empty() {
        String::new()
    } else {
        format!(" {}", attrs.join(" "))
    }
}

fn render_node(n: &IrNode, out: &mut String) {
    let tag = tag_for(n.role);
    let mut attrs = format!(" class=\"{}\"", class_name(&n.id));

    match n.role {
        Role::TextInput => attrs.push_str(&input_attributes(n)),
        Role::Button => attrs.push_str(" type=\"button\""),
        _ => {}
    }

    if n.role == Role::TextInput {
        out.push_str(&format!("<{tag}{attrs} />"));
        return;
    }

    out.push_str(&format!("<{tag}{attrs}>"));

    if n.role == Role::Button {
        if let Some(text) = &n.text {
            out.push_str(&esc(text));
        } else {
            for child in n.children.iter().filter(|c| c.role == Role::Text) {
                if let Some(text) = &child.text {
                    out.push_str(&esc(text));
                }
            }
        }
    } else if n.role == Role::Text {
        if let Some(text) = &n.text {
            out.push_str(&esc(text));
        }
    }

    for child in &n.children {
        // The parent already rendered this label.
        if matches!(n.role, Role::Button | Role::TextInput) && child.role == Role::Text {
            continue;
        }
        render_node(child, out);
    }

    out.push_str(&format!("</{tag}>"));
}
