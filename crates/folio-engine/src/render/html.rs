use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::export::LookupTables;
use crate::model::{Document, Element, ElementKind, Node, TextRun};

/// Render the document as HTML markup.
///
/// Each element kind maps to one wrapper; paragraphs and unrecognized kinds
/// fall back to a plain `div`.
pub fn render_html(document: &Document, tables: &LookupTables) -> String {
    let renderer = HtmlRenderer { tables };
    let mut out = String::new();
    for node in document.blocks() {
        renderer.node(node, &mut out);
    }
    out
}

struct HtmlRenderer<'a> {
    tables: &'a LookupTables,
}

impl HtmlRenderer<'_> {
    fn node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Text(run) => self.leaf(run, out),
            Node::Element(element) => self.element(element, out),
        }
    }

    fn wrap(&self, open: &str, close: &str, element: &Element, out: &mut String) {
        out.push_str(open);
        for child in &element.children {
            self.node(child, out);
        }
        out.push_str(close);
    }

    fn element(&self, element: &Element, out: &mut String) {
        match &element.kind {
            ElementKind::HeadingOne => self.wrap("<h1>", "</h1>", element, out),
            ElementKind::HeadingTwo => self.wrap("<h2>", "</h2>", element, out),
            ElementKind::HeadingThree => self.wrap("<h3>", "</h3>", element, out),
            ElementKind::Blockquote => self.wrap("<blockquote>", "</blockquote>", element, out),
            ElementKind::AlignLeft => {
                self.wrap(r#"<div style="text-align: left">"#, "</div>", element, out)
            }
            ElementKind::AlignCenter => {
                self.wrap(r#"<div style="text-align: center">"#, "</div>", element, out)
            }
            ElementKind::AlignRight => {
                self.wrap(r#"<div style="text-align: right">"#, "</div>", element, out)
            }
            ElementKind::ListItem => self.wrap("<li>", "</li>", element, out),
            ElementKind::OrderedList => self.wrap("<ol>", "</ol>", element, out),
            ElementKind::UnorderedList => self.wrap("<ul>", "</ul>", element, out),
            ElementKind::Link { url } => {
                let open = format!(r#"<a href="{}">"#, encode_double_quoted_attribute(url));
                self.wrap(&open, "</a>", element, out);
            }
            ElementKind::Table => self.wrap("<table><tbody>", "</tbody></table>", element, out),
            ElementKind::TableRow => self.wrap("<tr>", "</tr>", element, out),
            ElementKind::TableCell => self.wrap("<td>", "</td>", element, out),
            ElementKind::Image { src } => {
                out.push_str(&format!(
                    r#"<img src="{}" alt="">"#,
                    encode_double_quoted_attribute(src)
                ));
            }
            ElementKind::Video { src } => {
                out.push_str(&format!(
                    r#"<video src="{}" controls></video>"#,
                    encode_double_quoted_attribute(src)
                ));
            }
            ElementKind::Equation { formula, inline } => {
                let (tag, class) = if *inline {
                    ("span", "equation-inline")
                } else {
                    ("div", "equation")
                };
                out.push_str(&format!(
                    r#"<{tag} class="{class}">{}</{tag}>"#,
                    encode_text(formula)
                ));
            }
            ElementKind::Paragraph | ElementKind::Unknown => {
                self.wrap("<div>", "</div>", element, out)
            }
        }
    }

    /// Marks nest innermost-first in a fixed order, so `bold` + `italic`
    /// renders as `<em><strong>..</strong></em>`.
    fn leaf(&self, run: &TextRun, out: &mut String) {
        let mut html = encode_text(&run.text).into_owned();

        if run.bold {
            html = format!("<strong>{html}</strong>");
        }
        if run.code {
            html = format!("<code>{html}</code>");
        }
        if run.italic {
            html = format!("<em>{html}</em>");
        }
        if run.strikethrough {
            html = format!(r#"<span style="text-decoration: line-through">{html}</span>"#);
        }
        if run.underline {
            html = format!("<u>{html}</u>");
        }
        if run.superscript {
            html = format!("<sup>{html}</sup>");
        }
        if run.subscript {
            html = format!("<sub>{html}</sub>");
        }
        if let Some(color) = &run.color {
            html = style_span("color", color, &html);
        }
        if let Some(color) = &run.background_color {
            html = style_span("background-color", color, &html);
        }
        if let Some(size) = run
            .font_size
            .as_deref()
            .and_then(|key| self.tables.font_size(key))
        {
            html = style_span("font-size", &format!("{size}pt"), &html);
        }
        if let Some(family) = run
            .font_family
            .as_deref()
            .and_then(|key| self.tables.font_family(key))
        {
            html = style_span("font-family", family, &html);
        }

        out.push_str("<span>");
        out.push_str(&html);
        out.push_str("</span>");
    }
}

fn style_span(property: &str, value: &str, inner: &str) -> String {
    format!(
        r#"<span style="{property}: {}">{inner}</span>"#,
        encode_double_quoted_attribute(value)
    )
}
