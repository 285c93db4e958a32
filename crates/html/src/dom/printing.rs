use core::fmt;

use super::{DOM, DOMNode, NodeKind};
use indextree::NodeId;

use serde_json::{Map, Value, json};

// -----------------------
// Module-scope helpers
// -----------------------

fn flush_text(children: &mut Vec<Value>, text_buf: &mut String) {
    if !text_buf.trim().is_empty() {
        children.push(json!({ "type": "text", "text": text_buf.clone() }));
    }
    text_buf.clear();
}

fn coalesce_children(dom: &DOM, id: NodeId) -> Vec<Value> {
    let mut children: Vec<Value> = Vec::new();
    let mut text_buf = String::new();
    for child in id.children(&dom.dom) {
        if let Ok(DOMNode {
            kind: NodeKind::Text { text },
            ..
        }) = dom.node(child)
        {
            text_buf.push_str(text);
            continue;
        }
        flush_text(&mut children, &mut text_buf);
        let value = node_to_json(dom, child);
        if !value.is_null() {
            children.push(value);
        }
    }
    flush_text(&mut children, &mut text_buf);
    children
}

fn sorted_attrs(node: &DOMNode) -> Vec<(&str, &str)> {
    let mut pairs: Vec<(&str, &str)> = node
        .attrs
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    pairs.sort_by(|left, right| left.0.cmp(right.0));
    pairs
}

fn node_to_json(dom: &DOM, id: NodeId) -> Value {
    let Ok(node) = dom.node(id) else {
        return Value::Null;
    };
    match &node.kind {
        NodeKind::Document => json!({ "type": "document", "children": coalesce_children(dom, id) }),
        NodeKind::Element { tag } => {
            let mut attrs_obj = Map::new();
            for (key, value) in sorted_attrs(node) {
                attrs_obj.insert(key.to_owned(), Value::String(value.to_owned()));
            }
            json!({
                "type": "element",
                "tag": tag,
                "attrs": Value::Object(attrs_obj),
                "children": coalesce_children(dom, id),
            })
        }
        NodeKind::Text { text } => {
            if text.trim().is_empty() {
                Value::Null
            } else {
                json!({ "type": "text", "text": text })
            }
        }
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn fmt_node(dom: &DOM, id: NodeId, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let Ok(node) = dom.node(id) else {
        return Ok(());
    };
    match &node.kind {
        NodeKind::Document => {
            write_indent(f, depth)?;
            writeln!(f, "#document")?;
        }
        NodeKind::Element { tag } => {
            write_indent(f, depth)?;
            write!(f, "<{tag}")?;
            for (key, value) in sorted_attrs(node) {
                write!(f, " {key}=\"{}\"", escape_text(value))?;
            }
            writeln!(f, ">")?;
        }
        NodeKind::Text { text } => {
            // Whitespace-only text is noise in the tree view
            if !text.chars().all(char::is_whitespace) {
                write_indent(f, depth)?;
                writeln!(f, "\"{}\"", escape_text(text))?;
            }
            return Ok(());
        }
    }
    for child in id.children(&dom.dom) {
        fmt_node(dom, child, f, depth + 1)?;
    }
    if let NodeKind::Element { tag } = &node.kind {
        write_indent(f, depth)?;
        writeln!(f, "</{tag}>")?;
    }
    Ok(())
}

impl fmt::Debug for DOM {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, self.root, f, 0)
    }
}

impl DOM {
    /// Build a deterministic JSON representation of the DOM.
    /// Schema:
    /// - Document: { "type":"document", "children":[ ... ] }
    /// - Element: { "type":"element", "tag": "div", "attrs": {..}, "children":[ ... ] }
    /// - Text: { "type":"text", "text":"..." }
    pub fn to_json_value(&self) -> Value {
        node_to_json(self, self.root)
    }

    /// JSON string for snapshots and test comparisons.
    pub fn to_json_string(&self, pretty: bool) -> String {
        let value = self.to_json_value();
        let rendered = if pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.unwrap_or_else(|_| String::from("{}"))
    }
}
