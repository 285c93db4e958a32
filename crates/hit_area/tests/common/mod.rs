#![allow(dead_code, reason = "each test binary uses a different subset of helpers")]

use anyhow::Result;
use hit_area::CssStyleDeclaration;
use html::{DOM, NodeId};

/// `<html data-font-size=..><div><i style=..></i></div></html>`; returns `(dom, target)`.
pub fn host_document(font_size: Option<&str>, target_style: Option<&str>) -> Result<(DOM, NodeId)> {
    let mut dom = DOM::new();
    let root = dom.root();
    let html_el = dom.create_element("html");
    if let Some(size) = font_size {
        dom.set_attribute(html_el, "data-font-size", size)?;
    }
    dom.append_child(root, html_el)?;
    let container = dom.create_element("div");
    dom.append_child(html_el, container)?;
    let target = dom.create_element("i");
    if let Some(style) = target_style {
        dom.set_attribute(target, "style", style)?;
    }
    dom.append_child(container, target)?;
    Ok((dom, target))
}

pub fn style_of(dom: &DOM, node: NodeId) -> CssStyleDeclaration {
    CssStyleDeclaration::parse(dom.get_attribute(node, "style"))
}

pub fn prop(dom: &DOM, node: NodeId, property: &str) -> Option<String> {
    style_of(dom, node)
        .get_property_value(property)
        .map(str::to_owned)
}

/// Padding longhands as `[top, right, bottom, left]`.
pub fn paddings(dom: &DOM, node: NodeId) -> [Option<String>; 4] {
    ["padding-top", "padding-right", "padding-bottom", "padding-left"]
        .map(|property| prop(dom, node, property))
}

pub fn px(value: &str) -> Option<String> {
    Some(format!("{value}px"))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
