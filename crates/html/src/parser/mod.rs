//! HTML5 parsing using html5ever.

use crate::dom::{DOM, DOMUpdate};
use anyhow::Error;
use html5ever::tendril::TendrilSink as _;
use html5ever::ParseOpts;
use indextree::NodeId;
use log::debug;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// Parse a complete HTML document into a fresh [`DOM`].
///
/// The mutation log of the returned DOM holds every insertion and attribute write made
/// while building it, followed by `EndOfDocument`, so subscribers can observe the load
/// the same way they observe later mutations.
///
/// # Errors
/// Fails only if the tree conversion hits an invalid append, which html5ever output
/// never produces.
pub fn parse_document(html: &str) -> Result<DOM, Error> {
    let rc_dom: RcDom = html5ever::parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let mut dom = DOM::new();
    let root = dom.root();
    for child in rc_dom.document.children.borrow().iter() {
        convert_node(&mut dom, child, root)?;
    }
    dom.push_update(DOMUpdate::EndOfDocument);
    debug!(
        "Parsed document: {} nodes",
        dom.descendants(root).len()
    );
    Ok(dom)
}

/// Convert an html5ever node (and its subtree) into `dom` under `parent`.
fn convert_node(dom: &mut DOM, rc_node: &Handle, parent: NodeId) -> Result<(), Error> {
    match &rc_node.data {
        RcNodeData::Document => {
            for child in rc_node.children.borrow().iter() {
                convert_node(dom, child, parent)?;
            }
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let node = dom.create_text(&text);
                dom.append_child(parent, node)?;
            }
        }
        RcNodeData::Element { name, attrs, .. } => {
            let node = dom.create_element(&name.local);
            for attr in attrs.borrow().iter() {
                dom.set_attribute(node, &attr.name.local, &attr.value)?;
            }
            dom.append_child(parent, node)?;
            for child in rc_node.children.borrow().iter() {
                convert_node(dom, child, node)?;
            }
        }
        RcNodeData::Doctype { .. }
        | RcNodeData::Comment { .. }
        | RcNodeData::ProcessingInstruction { .. } => {}
    }
    Ok(())
}
