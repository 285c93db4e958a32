use anyhow::{Error, anyhow};
use indextree::{Arena, NodeId};
use smallvec::SmallVec;

mod printing;
mod updating;

pub use updating::{DOMSubscriber, DOMUpdate};

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element { tag: String },
    Text { text: String },
}

#[derive(Debug, Clone, Default)]
pub struct DOMNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
}

/// Arena-backed document tree.
///
/// Every structural or attribute change made through this type is also recorded as a
/// [`DOMUpdate`] so observers can be replayed the mutation log in order.
pub struct DOM {
    dom: Arena<DOMNode>,
    root: NodeId,
    pending: Vec<DOMUpdate>,
}

impl Default for DOM {
    fn default() -> Self {
        Self::new()
    }
}

impl DOM {
    pub fn new() -> Self {
        let mut dom = Arena::new();
        Self {
            root: dom.new_node(DOMNode::default()),
            dom,
            pending: Vec::new(),
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// First element child of the document (`<html>` for parsed documents).
    pub fn document_element(&self) -> Option<NodeId> {
        self.root
            .children(&self.dom)
            .find(|child| self.is_element(*child))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.dom.get(node).is_some_and(|entry| !entry.is_removed())
    }

    pub fn node(&self, node: NodeId) -> Result<&DOMNode, Error> {
        self.dom
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(indextree::Node::get)
            .ok_or_else(|| anyhow!("Unknown DOM node {node:?}"))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut DOMNode, Error> {
        self.dom
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(indextree::Node::get_mut)
            .ok_or_else(|| anyhow!("Unknown DOM node {node:?}"))
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.node(node), Ok(DOMNode { kind: NodeKind::Element { .. }, .. }))
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).ok()?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    /// Create a detached element. Tag names are stored lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.dom.new_node(DOMNode {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            attrs: SmallVec::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.dom.new_node(DOMNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            attrs: SmallVec::new(),
        })
    }

    /// Append `child` as the last child of `parent`, moving it if it is already attached.
    ///
    /// # Errors
    /// Fails when either node is unknown, when `parent` is a text node, when `child` is the
    /// document, or when the append would make a node its own ancestor. A failed append
    /// leaves the tree untouched.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        if matches!(self.node(parent)?.kind, NodeKind::Text { .. }) {
            return Err(anyhow!("Text node {parent:?} cannot have children"));
        }
        let update_kind = self.node(child)?.kind.clone();
        if matches!(update_kind, NodeKind::Document) {
            return Err(anyhow!("The document node cannot be appended"));
        }
        // `checked_append` detaches `child` from its old parent only once its checks pass.
        parent
            .checked_append(child, &mut self.dom)
            .map_err(|err| anyhow!("Cannot append {child:?} to {parent:?}: {err}"))?;
        let pos = parent.children(&self.dom).count().saturating_sub(1);
        match update_kind {
            NodeKind::Element { tag } => self.pending.push(DOMUpdate::InsertElement {
                parent,
                node: child,
                tag,
                pos,
            }),
            NodeKind::Text { text } => self.pending.push(DOMUpdate::InsertText {
                parent,
                node: child,
                text,
                pos,
            }),
            NodeKind::Document => {}
        }
        Ok(())
    }

    /// Set (or replace) an attribute. Attribute names are stored lowercase.
    ///
    /// # Errors
    /// Fails when the node is unknown or is not an element.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), Error> {
        let name = name.to_ascii_lowercase();
        let entry = self.node_mut(node)?;
        if !matches!(entry.kind, NodeKind::Element { .. }) {
            return Err(anyhow!("Node {node:?} is not an element"));
        }
        match entry.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => value.clone_into(existing),
            None => entry.attrs.push((name.clone(), value.to_owned())),
        }
        self.pending.push(DOMUpdate::SetAttr {
            node,
            name,
            value: value.to_owned(),
        });
        Ok(())
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .ok()?
            .attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Attributes of `node` in insertion order; empty for unknown or non-element nodes.
    pub fn attributes(&self, node: NodeId) -> impl Iterator<Item = (&str, &str)> {
        self.node(node)
            .ok()
            .into_iter()
            .flat_map(|entry| entry.attrs.iter())
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.dom.get(node)?.parent()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        if !self.contains(node) {
            return Vec::new();
        }
        node.children(&self.dom).collect()
    }

    /// All descendants of `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        if !self.contains(node) {
            return Vec::new();
        }
        node.descendants(&self.dom).skip(1).collect()
    }

    pub(crate) fn push_update(&mut self, update: DOMUpdate) {
        self.pending.push(update);
    }

    /// Take the mutation log recorded since the last drain.
    pub fn drain_updates(&mut self) -> Vec<DOMUpdate> {
        std::mem::take(&mut self.pending)
    }

    /// Deliver the pending mutation log to `subscriber`, in order.
    ///
    /// # Errors
    /// Stops at and returns the first subscriber error; later updates are dropped.
    pub fn flush_to<S: DOMSubscriber + ?Sized>(&mut self, subscriber: &mut S) -> Result<(), Error> {
        for update in self.drain_updates() {
            subscriber.apply_update(update)?;
        }
        Ok(())
    }
}
