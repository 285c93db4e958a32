use crate::cssom::CssStyleDeclaration;
use anyhow::Error;
use core::fmt;
use css_position::Position;
use html::{DOM, NodeId};
use log::trace;

/// The tree operations overlay injection needs from its host environment.
pub trait OverlayHost {
    type Node: Copy + fmt::Debug;

    /// Effective `position` of `node`; `static` when nothing sets it.
    fn computed_position(&self, node: Self::Node) -> Result<Position, Error>;

    /// Set one inline style property. `Ok(false)` means the value was rejected and the
    /// style is unchanged; errors are reserved for unknown nodes.
    fn set_style_property(
        &mut self,
        node: Self::Node,
        property: &str,
        value: &str,
    ) -> Result<bool, Error>;

    /// Create a detached, empty element.
    fn create_overlay(&mut self, tag: &str) -> Self::Node;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<(), Error>;
}

/// Computed style here is the inline `style` attribute only; there is no cascade.
impl OverlayHost for DOM {
    type Node = NodeId;

    fn computed_position(&self, node: NodeId) -> Result<Position, Error> {
        self.node(node)?;
        let style = CssStyleDeclaration::parse(self.get_attribute(node, "style"));
        Ok(style.position().unwrap_or_default())
    }

    fn set_style_property(&mut self, node: NodeId, property: &str, value: &str) -> Result<bool, Error> {
        self.node(node)?;
        let mut style = CssStyleDeclaration::parse(self.get_attribute(node, "style"));
        if !style.set_property(property, value) {
            trace!("Ignored invalid declaration {property}: {value} on {node:?}");
            return Ok(false);
        }
        trace!("Set {property}: {value} on {node:?}");
        self.set_attribute(node, "style", &style.css_text())?;
        Ok(true)
    }

    fn create_overlay(&mut self, tag: &str) -> NodeId {
        self.create_element(tag)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), Error> {
        Self::append_child(self, parent, child)
    }
}
