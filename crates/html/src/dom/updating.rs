use anyhow::Error;
use indextree::NodeId;

/// One entry of the DOM mutation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DOMUpdate {
    InsertElement {
        parent: NodeId,
        node: NodeId,
        tag: String,
        pos: usize,
    },
    InsertText {
        parent: NodeId,
        node: NodeId,
        text: String,
        pos: usize,
    },
    SetAttr {
        node: NodeId,
        name: String,
        value: String,
    },
    EndOfDocument,
}

/// Observer of the DOM mutation log.
pub trait DOMSubscriber {
    fn apply_update(&mut self, update: DOMUpdate) -> Result<(), Error>;
}
