//! In-memory DOM used as the host tree for overlay injection, plus an html5ever
//! front-end that builds it from markup.

pub mod dom;
pub mod parser;

pub use dom::{DOM, DOMNode, DOMSubscriber, DOMUpdate, NodeKind};
pub use indextree::NodeId;
pub use parser::parse_document;
