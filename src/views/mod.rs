// src/views/mod.rs

pub mod layout;
pub mod node_chain;

pub use layout::StageLayout;
pub use node_chain::{ChainStep, Heading, NodeChain, PinNode, Traversal};
