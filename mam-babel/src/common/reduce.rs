//! Reduces a source tree to a fragment sequence.
//!
//! # The High-Level Concept
//!
//! The reduction is a bottom-up fold: every node turns the fragments of its
//! children into its own fragments, using the handler registered for its
//! (tag, class) pair. Text only ever enters the fold through leaves carrying
//! the reserved `text` attribute.
//!
//! # The Algorithm
//!
//! 1. **Children first:**
//!    - Reduce each child, depth-first and left to right
//!    - Keep each child's fragments (in child order) and a flat concatenation
//!
//! 2. **Text leaves:**
//!    - A node with a `text` attribute must not have produced child fragments
//!    - Its input becomes the single text run
//!
//! 3. **Merge:**
//!    - The input runs through the merge step (by default [`shrink`])
//!
//! 4. **Dispatch:**
//!    - The node's handler receives the node, the merged input and the
//!      per-child fragments, and returns the node's output
//!    - A node with no handler is a schema gap
//!
//! The fold order is observable through merging, so it must stay sequential.

use crate::common::shrink::shrink;
use crate::error::BabelError;
use crate::ir::fragment::Fragment;
use crate::ir::source::SourceNode;
use crate::registry::{HandlerKey, HandlerRegistry};

/// Merge step applied to each node's input fragments.
pub type MergeFn = fn(Vec<Fragment>) -> Vec<Fragment>;

/// Folds source trees using a handler registry and a merge step.
#[derive(Debug, Clone, Copy)]
pub struct Reducer<'a> {
    handlers: &'a HandlerRegistry,
    merge: MergeFn,
}

impl<'a> Reducer<'a> {
    pub fn new(handlers: &'a HandlerRegistry) -> Self {
        Reducer {
            handlers,
            merge: shrink,
        }
    }

    /// Replace the merge step.
    pub fn with_merge(mut self, merge: MergeFn) -> Self {
        self.merge = merge;
        self
    }

    pub fn reduce(&self, node: &SourceNode) -> Result<Vec<Fragment>, BabelError> {
        let mut flat = Vec::new();
        let mut per_child = Vec::with_capacity(node.children.len());
        for child in &node.children {
            let output = self.reduce(child)?;
            flat.extend(output.iter().cloned());
            per_child.push(output);
        }

        if let Some(text) = node.text() {
            if !flat.is_empty() {
                return Err(BabelError::MalformedNode {
                    tag: node.tag.clone(),
                    reason: format!(
                        "text leaf also produced {} fragment(s) from its children",
                        flat.len()
                    ),
                });
            }
            flat = vec![Fragment::text(text)];
        }

        let handler = self.handlers.get(&HandlerKey::of(node))?;
        handler.apply(node, (self.merge)(flat), &per_child)
    }
}

/// Reduce `node` with `handlers` and the default merge step.
pub fn reduce(node: &SourceNode, handlers: &HandlerRegistry) -> Result<Vec<Fragment>, BabelError> {
    Reducer::new(handlers).reduce(node)
}
