//! Handler registry for tree reduction
//!
//! Each source node is processed by the handler registered for its
//! [`HandlerKey`]: the node's tag together with its `class` attribute, if any.
//! Handlers come from a closed set of actions ([`HandlerAction`]) that can be
//! declared in configuration, or from plain functions for callers that need
//! logic the actions don't cover.
//!
//! The registry is built once before reduction starts and only read afterwards.
//! A key with no handler is a schema gap and fails the run.

use crate::error::BabelError;
use crate::ir::fragment::{Element, Fragment};
use crate::ir::source::{SourceNode, CLASS_ATTR};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// The (tag, class-or-absent) pair selecting a handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerKey {
    pub tag: String,
    pub class: Option<String>,
}

impl HandlerKey {
    pub fn new(tag: impl Into<String>, class: Option<&str>) -> Self {
        HandlerKey {
            tag: tag.into(),
            class: class.map(str::to_string),
        }
    }

    pub fn of(node: &SourceNode) -> Self {
        HandlerKey::new(node.tag.as_str(), node.class())
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.class {
            Some(class) => write!(f, "{}.{}", self.tag, class),
            None => write!(f, "{}", self.tag),
        }
    }
}

/// A handler implemented as a plain function.
///
/// Receives the node, its merged input fragments and the fragments of each
/// child (in child order), and returns the node's output fragments.
pub type HandlerFn =
    fn(&SourceNode, Vec<Fragment>, &[Vec<Fragment>]) -> Result<Vec<Fragment>, BabelError>;

/// Declarative handler actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HandlerAction {
    /// Output the merged input unchanged
    Pass,
    /// Output nothing
    Drop,
    /// Wrap the merged input in an element
    Wrap {
        tag: String,
        #[serde(default)]
        class: Option<String>,
    },
    /// Output a self-closing element, discarding the input
    Marker {
        tag: String,
        #[serde(default)]
        class: Option<String>,
    },
    /// Output fixed text, discarding the input
    Literal { text: String },
}

impl HandlerAction {
    fn apply(&self, merged: Vec<Fragment>) -> Vec<Fragment> {
        match self {
            HandlerAction::Pass => merged,
            HandlerAction::Drop => Vec::new(),
            HandlerAction::Wrap { tag, class } => {
                vec![element(tag, class.as_deref()).with_contents(merged).into()]
            }
            HandlerAction::Marker { tag, class } => vec![element(tag, class.as_deref()).into()],
            HandlerAction::Literal { text } => vec![Fragment::text(text.as_str())],
        }
    }
}

fn element(tag: &str, class: Option<&str>) -> Element {
    let element = Element::new(tag);
    match class {
        Some(class) => element.with_attr(CLASS_ATTR, class),
        None => element,
    }
}

#[derive(Debug, Clone)]
pub enum Handler {
    Action(HandlerAction),
    Function(HandlerFn),
}

impl Handler {
    pub fn apply(
        &self,
        node: &SourceNode,
        merged: Vec<Fragment>,
        per_child: &[Vec<Fragment>],
    ) -> Result<Vec<Fragment>, BabelError> {
        match self {
            Handler::Action(action) => Ok(action.apply(merged)),
            Handler::Function(f) => f(node, merged, per_child),
        }
    }
}

impl From<HandlerAction> for Handler {
    fn from(action: HandlerAction) -> Self {
        Handler::Action(action)
    }
}

impl From<HandlerFn> for Handler {
    fn from(f: HandlerFn) -> Self {
        Handler::Function(f)
    }
}

/// Registry of node handlers keyed by (tag, class).
///
/// The table is fixed once built; [`HandlerRegistry::from_entries`] is the only
/// way to fill it.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerKey, Handler>,
}

impl HandlerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        HandlerRegistry {
            handlers: HashMap::new(),
        }
    }

    /// Build a registry from (key, handler) pairs; later pairs replace earlier ones.
    pub fn from_entries<I, H>(entries: I) -> Self
    where
        I: IntoIterator<Item = (HandlerKey, H)>,
        H: Into<Handler>,
    {
        HandlerRegistry {
            handlers: entries
                .into_iter()
                .map(|(key, handler)| (key, handler.into()))
                .collect(),
        }
    }

    /// Get the handler for a key, or a schema-gap error
    pub fn get(&self, key: &HandlerKey) -> Result<&Handler, BabelError> {
        self.handlers
            .get(key)
            .ok_or_else(|| BabelError::SchemaGap {
                tag: key.tag.clone(),
                class: key.class.clone(),
            })
    }

    /// Check if a key has a handler
    pub fn has(&self, key: &HandlerKey) -> bool {
        self.handlers.contains_key(key)
    }

    /// List all registered keys (sorted)
    pub fn list_keys(&self) -> Vec<HandlerKey> {
        let mut keys: Vec<_> = self.handlers.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
