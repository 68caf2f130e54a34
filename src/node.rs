//! Selector node model
//!
//! A selector chain is a singly-linked list of [`Node`]s: each node describes
//! one path segment (path style, tag match with optional position, ordered
//! predicates) and owns at most one child. Chains are built with a fluent
//! consuming builder and compiled once into an XPath string.

use serde::{Deserialize, Serialize};

use crate::compiler;
use crate::predicate::{Predicate, PredicateSet};

/// Path step separating a node from its predecessor.
///
/// Defaults are resolved lazily at render time because they depend on the
/// final chain shape: an unset style on the chain head becomes [`FromRoot`],
/// an unset style on any other node becomes [`Child`]. An explicitly set
/// style is never overridden.
///
/// [`FromRoot`]: PathStyle::FromRoot
/// [`Child`]: PathStyle::Child
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStyle {
    /// Descendant-from-root step, renders as `//`.
    FromRoot,

    /// Direct child step, renders as `/`.
    Child,
}

impl PathStyle {
    /// Rendered form of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            PathStyle::FromRoot => "//",
            PathStyle::Child => "/",
        }
    }
}

/// One segment of a selector chain.
///
/// Built through the `with_*` methods, which consume and return the node so
/// a finished chain cannot be aliased mid-construction. Compilation via
/// [`Node::to_xpath`] borrows the chain immutably and never mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    path: Option<PathStyle>,
    tag: String,
    tag_position: u32,
    predicates: PredicateSet,
    child: Option<Box<Node>>,
}

impl Node {
    /// A blank node: unset path style, wildcard tag, no predicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single-node chain matching `tag`, optionally narrowed to the
    /// `position`-th occurrence (1-based; `0` means no position filter).
    pub fn tagged(tag: impl Into<String>, position: u32) -> Self {
        Self::new().with_tag(tag, position)
    }

    /// Record an explicit path style override for this node.
    pub fn with_path(mut self, style: PathStyle) -> Self {
        self.path = Some(style);
        self
    }

    /// Record a tag match and optional 1-based position. The tag is trimmed
    /// of surrounding whitespace; an empty result renders as the wildcard
    /// `*`.
    pub fn with_tag(mut self, tag: impl Into<String>, position: u32) -> Self {
        self.tag = tag.into().trim().to_string();
        self.tag_position = position;
        self
    }

    /// Attach `child` as this node's single child segment. Re-attaching
    /// overwrites the previous child, last-write-wins; the displaced chain is
    /// dropped, not an error.
    pub fn with_child(mut self, child: Node) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Append an attribute-equality predicate: `[@attribute="value"]`.
    pub fn with_attribute(
        mut self,
        attribute: impl Into<String>,
        value: impl Into<String>,
        position: u32,
    ) -> Self {
        self.predicates.push(Predicate::AttributeEquals {
            attribute: attribute.into(),
            value: value.into(),
            position,
        });
        self
    }

    /// Append a containment predicate: `[contains(subject,"value")]`.
    pub fn with_contains(
        mut self,
        subject: impl Into<String>,
        value: impl Into<String>,
        position: u32,
    ) -> Self {
        self.predicates.push(Predicate::Contains {
            subject: subject.into(),
            value: value.into(),
            position,
        });
        self
    }

    /// Append a generic equality predicate: `[subject="value"]`.
    pub fn with_equals(
        mut self,
        subject: impl Into<String>,
        value: impl Into<String>,
        position: u32,
    ) -> Self {
        self.predicates.push(Predicate::Equals {
            subject: subject.into(),
            value: value.into(),
            position,
        });
        self
    }

    /// Shorthand for the most common attribute filter: `[@id="value"]`.
    pub fn with_id(self, value: impl Into<String>) -> Self {
        self.with_attribute("id", value, 0)
    }

    /// Effective path style given whether this node has a parent in the
    /// chain. Resolved at render time, not at build time, because a node's
    /// position in the chain can still change after construction.
    pub fn effective_path(&self, has_parent: bool) -> PathStyle {
        match self.path {
            Some(style) => style,
            None if has_parent => PathStyle::Child,
            None => PathStyle::FromRoot,
        }
    }

    /// Effective tag: the stored tag, or `*` when none was set.
    pub fn effective_tag(&self) -> &str {
        if self.tag.is_empty() {
            "*"
        } else {
            &self.tag
        }
    }

    /// Explicit path style, if one was set.
    pub fn path(&self) -> Option<PathStyle> {
        self.path
    }

    /// 1-based tag position, `0` meaning no position filter.
    pub fn tag_position(&self) -> u32 {
        self.tag_position
    }

    /// Predicates attached to this segment.
    pub fn predicates(&self) -> &PredicateSet {
        &self.predicates
    }

    /// The next segment in the chain, if any.
    pub fn child(&self) -> Option<&Node> {
        self.child.as_deref()
    }

    /// Compile the chain headed by this node into an XPath string.
    ///
    /// Total and pure: never fails, never panics, and always yields a
    /// syntactically well-formed query even for inputs that cannot match
    /// anything in a real document.
    pub fn to_xpath(&self) -> String {
        compiler::compile(self)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&compiler::compile(self))
    }
}
