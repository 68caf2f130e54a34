//! Query compiler: selector chain to XPath string
//!
//! Pure serialization of a [`Node`] chain per segment:
//! path style, then tag with optional `[N]` suffix, then predicate clauses in
//! fixed kind order, then the child's rendering. The compiler is total: it
//! never fails and yields some well-formed string for every chain, leaving
//! satisfiability against a real document to the driver that executes it.

use std::fmt::Write;

use tracing::debug;

use crate::node::Node;
use crate::predicate::Predicate;

/// Compile the chain headed by `node` into an XPath string.
///
/// Double quotes embedded in predicate values are substituted literally and
/// NOT escaped; a value containing `"` produces a syntactically broken query.
/// This mirrors the behavior automation recipes in the wild depend on, so
/// callers quoting untrusted input must sanitize it themselves.
pub fn compile(node: &Node) -> String {
    let mut query = String::new();
    render_segment(node, false, &mut query);
    debug!(xpath = %query, "compiled selector chain");
    query
}

fn render_segment(node: &Node, has_parent: bool, out: &mut String) {
    out.push_str(node.effective_path(has_parent).as_str());
    out.push_str(node.effective_tag());
    render_position(node.tag_position(), out);
    for predicate in node.predicates().iter() {
        render_clause(predicate, out);
    }
    if let Some(child) = node.child() {
        render_segment(child, true, out);
    }
}

fn render_clause(predicate: &Predicate, out: &mut String) {
    match predicate {
        Predicate::AttributeEquals {
            attribute, value, ..
        } => {
            let _ = write!(out, r#"[@{attribute}="{value}"]"#);
        }
        Predicate::Contains { subject, value, .. } => {
            let _ = write!(out, r#"[contains({subject},"{value}")]"#);
        }
        Predicate::Equals { subject, value, .. } => {
            let _ = write!(out, r#"[{subject}="{value}"]"#);
        }
    }
    render_position(predicate.position(), out);
}

fn render_position(position: u32, out: &mut String) {
    if position > 0 {
        let _ = write!(out, "[{position}]");
    }
}
