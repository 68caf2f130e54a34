//! Predicate catalog for selector nodes
//!
//! A node narrows its tag match with bracketed predicate clauses. Three kinds
//! exist: attribute equality (`[@id="fname"]`), substring containment
//! (`[contains(@class,"w3-btn")]`) and generic equality
//! (`[text()="Example Domain"]`). Clause order across kinds is fixed and part
//! of the output contract; insertion order within a kind is preserved.

use serde::{Deserialize, Serialize};

/// A single predicate clause attached to a selector node.
///
/// Every variant carries a `position`: `0` applies the clause to every
/// matching candidate, `k > 0` narrows to the k-th match (1-based) and
/// renders as a `[k]` suffix after the clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Matches an attribute's literal value: `[@attribute="value"]`.
    AttributeEquals {
        attribute: String,
        value: String,
        position: u32,
    },

    /// Matches when `subject` contains `value` as a substring:
    /// `[contains(subject,"value")]`. The subject is an attribute reference
    /// like `@class` or a built-in like `text()`.
    Contains {
        subject: String,
        value: String,
        position: u32,
    },

    /// Matches when `subject` equals `value` exactly: `[subject="value"]`.
    /// The subject may be `.`, `text()` or an attribute reference.
    Equals {
        subject: String,
        value: String,
        position: u32,
    },
}

impl Predicate {
    /// The kind bucket this predicate belongs to.
    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::AttributeEquals { .. } => PredicateKind::AttributeEquals,
            Predicate::Contains { .. } => PredicateKind::Contains,
            Predicate::Equals { .. } => PredicateKind::Equals,
        }
    }

    /// Positional narrowing, `0` meaning "every matching candidate".
    pub fn position(&self) -> u32 {
        match self {
            Predicate::AttributeEquals { position, .. }
            | Predicate::Contains { position, .. }
            | Predicate::Equals { position, .. } => *position,
        }
    }
}

/// Predicate kind enumeration, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredicateKind {
    AttributeEquals,
    Contains,
    Equals,
}

impl PredicateKind {
    /// Kind name as string.
    pub fn name(&self) -> &'static str {
        match self {
            PredicateKind::AttributeEquals => "attribute",
            PredicateKind::Contains => "contains",
            PredicateKind::Equals => "equal",
        }
    }
}

/// Ordered-by-kind predicate storage.
///
/// Kinds render in a fixed order (attribute, contains, equals) regardless of
/// the order predicates were attached; within a kind, insertion order is
/// preserved. `Default` yields three empty buckets, so the set is always
/// initialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSet {
    attribute: Vec<Predicate>,
    contains: Vec<Predicate>,
    equals: Vec<Predicate>,
}

impl PredicateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to its kind bucket.
    pub fn push(&mut self, predicate: Predicate) {
        match predicate.kind() {
            PredicateKind::AttributeEquals => self.attribute.push(predicate),
            PredicateKind::Contains => self.contains.push(predicate),
            PredicateKind::Equals => self.equals.push(predicate),
        }
    }

    /// Iterate all predicates in render order: kind order first, insertion
    /// order within each kind.
    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.attribute
            .iter()
            .chain(self.contains.iter())
            .chain(self.equals.iter())
    }

    /// Total number of predicates across all kinds.
    pub fn len(&self) -> usize {
        self.attribute.len() + self.contains.len() + self.equals.len()
    }

    /// Whether no predicate has been attached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(subject: &str, value: &str) -> Predicate {
        Predicate::Contains {
            subject: subject.to_string(),
            value: value.to_string(),
            position: 0,
        }
    }

    fn attribute(attribute: &str, value: &str) -> Predicate {
        Predicate::AttributeEquals {
            attribute: attribute.to_string(),
            value: value.to_string(),
            position: 0,
        }
    }

    #[test]
    fn iteration_follows_kind_order_not_insertion_order() {
        let mut set = PredicateSet::new();
        set.push(contains("@class", "w3-btn"));
        set.push(attribute("id", "fname"));

        let kinds: Vec<_> = set.iter().map(Predicate::kind).collect();
        assert_eq!(
            kinds,
            vec![PredicateKind::AttributeEquals, PredicateKind::Contains]
        );
    }

    #[test]
    fn insertion_order_preserved_within_a_kind() {
        let mut set = PredicateSet::new();
        set.push(attribute("type", "submit"));
        set.push(attribute("value", "Submit"));

        let attrs: Vec<_> = set
            .iter()
            .map(|p| match p {
                Predicate::AttributeEquals { attribute, .. } => attribute.as_str(),
                _ => panic!("unexpected kind"),
            })
            .collect();
        assert_eq!(attrs, vec!["type", "value"]);
    }

    #[test]
    fn default_set_is_empty_and_iterable() {
        let set = PredicateSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn position_accessor_covers_all_kinds() {
        let p = Predicate::Equals {
            subject: "text()".to_string(),
            value: "Example Domain".to_string(),
            position: 3,
        };
        assert_eq!(p.position(), 3);
        assert_eq!(p.kind().name(), "equal");
    }
}
