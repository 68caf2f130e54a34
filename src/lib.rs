//! Fluent XPath selector chains for browser automation drivers
//!
//! This crate models a location query against a hierarchical document as a
//! chain of node descriptors and compiles it to an XPath string:
//! - Node model: path style, tag match with optional position, single owned
//!   child forming a singly-linked chain
//! - Predicate catalog: attribute equality, substring containment, generic
//!   equality, stored and rendered in fixed kind order
//! - Query compiler: pure, total serialization of a chain into a string
//!
//! The compiled string is handed to an external driver (CDP, WebDriver) that
//! locates and acts on document nodes; executing the query, and deciding
//! whether it matches anything, is that driver's job.
//!
//! ```
//! use selector_chain::tags;
//!
//! let chain = tags::html(0).with_child(
//!     tags::body(0).with_child(
//!         tags::div(0).with_equals("@class", "w3-container top", 0),
//!     ),
//! );
//! assert_eq!(chain.to_xpath(), r#"//html/body/div[@class="w3-container top"]"#);
//!
//! let button = tags::anchor(2).with_contains("@class", "w3-btn", 0);
//! assert_eq!(button.to_xpath(), r#"//a[2][contains(@class,"w3-btn")]"#);
//! ```

pub mod compiler;
pub mod node;
pub mod predicate;
pub mod tags;

pub use compiler::compile;
pub use node::{Node, PathStyle};
pub use predicate::{Predicate, PredicateKind, PredicateSet};
