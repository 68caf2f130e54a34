//! Tag-shorthand constructors
//!
//! One constructor per common element name, each returning a single-node
//! chain pre-populated with that tag. `position` is the 1-based occurrence
//! filter rendered as a `[N]` suffix, `0` meaning no filter. For anything not
//! covered here, [`html_tag`] accepts an arbitrary tag name.

use crate::node::Node;

/// Chain head matching an arbitrary tag name.
pub fn html_tag(tag: impl Into<String>, position: u32) -> Node {
    Node::tagged(tag, position)
}

pub fn html(position: u32) -> Node {
    Node::tagged("html", position)
}

pub fn body(position: u32) -> Node {
    Node::tagged("body", position)
}

pub fn div(position: u32) -> Node {
    Node::tagged("div", position)
}

pub fn span(position: u32) -> Node {
    Node::tagged("span", position)
}

pub fn anchor(position: u32) -> Node {
    Node::tagged("a", position)
}

pub fn paragraph(position: u32) -> Node {
    Node::tagged("p", position)
}

pub fn input(position: u32) -> Node {
    Node::tagged("input", position)
}

pub fn button(position: u32) -> Node {
    Node::tagged("button", position)
}

pub fn submit(position: u32) -> Node {
    Node::tagged("submit", position)
}

pub fn textarea(position: u32) -> Node {
    Node::tagged("textarea", position)
}

pub fn form(position: u32) -> Node {
    Node::tagged("form", position)
}

pub fn table(position: u32) -> Node {
    Node::tagged("table", position)
}

pub fn table_row(position: u32) -> Node {
    Node::tagged("tr", position)
}

pub fn table_cell(position: u32) -> Node {
    Node::tagged("td", position)
}

pub fn list_item(position: u32) -> Node {
    Node::tagged("li", position)
}

pub fn image(position: u32) -> Node {
    Node::tagged("img", position)
}

pub fn header1(position: u32) -> Node {
    Node::tagged("h1", position)
}

pub fn header2(position: u32) -> Node {
    Node::tagged("h2", position)
}

pub fn header3(position: u32) -> Node {
    Node::tagged("h3", position)
}

pub fn header4(position: u32) -> Node {
    Node::tagged("h4", position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_render_their_element_names() {
        assert_eq!(html(0).to_xpath(), "//html");
        assert_eq!(body(0).to_xpath(), "//body");
        assert_eq!(div(0).to_xpath(), "//div");
        assert_eq!(span(0).to_xpath(), "//span");
        assert_eq!(anchor(0).to_xpath(), "//a");
        assert_eq!(paragraph(0).to_xpath(), "//p");
        assert_eq!(input(0).to_xpath(), "//input");
        assert_eq!(button(0).to_xpath(), "//button");
        assert_eq!(submit(0).to_xpath(), "//submit");
        assert_eq!(textarea(0).to_xpath(), "//textarea");
        assert_eq!(form(0).to_xpath(), "//form");
        assert_eq!(table(0).to_xpath(), "//table");
        assert_eq!(table_row(0).to_xpath(), "//tr");
        assert_eq!(table_cell(0).to_xpath(), "//td");
        assert_eq!(list_item(0).to_xpath(), "//li");
        assert_eq!(image(0).to_xpath(), "//img");
        assert_eq!(header1(0).to_xpath(), "//h1");
        assert_eq!(header2(0).to_xpath(), "//h2");
        assert_eq!(header3(0).to_xpath(), "//h3");
        assert_eq!(header4(0).to_xpath(), "//h4");
    }

    #[test]
    fn shorthands_carry_the_position_filter() {
        assert_eq!(list_item(4).to_xpath(), "//li[4]");
        assert_eq!(html_tag("section", 2).to_xpath(), "//section[2]");
    }

    #[test]
    fn generic_constructor_trims_the_tag() {
        assert_eq!(html_tag(" nav ", 0).to_xpath(), "//nav");
    }
}
