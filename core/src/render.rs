//! # Tree Rendering Primitives
//!
//! The two rules behind every line of branch art, plus the capability
//! trait that node types implement.
//!
//! A line's *connector* depends only on whether the node is the last of
//! its siblings; a node's *prefix* is inherited from its parent and
//! widened by one level per ancestor. The same two rules apply at any
//! depth and for any node kind, which is what keeps the art correct for
//! arbitrarily nested inventories.

use std::fmt;

/// Selects the branch glyph for a line: `\-` closes a sibling group,
/// `+-` means more siblings follow below.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { r"\-" } else { "+-" }
}

/// Widens an inherited prefix for a node's children.
///
/// A node that was last among its siblings has nothing continuing at its
/// own level, so its children indent with blanks; otherwise a vertical
/// bar keeps the column connected to the siblings still to come.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    let extension: &str = if is_last { "  " } else { "| " };
    format!("{prefix}{extension}")
}

/// Capability shared by every inventory node.
///
/// Implementors write themselves (and their subtree, pre-order) to a
/// caller-supplied sink. Rendering never mutates the node and never
/// fails on its own; the only error that can escape is the sink's, which
/// is propagated unchanged.
///
/// Deep copying comes through the [`Clone`] supertrait: node types own
/// their children outright, so a derived clone is a fully independent
/// subtree.
pub trait Printable: Clone {
    /// Writes this node's lines to `out`.
    ///
    /// `prefix` is the inherited indentation; `is_last` tells the node
    /// whether it closes its sibling group.
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result;

    /// Renders as a standalone tree (empty prefix, last sibling) into an
    /// in-memory buffer and returns the text without the trailing
    /// newline.
    fn to_display_string(&self) -> String {
        let mut buf = String::new();
        self.render(&mut buf, "", true)
            .expect("writing to a String cannot fail");
        buf.trim_end().to_string()
    }
}
