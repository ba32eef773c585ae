//! Human-readable dump of the diagram (§6).

use std::fmt;
use std::fmt::Write as _;
use std::hash::Hash;

use itertools::Itertools;

use crate::endpoint::Endpoint;
use crate::poset::Poset;

impl<E: Clone + Eq + Hash + fmt::Display> Poset<E> {
    /// Appends a human-readable dump of the current members to `buf`, one
    /// indented line per member in insertion order, sentinels filtered from
    /// the parent/child lists. An empty poset renders as
    /// `PartiallyOrderedSet size: 0 elements: {\n}`.
    pub fn out(&self, buf: &mut String) {
        let _ = writeln!(buf, "PartiallyOrderedSet size: {} elements: {{", self.size());
        for (value, node) in &self.nodes {
            let parents = render_list(node.parents().iter().filter_map(Endpoint::as_member));
            let children = render_list(node.children().iter().filter_map(Endpoint::as_member));
            let _ = writeln!(buf, "  {value} parents: [{parents}] children: [{children}]");
        }
        buf.push('}');
    }
}

fn render_list<'a, E: fmt::Display + 'a>(items: impl Iterator<Item = &'a E>) -> String {
    items.map(ToString::to_string).join(", ")
}
