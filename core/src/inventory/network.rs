use std::fmt;

use crate::collection::Collection;
use crate::inventory::computer::Computer;
use crate::render::Printable;

/// Root of an inventory tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    name: String,
    computers: Collection<Computer>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            computers: Collection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn computers(&self) -> &Collection<Computer> {
        &self.computers
    }

    pub fn add_computer(mut self, computer: Computer) -> Self {
        self.computers = self.computers.add(computer);
        self
    }

    /// First host whose name matches. Duplicate names are legal; the
    /// earliest insertion wins.
    pub fn find_computer(&self, name: &str) -> Option<&Computer> {
        self.computers
            .iter()
            .find(|computer| computer.name() == name)
    }
}

impl Printable for Network {
    /// The root prints an unprefixed header line, then each host starts
    /// a fresh tree at depth zero.
    fn render(&self, out: &mut dyn fmt::Write, _prefix: &str, _is_last: bool) -> fmt::Result {
        writeln!(out, "Network: {}", self.name)?;
        self.computers.render(out, "", true)
    }
}
