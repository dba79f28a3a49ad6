use std::fmt;

use crate::collection::Collection;
use crate::inventory::address::Address;
use crate::inventory::component::Component;
use crate::render::{self, Printable};

/// A host in the inventory: a name, its addresses, and its hardware.
///
/// Addresses always precede components in rendered output; within each
/// group, insertion order is preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Computer {
    name: String,
    addresses: Collection<Address>,
    components: Collection<Component>,
}

impl Computer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Collection::new(),
            components: Collection::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addresses(&self) -> &Collection<Address> {
        &self.addresses
    }

    pub fn components(&self) -> &Collection<Component> {
        &self.components
    }

    /// Appends an address; `&str` and `String` convert directly.
    pub fn add_address(mut self, address: impl Into<Address>) -> Self {
        self.addresses = self.addresses.add(address.into());
        self
    }

    /// Appends a component of any variant.
    pub fn add_component(mut self, component: impl Into<Component>) -> Self {
        self.components = self.components.add(component.into());
        self
    }
}

impl Printable for Computer {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}Host: {}",
            render::connector(is_last),
            self.name
        )?;

        // Addresses and components share one positional space, so the
        // last-sibling decision runs over the combined sequence.
        let inner_prefix: String = render::child_prefix(prefix, is_last);
        let total: usize = self.addresses.len() + self.components.len();
        let mut position: usize = 0;
        for address in self.addresses.iter() {
            position += 1;
            address.render(out, &inner_prefix, position == total)?;
        }
        for component in self.components.iter() {
            position += 1;
            component.render(out, &inner_prefix, position == total)?;
        }
        Ok(())
    }
}
