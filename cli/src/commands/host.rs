use crate::terminal::print;
use nettree_core::config::Config;
use nettree_core::inventory::component::Component;
use nettree_core::inventory::computer::Computer;
use nettree_core::render::Printable;
use nettree_core::{info, success};

/// Builds a one-off host from already-parsed command line input and
/// renders it as a standalone tree.
pub fn host(
    name: String,
    addresses: Vec<String>,
    components: Vec<Component>,
    cfg: &Config,
) -> anyhow::Result<()> {
    info!(
        "Assembling {name} from {} address flag(s) and {} component flag(s)",
        addresses.len(),
        components.len()
    );

    let mut computer: Computer = Computer::new(name);
    for address in addresses {
        computer = computer.add_address(address);
    }
    for component in components {
        computer = computer.add_component(component);
    }

    success!(
        "Assembled {} with {} address(es) and {} component(s)",
        computer.name(),
        computer.addresses().len(),
        computer.components().len()
    );

    if cfg.quiet < 2 {
        print::tree_block(&computer.to_display_string());
    }

    Ok(())
}
