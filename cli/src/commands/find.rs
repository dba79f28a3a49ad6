use crate::terminal::print;
use nettree_core::config::Config;
use nettree_core::inventory::network::Network;
use nettree_core::render::Printable;
use nettree_core::{sample, success, warn};

/// Absence is a normal outcome, not a failure: a miss logs a warning
/// and the process still exits cleanly.
pub fn find(name: &str, cfg: &Config) -> anyhow::Result<()> {
    let network: Network = sample::network();

    match network.find_computer(name) {
        Some(computer) => {
            success!("{name} is part of {}", network.name());
            if cfg.quiet < 2 {
                print::tree_block(&computer.to_display_string());
            }
        }
        None => warn!("No host named {name} in {}", network.name()),
    }

    Ok(())
}
