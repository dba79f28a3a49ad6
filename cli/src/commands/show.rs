use colored::*;

use crate::{nprint, terminal::print};
use nettree_core::config::Config;
use nettree_core::inventory::network::Network;
use nettree_core::render::Printable;
use nettree_core::{info, sample, success};

pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let network: Network = sample::network();
    let host_count: usize = network.computers().len();
    info!("Rendering {} with {host_count} hosts", network.name());

    if cfg.quiet < 2 {
        print::tree_block(&network.to_display_string());
    }

    print_summary(host_count, cfg);
    Ok(())
}

fn print_summary(host_count: usize, cfg: &Config) {
    let unit: &str = if host_count == 1 { "host" } else { "hosts" };
    let hosts: ColoredString = format!("{host_count} {unit}").bold().green();
    let output: String = format!("Inventory rendered: {hosts}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            nprint!();
            success!("{}", output)
        }
    }
}
