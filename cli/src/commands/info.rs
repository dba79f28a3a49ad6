use colored::*;

use crate::terminal::{colors, print};
use nettree_core::config::Config;

pub fn info(_cfg: &Config) -> anyhow::Result<()> {
    print::aligned_line("Version", env!("CARGO_PKG_VERSION").color(colors::ACCENT));
    print::aligned_line("Node kinds", "network, host, address, cpu, memory, disk");
    print::aligned_line(
        "Component",
        "cpu:<cores>@<mhz> | mem:<mib> | disk:<ssd|hdd>:<gib>[:<size>=<name>,...]",
    );
    Ok(())
}
