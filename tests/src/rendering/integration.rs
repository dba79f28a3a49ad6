#![cfg(test)]
use nettree_core::inventory::component::{Cpu, Memory};
use nettree_core::inventory::computer::Computer;
use nettree_core::inventory::disk::{Disk, StorageType};
use nettree_core::inventory::network::Network;
use nettree_core::render::Printable;
use nettree_core::sample;

const DEMO_TREE: &str = "\
Network: MISIS network
+-Host: server1.misis.ru
| +-192.168.1.1
| +-CPU, 4 cores @ 2500MHz
| \\-Memory, 16000 MiB
\\-Host: server2.misis.ru
  +-10.0.0.1
  +-CPU, 8 cores @ 3200MHz
  \\-HDD, 2000 GiB
    +-[0]: 500 GiB, system
    \\-[1]: 1500 GiB, data";

/// End-to-end check of the whole pipeline: two hosts, mixed components,
/// a partitioned disk, and every connector/prefix combination that the
/// demo inventory can produce.
#[test]
fn demo_inventory_renders_exact_tree() {
    assert_eq!(sample::network().to_display_string(), DEMO_TREE);
}

#[test]
fn empty_network_renders_header_only() {
    let network = Network::new("empty lab");
    assert_eq!(network.to_display_string(), "Network: empty lab");
}

#[test]
fn connectors_split_by_position() {
    let network = Network::new("lab").add_computer(
        Computer::new("a")
            .add_address("10.0.0.1")
            .add_address("10.0.0.2")
            .add_address("10.0.0.3"),
    );

    let rendered: String = network.to_display_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], "\\-Host: a");
    assert_eq!(lines[2], "  +-10.0.0.1");
    assert_eq!(lines[3], "  +-10.0.0.2");
    assert_eq!(lines[4], "  \\-10.0.0.3");
}

#[test]
fn a_lone_sibling_still_closes_its_group() {
    let network = Network::new("lab").add_computer(Computer::new("only"));
    let rendered: String = network.to_display_string();
    assert_eq!(rendered.lines().last(), Some("\\-Host: only"));
}

#[test]
fn host_subtrees_keep_insertion_order() {
    let network = Network::new("lab")
        .add_computer(Computer::new("first").add_address("10.0.0.1"))
        .add_computer(Computer::new("second").add_address("10.0.0.2"));

    let rendered: String = network.to_display_string();
    let first_block: usize = rendered.find("Host: first").expect("first host rendered");
    let first_addr: usize = rendered.find("10.0.0.1").expect("first address rendered");
    let second_block: usize = rendered.find("Host: second").expect("second host rendered");

    // The entire first subtree lands before the second host's header.
    assert!(first_block < first_addr);
    assert!(first_addr < second_block);
}

#[test]
fn addresses_precede_components_regardless_of_insertion() {
    let computer = Computer::new("mixed")
        .add_component(Memory::new(4096))
        .add_address("192.168.0.7")
        .add_component(Cpu::new(2, 1800));

    assert_eq!(
        computer.to_display_string(),
        "\\-Host: mixed\n  +-192.168.0.7\n  +-Memory, 4096 MiB\n  \\-CPU, 2 cores @ 1800MHz"
    );
}

#[test]
fn prefix_widens_per_ancestor() {
    let partitioned_disk = || Disk::new(StorageType::Ssd, 100).add_partition(100, "root");
    let network = Network::new("lab")
        .add_computer(Computer::new("a").add_component(partitioned_disk()))
        .add_computer(Computer::new("b").add_component(partitioned_disk()));

    // Under the non-last host the partition column keeps the bar; under
    // the last host it collapses to blanks.
    assert_eq!(
        network.to_display_string(),
        "Network: lab\n\
         +-Host: a\n\
         | \\-SSD, 100 GiB\n\
         |   \\-[0]: 100 GiB, root\n\
         \\-Host: b\n\
         \x20 \\-SSD, 100 GiB\n\
         \x20   \\-[0]: 100 GiB, root"
    );
}

#[test]
fn rendered_lines_carry_no_trailing_whitespace() {
    for line in sample::network().to_display_string().lines() {
        assert!(!line.ends_with(' '), "trailing whitespace in {line:?}");
    }
}
