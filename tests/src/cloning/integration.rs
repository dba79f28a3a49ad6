#![cfg(test)]
use nettree_core::inventory::component::Component;
use nettree_core::inventory::computer::Computer;
use nettree_core::inventory::disk::Disk;
use nettree_core::inventory::network::Network;
use nettree_core::render::Printable;
use nettree_core::sample;

#[test]
fn clone_renders_identically() {
    let original: Network = sample::network();
    let copy: Network = original.clone();

    assert_eq!(original.to_display_string(), copy.to_display_string());
}

#[test]
fn mutating_the_clone_leaves_the_original_untouched() {
    let original: Network = sample::network();
    let before: String = original.to_display_string();

    let copy: Network = original
        .clone()
        .add_computer(Computer::new("intruder.misis.ru").add_address("172.16.0.9"));

    assert_ne!(copy.to_display_string(), before);
    assert_eq!(original.to_display_string(), before);
}

#[test]
fn clone_allocates_a_disjoint_subtree() {
    let original: Network = sample::network();
    let copy: Network = original.clone();

    // Same values, different storage, all the way down to a disk's
    // partition table.
    assert_eq!(original, copy);
    assert_ne!(
        original.computers().as_slice().as_ptr(),
        copy.computers().as_slice().as_ptr()
    );

    let partitions_of = |network: &Network| {
        let storage_host = network
            .find_computer("server2.misis.ru")
            .expect("storage host present");
        let disk: &Disk = storage_host
            .components()
            .iter()
            .find_map(|component| match component {
                Component::Disk(disk) => Some(disk),
                _ => None,
            })
            .expect("disk present");
        disk.partitions().as_ptr()
    };

    assert_ne!(partitions_of(&original), partitions_of(&copy));
}

#[test]
fn cloned_subtrees_render_like_their_source() {
    let original: Network = sample::network();
    let host: &Computer = original
        .find_computer("server1.misis.ru")
        .expect("host present");

    assert_eq!(host.clone().to_display_string(), host.to_display_string());
}
