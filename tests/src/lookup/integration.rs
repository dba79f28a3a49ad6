#![cfg(test)]
use nettree_core::collection::Collection;
use nettree_core::inventory::address::Address;
use nettree_core::inventory::computer::Computer;
use nettree_core::inventory::network::Network;
use nettree_core::sample;

#[test]
fn find_computer_returns_the_requested_host() {
    let network: Network = sample::network();

    let hit = network.find_computer("server2.misis.ru");
    let computer: &Computer = hit.expect("host should be found");
    assert_eq!(computer.name(), "server2.misis.ru");
    assert_eq!(computer.addresses().len(), 1);
}

#[test]
fn find_computer_misses_with_none() {
    let network: Network = sample::network();
    assert!(network.find_computer("nope").is_none());
}

#[test]
fn duplicate_names_resolve_to_the_first_insertion() {
    let network = Network::new("lab")
        .add_computer(Computer::new("twin").add_address("10.0.0.1"))
        .add_computer(Computer::new("twin").add_address("10.0.0.2"));

    let computer: &Computer = network.find_computer("twin").expect("host should be found");
    let first_address: &Address = computer
        .addresses()
        .iter()
        .next()
        .expect("address present");
    assert_eq!(first_address.value(), "10.0.0.1");
}

#[test]
fn collection_find_is_structural() {
    let addresses: Collection<Address> = Collection::new()
        .add(Address::new("10.0.0.1"))
        .add(Address::new("10.0.0.2"));

    assert!(addresses.find(&Address::new("10.0.0.2")).is_some());
    assert!(addresses.find(&Address::new("10.0.0.3")).is_none());
}
